//! proptest strategies for random model trees.

use proptest::prelude::*;
use retina::{fingerprint, sub, term, text, Expression, Model, Operator};

/// Any leaf: a term, a text or a fingerprint.
pub fn arb_leaf() -> impl Strategy<Value = Model> {
    prop_oneof![
        "[a-z]{1,12}".prop_map(|s| term(s).unwrap()),
        "[a-z]{1,8}( [a-z]{1,8}){0,4}".prop_map(|s| text(s).unwrap()),
        prop::collection::vec(0u32..16_384, 0..32).prop_map(|p| fingerprint(&p)),
    ]
}

pub fn arb_variadic_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(vec![Operator::And, Operator::Or, Operator::Xor])
}

/// Any valid tree up to four levels deep.
pub fn arb_model() -> impl Strategy<Value = Model> {
    arb_leaf().prop_recursive(4, 64, 5, |inner| {
        prop_oneof![
            (arb_variadic_operator(), prop::collection::vec(inner.clone(), 2..5))
                .prop_map(|(op, operands)| Expression::new(op, operands).unwrap().into()),
            (inner.clone(), inner).prop_map(|(left, right)| sub(left, right).into()),
        ]
    })
}

/// A variadic composite at the root.
pub fn arb_variadic_expression() -> impl Strategy<Value = Expression> {
    (arb_variadic_operator(), prop::collection::vec(arb_model(), 2..6))
        .prop_map(|(op, operands)| Expression::new(op, operands).unwrap())
}
