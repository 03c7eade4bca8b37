//! The expression algebra.
//!
//! A [`Model`] describes *what* the server should compute. Leaves are terms,
//! texts, fingerprints and category filters; an [`Expression`] combines two or
//! more models with an [`Operator`]. Trees nest to any depth and are never
//! evaluated locally.
//!
//! Every value here is immutable. [`Expression::add`] returns a new node, so a
//! subtree can be shared between several parents without aliasing surprises.
//!
//! ```
//! use retina_core::{or, term, text};
//!
//! let fruit = or([term("apple")?, text("fresh fruit")?])?.add(term("banana")?)?;
//! assert_eq!(fruit.operands().len(), 3);
//! # Ok::<(), retina_core::Error>(())
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Leaves
// ---------------------------------------------------------------------------

/// A single word or phrase known to the retina.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Term {
    term: String,
}

impl Term {
    /// Fails with [`Error::Argument`] when `term` is empty or whitespace.
    pub fn new(term: impl Into<String>) -> Result<Self> {
        let term = term.into();
        if term.trim().is_empty() {
            return Err(Error::argument("term must not be blank"));
        }
        Ok(Self { term })
    }

    pub fn as_str(&self) -> &str {
        &self.term
    }
}

/// Free text, fingerprinted by the server as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Text {
    text: String,
}

impl Text {
    /// Fails with [`Error::Argument`] when `text` is empty or whitespace.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::argument("text must not be blank"));
        }
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Sparse set of active positions in the retina's semantic space.
///
/// Positions are copied on construction, sorted ascending and de-duplicated.
/// The same normalisation runs when a fingerprint is deserialized from a
/// server response. No upper bound is enforced because the address space
/// depends on the retina (16,384 slots for the 128x128 retinas).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "FingerprintRepr")]
pub struct Fingerprint {
    positions: Vec<u32>,
}

#[derive(Deserialize)]
struct FingerprintRepr {
    #[serde(default)]
    positions: Vec<u32>,
}

impl From<FingerprintRepr> for Fingerprint {
    fn from(repr: FingerprintRepr) -> Self {
        Self {
            positions: normalize_positions(repr.positions),
        }
    }
}

impl Fingerprint {
    pub fn new(positions: &[u32]) -> Self {
        Self {
            positions: normalize_positions(positions.to_vec()),
        }
    }

    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A named fingerprint produced by the classify endpoint, reusable as an
/// expression operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CategoryFilterRepr")]
pub struct CategoryFilter {
    category_name: String,
    positions: Vec<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryFilterRepr {
    category_name: String,
    #[serde(default)]
    positions: Vec<u32>,
}

impl From<CategoryFilterRepr> for CategoryFilter {
    fn from(repr: CategoryFilterRepr) -> Self {
        Self {
            category_name: repr.category_name,
            positions: normalize_positions(repr.positions),
        }
    }
}

impl CategoryFilter {
    /// Fails with [`Error::Argument`] when `name` is blank.
    pub fn new(name: impl Into<String>, positions: &[u32]) -> Result<Self> {
        let category_name = name.into();
        if category_name.trim().is_empty() {
            return Err(Error::argument("category filter name must not be blank"));
        }
        Ok(Self {
            category_name,
            positions: normalize_positions(positions.to_vec()),
        })
    }

    pub fn name(&self) -> &str {
        &self.category_name
    }

    pub fn positions(&self) -> &[u32] {
        &self.positions
    }
}

fn normalize_positions(mut positions: Vec<u32>) -> Vec<u32> {
    positions.sort_unstable();
    positions.dedup();
    positions
}

// ---------------------------------------------------------------------------
// Composites
// ---------------------------------------------------------------------------

/// Combinator applied server-side to the operands of an [`Expression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Xor,
    /// Left operand minus right operand. Always binary.
    Sub,
}

impl Operator {
    /// Discriminant key used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Xor => "xor",
            Operator::Sub => "sub",
        }
    }

    fn check_arity(self, count: usize) -> Result<()> {
        match self {
            Operator::Sub if count != 2 => Err(Error::argument(format!(
                "sub takes exactly 2 operands, got {count}"
            ))),
            Operator::And | Operator::Or | Operator::Xor if count < 2 => Err(Error::argument(
                format!("{self} takes at least 2 operands, got {count}"),
            )),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_ascii_uppercase())
    }
}

/// A composite node: an operator over an ordered list of operands.
///
/// Invariant: `Sub` nodes hold exactly two operands, all others at least two.
/// Checked in [`Expression::new`] and [`Expression::add`]; serialization never
/// revalidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    operator: Operator,
    operands: Vec<Model>,
}

impl Expression {
    pub fn new<I>(operator: Operator, operands: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Model>,
    {
        let operands: Vec<Model> = operands.into_iter().map(Into::into).collect();
        operator.check_arity(operands.len())?;
        Ok(Self { operator, operands })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operands(&self) -> &[Model] {
        &self.operands
    }

    /// Return a new node with `operand` appended. `self` is left untouched.
    ///
    /// `Sub` nodes are fixed at two operands and reject this with
    /// [`Error::Argument`].
    pub fn add(&self, operand: impl Into<Model>) -> Result<Expression> {
        if self.operator == Operator::Sub {
            return Err(Error::argument("cannot add an operand to a sub expression"));
        }
        let mut operands = Vec::with_capacity(self.operands.len() + 1);
        operands.extend(self.operands.iter().cloned());
        operands.push(operand.into());
        Ok(Self {
            operator: self.operator,
            operands,
        })
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.operator.as_str(), &self.operands)?;
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// Anything that can be sent to the server as an expression operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Model {
    Term(Term),
    Text(Text),
    Fingerprint(Fingerprint),
    CategoryFilter(CategoryFilter),
    Expression(Expression),
}

impl From<Term> for Model {
    fn from(term: Term) -> Self {
        Model::Term(term)
    }
}

impl From<Text> for Model {
    fn from(text: Text) -> Self {
        Model::Text(text)
    }
}

impl From<Fingerprint> for Model {
    fn from(fingerprint: Fingerprint) -> Self {
        Model::Fingerprint(fingerprint)
    }
}

impl From<CategoryFilter> for Model {
    fn from(filter: CategoryFilter) -> Self {
        Model::CategoryFilter(filter)
    }
}

impl From<Expression> for Model {
    fn from(expression: Expression) -> Self {
        Model::Expression(expression)
    }
}

// ---------------------------------------------------------------------------
// Factories
// ---------------------------------------------------------------------------

pub fn term(value: impl Into<String>) -> Result<Model> {
    Term::new(value).map(Model::Term)
}

pub fn text(value: impl Into<String>) -> Result<Model> {
    Text::new(value).map(Model::Text)
}

pub fn fingerprint(positions: &[u32]) -> Model {
    Model::Fingerprint(Fingerprint::new(positions))
}

pub fn category_filter(name: impl Into<String>, positions: &[u32]) -> Result<Model> {
    CategoryFilter::new(name, positions).map(Model::CategoryFilter)
}

pub fn and<I>(operands: I) -> Result<Expression>
where
    I: IntoIterator,
    I::Item: Into<Model>,
{
    Expression::new(Operator::And, operands)
}

pub fn or<I>(operands: I) -> Result<Expression>
where
    I: IntoIterator,
    I::Item: Into<Model>,
{
    Expression::new(Operator::Or, operands)
}

pub fn xor<I>(operands: I) -> Result<Expression>
where
    I: IntoIterator,
    I::Item: Into<Model>,
{
    Expression::new(Operator::Xor, operands)
}

/// `left` minus `right`. Binary by construction, so it cannot fail.
pub fn sub(left: impl Into<Model>, right: impl Into<Model>) -> Expression {
    Expression {
        operator: Operator::Sub,
        operands: vec![left.into(), right.into()],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
