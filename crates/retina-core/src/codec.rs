//! JSON wire codec for the expression algebra.
//!
//! | Model | Fragment |
//! |-------|----------|
//! | [`Term`](crate::Term) | `{"term":"apple"}` |
//! | [`Text`](crate::Text) | `{"text":"fresh fruit"}` |
//! | [`Fingerprint`](crate::Fingerprint) | `{"positions":[1,5,9]}` |
//! | [`CategoryFilter`](crate::CategoryFilter) | `{"categoryName":"fruit","positions":[1,5]}` |
//! | [`Expression`](crate::Expression) | `{"or":[<fragment>,<fragment>,…]}` |
//!
//! Output is compact and key order is fixed by the type definitions, so two
//! equal trees always encode to byte-identical strings. Request equality in
//! tests relies on this.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Expression, Model};

// ---------------------------------------------------------------------------
// Encoders
// ---------------------------------------------------------------------------

/// Encode one model as a single JSON fragment.
pub fn encode(model: &Model) -> Result<String> {
    to_string(model)
}

/// Encode several models as a JSON array of fragments.
pub fn encode_all(models: &[Model]) -> Result<String> {
    to_string(models)
}

/// Encode two models as a two-element array, the body of a comparison.
pub fn encode_pair(left: &Model, right: &Model) -> Result<String> {
    to_string(&(left, right))
}

/// Encode independent `(a, b)` pairs as an array of two-element arrays.
pub fn encode_pairs(pairs: &[(Model, Model)]) -> Result<String> {
    to_string(pairs)
}

fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Error::Encoding)
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Body of a single-model request: a typed tree, or JSON the caller already
/// holds, which is passed through unchanged.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    Model(&'a Model),
    Expression(&'a Expression),
    Json(&'a str),
}

impl Payload<'_> {
    /// Produce the request body. Raw JSON must not be blank.
    pub fn into_body(self) -> Result<String> {
        match self {
            Payload::Model(model) => encode(model),
            Payload::Expression(expression) => to_string(expression),
            Payload::Json(json) if json.trim().is_empty() => {
                Err(Error::argument("expression JSON must not be blank"))
            }
            Payload::Json(json) => Ok(json.to_string()),
        }
    }
}

impl<'a> From<&'a Model> for Payload<'a> {
    fn from(model: &'a Model) -> Self {
        Payload::Model(model)
    }
}

impl<'a> From<&'a Expression> for Payload<'a> {
    fn from(expression: &'a Expression) -> Self {
        Payload::Expression(expression)
    }
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(json: &'a str) -> Self {
        Payload::Json(json)
    }
}

impl<'a> From<&'a String> for Payload<'a> {
    fn from(json: &'a String) -> Self {
        Payload::Json(json)
    }
}

/// Body of a bulk request over independent models, together with the number
/// of inputs it carries, which the response must match one-for-one.
///
/// Pairs are not models: comparison batches go through [`PairsPayload`].
///
/// ```compile_fail
/// use retina_core::{term, BulkPayload, Model};
///
/// let pairs: Vec<(Model, Model)> = vec![(term("a").unwrap(), term("b").unwrap())];
/// let _ = BulkPayload::from(&pairs);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum BulkPayload<'a> {
    Models(&'a [Model]),
    /// A JSON array of model fragments already built by the caller. Its
    /// length is the input count.
    Json(&'a str),
}

impl BulkPayload<'_> {
    /// Produce `(body, input_count)`. An empty batch, or raw JSON that is not
    /// an array of objects, is an argument error.
    pub fn into_body(self) -> Result<(String, usize)> {
        let (body, count) = match self {
            BulkPayload::Models(models) => (encode_all(models)?, models.len()),
            BulkPayload::Json(json) => {
                let items: Vec<serde_json::Value> = serde_json::from_str(json)
                    .map_err(|e| Error::argument(format!("bulk JSON must be an array: {e}")))?;
                if let Some(i) = items.iter().position(|item| !item.is_object()) {
                    return Err(Error::argument(format!(
                        "bulk JSON element {i} is not a model fragment"
                    )));
                }
                (json.to_string(), items.len())
            }
        };
        checked_count(body, count)
    }
}

impl<'a> From<&'a [Model]> for BulkPayload<'a> {
    fn from(models: &'a [Model]) -> Self {
        BulkPayload::Models(models)
    }
}

impl<'a> From<&'a Vec<Model>> for BulkPayload<'a> {
    fn from(models: &'a Vec<Model>) -> Self {
        BulkPayload::Models(models)
    }
}

impl<'a, const N: usize> From<&'a [Model; N]> for BulkPayload<'a> {
    fn from(models: &'a [Model; N]) -> Self {
        BulkPayload::Models(models)
    }
}

impl<'a> From<&'a str> for BulkPayload<'a> {
    fn from(json: &'a str) -> Self {
        BulkPayload::Json(json)
    }
}

/// Body of a bulk comparison: independent `(left, right)` pairs, encoded as
/// an array of two-element arrays.
///
/// ```compile_fail
/// use retina_core::{term, Model, PairsPayload};
///
/// let models: Vec<Model> = vec![term("a").unwrap(), term("b").unwrap()];
/// let _ = PairsPayload::from(&models);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum PairsPayload<'a> {
    Pairs(&'a [(Model, Model)]),
    /// A JSON array of two-element arrays already built by the caller.
    Json(&'a str),
}

impl PairsPayload<'_> {
    /// Produce `(body, pair_count)`. An empty batch, or raw JSON that is not
    /// an array of two-element arrays, is an argument error.
    pub fn into_body(self) -> Result<(String, usize)> {
        let (body, count) = match self {
            PairsPayload::Pairs(pairs) => (encode_pairs(pairs)?, pairs.len()),
            PairsPayload::Json(json) => {
                let pairs: Vec<(serde_json::Value, serde_json::Value)> =
                    serde_json::from_str(json).map_err(|e| {
                        Error::argument(format!("bulk JSON must be an array of pairs: {e}"))
                    })?;
                (json.to_string(), pairs.len())
            }
        };
        checked_count(body, count)
    }
}

impl<'a> From<&'a [(Model, Model)]> for PairsPayload<'a> {
    fn from(pairs: &'a [(Model, Model)]) -> Self {
        PairsPayload::Pairs(pairs)
    }
}

impl<'a> From<&'a Vec<(Model, Model)>> for PairsPayload<'a> {
    fn from(pairs: &'a Vec<(Model, Model)>) -> Self {
        PairsPayload::Pairs(pairs)
    }
}

impl<'a, const N: usize> From<&'a [(Model, Model); N]> for PairsPayload<'a> {
    fn from(pairs: &'a [(Model, Model); N]) -> Self {
        PairsPayload::Pairs(pairs)
    }
}

impl<'a> From<&'a str> for PairsPayload<'a> {
    fn from(json: &'a str) -> Self {
        PairsPayload::Json(json)
    }
}

fn checked_count(body: String, count: usize) -> Result<(String, usize)> {
    if count == 0 {
        return Err(Error::argument("bulk request needs at least one input"));
    }
    Ok((body, count))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
