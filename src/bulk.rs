//! Positional correlation of bulk requests and responses.
//!
//! A bulk call submits K independent inputs in one array. The server answers
//! with K result groups, and group `i` belongs to input `i`. Nothing here
//! reorders, merges or de-duplicates; a response with the wrong number of
//! groups is rejected outright.

use retina_core::{RemoteError, Result};

/// Check that `results` holds exactly `expected` groups and hand them back in
/// submission order.
pub fn correlate<R>(expected: usize, results: Vec<R>) -> Result<Vec<R>> {
    if results.len() != expected {
        tracing::warn!(expected, actual = results.len(), "bulk result count mismatch");
        return Err(RemoteError::ResultCount {
            expected,
            actual: results.len(),
        }
        .into());
    }
    Ok(results)
}

/// Zip each input with the result group at the same index.
pub fn pair_up<'a, I, R>(inputs: &'a [I], results: Vec<R>) -> Result<Vec<(&'a I, R)>> {
    let results = correlate(inputs.len(), results)?;
    Ok(inputs.iter().zip(results).collect())
}
