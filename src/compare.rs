//! Similarity metrics between two models, singly or in bulk.

use retina_core::{
    encode_pair, paths, ApiRequest, Error, Metric, Model, PairsPayload, Result, Transport,
};

use crate::Client;

impl<T: Transport> Client<T> {
    /// Compare `left` with `right`.
    pub fn compare(&self, left: &Model, right: &Model) -> Result<Metric> {
        self.compare_json(&encode_pair(left, right)?)
    }

    /// Compare the two models of a JSON array the caller already built, for
    /// example `[{"term":"apple"},{"text":"a red fruit"}]`. Passed through
    /// unchanged.
    pub fn compare_json(&self, pair: &str) -> Result<Metric> {
        if pair.trim().is_empty() {
            return Err(Error::argument("comparison JSON must not be blank"));
        }
        self.call(ApiRequest::post(paths::COMPARE, self.params(), pair.to_string()))
    }

    /// Compare every `(left, right)` pair in one request. Metric `i` belongs
    /// to pair `i`. Raw JSON must be an array of two-element arrays.
    pub fn compare_bulk<'a>(&self, pairs: impl Into<PairsPayload<'a>>) -> Result<Vec<Metric>> {
        let (body, count) = pairs.into().into_body()?;
        self.call_bulk(ApiRequest::post(paths::COMPARE_BULK, self.params(), body), count)
    }
}
