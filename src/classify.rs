//! Category filters built from example texts.

use retina_core::{
    paths, ApiRequest, CategoryFilter, Error, Model, Result, Text, Transport,
};
use serde::Serialize;

use crate::Client;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryFilterRequest<'a> {
    positive_examples: &'a [Model],
    negative_examples: &'a [Model],
}

impl<T: Transport> Client<T> {
    /// Ask the server for a filter named `name` that matches `positive`
    /// examples and, optionally, excludes `negative` ones.
    ///
    /// The returned [`CategoryFilter`] can be used directly as an expression
    /// operand.
    pub fn create_category_filter(
        &self,
        name: &str,
        positive: &[&str],
        negative: &[&str],
    ) -> Result<CategoryFilter> {
        if name.trim().is_empty() {
            return Err(Error::argument("filter name must not be blank"));
        }
        if positive.is_empty() {
            return Err(Error::argument("at least one positive example is required"));
        }
        let body = serde_json::to_string(&CategoryFilterRequest {
            positive_examples: &examples(positive)?,
            negative_examples: &examples(negative)?,
        })?;
        let mut params = self.params();
        params.filter_name = Some(name.to_string());
        self.call(ApiRequest::post(paths::CLASSIFY_CATEGORY_FILTER, params, body))
    }
}

fn examples(texts: &[&str]) -> Result<Vec<Model>> {
    texts.iter().map(|t| Text::new(*t).map(Model::Text)).collect()
}
