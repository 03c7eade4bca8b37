//! Expression resolution: fingerprints, contexts and similar terms for one
//! expression or a batch of them.
//!
//! Every operation accepts either a typed tree or a JSON string through
//! [`Payload`] / [`BulkPayload`]. Both reach the server as the same body, so
//! `contexts_for_expression(&model)` and
//! `contexts_for_expression(encode(&model)?.as_str())` issue equal requests.

use retina_core::{
    paths, ApiRequest, BulkPayload, Context, Fingerprint, Payload, Result, TermResult, Transport,
};

use crate::options::{Accepts, Options, DEFAULT_BULK_MAX_RESULTS, DEFAULT_MAX_RESULTS};
use crate::Client;

const CONTEXTS: Accepts = Accepts::listing(DEFAULT_MAX_RESULTS).with_sparsity();
const SIMILAR_TERMS: Accepts = Accepts::listing(DEFAULT_MAX_RESULTS)
    .with_sparsity()
    .with_term_filters();
const BULK_CONTEXTS: Accepts = Accepts::listing(DEFAULT_BULK_MAX_RESULTS).with_sparsity();
const BULK_SIMILAR_TERMS: Accepts = Accepts::listing(DEFAULT_BULK_MAX_RESULTS)
    .with_sparsity()
    .with_term_filters();

impl<T: Transport> Client<T> {
    // -----------------------------------------------------------------------
    // Single expression
    // -----------------------------------------------------------------------

    pub fn fingerprint_for_expression<'a>(
        &self,
        expression: impl Into<Payload<'a>>,
    ) -> Result<Fingerprint> {
        self.fingerprint_for_expression_with(expression, &Options::default())
    }

    /// Resolve an expression to a fingerprint. Only `sparsity` applies.
    pub fn fingerprint_for_expression_with<'a>(
        &self,
        expression: impl Into<Payload<'a>>,
        opts: &Options,
    ) -> Result<Fingerprint> {
        let body = expression.into().into_body()?;
        let params = opts.resolve(Accepts::SPARSITY, self.params());
        self.call(ApiRequest::post(paths::EXPRESSIONS, params, body))
    }

    pub fn contexts_for_expression<'a>(
        &self,
        expression: impl Into<Payload<'a>>,
    ) -> Result<Vec<Context>> {
        self.contexts_for_expression_with(expression, &Options::default())
    }

    pub fn contexts_for_expression_with<'a>(
        &self,
        expression: impl Into<Payload<'a>>,
        opts: &Options,
    ) -> Result<Vec<Context>> {
        let body = expression.into().into_body()?;
        let params = opts.resolve(CONTEXTS, self.params());
        self.call(ApiRequest::post(paths::EXPRESSIONS_CONTEXTS, params, body))
    }

    pub fn similar_terms_for_expression<'a>(
        &self,
        expression: impl Into<Payload<'a>>,
    ) -> Result<Vec<TermResult>> {
        self.similar_terms_for_expression_with(expression, &Options::default())
    }

    pub fn similar_terms_for_expression_with<'a>(
        &self,
        expression: impl Into<Payload<'a>>,
        opts: &Options,
    ) -> Result<Vec<TermResult>> {
        let body = expression.into().into_body()?;
        let params = opts.resolve(SIMILAR_TERMS, self.params());
        self.call(ApiRequest::post(paths::EXPRESSIONS_SIMILAR_TERMS, params, body))
    }

    // -----------------------------------------------------------------------
    // Bulk
    // -----------------------------------------------------------------------

    pub fn fingerprints_for_expressions<'a>(
        &self,
        expressions: impl Into<BulkPayload<'a>>,
    ) -> Result<Vec<Fingerprint>> {
        self.fingerprints_for_expressions_with(expressions, &Options::default())
    }

    /// One fingerprint per submitted expression, in submission order.
    pub fn fingerprints_for_expressions_with<'a>(
        &self,
        expressions: impl Into<BulkPayload<'a>>,
        opts: &Options,
    ) -> Result<Vec<Fingerprint>> {
        let (body, count) = expressions.into().into_body()?;
        let params = opts.resolve(Accepts::SPARSITY, self.params());
        self.call_bulk(ApiRequest::post(paths::EXPRESSIONS_BULK, params, body), count)
    }

    pub fn contexts_for_expressions<'a>(
        &self,
        expressions: impl Into<BulkPayload<'a>>,
    ) -> Result<Vec<Vec<Context>>> {
        self.contexts_for_expressions_with(expressions, &Options::default())
    }

    /// One context list per submitted expression. Pagination applies to each
    /// list and defaults to [`DEFAULT_BULK_MAX_RESULTS`].
    pub fn contexts_for_expressions_with<'a>(
        &self,
        expressions: impl Into<BulkPayload<'a>>,
        opts: &Options,
    ) -> Result<Vec<Vec<Context>>> {
        let (body, count) = expressions.into().into_body()?;
        let params = opts.resolve(BULK_CONTEXTS, self.params());
        self.call_bulk(ApiRequest::post(paths::EXPRESSIONS_CONTEXTS_BULK, params, body), count)
    }

    pub fn similar_terms_for_expressions<'a>(
        &self,
        expressions: impl Into<BulkPayload<'a>>,
    ) -> Result<Vec<Vec<TermResult>>> {
        self.similar_terms_for_expressions_with(expressions, &Options::default())
    }

    pub fn similar_terms_for_expressions_with<'a>(
        &self,
        expressions: impl Into<BulkPayload<'a>>,
        opts: &Options,
    ) -> Result<Vec<Vec<TermResult>>> {
        let (body, count) = expressions.into().into_body()?;
        let params = opts.resolve(BULK_SIMILAR_TERMS, self.params());
        self.call_bulk(
            ApiRequest::post(paths::EXPRESSIONS_SIMILAR_TERMS_BULK, params, body),
            count,
        )
    }
}
