//! Term lookups: listing, contexts and similar terms for a single term.

use retina_core::{paths, ApiRequest, Context, Error, Result, TermResult, Transport};

use crate::options::{Accepts, Options, DEFAULT_MAX_RESULTS};
use crate::Client;

const TERMS: Accepts = Accepts::listing(DEFAULT_MAX_RESULTS);
const CONTEXTS: Accepts = Accepts::listing(DEFAULT_MAX_RESULTS);
const SIMILAR_TERMS: Accepts = Accepts::listing(DEFAULT_MAX_RESULTS).with_term_filters();

impl<T: Transport> Client<T> {
    /// Look up `term` in the retina.
    pub fn terms(&self, term: &str) -> Result<Vec<TermResult>> {
        self.terms_with(Some(term), &Options::default())
    }

    /// List terms. With `term = None` the whole retina vocabulary is paged
    /// through; otherwise `term` may contain a `*` wildcard.
    pub fn terms_with(&self, term: Option<&str>, opts: &Options) -> Result<Vec<TermResult>> {
        let mut params = opts.resolve(TERMS, self.params());
        params.term = term.map(checked_term).transpose()?;
        self.call(ApiRequest::get(paths::TERMS, params))
    }

    pub fn contexts_for_term(&self, term: &str) -> Result<Vec<Context>> {
        self.contexts_for_term_with(term, &Options::default())
    }

    pub fn contexts_for_term_with(&self, term: &str, opts: &Options) -> Result<Vec<Context>> {
        let mut params = opts.resolve(CONTEXTS, self.params());
        params.term = Some(checked_term(term)?);
        self.call(ApiRequest::get(paths::TERMS_CONTEXTS, params))
    }

    pub fn similar_terms_for_term(&self, term: &str) -> Result<Vec<TermResult>> {
        self.similar_terms_for_term_with(term, &Options::default())
    }

    pub fn similar_terms_for_term_with(
        &self,
        term: &str,
        opts: &Options,
    ) -> Result<Vec<TermResult>> {
        let mut params = opts.resolve(SIMILAR_TERMS, self.params());
        params.term = Some(checked_term(term)?);
        self.call(ApiRequest::get(paths::TERMS_SIMILAR_TERMS, params))
    }
}

fn checked_term(term: &str) -> Result<String> {
    if term.trim().is_empty() {
        return Err(Error::argument("term must not be blank"));
    }
    Ok(term.to_string())
}
