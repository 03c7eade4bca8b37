//! Text analysis: fingerprints, keywords, tokens, slices and language.
//!
//! Single-text endpoints post the text itself as the request body. The bulk
//! endpoint posts a JSON array of `{"text": …}` fragments and answers with one
//! fingerprint per text, in order.

use retina_core::{
    encode_all, paths, ApiRequest, Error, Fingerprint, Language, Model, RemoteError, Result, Text,
    TextSlice, Transport,
};

use crate::options::{Accepts, Options, DEFAULT_MAX_RESULTS};
use crate::Client;

const SLICES: Accepts = Accepts::listing(DEFAULT_MAX_RESULTS);

impl<T: Transport> Client<T> {
    pub fn fingerprint_for_text(&self, text: &str) -> Result<Fingerprint> {
        let request = ApiRequest::post(paths::TEXT, self.params(), checked_text(text)?);
        let mut fingerprints: Vec<Fingerprint> = self.call(request)?;
        if fingerprints.is_empty() {
            return Err(RemoteError::MalformedResponse(format!(
                "{}: no fingerprint returned",
                paths::TEXT
            ))
            .into());
        }
        Ok(fingerprints.swap_remove(0))
    }

    pub fn keywords_for_text(&self, text: &str) -> Result<Vec<String>> {
        let request = ApiRequest::post(paths::TEXT_KEYWORDS, self.params(), checked_text(text)?);
        self.call(request)
    }

    /// Split `text` into sentences of comma-separated tokens.
    pub fn tokens_for_text(&self, text: &str) -> Result<Vec<String>> {
        self.tokens_for_text_with(text, &[])
    }

    /// Like [`tokens_for_text`](Self::tokens_for_text), keeping only tokens
    /// whose part-of-speech tag is in `pos_tags` (for example `["NN", "VB"]`).
    /// An empty slice keeps everything.
    pub fn tokens_for_text_with(&self, text: &str, pos_tags: &[&str]) -> Result<Vec<String>> {
        let mut params = self.params();
        if !pos_tags.is_empty() {
            params.pos_tags = Some(pos_tags.join(","));
        }
        let request = ApiRequest::post(paths::TEXT_TOKENIZE, params, checked_text(text)?);
        self.call(request)
    }

    pub fn slices_for_text(&self, text: &str) -> Result<Vec<TextSlice>> {
        self.slices_for_text_with(text, &Options::default())
    }

    pub fn slices_for_text_with(&self, text: &str, opts: &Options) -> Result<Vec<TextSlice>> {
        let params = opts.resolve(SLICES, self.params());
        let request = ApiRequest::post(paths::TEXT_SLICES, params, checked_text(text)?);
        self.call(request)
    }

    pub fn fingerprints_for_texts(&self, texts: &[&str]) -> Result<Vec<Fingerprint>> {
        self.fingerprints_for_texts_with(texts, &Options::default())
    }

    /// Fingerprint every text in one request. Result `i` belongs to
    /// `texts[i]`.
    pub fn fingerprints_for_texts_with(
        &self,
        texts: &[&str],
        opts: &Options,
    ) -> Result<Vec<Fingerprint>> {
        if texts.is_empty() {
            return Err(Error::argument("bulk request needs at least one text"));
        }
        let models = texts
            .iter()
            .map(|t| Text::new(*t).map(Model::Text))
            .collect::<Result<Vec<_>>>()?;
        let params = opts.resolve(Accepts::SPARSITY, self.params());
        let request = ApiRequest::post(paths::TEXT_BULK, params, encode_all(&models)?);
        self.call_bulk(request, models.len())
    }

    pub fn language_for_text(&self, text: &str) -> Result<Language> {
        let request =
            ApiRequest::post(paths::TEXT_DETECT_LANGUAGE, self.params(), checked_text(text)?);
        self.call(request)
    }
}

fn checked_text(text: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(Error::argument("text must not be blank"));
    }
    Ok(text.to_string())
}
