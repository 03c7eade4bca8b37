//! The canonical request handed to a [`Transport`].
//!
//! Every public client operation reduces to exactly one [`ApiRequest`]. Two
//! operations called with equivalent arguments produce equal requests, which
//! is what the overload-equivalence tests compare.

use std::str::FromStr;

use crate::error::{Error, RemoteError};

/// REST paths, relative to the configured server address.
pub mod paths {
    pub const RETINAS: &str = "/retinas";
    pub const TERMS: &str = "/terms";
    pub const TERMS_CONTEXTS: &str = "/terms/contexts";
    pub const TERMS_SIMILAR_TERMS: &str = "/terms/similar_terms";
    pub const TEXT: &str = "/text";
    pub const TEXT_KEYWORDS: &str = "/text/keywords";
    pub const TEXT_TOKENIZE: &str = "/text/tokenize";
    pub const TEXT_SLICES: &str = "/text/slices";
    pub const TEXT_BULK: &str = "/text/bulk";
    pub const TEXT_DETECT_LANGUAGE: &str = "/text/detect_language";
    pub const EXPRESSIONS: &str = "/expressions";
    pub const EXPRESSIONS_CONTEXTS: &str = "/expressions/contexts";
    pub const EXPRESSIONS_SIMILAR_TERMS: &str = "/expressions/similar_terms";
    pub const EXPRESSIONS_BULK: &str = "/expressions/bulk";
    pub const EXPRESSIONS_CONTEXTS_BULK: &str = "/expressions/contexts/bulk";
    pub const EXPRESSIONS_SIMILAR_TERMS_BULK: &str = "/expressions/similar_terms/bulk";
    pub const COMPARE: &str = "/compare";
    pub const COMPARE_BULK: &str = "/compare/bulk";
    pub const IMAGE: &str = "/image";
    pub const IMAGE_COMPARE: &str = "/image/compare";
    pub const IMAGE_BULK: &str = "/image/bulk";
    pub const CLASSIFY_CATEGORY_FILTER: &str = "/classify/create_category_filter";
}

// ---------------------------------------------------------------------------
// Enumerated parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Media type the caller expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accept {
    Json,
    Png,
}

impl Accept {
    pub fn as_str(self) -> &'static str {
        match self {
            Accept::Json => "application/json",
            Accept::Png => "image/png",
        }
    }
}

/// Part-of-speech filter for similar-terms queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosType {
    Noun,
    Verb,
    Adjective,
}

impl PosType {
    pub fn as_str(self) -> &'static str {
        match self {
            PosType::Noun => "NOUN",
            PosType::Verb => "VERB",
            PosType::Adjective => "ADJECTIVE",
        }
    }
}

impl FromStr for PosType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NOUN" => Ok(PosType::Noun),
            "VERB" => Ok(PosType::Verb),
            "ADJECTIVE" => Ok(PosType::Adjective),
            other => Err(Error::argument(format!("unknown pos type: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImagePlotShape {
    Circle,
    Square,
}

impl ImagePlotShape {
    pub fn as_str(self) -> &'static str {
        match self {
            ImagePlotShape::Circle => "circle",
            ImagePlotShape::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageEncoding {
    Base64Png,
    BinaryPng,
}

impl ImageEncoding {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageEncoding::Base64Png => "base64/png",
            ImageEncoding::BinaryPng => "binary/png",
        }
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query string of a canonical call. `None` means "not sent"; the server
/// applies its own default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    /// Empty only for `/retinas`, which lists every retina.
    pub retina_name: String,
    pub term: Option<String>,
    pub start_index: Option<u32>,
    pub max_results: Option<u32>,
    pub sparsity: Option<f64>,
    pub pos_type: Option<PosType>,
    pub context_id: Option<u32>,
    pub include_fingerprint: Option<bool>,
    pub image_scalar: Option<u32>,
    pub plot_shape: Option<ImagePlotShape>,
    pub image_encoding: Option<ImageEncoding>,
    pub filter_name: Option<String>,
    pub pos_tags: Option<String>,
}

impl QueryParams {
    pub fn for_retina(retina_name: impl Into<String>) -> Self {
        Self {
            retina_name: retina_name.into(),
            ..Self::default()
        }
    }

    /// `(wire name, value)` pairs in a fixed order, skipping absent values.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.retina_name.is_empty() {
            pairs.push(("retina_name", self.retina_name.clone()));
        }
        push(&mut pairs, "term", self.term.clone());
        push(&mut pairs, "start_index", self.start_index);
        push(&mut pairs, "max_results", self.max_results);
        push(&mut pairs, "sparsity", self.sparsity);
        push(&mut pairs, "pos_type", self.pos_type.map(PosType::as_str));
        push(&mut pairs, "context_id", self.context_id);
        push(&mut pairs, "get_fingerprint", self.include_fingerprint);
        push(&mut pairs, "image_scalar", self.image_scalar);
        push(&mut pairs, "plot_shape", self.plot_shape.map(ImagePlotShape::as_str));
        push(&mut pairs, "image_encoding", self.image_encoding.map(ImageEncoding::as_str));
        push(&mut pairs, "filter_name", self.filter_name.clone());
        push(&mut pairs, "POStags", self.pos_tags.clone());
        pairs
    }
}

fn push<V: ToString>(
    pairs: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: Option<V>,
) {
    if let Some(value) = value {
        pairs.push((name, value.to_string()));
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub params: QueryParams,
    pub body: Option<String>,
    pub accept: Accept,
}

impl ApiRequest {
    pub fn get(path: &'static str, params: QueryParams) -> Self {
        Self {
            method: Method::Get,
            path,
            params,
            body: None,
            accept: Accept::Json,
        }
    }

    pub fn post(path: &'static str, params: QueryParams, body: String) -> Self {
        Self {
            method: Method::Post,
            path,
            params,
            body: Some(body),
            accept: Accept::Json,
        }
    }

    pub fn accept(mut self, accept: Accept) -> Self {
        self.accept = accept;
        self
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Narrow seam between request composition and the network.
///
/// Implementations perform one request/response cycle and return the raw
/// response body. Timeouts, connection handling and status mapping belong to
/// the implementation; the client propagates any [`RemoteError`] unchanged.
pub trait Transport: Send + Sync {
    fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, RemoteError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, RemoteError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, RemoteError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, RemoteError> {
        (**self).send(request)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
