//! retina — client for the Retina semantic fingerprint REST API.
//!
//! Build what you want computed with the expression algebra, then hand it to
//! a [`Client`]. The client never evaluates anything locally: it encodes the
//! request, fills in defaults, issues exactly one call and correlates bulk
//! answers with their inputs.
//!
//! # Architecture
//!
//! ```text
//! model ──► codec ──► options cascade ──► Client::call ──► Transport
//!                                              │
//!                                              └──► bulk correlation
//! ```
//!
//! # Example
//!
//! ```no_run
//! use retina::{or, term, text, Client, ClientConfig, Options};
//!
//! let client = Client::connect(ClientConfig::load()?)?;
//! let fruit = or([term("apple")?, text("fresh fruit")?])?.add(term("banana")?)?;
//! for t in client.similar_terms_for_expression_with(&fruit, &Options::new().max_results(5))? {
//!     println!("{} {}", t.term, t.score);
//! }
//! # Ok::<(), retina::Error>(())
//! ```

pub mod bulk;
pub mod classify;
pub mod client;
pub mod compare;
pub mod expressions;
pub mod image;
pub mod options;
pub mod retinas;
pub mod terms;
pub mod text;

pub use client::Client;
pub use options::{
    ImageOptions, Options, Pagination, DEFAULT_BULK_MAX_RESULTS, DEFAULT_MAX_RESULTS,
    DEFAULT_START_INDEX,
};
pub use retina_core::{
    and, category_filter, encode, encode_all, encode_pair, encode_pairs, fingerprint, or, paths,
    sub, term, text, xor, Accept, ApiRequest, BulkPayload, CategoryFilter, ClientConfig, Context,
    Error, Expression, Fingerprint, Image, ImageEncoding, ImagePlotShape, Language, Method,
    Metric, Model, Operator, PairsPayload, Payload, PosType, QueryParams, RemoteError, Result,
    Retina, TermResult, TextSlice, Transport,
};
pub use retina_http::HttpTransport;
