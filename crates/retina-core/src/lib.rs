//! retina-core — models and request contract for the Retina client.
//!
//! This crate holds everything that describes *what* to ask the server
//! without talking to it: the expression algebra, its JSON wire codec, the
//! canonical request shape handed to a [`Transport`], the response types,
//! and the client configuration.
//!
//! # Architecture
//!
//! ```text
//! model ──► codec ──► request ──► Transport (retina-http or a test double)
//!                        ▲
//!             config ────┘
//! ```
//!
//! Nothing here evaluates fingerprint semantics. Every result is computed
//! server-side.

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod request;
pub mod types;

pub use codec::{
    encode, encode_all, encode_pair, encode_pairs, BulkPayload, PairsPayload, Payload,
};
pub use config::ClientConfig;
pub use error::{Error, RemoteError, Result};
pub use model::{
    and, category_filter, fingerprint, or, sub, term, text, xor, CategoryFilter, Expression,
    Fingerprint, Model, Operator, Term, Text,
};
pub use request::{
    paths, Accept, ApiRequest, ImageEncoding, ImagePlotShape, Method, PosType, QueryParams,
    Transport,
};
pub use types::{Context, Image, Language, Metric, Retina, TermResult, TextSlice};
