//! Response types returned by the Retina REST API.
//!
//! Field names are camelCase on the wire. Optional fields the server omits
//! (for example fingerprints when `get_fingerprint` was not requested)
//! deserialize to `None`.

use serde::{Deserialize, Serialize};

use crate::model::Fingerprint;

/// A retina (semantic space) hosted by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retina {
    pub retina_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_of_terms_in_retina: u64,
    #[serde(default)]
    pub number_of_rows: u32,
    #[serde(default)]
    pub number_of_columns: u32,
}

/// A term as returned by term listings and similar-terms queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermResult {
    pub term: String,
    /// Document frequency.
    #[serde(default)]
    pub df: f64,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub pos_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
}

/// One of the semantic contexts a term or expression participates in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub context_label: String,
    pub context_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
}

/// Similarity metrics between two compared models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub cosine_similarity: f64,
    pub euclidean_distance: f64,
    pub jaccard_distance: f64,
    pub overlapping_all: u32,
    pub overlapping_left_right: f64,
    pub overlapping_right_left: f64,
    pub size_left: u32,
    pub size_right: u32,
    pub weighted_scoring: f64,
}

/// A slice of a longer text, split at topic changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSlice {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
}

/// Detected language of a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub language: String,
    pub iso_tag: String,
    #[serde(default)]
    pub wiki_url: String,
}

/// One entry of a bulk image response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Base64-encoded PNG.
    pub image_data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
}
