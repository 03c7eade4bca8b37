//! Canned server responses.
//!
//! Bulk fixtures label each result group with its index so correlation tests
//! can check that group `i` came back in position `i`.

use serde_json::json;

pub const FINGERPRINT_JSON: &str = r#"{"positions":[2,7,16383]}"#;

pub const TEXT_FINGERPRINT_JSON: &str = r#"[{"positions":[1,3,5]}]"#;

pub const METRIC_JSON: &str = r#"{
    "cosineSimilarity": 0.62,
    "euclideanDistance": 0.71,
    "jaccardDistance": 0.55,
    "overlappingAll": 112,
    "overlappingLeftRight": 0.45,
    "overlappingRightLeft": 0.41,
    "sizeLeft": 248,
    "sizeRight": 272,
    "weightedScoring": 58.3
}"#;

pub const CONTEXTS_JSON: &str = r#"[
    {"contextLabel": "fruit", "contextId": 0},
    {"contextLabel": "computer", "contextId": 1}
]"#;

pub const TERMS_JSON: &str = r#"[
    {"term": "pear", "df": 0.0002, "score": 31.0, "posTypes": ["NOUN"]},
    {"term": "orchard", "df": 0.0001, "score": 22.0, "posTypes": ["NOUN"]}
]"#;

pub const RETINAS_JSON: &str = r#"[
    {"retinaName": "en_associative", "description": "An English language retina.",
     "numberOfTermsInRetina": 854523, "numberOfRows": 128, "numberOfColumns": 128},
    {"retinaName": "en_synonymous", "description": "A synonymous English retina.",
     "numberOfTermsInRetina": 854523, "numberOfRows": 128, "numberOfColumns": 128}
]"#;

pub const CATEGORY_FILTER_JSON: &str = r#"{"categoryName":"fruit","positions":[9,4,4,1]}"#;

pub const LANGUAGE_JSON: &str = concat!(
    r#"{"language":"English","iso_tag":"en","#,
    r#""wiki_url":"http://en.wikipedia.org/wiki/English_language"}"#,
);

// ---------------------------------------------------------------------------
// Indexed bulk responses
// ---------------------------------------------------------------------------

/// `k` fingerprints; fingerprint `i` has the single position `i`.
pub fn indexed_fingerprints(k: usize) -> String {
    let groups: Vec<_> = (0..k).map(|i| json!({ "positions": [i] })).collect();
    serde_json::Value::Array(groups).to_string()
}

/// `k` context lists; list `i` holds one context labelled `group-i`.
pub fn indexed_context_groups(k: usize) -> String {
    let groups: Vec<_> = (0..k)
        .map(|i| json!([{ "contextLabel": format!("group-{i}"), "contextId": i }]))
        .collect();
    serde_json::Value::Array(groups).to_string()
}

/// `k` similar-term lists; list `i` holds one term `group-i`.
pub fn indexed_term_groups(k: usize) -> String {
    let groups: Vec<_> = (0..k)
        .map(|i| json!([{ "term": format!("group-{i}"), "df": 0.0, "score": i, "posTypes": [] }]))
        .collect();
    serde_json::Value::Array(groups).to_string()
}

/// `k` metrics; metric `i` has `overlappingAll == i`.
pub fn indexed_metrics(k: usize) -> String {
    let groups: Vec<_> = (0..k)
        .map(|i| {
            json!({
                "cosineSimilarity": 0.5, "euclideanDistance": 0.5, "jaccardDistance": 0.5,
                "overlappingAll": i, "overlappingLeftRight": 0.5, "overlappingRightLeft": 0.5,
                "sizeLeft": 100, "sizeRight": 100, "weightedScoring": 50.0
            })
        })
        .collect();
    serde_json::Value::Array(groups).to_string()
}

/// `k` bulk images; image `i` carries `image-i` as its data.
pub fn indexed_images(k: usize) -> String {
    let groups: Vec<_> = (0..k)
        .map(|i| json!({ "imageData": format!("image-{i}") }))
        .collect();
    serde_json::Value::Array(groups).to_string()
}
