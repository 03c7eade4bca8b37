//! Test builders — ergonomic constructors for configs, clients and models.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use super::recording_transport::RecordingTransport;
use retina::{ApiRequest, Client, ClientConfig, Model};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_RETINA: &str = "en_associative";

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

pub fn test_config() -> ClientConfig {
    ClientConfig::new(TEST_API_KEY, "http://localhost/rest", TEST_RETINA)
}

pub fn client_with(transport: RecordingTransport) -> Client<RecordingTransport> {
    Client::with_transport(test_config(), transport).expect("test config must validate")
}

/// A client whose transport answers every request with `body`.
pub fn client_replying(body: &str) -> Client<RecordingTransport> {
    client_with(RecordingTransport::replying(body))
}

/// Run `call` against a fresh client answering `reply` and return the single
/// request it issued.
pub fn request_of<R>(
    reply: &str,
    call: impl FnOnce(&Client<RecordingTransport>) -> retina::Result<R>,
) -> ApiRequest {
    let client = client_replying(reply);
    if let Err(err) = call(&client) {
        panic!("call against the recording transport failed: {err}");
    }
    assert_eq!(client.transport().calls(), 1, "expected exactly one request");
    client.transport().last_request()
}

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

pub fn t(value: &str) -> Model {
    retina::term(value).expect("test term must not be blank")
}

pub fn txt(value: &str) -> Model {
    retina::text(value).expect("test text must not be blank")
}

/// `n` distinct term models: `term-0`, `term-1`, …
pub fn distinct_terms(n: usize) -> Vec<Model> {
    (0..n).map(|i| t(&format!("term-{i}"))).collect()
}

/// `n` distinct `(left, right)` pairs.
pub fn distinct_pairs(n: usize) -> Vec<(Model, Model)> {
    (0..n)
        .map(|i| (t(&format!("left-{i}")), txt(&format!("right text {i}"))))
        .collect()
}
