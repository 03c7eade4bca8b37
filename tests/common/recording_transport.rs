//! In-memory [`Transport`] test double.
//!
//! Records every [`ApiRequest`] it receives and answers from a queue of
//! canned replies, falling back to a fixed body once the queue is empty.
//! Call-count assertions on it prove that validation happens before any
//! request is issued.
//!
//! ```rust,ignore
//! let transport = RecordingTransport::replying("[]");
//! transport.push_reply(r#"{"positions":[1,2,3]}"#);
//! let client = client_with(transport);
//! client.fingerprint_for_expression(&term("apple")?)?;
//! assert_eq!(client.transport().calls(), 1);
//! ```

use retina::{ApiRequest, RemoteError, Transport};
use std::collections::VecDeque;
use std::sync::Mutex;

pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    replies: Mutex<VecDeque<Result<Vec<u8>, RemoteError>>>,
    fallback: Vec<u8>,
}

impl RecordingTransport {
    /// Answer every request with an empty JSON array.
    pub fn new() -> Self {
        Self::replying("[]")
    }

    /// Answer every request with `body` unless a queued reply is pending.
    pub fn replying(body: impl Into<String>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(VecDeque::new()),
            fallback: body.into().into_bytes(),
        }
    }

    /// Queue a one-shot reply.
    pub fn push_reply(&self, body: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(body.into().into_bytes()));
    }

    /// Queue a one-shot failure.
    pub fn push_error(&self, err: RemoteError) {
        self.replies.lock().unwrap().push_back(Err(err));
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent to the transport")
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, RemoteError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}
