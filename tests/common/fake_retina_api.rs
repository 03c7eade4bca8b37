//! Fake Retina REST server for transport integration tests.
//!
//! Spins up a minimal `axum` server on a random TCP port bound to 127.0.0.1,
//! running on its own thread and runtime so tests stay plain blocking
//! `#[test]` functions, exactly like real callers of the client.
//!
//! Every path is accepted. The server records each request and answers with
//! the body registered for its path (`[]` when none is). Two retina names
//! trigger failure modes:
//! - `retina_name=broken` answers `500` with body `boom`
//! - `retina_name=slow` sleeps two seconds before answering
//!
//! # Example
//!
//! ```rust,ignore
//! let api = FakeRetinaApi::start();
//! api.respond("/expressions", r#"{"positions":[1,2]}"#);
//! let transport = HttpTransport::new(&api.base_url(), "key", Duration::from_secs(5))?;
//! ```

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::any,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl ReceivedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Default)]
struct ApiState {
    responses: HashMap<String, String>,
    received: Vec<ReceivedRequest>,
}

type Shared = Arc<Mutex<ApiState>>;

/// Handle to the running server. Dropping it shuts the server down.
pub struct FakeRetinaApi {
    addr: SocketAddr,
    state: Shared,
    shutdown: Option<oneshot::Sender<()>>,
}

impl FakeRetinaApi {
    /// Start the server and return once it is listening.
    pub fn start() -> Self {
        let state = Shared::default();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (addr_tx, addr_rx) = std::sync::mpsc::channel();

        let server_state = state.clone();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("fake retina runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind fake retina api");
                addr_tx
                    .send(listener.local_addr().expect("local addr"))
                    .expect("report address");

                let app = Router::new()
                    .route("/{*path}", any(handle))
                    .with_state(server_state);
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("fake retina api server");
            });
        });

        let addr = addr_rx.recv().expect("fake retina api failed to start");
        Self {
            addr,
            state,
            shutdown: Some(shutdown_tx),
        }
    }

    /// Base URL including the `/rest` prefix real deployments use.
    pub fn base_url(&self) -> String {
        format!("http://{}/rest", self.addr)
    }

    /// Answer requests for `path` (relative to `/rest`) with `body`.
    pub fn respond(&self, path: &str, body: &str) {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(format!("/rest{path}"), body.to_string());
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.state.lock().unwrap().received.clone()
    }

    pub fn last_received(&self) -> ReceivedRequest {
        self.received()
            .pop()
            .expect("the fake retina api received no request")
    }
}

impl Drop for FakeRetinaApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let query = uri.query().map(str::to_string);
    let reply = {
        let mut state = state.lock().unwrap();
        state.received.push(ReceivedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: query.clone(),
            headers,
            body,
        });
        state
            .responses
            .get(uri.path())
            .cloned()
            .unwrap_or_else(|| "[]".to_string())
    };

    let query = query.unwrap_or_default();
    if query.contains("retina_name=broken") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
    }
    if query.contains("retina_name=slow") {
        tokio::time::sleep(Duration::from_secs(2)).await;
    }
    (StatusCode::OK, reply)
}
