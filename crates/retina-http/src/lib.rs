//! retina-http — blocking hyper transport for the Retina client.
//!
//! [`HttpTransport`] implements [`retina_core::Transport`] over plain HTTP
//! using the hyper-util legacy client. It owns a small private tokio runtime
//! and blocks the calling thread for the duration of each request, so it must
//! not be called from inside another async runtime.
//!
//! Only `http://` server addresses are accepted. Callers that need TLS inject
//! their own [`Transport`] into the client instead.

use std::time::{Duration, Instant};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header::{ACCEPT, CONTENT_TYPE};
use hyper::Uri;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use retina_core::{ApiRequest, ClientConfig, Error, Method, QueryParams, RemoteError, Transport};

const API_KEY_HEADER: &str = "api-key";

/// Everything outside the RFC 3986 unreserved set is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Blocking transport speaking to a Retina REST server.
pub struct HttpTransport {
    base: String,
    api_key: String,
    timeout: Duration,
    client: Client<HttpConnector, Full<Bytes>>,
    runtime: tokio::runtime::Runtime,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base", &self.base)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Build a transport for `server_address` (for example
    /// `http://api.cortical.io/rest`).
    pub fn new(
        server_address: &str,
        api_key: &str,
        timeout: Duration,
    ) -> retina_core::Result<Self> {
        let base = server_address.trim().trim_end_matches('/').to_string();
        let uri: Uri = base
            .parse()
            .map_err(|e| Error::configuration(format!("invalid server_address {base:?}: {e}")))?;
        match uri.scheme_str() {
            Some("http") => {}
            Some("https") => {
                return Err(Error::configuration(
                    "https is not supported by the bundled transport; \
                     inject a TLS-capable Transport",
                ))
            }
            _ => {
                return Err(Error::configuration(format!(
                    "server_address must start with http://, got {base:?}"
                )))
            }
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("retina-http")
            .enable_all()
            .build()
            .map_err(|e| Error::configuration(format!("failed to start transport runtime: {e}")))?;

        let client = {
            let _guard = runtime.enter();
            Client::builder(TokioExecutor::new()).build_http()
        };

        Ok(Self {
            base,
            api_key: api_key.to_string(),
            timeout,
            client,
            runtime,
        })
    }

    /// Build a transport from a validated [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> retina_core::Result<Self> {
        config.validate()?;
        Self::new(
            &config.server_address,
            config.api_key(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Full URL for `request`, query string included.
    pub fn url_for(&self, request: &ApiRequest) -> String {
        let query = query_string(&request.params);
        if query.is_empty() {
            format!("{}{}", self.base, request.path)
        } else {
            format!("{}{}?{}", self.base, request.path, query)
        }
    }

    async fn execute(&self, request: &ApiRequest) -> Result<Vec<u8>, RemoteError> {
        let uri: Uri = self
            .url_for(request)
            .parse()
            .map_err(|e| RemoteError::Connection(format!("invalid request uri: {e}")))?;
        let method = match request.method {
            Method::Get => hyper::Method::GET,
            Method::Post => hyper::Method::POST,
        };
        let body = Full::new(Bytes::from(request.body.clone().unwrap_or_default()));

        let req = hyper::Request::builder()
            .method(method)
            .uri(uri)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, request.accept.as_str())
            .body(body)
            .map_err(|e| RemoteError::Connection(e.to_string()))?;

        let response = self
            .client
            .request(req)
            .await
            .map_err(|e| RemoteError::Connection(e.to_string()))?;
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| RemoteError::Connection(e.to_string()))?
            .to_bytes();

        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(bytes.to_vec())
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, RemoteError> {
        let started = Instant::now();
        let result = self.runtime.block_on(async {
            match tokio::time::timeout(self.timeout, self.execute(request)).await {
                Ok(result) => result,
                Err(_) => Err(RemoteError::Timeout(self.timeout)),
            }
        });
        tracing::debug!(
            method = request.method.as_str(),
            path = request.path,
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "retina request finished"
        );
        result
    }
}

// ---------------------------------------------------------------------------
// Query encoding
// ---------------------------------------------------------------------------

fn query_string(params: &QueryParams) -> String {
    params
        .to_pairs()
        .iter()
        .map(|(name, value)| format!("{name}={}", utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
