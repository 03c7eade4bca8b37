//! The [`Client`] and its single request path.
//!
//! Capability modules (`terms`, `text`, `expressions`, …) only build an
//! [`ApiRequest`] and pick a response type; sending, decoding and bulk
//! correlation all go through [`Client::call`], [`Client::call_bytes`] and
//! [`Client::call_bulk`].

use retina_core::{ApiRequest, ClientConfig, QueryParams, RemoteError, Result, Transport};
use retina_http::HttpTransport;
use serde::de::DeserializeOwned;

use crate::bulk;

/// Client bound to one retina on one server.
///
/// The configuration is validated once, at construction, and never changes.
/// The client holds no other state, so it is as thread-safe as its transport.
pub struct Client<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl Client<HttpTransport> {
    /// Validate `config` and connect over the bundled HTTP transport.
    pub fn connect(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> Client<T> {
    /// Validate `config` and use `transport` for every request.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn retina_name(&self) -> &str {
        &self.config.retina_name
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Query parameters every retina-scoped request starts from.
    pub(crate) fn params(&self) -> QueryParams {
        QueryParams::for_retina(self.config.retina_name.clone())
    }

    /// Send `request` and return the raw response body.
    pub(crate) fn call_bytes(&self, request: ApiRequest) -> Result<Vec<u8>> {
        tracing::debug!(
            method = request.method.as_str(),
            path = request.path,
            retina = %request.params.retina_name,
            "issuing retina request"
        );
        if let Some(body) = &request.body {
            tracing::trace!(body_len = body.len(), "request body");
        }
        Ok(self.transport.send(&request)?)
    }

    /// Send `request` and decode a JSON response.
    pub(crate) fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let path = request.path;
        let bytes = self.call_bytes(request)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            RemoteError::MalformedResponse(format!("{path}: {e}")).into()
        })
    }

    /// Send a bulk `request` carrying `expected` inputs and return exactly
    /// that many result groups, in submission order.
    pub(crate) fn call_bulk<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
        expected: usize,
    ) -> Result<Vec<R>> {
        let results: Vec<R> = self.call(request)?;
        bulk::correlate(expected, results)
    }
}

impl<T> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("server_address", &self.config.server_address)
            .field("retina_name", &self.config.retina_name)
            .finish_non_exhaustive()
    }
}
