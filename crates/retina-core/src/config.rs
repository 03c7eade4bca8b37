//! Client configuration.
//!
//! [`ClientConfig::load`] layers, in order: the built-in defaults, the file
//! `~/.config/retina/config.toml` (created with the defaults if it does not
//! exist) and `RETINA_*` environment variables. [`ClientConfig::defaults`]
//! returns the built-in layer alone without touching the filesystem.
//!
//! There is no default api key, so a freshly loaded config only validates
//! once one has been supplied by the file, the environment or the caller.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
# api_key      = "your-key"
server_address = "http://api.cortical.io/rest"
retina_name    = "en_associative"
timeout_secs   = 30
"#;

const ENV_PREFIX: &str = "RETINA";

// ---------------------------------------------------------------------------
// Public config type
// ---------------------------------------------------------------------------

/// Connection settings, fixed for the lifetime of a client.
///
/// `Debug` output never shows the api key.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_server_address")]
    pub server_address: String,
    #[serde(default = "default_retina_name")]
    pub retina_name: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_server_address() -> String { "http://api.cortical.io/rest".to_string() }
fn default_retina_name() -> String { "en_associative".to_string() }
fn default_timeout_secs() -> u64 { 30 }

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("server_address", &self.server_address)
            .field("retina_name", &self.retina_name)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            server_address: default_server_address(),
            retina_name: default_retina_name(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    pub fn new(
        api_key: impl Into<String>,
        server_address: impl Into<String>,
        retina_name: impl Into<String>,
    ) -> Self {
        Self {
            api_key: Some(api_key.into()),
            server_address: server_address.into(),
            retina_name: retina_name.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Load from `~/.config/retina/config.toml` and the environment, layered
    /// on top of the built-in defaults. Creates the file if it does not exist.
    pub fn load() -> Result<Self> {
        let path = config_path();

        if !path.exists() {
            let written = path
                .parent()
                .map_or(Ok(()), std::fs::create_dir_all)
                .and_then(|()| std::fs::write(&path, DEFAULT_CONFIG.trim_start()));
            if let Err(err) = written {
                tracing::warn!(path = %path.display(), %err, "could not write default config");
            }
        }

        Self::load_from(&path)
    }

    /// Load from an explicit file (optional) plus the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        tracing::debug!(path = %path.display(), "loaded client config");
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_server_address(mut self, server_address: impl Into<String>) -> Self {
        self.server_address = server_address.into();
        self
    }

    pub fn with_retina_name(mut self, retina_name: impl Into<String>) -> Self {
        self.retina_name = retina_name.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// The api key, once [`validate`](Self::validate) has passed.
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    /// Reject blank or missing settings with [`Error::Configuration`].
    pub fn validate(&self) -> Result<()> {
        if self.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            return Err(Error::configuration("api_key is missing or blank"));
        }
        if self.server_address.trim().is_empty() {
            return Err(Error::configuration("server_address is blank"));
        }
        if self.retina_name.trim().is_empty() {
            return Err(Error::configuration("retina_name is blank"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::configuration("timeout_secs must be > 0"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("retina")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
