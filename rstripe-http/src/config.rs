//! Client configuration.
//!
//! A [`ClientConfig`] is built once and shared read-only by every request a
//! [`StripeClient`](crate::StripeClient) makes. There is no process-wide state:
//! two clients with different keys or endpoints can run side by side.
//!
//! # Environment Variables
//!
//! - `STRIPE_API_KEY` - default API key (required by [`ClientConfig::from_env`])
//! - `STRIPE_API_BASE` - overrides the base URL (optional)

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::constants::{API_BASE_ENV, API_KEY_ENV, DEFAULT_API_BASE};

/// A secret API key.
///
/// `Debug` output is redacted so the key does not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key for use as a credential.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take_while(|c| *c != '_').collect();
        if prefix.len() < self.0.len() {
            write!(f, "ApiKey({prefix}_***)")
        } else {
            f.write_str("ApiKey(***)")
        }
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API key variable is unset or empty.
    #[error("{var} not found in environment")]
    MissingApiKey {
        /// Name of the variable that was read.
        var: &'static str,
    },
    /// The base URL does not parse.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
}

/// Settings shared by all requests of a client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    api_key: Option<ApiKey>,
    base_url: Url,
    timeout: Option<Duration>,
    log_traffic: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// A configuration with the default base URL, no default key, no timeout
    /// and traffic logging off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout: None,
            log_traffic: false,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if `STRIPE_API_KEY` is unset or
    /// empty, and [`ConfigError::InvalidBaseUrl`] if `STRIPE_API_BASE` is set
    /// to something that is not a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`ClientConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = lookup(API_KEY_ENV)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey { var: API_KEY_ENV })?;
        let mut config = Self::new().with_api_key(key);
        if let Some(base) = lookup(API_BASE_ENV).filter(|b| !b.is_empty()) {
            config = config.with_base_url(&base)?;
        }
        Ok(config)
    }

    /// Sets the key used when a call does not supply its own.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Points the client at another endpoint, e.g. a mock server in tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if `url` does not parse.
    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.base_url = Url::parse(url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: url.to_owned(),
            source,
        })?;
        Ok(self)
    }

    /// Bounds each request, connection through body read, by `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Turns debug logging of request and response payloads on or off.
    ///
    /// Only has an effect with the `telemetry` feature enabled.
    #[must_use]
    pub const fn with_log_traffic(mut self, enabled: bool) -> Self {
        self.log_traffic = enabled;
        self
    }

    /// The default API key, if any.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Per-request timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Whether request and response payloads are logged.
    #[must_use]
    pub const fn log_traffic(&self) -> bool {
        self.log_traffic
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_API_BASE).expect("default base URL is valid")
}
