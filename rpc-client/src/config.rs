use std::{str::FromStr, time::Duration};
use url::Url;

/// Endpoint of a local development node.
pub const DEFAULT_URL: &str = "http://127.0.0.1:8545";

/// Default timeout of a single round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default limit of a response body.
pub const TEN_MB_SIZE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unsupported url scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
}

/// Connection settings of an HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: Url,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
    pub max_response_size: usize,
    /// Extra headers sent with every request, e.g. `Authorization`.
    pub headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Settings for `url` with the default timeout and response size limit.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `url` isn't an `http` or `https` url.
    pub fn new(url: Url) -> Result<Self, ConfigError> {
        match url.scheme() {
            "http" | "https" => {},
            scheme => return Err(ConfigError::UnsupportedScheme(scheme.to_string())),
        }
        Ok(Self {
            url,
            timeout: Some(DEFAULT_TIMEOUT),
            max_response_size: TEN_MB_SIZE_BYTES,
            headers: Vec::new(),
        })
    }

    /// Settings for [`DEFAULT_URL`].
    ///
    /// # Errors
    /// Never fails, kept fallible to share the signature of [`ClientConfig::new`].
    pub fn localhost() -> Result<Self, ConfigError> {
        Self::from_str(DEFAULT_URL)
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_max_response_size(mut self, max_response_size: usize) -> Self {
        self.max_response_size = max_response_size;
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl FromStr for ClientConfig {
    type Err = ConfigError;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        Self::new(Url::parse(url)?)
    }
}
