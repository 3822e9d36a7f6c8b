use std::time::Duration;

use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.chapa.co/v1/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_VAR: &str = "CHAPA_SECRET_KEY";
const BASE_URL_VAR: &str = "CHAPA_BASE_URL";
const TIMEOUT_VAR: &str = "CHAPA_TIMEOUT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CHAPA_SECRET_KEY is not defined")]
    MissingApiKey,
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("base url must be an absolute http(s) url: {0}")]
    UnsupportedBaseUrl(String),
    #[error("invalid timeout: {0}")]
    InvalidTimeout(#[from] humantime::DurationError),
}

#[derive(Clone)]
pub struct ChapaConfig {
    pub api_key: String,
    pub base_url: Url,
    pub timeout: Duration,
}

impl std::fmt::Debug for ChapaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChapaConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ChapaConfig {
    /// Production endpoint with the default timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `CHAPA_SECRET_KEY`, `CHAPA_BASE_URL` and `CHAPA_TIMEOUT` (e.g. `15s`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(&base_url)?;
        }
        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            config.timeout = humantime::parse_duration(timeout.trim())?;
        }
        tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "Loaded gateway configuration");
        Ok(config)
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")
}

/// Endpoint paths are appended as segments, so the base must be hierarchical
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedBaseUrl(raw.to_string()));
    }
    Ok(url)
}
