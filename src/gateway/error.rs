use crate::{config::ConfigError, gateway::validate::ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum ChapaError {
    /// Request rejected locally, nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Transport failure, including timeouts while the body is still streaming
    #[error("http request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("gateway response deserialization: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("api key cannot be used as a bearer token")]
    InvalidApiKey,
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ChapaError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}
