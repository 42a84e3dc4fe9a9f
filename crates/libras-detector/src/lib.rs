pub mod annotate;
pub mod deepl;
pub mod heuristic;
pub mod language;

pub use annotate::annotate;
pub use deepl::DeeplClassifier;
pub use heuristic::HeuristicClassifier;
pub use language::display_name;

use libras_core::types::LanguageCode;

/// Language identification provider interface
#[async_trait::async_trait]
pub trait Classifier: Send + Sync {
    /// Identify the language of text. Undetermined text yields "und".
    async fn identify(&self, text: &str) -> Result<LanguageCode, ClassifierError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;

    /// Release provider resources on teardown
    fn close(&self) {}
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub offline: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Classifier timed out after {0} ms")]
    Timeout(u64),

    #[error("Classifier unavailable: {0}")]
    Unavailable(String),
}
