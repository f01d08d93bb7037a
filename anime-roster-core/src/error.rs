//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use anime_roster_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Configuration could not be used
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.); used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigError(_) => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_passes_display_through() {
        let err: CoreError = ProviderError::Timeout {
            provider: "jikan".to_string(),
            detail: "30s".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "[jikan] Request timeout: 30s");
        assert!(!err.is_expected());
    }

    #[test]
    fn config_error_is_expected() {
        let err = CoreError::ConfigError("page_size".to_string());
        assert_eq!(err.to_string(), "Configuration error: page_size");
        assert!(err.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_string(&CoreError::ConfigError("x".to_string())).unwrap();
        assert_eq!(json, r#"{"code":"ConfigError","details":"x"}"#);
    }
}
