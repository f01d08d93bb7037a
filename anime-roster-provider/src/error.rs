use serde::{Deserialize, Serialize};

/// Unified error type for all character source operations.
///
/// Each variant includes a `provider` field identifying which source produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// Transient variants ([`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout),
/// [`RateLimited`](Self::RateLimited)) are reported as-is; sources never retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The requested anime does not exist upstream (HTTP 404).
    AnimeNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Anime ID that was requested.
        anime_id: u64,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API answered with an unexpected non-success HTTP status.
    HttpStatus {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// A source parameter is invalid (e.g., empty base URL).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl ProviderError {
    /// Identifier of the source that produced this error.
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::RateLimited { provider, .. }
            | Self::AnimeNotFound { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::InvalidParameter { provider, .. }
            | Self::ParseError { provider, .. } => provider,
        }
    }

    /// Whether the failure is an expected outcome (bad input, missing anime, throttling)
    /// rather than a fault. Used to pick the log level: `warn` when `true`, `error` otherwise.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::AnimeNotFound { .. } | Self::RateLimited { .. } | Self::InvalidParameter { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::AnimeNotFound {
                provider,
                anime_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Anime '{anime_id}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Anime '{anime_id}' not found")
                }
            }
            Self::HttpStatus {
                provider,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] HTTP {status}: {msg}")
                } else {
                    write!(f, "[{provider}] HTTP {status}")
                }
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "test".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ProviderError::Timeout {
            provider: "jikan".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[jikan] Request timeout: 30s elapsed");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ProviderError::RateLimited {
            provider: "jikan".to_string(),
            retry_after: Some(4),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[jikan] Rate limited (retry after 4s)");
    }

    #[test]
    fn display_rate_limited_without_retry() {
        let e = ProviderError::RateLimited {
            provider: "jikan".to_string(),
            retry_after: None,
            raw_message: Some("slow down".to_string()),
        };
        assert_eq!(e.to_string(), "[jikan] Rate limited");
    }

    #[test]
    fn display_anime_not_found() {
        let with_msg = ProviderError::AnimeNotFound {
            provider: "jikan".to_string(),
            anime_id: 999_999,
            raw_message: Some("Resource does not exist".to_string()),
        };
        assert_eq!(
            with_msg.to_string(),
            "[jikan] Anime '999999' not found: Resource does not exist"
        );

        let without_msg = ProviderError::AnimeNotFound {
            provider: "jikan".to_string(),
            anime_id: 1,
            raw_message: None,
        };
        assert_eq!(without_msg.to_string(), "[jikan] Anime '1' not found");
    }

    #[test]
    fn display_http_status() {
        let e = ProviderError::HttpStatus {
            provider: "jikan".to_string(),
            status: 500,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[jikan] HTTP 500");
    }

    #[test]
    fn display_invalid_parameter() {
        let e = ProviderError::InvalidParameter {
            provider: "jikan".to_string(),
            param: "base_url".to_string(),
            detail: "must not be empty".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[jikan] Invalid parameter 'base_url': must not be empty"
        );
    }

    #[test]
    fn display_parse_error() {
        let e = ProviderError::ParseError {
            provider: "test".to_string(),
            detail: "bad json".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Parse error: bad json");
    }

    #[test]
    fn provider_accessor() {
        let e = ProviderError::HttpStatus {
            provider: "jikan".to_string(),
            status: 503,
            raw_message: None,
        };
        assert_eq!(e.provider(), "jikan");
    }

    #[test]
    fn expected_variants() {
        assert!(
            ProviderError::AnimeNotFound {
                provider: "jikan".into(),
                anime_id: 1,
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !ProviderError::NetworkError {
                provider: "jikan".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            !ProviderError::ParseError {
                provider: "jikan".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_tags_variant_code() {
        let e = ProviderError::RateLimited {
            provider: "jikan".to_string(),
            retry_after: Some(60),
            raw_message: Some("too many requests".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RateLimited\""));
        assert!(json.contains("\"retry_after\":60"));
    }

    #[test]
    fn deserialize_keeps_display() {
        let original = ProviderError::AnimeNotFound {
            provider: "jikan".to_string(),
            anime_id: 21,
            raw_message: None,
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: ProviderError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), original.to_string());
    }
}
