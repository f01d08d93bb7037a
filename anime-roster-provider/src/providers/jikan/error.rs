//! Jikan error mapping

use crate::error::ProviderError;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::{JikanProvider, PROVIDER_NAME};

/// Jikan 只通过 HTTP 状态码区分错误
/// Reference: <https://docs.api.jikan.moe/#section/Information/HTTP-Responses>
impl ProviderErrorMapper for JikanProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError) -> ProviderError {
        match raw.status {
            404 => ProviderError::AnimeNotFound {
                provider: self.provider_name().to_string(),
                anime_id: self.anime_id,
                raw_message: raw.message,
            },
            // 502/503/504: upstream MyAnimeList unreachable
            502..=504 => ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: raw
                    .message
                    .unwrap_or_else(|| format!("HTTP {}", raw.status)),
            },
            _ => self.status_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceConfig;

    fn provider() -> JikanProvider {
        JikanProvider::new(&SourceConfig::default()).unwrap()
    }

    #[test]
    fn not_found_maps_to_anime_not_found() {
        let err = provider().map_error(RawApiError::new(404, Some("Resource does not exist".into())));
        assert!(matches!(
            err,
            ProviderError::AnimeNotFound { anime_id: 21, raw_message: Some(_), .. }
        ));
    }

    #[test]
    fn gateway_errors_map_to_network_error() {
        let err = provider().map_error(RawApiError::new(503, None));
        assert!(matches!(&err, ProviderError::NetworkError { detail, .. } if detail == "HTTP 503"));
    }

    #[test]
    fn other_status_falls_back_to_http_status() {
        let err = provider().map_error(RawApiError::new(500, Some("boom".into())));
        assert!(matches!(err, ProviderError::HttpStatus { status: 500, .. }));
    }
}
