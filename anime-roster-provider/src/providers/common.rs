//! 数据源公共工具函数

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

/// 创建带超时配置的 HTTP Client
///
/// 指向本机回环地址时不走系统代理。
pub fn create_http_client(
    provider: &str,
    base_url: &Url,
    connect_timeout_secs: u64,
    request_timeout_secs: u64,
) -> Result<Client> {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .timeout(Duration::from_secs(request_timeout_secs))
        .user_agent(concat!("anime-roster/", env!("CARGO_PKG_VERSION")));

    if is_loopback(base_url) {
        builder = builder.no_proxy();
    }

    builder
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ URL ============

/// 解析 API 根地址，仅接受 http / https
pub fn parse_base_url(provider: &str, base_url: &str) -> Result<Url> {
    let invalid = |detail: String| ProviderError::InvalidParameter {
        provider: provider.to_string(),
        param: "base_url".to_string(),
        detail,
    };

    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(invalid("must not be empty".to_string()));
    }

    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

/// 是否为本机回环地址
pub fn is_loopback(url: &Url) -> bool {
    matches!(
        url.host_str(),
        Some("localhost" | "127.0.0.1" | "[::1]")
    )
}

/// 拼接 API 根地址与路径，去除多余的 `/`
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_strips_duplicate_slashes() {
        assert_eq!(
            join_url("https://api.jikan.moe/v4/", "/anime/21/characters"),
            "https://api.jikan.moe/v4/anime/21/characters"
        );
    }

    #[test]
    fn join_url_adds_missing_slash() {
        assert_eq!(
            join_url("http://127.0.0.1:8080", "anime/1/characters"),
            "http://127.0.0.1:8080/anime/1/characters"
        );
    }

    #[test]
    fn parse_base_url_rejects_blank_and_foreign_schemes() {
        assert!(parse_base_url("test", "  ").is_err());
        assert!(parse_base_url("test", "not a url").is_err());
        assert!(matches!(
            parse_base_url("test", "ftp://example.com"),
            Err(ProviderError::InvalidParameter { detail, .. }) if detail.contains("ftp")
        ));
    }

    #[test]
    fn loopback_detection() {
        let local = parse_base_url("test", "http://127.0.0.1:8080").unwrap();
        let remote = parse_base_url("test", "https://api.jikan.moe/v4").unwrap();
        assert!(is_loopback(&local));
        assert!(!is_loopback(&remote));
    }

    #[test]
    fn create_http_client_succeeds_with_defaults() {
        let url = parse_base_url("test", "https://api.jikan.moe/v4").unwrap();
        assert!(create_http_client("test", &url, 10, 30).is_ok());
    }
}
