//! Generic HTTP client tools
//!
//! Reusable request handling shared by every character source.
//! Each source builds its own `RequestBuilder`; this module sends it, logs the
//! exchange and turns transport failures into [`ProviderError`] values.

use std::borrow::Cow;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// Bytes of a response body kept in debug/error logs.
const LOG_BODY_LIMIT: usize = 256;

/// Cuts a response body down to [`LOG_BODY_LIMIT`] bytes on a char boundary.
fn truncate_for_log(body: &str) -> Cow<'_, str> {
    if body.len() <= LOG_BODY_LIMIT {
        return Cow::Borrowed(body);
    }
    let cut = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= LOG_BODY_LIMIT)
        .last()
        .unwrap_or(0);
    Cow::Owned(format!("{}... ({} bytes total)", &body[..cut], body.len()))
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, ...)
    /// * `provider_name` - source name (for logging and errors)
    /// * `method_name` - request method name, used for logs
    /// * `url` - request URL, used for logs
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for every response that is not HTTP 429
    /// * `Err(ProviderError::RateLimited)` - HTTP 429
    /// * `Err(ProviderError::Timeout | ProviderError::NetworkError)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: format!("Timed out reading response body: {e}"),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
