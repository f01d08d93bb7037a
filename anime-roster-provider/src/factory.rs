//! Source factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::JikanProvider;
use crate::traits::CharacterSource;
use crate::types::SourceConfig;

/// Creates a [`CharacterSource`] from the given configuration.
///
/// The returned source is wrapped in `Arc<dyn CharacterSource>` so it can be
/// moved into the task that performs the startup fetch.
///
/// # Examples
///
/// ```rust,no_run
/// use anime_roster_provider::{create_source, SourceConfig};
///
/// let source = create_source(&SourceConfig::default()).unwrap();
/// assert_eq!(source.id(), "jikan");
/// ```
pub fn create_source(config: &SourceConfig) -> Result<Arc<dyn CharacterSource>> {
    Ok(Arc::new(JikanProvider::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    #[test]
    fn creates_jikan_source() {
        let source = create_source(&SourceConfig::default()).unwrap();
        assert_eq!(source.id(), "jikan");
    }

    #[test]
    fn created_source_is_debuggable() {
        let result = create_source(&SourceConfig::default());
        let debug = format!("{result:?}");
        assert!(debug.contains("JikanProvider"), "{debug}");
        assert!(debug.contains("anime_id: 21"), "{debug}");
    }

    #[test]
    fn rejects_blank_base_url() {
        let config = SourceConfig {
            base_url: "   ".to_string(),
            ..SourceConfig::default()
        };
        let result = create_source(&config);
        assert!(matches!(
            result,
            Err(ProviderError::InvalidParameter { ref param, .. }) if param == "base_url"
        ));
    }
}
