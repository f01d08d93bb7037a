//! 角色名单加载服务

use std::sync::Arc;

use anime_roster_provider::{create_source, CharacterSource};

use crate::error::CoreResult;
use crate::types::{CharacterRecord, SourceConfig};

/// 角色名单加载服务
///
/// 持有一个数据源，每次调用 [`load_roster`](Self::load_roster) 发起一次请求，不重试、不缓存。
pub struct RosterService {
    source: Arc<dyn CharacterSource>,
}

impl RosterService {
    /// 根据配置创建服务实例
    pub fn new(config: &SourceConfig) -> CoreResult<Self> {
        Ok(Self::with_source(create_source(config)?))
    }

    /// 使用已有数据源创建服务实例
    #[must_use]
    pub fn with_source(source: Arc<dyn CharacterSource>) -> Self {
        Self { source }
    }

    /// 数据源标识符
    pub fn source_id(&self) -> &'static str {
        self.source.id()
    }

    /// 获取完整角色列表（保持 API 返回顺序）
    pub async fn load_roster(&self) -> CoreResult<Vec<CharacterRecord>> {
        match self.source.fetch_characters().await {
            Ok(characters) => {
                log::info!(
                    "Loaded {} characters from {}",
                    characters.len(),
                    self.source.id()
                );
                Ok(characters)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Roster fetch failed: {e}");
                } else {
                    log::error!("Roster fetch failed: {e}");
                }
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{sample_characters, MockCharacterSource};
    use anime_roster_provider::ProviderError;

    #[tokio::test]
    async fn load_roster_keeps_order() {
        let characters = sample_characters(23);
        let service =
            RosterService::with_source(Arc::new(MockCharacterSource::ok(characters.clone())));

        let loaded = service.load_roster().await.unwrap();
        assert_eq!(loaded, characters);
        assert_eq!(service.source_id(), "mock");
    }

    #[tokio::test]
    async fn load_roster_wraps_provider_error() {
        let service = RosterService::with_source(Arc::new(MockCharacterSource::err(
            ProviderError::AnimeNotFound {
                provider: "mock".to_string(),
                anime_id: 999,
                raw_message: None,
            },
        )));

        let err = service.load_roster().await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Provider(ProviderError::AnimeNotFound { anime_id: 999, .. })
        ));
        assert!(err.is_expected());
    }

    #[tokio::test]
    async fn mock_counts_calls() {
        let mock = Arc::new(MockCharacterSource::ok(Vec::new()));
        let service = RosterService::with_source(mock.clone());
        assert!(service.load_roster().await.unwrap().is_empty());
        service.load_roster().await.unwrap();
        assert_eq!(mock.calls(), 2);
    }

    #[test]
    fn new_rejects_invalid_base_url() {
        let config = SourceConfig {
            base_url: "ftp://example.com".to_string(),
            ..SourceConfig::default()
        };
        assert!(matches!(
            RosterService::new(&config),
            Err(CoreError::Provider(ProviderError::InvalidParameter { .. }))
        ));
    }
}
