//! 名单加载配置

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::page_view::DEFAULT_PAGE_SIZE;
use crate::types::SourceConfig;

/// 单页条目上限
pub const MAX_PAGE_SIZE: usize = 100;

/// 名单设置（分页 + 数据源）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterSettings {
    /// 每页条目数
    pub page_size: usize,
    /// 数据源配置
    pub source: SourceConfig,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            source: SourceConfig::default(),
        }
    }
}

impl RosterSettings {
    /// 校验设置，返回第一个不合法的字段
    pub fn validate(&self) -> CoreResult<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(CoreError::ConfigError(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        if self.source.anime_id == 0 {
            return Err(CoreError::ConfigError(
                "anime_id must be greater than 0".to_string(),
            ));
        }
        if self.source.base_url.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "api_base_url must not be empty".to_string(),
            ));
        }
        if self.source.connect_timeout_secs == 0 || self.source.request_timeout_secs == 0 {
            return Err(CoreError::ConfigError(
                "timeouts must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
