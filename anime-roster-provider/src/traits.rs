use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::CharacterRecord;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: u16,
    /// 原始错误消息
    pub message: Option<String>,
}

impl RawApiError {
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

/// 错误映射 Trait（内部使用）
/// 各数据源实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回数据源标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError) -> ProviderError;

    /// 快捷方法：未识别的 HTTP 状态（fallback）
    fn status_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::HttpStatus {
            provider: self.provider_name().to_string(),
            status: raw.status,
            raw_message: raw.message,
        }
    }
}

/// 角色数据源 Trait
///
/// 一次性获取某部动画的完整角色列表。
#[async_trait]
pub trait CharacterSource: Send + Sync + std::fmt::Debug {
    /// 数据源标识符
    fn id(&self) -> &'static str;

    /// 获取完整角色列表（保持 API 返回顺序）
    async fn fetch_characters(&self) -> Result<Vec<CharacterRecord>>;
}
