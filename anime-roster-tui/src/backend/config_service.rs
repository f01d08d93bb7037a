//! 配置服务

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anime_roster_core::{Language, RosterSettings, SourceConfig, DEFAULT_PAGE_SIZE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 应用配置
///
/// 所有字段均可省略，缺省值见 [`Default`]。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 语言代码（`en-US` / `pt-BR`）
    pub language: String,
    pub theme: Theme,
    /// 每页条目数
    pub page_size: usize,
    /// MyAnimeList 动画 ID
    pub anime_id: u64,
    /// API 根地址
    pub api_base_url: String,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let source = SourceConfig::default();
        Self {
            language: Language::default().code().to_string(),
            theme: Theme::Dark,
            page_size: DEFAULT_PAGE_SIZE,
            anime_id: source.anime_id,
            api_base_url: source.base_url,
            request_timeout_secs: source.request_timeout_secs,
        }
    }
}

impl AppConfig {
    /// 解析语言；未知代码回退到 en-US
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language '{}', falling back to en-US", self.language);
            Language::default()
        })
    }

    /// 转换为名单设置；校验失败时回退到默认设置
    pub fn roster_settings(&self) -> RosterSettings {
        let settings = RosterSettings {
            page_size: self.page_size,
            source: SourceConfig {
                base_url: self.api_base_url.clone(),
                anime_id: self.anime_id,
                request_timeout_secs: self.request_timeout_secs,
                ..SourceConfig::default()
            },
        };

        match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                log::warn!("{e}; using default roster settings");
                RosterSettings::default()
            }
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 获取默认配置文件路径
fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("anime-roster-tui")
        .join("config.json")
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(default_config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", self.path.display());
                return Ok(AppConfig::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read {}", self.path.display()));
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => {
                log::info!("Loaded config from {}", self.path.display());
                Ok(config)
            }
            Err(e) => {
                log::warn!(
                    "Malformed config at {}: {e}; using defaults",
                    self.path.display()
                );
                Ok(AppConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "anime-roster-tui-test-{}-{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        let _ = std::fs::remove_file(&path);
        if let Some(content) = content {
            std::fs::write(&path, content).unwrap();
        }
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let service = LocalConfigService::with_path(temp_file("missing", None));
        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.anime_id, 21);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_file(
            "partial",
            Some(r#"{"language":"pt-BR","theme":"light","page_size":5}"#),
        );
        let config = LocalConfigService::with_path(path).load().unwrap();
        assert_eq!(config.language(), Language::PtBr);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.api_base_url, "https://api.jikan.moe/v4");
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let path = temp_file("malformed", Some("{ not json"));
        let config = LocalConfigService::with_path(path).load().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn unknown_language_falls_back() {
        let config = AppConfig {
            language: "fr-FR".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn roster_settings_carry_config_values() {
        let config = AppConfig {
            page_size: 7,
            anime_id: 1735,
            api_base_url: "http://127.0.0.1:9000".to_string(),
            request_timeout_secs: 5,
            ..AppConfig::default()
        };
        let settings = config.roster_settings();
        assert_eq!(settings.page_size, 7);
        assert_eq!(settings.source.anime_id, 1735);
        assert_eq!(settings.source.base_url, "http://127.0.0.1:9000");
        assert_eq!(settings.source.request_timeout_secs, 5);
    }

    #[test]
    fn invalid_roster_settings_fall_back_to_defaults() {
        let config = AppConfig {
            page_size: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.roster_settings(), RosterSettings::default());
    }
}
