//! Jikan API 类型定义
//!
//! 只声明用到的字段，其余字段由 serde 忽略。

use serde::Deserialize;

/// `GET /anime/{id}/characters` 响应
#[derive(Debug, Deserialize)]
pub struct JikanCharactersResponse {
    pub data: Vec<JikanCharacterEntry>,
}

/// 角色列表中的一项
#[derive(Debug, Deserialize)]
pub struct JikanCharacterEntry {
    pub character: JikanCharacter,
    #[serde(default)]
    pub role: String,
}

/// 角色本体
#[derive(Debug, Deserialize)]
pub struct JikanCharacter {
    pub mal_id: u64,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub images: Option<JikanImages>,
}

#[derive(Debug, Deserialize)]
pub struct JikanImages {
    #[serde(default)]
    pub jpg: Option<JikanImage>,
}

#[derive(Debug, Deserialize)]
pub struct JikanImage {
    #[serde(default)]
    pub image_url: Option<String>,
}

/// 错误响应体（4xx/5xx）
#[derive(Debug, Default, Deserialize)]
pub struct JikanErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl JikanErrorBody {
    /// 优先使用 `message`，其次 `error`
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.is_empty())
    }
}
