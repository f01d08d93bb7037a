//! 界面语言

use serde::{Deserialize, Serialize};

/// 支持的界面语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// 英语（美国）
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// 葡萄牙语（巴西）
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::PtBr]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::PtBr => "Português (Brasil)",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::PtBr => "pt-BR",
        }
    }

    /// 从语言代码解析（不区分大小写）
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en-us" | "en" => Some(Language::EnUs),
            "pt-br" | "pt" => Some(Language::PtBr),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::EnUs => Language::PtBr,
            Language::PtBr => Language::EnUs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_short_and_mixed_case() {
        assert_eq!(Language::from_code("pt-BR"), Some(Language::PtBr));
        assert_eq!(Language::from_code("PT"), Some(Language::PtBr));
        assert_eq!(Language::from_code("en"), Some(Language::EnUs));
        assert_eq!(Language::from_code("ja-JP"), None);
    }

    #[test]
    fn next_cycles_through_all() {
        let mut lang = Language::default();
        for _ in Language::all() {
            lang = lang.next();
        }
        assert_eq!(lang, Language::default());
    }

    #[test]
    fn serde_uses_language_code() {
        let json = serde_json::to_string(&Language::PtBr).unwrap();
        assert_eq!(json, r#""pt-BR""#);
        let back: Language = serde_json::from_str(r#""en-US""#).unwrap();
        assert_eq!(back, Language::EnUs);
    }
}
