//! Shared domain types

mod language;

// 角色记录直接使用数据源库的类型，保持类型一致
pub use anime_roster_provider::{CharacterRecord, SourceConfig};

pub use language::Language;
