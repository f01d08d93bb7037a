//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有 I/O：
//! 读取配置、初始化日志、在后台加载角色名单。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件，只读）
//!         mod loader;             // 后台名单加载（tokio 任务）
//!         mod logging;            // 日志初始化（写入文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         存储位置：<config_dir>/anime-roster-tui/config.json
//!
//!         - 文件不存在 → 默认配置
//!         - 文件格式错误 → 记录 warn，使用默认配置
//!         - 所有字段均可省略
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、日志（init_logging）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         stdout 归 ratatui 所有，日志写入
//!         <data_local_dir>/anime-roster-tui/anime-roster.log
//!
//!         RUST_LOG 未设置时：默认 warn，anime_roster* 为 info
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     main.rs 启动时调用 spawn_roster_load()
//!         ↓
//!     tokio 任务中 RosterService::load_roster()（anime-roster-core）
//!         ↓
//!     JikanProvider 请求 GET {base_url}/anime/{id}/characters
//!         ↓
//!     结果包装为 AppMessage::CharactersLoaded，经 channel 发回
//!         ↓
//!     app.rs 主循环每个 tick 取出消息，交给 Update 层
//!

mod config_service;
mod loader;
mod logging;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use loader::spawn_roster_load;
pub use logging::init_logging;
