//! Anime Roster TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、日志、后台加载 (`backend/`)
//!
//!
//! main.rs 执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件（stdout 归 TUI）
//!     LocalConfigService      // 读取 config.json，缺省时使用默认值
//!     spawn_roster_load()     // 在 tokio runtime 上发起唯一一次请求
//!     init_terminal()         // 进入原始模式 + 备用屏幕
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use tokio::sync::mpsc;

use backend::{ConfigService, LocalConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志
    backend::init_logging();

    // 2. 配置
    let config_service = LocalConfigService::new();
    let config = config_service.load().unwrap_or_else(|e| {
        log::warn!(
            "Failed to load {}: {e:#}; using defaults",
            config_service.path().display()
        );
        backend::AppConfig::default()
    });
    let language = config.language();
    i18n::set_language(language);
    view::theme::set_theme(config.theme);
    let settings = config.roster_settings();

    // 3. 后台加载
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    backend::spawn_roster_load(runtime.handle(), settings.source.clone(), tx);

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(settings.page_size, language);
    let result = app::run(&mut terminal, &mut app, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 未完成的请求直接丢弃
    runtime.shutdown_background();

    result
}
