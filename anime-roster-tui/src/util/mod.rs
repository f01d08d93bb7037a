//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关，负责终端的初始化和恢复。
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显
//!         - 捕获 Ctrl+C、箭头键等特殊键
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 在备用屏幕运行，退出后恢复主屏幕内容
//!
//!     注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!           否则终端会保持在原始模式。
//!

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
