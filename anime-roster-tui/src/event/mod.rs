//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width , height)       // 终端窗口大小发生变化，下一帧自动重绘
//!             其余事件                              // 忽略
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 只处理 Press，忽略 Release / Repeat
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键（退出、帮助、语言），就地处理
//!                 - 其余交给 handle_roster_keys
//!
//!
//!     常用键盘映射：
//!         ↑/k ↓/j          → 光标上下
//!         ←/h PageUp       → 上一页
//!         →/l PageDown     → 下一页
//!         Enter            → 打开详情
//!         Esc              → 关闭弹窗
//!         ?                → 帮助
//!         F2               → 切换语言
//!         q / Ctrl+C       → 退出
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
