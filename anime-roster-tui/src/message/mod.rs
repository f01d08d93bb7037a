//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 键盘输入和后台任务结果都被翻译成 Message，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod content;        // 名单区域子消息
//!         mod modal;          // 弹窗子消息
//!
//!
//!     消息来源有两处：
//!         - event/handler.rs：按键 → AppMessage
//!         - backend/loader.rs：后台加载完成 → AppMessage::CharactersLoaded，
//!           经 channel 送回主循环
//!
//!     两者最终都进入 update::update(app, msg)。
//!

mod app;
mod content;
mod modal;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
