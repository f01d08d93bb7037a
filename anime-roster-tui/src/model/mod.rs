//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和对自身的简单操作，不做 I/O。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         pub mod state;      // 名单状态 + 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub roster: RosterState,            // 角色名单（分页 + 光标 + 加载状态）
//!             pub modal: ModalState,              // 弹窗状态
//!             pub language: Language,             // 当前语言
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、名单状态（RosterState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     包装 anime-roster-core 的 PageView：
//!         - view: PageView<CharacterRecord>   // 完整列表 + 页码 + 选中项
//!         - cursor: usize                     // 当前页内的高亮行
//!         - load_state: LoadState             // Loading / Loaded / Failed
//!
//!     翻页时光标回到 0；Enter 通过 select_under_cursor() 把光标行设为选中项。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal 枚举：
//!             - Detail(CharacterRecord)   角色详情
//!             - Help                      快捷键帮助
//!             - Error { title, message }  错误提示
//!
//!         ModalState.active: Option<Modal>    // None = 无弹窗
//!

mod app;
pub mod state;

pub use app::App;
pub use state::{LoadState, Modal, ModalState, RosterState};
