//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 名单 + 分页栏 + 状态栏
//!         mod components;         // 分页栏、状态栏、弹窗
//!         mod pages;              // 名单页面
//!         pub mod theme;          // 主题颜色
//!
//!     弹窗最后渲染，覆盖在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
