//! 页面状态模块

mod modal;
mod roster;

pub use modal::{Modal, ModalState};
pub use roster::{LoadState, RosterState};
