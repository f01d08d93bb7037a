//! 应用主状态结构

use anime_roster_core::Language;

use super::{ModalState, RosterState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 角色名单状态
    pub roster: RosterState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前语言
    pub language: Language,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建应用实例（名单处于加载中）
    pub fn new(page_size: usize, language: Language) -> Self {
        Self {
            should_quit: false,
            roster: RosterState::new(page_size),
            modal: ModalState::default(),
            language,
            status_message: None,
        }
    }

    /// 设置状态栏消息
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// 清除状态栏消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
