//! 弹窗/对话框状态

use anime_roster_core::CharacterRecord;

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 角色详情
    Detail(CharacterRecord),
    /// 帮助
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态管理
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 显示角色详情弹窗
    pub fn show_detail(&mut self, character: CharacterRecord) {
        self.active = Some(Modal::Detail(character));
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }
}
