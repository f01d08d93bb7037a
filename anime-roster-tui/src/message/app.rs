//! 应用主消息枚举

use anime_roster_core::CharacterRecord;

use super::{ContentMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 名单区域相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台加载完成（错误已格式化为可显示的文本）
    CharactersLoaded(Result<Vec<CharacterRecord>, String>),

    /// 显示帮助
    ShowHelp,

    /// 切换到下一个语言
    CycleLanguage,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
