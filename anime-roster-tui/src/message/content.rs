//! 名单区域消息

/// 名单区域消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 光标 ==========
    /// 光标上移
    SelectPrevious,
    /// 光标下移
    SelectNext,
    /// 跳转到第一行
    SelectFirst,
    /// 跳转到最后一行
    SelectLast,

    // ========== 翻页 ==========
    PreviousPage,
    NextPage,

    /// 确认选择（打开详情）
    Confirm,
}
