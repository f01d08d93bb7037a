//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **跨组件复用归 `common.*`**
//! 4. **键盘提示归 `hints.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub roster: RosterTexts,
    pub pagination: PaginationTexts,
    pub modal: ModalTexts,
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub none: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub select: &'static str,
    pub page: &'static str,
    pub details: &'static str,
    pub help: &'static str,
    pub language: &'static str,
    pub quit: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 角色列表
// ============================================================================

pub struct RosterTexts {
    pub title: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub load_failed: &'static str,
    /// 状态栏：`"{n} {characters_loaded}"`
    pub characters_loaded: &'static str,
    pub language_changed: &'static str,
}

// ============================================================================
// 分页栏
// ============================================================================

pub struct PaginationTexts {
    pub previous: &'static str,
    pub next: &'static str,
    /// `"{page} {n}/{m}"`
    pub page: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub detail_title: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub role: &'static str,
    pub status: &'static str,
    pub gender: &'static str,
    pub close_hint: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub move_cursor: &'static str,
    pub previous_page: &'static str,
    pub next_page: &'static str,
    pub open_details: &'static str,
    pub close_popup: &'static str,
    pub cycle_language: &'static str,
    pub show_help: &'static str,
    pub quit: &'static str,
}
