//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 支持 en-US 与 pt-BR，运行时可切换（F2）。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod pt_br;

pub use anime_roster_core::Language;
pub use keys::*;

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    translations(current_language())
}

/// 获取指定语言的翻译
pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::EnUs => &en_us::TRANSLATIONS,
        Language::PtBr => &pt_br::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::PtBr => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::PtBr,
        _ => Language::EnUs,
    }
}
