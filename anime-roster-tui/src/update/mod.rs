//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 名单区域子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!     使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!     子消息委托给子模块处理（content、modal）。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;

use anime_roster_core::CharacterRecord;

use crate::i18n::{self, t};
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::CharactersLoaded(result) => {
            handle_characters_loaded(app, result);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::CycleLanguage => {
            app.language = app.language.next();
            i18n::set_language(app.language);
            app.set_status(format!(
                "{}: {}",
                t().roster.language_changed,
                app.language.display_name()
            ));
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

fn handle_characters_loaded(app: &mut App, result: Result<Vec<CharacterRecord>, String>) {
    let texts = t();
    match result {
        Ok(characters) => {
            let count = characters.len();
            app.roster.load(characters);
            app.set_status(format!("{count} {}", texts.roster.characters_loaded));
        }
        Err(message) => {
            app.roster.fail(message.clone());
            app.modal.show_error(texts.roster.load_failed, message);
            app.clear_status();
        }
    }
}
