//! 名单区域更新逻辑

use crate::message::ContentMessage;
use crate::model::App;

/// 处理名单区域消息
pub fn update(app: &mut App, msg: ContentMessage) {
    // 加载中不响应
    if app.roster.is_loading() {
        return;
    }

    match msg {
        ContentMessage::SelectPrevious => app.roster.cursor_up(),
        ContentMessage::SelectNext => app.roster.cursor_down(),
        ContentMessage::SelectFirst => app.roster.cursor_first(),
        ContentMessage::SelectLast => app.roster.cursor_last(),

        ContentMessage::PreviousPage => {
            if app.roster.previous_page() {
                app.clear_status();
            }
        }
        ContentMessage::NextPage => {
            if app.roster.next_page() {
                app.clear_status();
            }
        }

        ContentMessage::Confirm => handle_confirm(app),
    }
}

/// Enter：打开光标所在角色的详情
fn handle_confirm(app: &mut App) {
    if let Some(character) = app.roster.select_under_cursor().cloned() {
        log::debug!("Selected character {} ({})", character.mal_id, character.name);
        app.modal.show_detail(character);
    }
}
