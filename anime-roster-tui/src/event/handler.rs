//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize 由下一帧重绘处理
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 在任何状态下都退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 部分终端上 '?' 带 SHIFT 修饰
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::CYCLE_LANGUAGE.matches(&key) {
        return AppMessage::CycleLanguage;
    }

    handle_roster_keys(key)
}

/// 处理名单区域的按键
fn handle_roster_keys(key: KeyEvent) -> AppMessage {
    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
        KeyCode::Home => ContentMessage::SelectFirst,
        KeyCode::End => ContentMessage::SelectLast,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => ContentMessage::PreviousPage,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => ContentMessage::NextPage,
        KeyCode::Enter => ContentMessage::Confirm,
        _ => return AppMessage::Noop,
    };

    AppMessage::Content(msg)
}

/// 处理弹窗中的按键：所有弹窗都只响应关闭
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLOSE.matches(&key) || DefaultKeymap::CONFIRM.matches(&key) {
        AppMessage::Modal(ModalMessage::Close)
    } else {
        AppMessage::Noop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anime_roster_core::Language;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(10, Language::EnUs)
    }

    #[test]
    fn arrow_and_vim_keys_map_to_roster_messages() {
        let app = app();
        let cases = [
            (KeyCode::Up, ContentMessage::SelectPrevious),
            (KeyCode::Char('k'), ContentMessage::SelectPrevious),
            (KeyCode::Down, ContentMessage::SelectNext),
            (KeyCode::Char('j'), ContentMessage::SelectNext),
            (KeyCode::Left, ContentMessage::PreviousPage),
            (KeyCode::Char('h'), ContentMessage::PreviousPage),
            (KeyCode::PageUp, ContentMessage::PreviousPage),
            (KeyCode::Right, ContentMessage::NextPage),
            (KeyCode::Char('l'), ContentMessage::NextPage),
            (KeyCode::PageDown, ContentMessage::NextPage),
            (KeyCode::Enter, ContentMessage::Confirm),
        ];
        for (code, expected) in cases {
            match handle_event(press(code), &app) {
                AppMessage::Content(msg) => assert_eq!(msg, expected, "{code:?}"),
                other => panic!("{code:?} mapped to {other:?}"),
            }
        }
    }

    #[test]
    fn global_keys() {
        let app = app();
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit));
        assert!(matches!(handle_event(press(KeyCode::Char('?')), &app), AppMessage::ShowHelp));
        assert!(matches!(handle_event(press(KeyCode::F(2)), &app), AppMessage::CycleLanguage));

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(ctrl_c, &app), AppMessage::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }

    #[test]
    fn modal_swallows_roster_keys() {
        let mut app = app();
        app.modal.show_help();

        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(handle_event(press(KeyCode::Right), &app), AppMessage::Noop));
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Noop));
    }

    #[test]
    fn resize_is_noop() {
        assert!(matches!(handle_event(Event::Resize(80, 24), &app()), AppMessage::Noop));
    }
}
