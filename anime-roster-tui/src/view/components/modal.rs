//! 弹窗组件

use anime_roster_core::{guess_gender, translate_status, CharacterRecord, Language};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Detail(character) => render_detail(frame, character, app.language),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框
fn popup_block(title: &str, border: ratatui::style::Color) -> Block<'static> {
    let c = colors();
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(c.bg))
}

/// 渲染角色详情弹窗
fn render_detail(frame: &mut Frame, character: &CharacterRecord, language: Language) {
    let c = colors();
    let texts = t();

    let area = centered_rect(64, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = popup_block(texts.modal.detail_title, c.highlight);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = |text: &'static str| Span::styled(format!("{text:<8} "), Style::default().fg(c.muted));
    let value_style = Style::default().fg(c.fg);

    let image = character.image_url.as_deref().unwrap_or(texts.common.none);
    let status = translate_status(character.status.as_deref(), language);
    let gender = guess_gender(&character.name).label(language);

    let lines = vec![
        Line::from(vec![
            label(texts.modal.name),
            Span::styled(
                character.name.clone(),
                value_style.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label(texts.modal.image),
            Span::styled(image.to_string(), value_style),
        ]),
        Line::from(vec![
            label(texts.modal.role),
            Span::styled(character.role.clone(), value_style),
        ]),
        Line::from(vec![
            label(texts.modal.status),
            Span::styled(status, value_style),
        ]),
        Line::from(vec![
            label(texts.modal.gender),
            Span::styled(gender, value_style),
        ]),
        Line::from(""),
        Line::styled(texts.modal.close_hint, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = popup_block(title, c.error);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(t().modal.close_hint, Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let help = &t().help;

    let area = centered_rect(48, 14, frame.area());
    frame.render_widget(Clear, area);

    let block = popup_block(help.title, c.highlight);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = [
        ("↑↓ / jk", help.move_cursor),
        ("←  / h / PgUp", help.previous_page),
        ("→  / l / PgDn", help.next_page),
        ("Enter", help.open_details),
        ("Esc", help.close_popup),
        ("F2", help.cycle_language),
        ("?", help.show_help),
        ("q / Ctrl+C", help.quit),
    ];

    let mut lines = vec![Line::from("")];
    lines.extend(rows.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<15}"), Style::default().fg(c.warning)),
            Span::styled(*desc, Style::default().fg(c.fg)),
        ])
    }));

    frame.render_widget(Paragraph::new(lines), inner);
}
