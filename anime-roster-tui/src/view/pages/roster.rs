//! 角色名单页面视图

use anime_roster_core::{guess_gender, translate_status, CharacterRecord, Language};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::t;
use crate::model::{App, LoadState};
use crate::view::theme::{colors, Styles};

/// 名称列宽度
const NAME_WIDTH: usize = 32;
/// 角色定位列宽度
const ROLE_WIDTH: usize = 12;
/// 状态列宽度
const STATUS_WIDTH: usize = 14;

/// 渲染名单页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    match &app.roster.load_state {
        LoadState::Loading => {
            render_message(frame, area, texts.roster.loading, Style::default().fg(c.muted));
        }
        LoadState::Failed(message) => {
            let lines = vec![
                Line::from(""),
                Line::styled(
                    format!("  {}", texts.roster.load_failed),
                    Style::default().fg(c.error),
                ),
                Line::styled(format!("  {message}"), Style::default().fg(c.muted)),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
        LoadState::Loaded if app.roster.view.is_empty() => {
            render_message(frame, area, texts.roster.empty, Style::default().fg(c.muted));
        }
        LoadState::Loaded => render_list(app, frame, area),
    }
}

/// 渲染单行提示
fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let content = vec![Line::from(""), Line::styled(format!("  {text}"), style)];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染当前页列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let language = app.language;

    let items: Vec<ListItem> = app
        .roster
        .view
        .current_slice()
        .iter()
        .enumerate()
        .map(|(i, character)| {
            let is_cursor = i == app.roster.cursor;
            let (name_style, dim_style) = if is_cursor {
                (Styles::selected(), Styles::selected())
            } else {
                (Style::default().fg(c.fg), Style::default().fg(c.muted))
            };

            let columns = RowColumns::new(character, language);
            let line = Line::from(vec![
                Span::styled(if is_cursor { " ▸ " } else { "   " }, name_style),
                Span::styled(columns.name, name_style),
                Span::styled(" ", dim_style),
                Span::styled(columns.role, dim_style),
                Span::styled(" ", dim_style),
                Span::styled(columns.status, status_style(character, is_cursor)),
                Span::styled(" ", dim_style),
                Span::styled(columns.gender, dim_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items);

    let mut state = ListState::default();
    state.select(Some(app.roster.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 列表行的各列文本（已按列宽对齐）
struct RowColumns {
    name: String,
    role: String,
    status: String,
    gender: &'static str,
}

impl RowColumns {
    fn new(character: &CharacterRecord, language: Language) -> Self {
        Self {
            name: fit_width(&character.name, NAME_WIDTH),
            role: fit_width(&character.role, ROLE_WIDTH),
            status: fit_width(
                translate_status(character.status.as_deref(), language),
                STATUS_WIDTH,
            ),
            gender: guess_gender(&character.name).label(language),
        }
    }
}

fn status_style(character: &CharacterRecord, is_cursor: bool) -> Style {
    if is_cursor {
        return Styles::selected();
    }
    let c = colors();
    match character.status.as_deref() {
        Some("alive") => Style::default().fg(c.success),
        Some("dead") => Style::default().fg(c.error),
        _ => Style::default().fg(c.muted),
    }
}

/// 按显示宽度截断或补齐到 `width` 列（CJK 等宽字符按 2 列计）
fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        let padding = width - text.width();
        return format!("{text}{}", " ".repeat(padding));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
