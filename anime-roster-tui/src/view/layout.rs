//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 名单 + 分页栏 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(3),    // 名单
            Constraint::Length(1), // 分页栏
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_roster_block(app, frame, main_layout[1]);
    components::pagination::render(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = format!(" {} · {}", t().common.app_name, app.language.code());
    let paragraph =
        Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}

/// 名单区域边框 + 内容
fn render_roster_block(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();

    let title = if app.roster.view.is_empty() {
        format!(" {} ", texts.roster.title)
    } else {
        format!(" {} ({}) ", texts.roster.title, app.roster.view.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::roster::render(app, frame, inner_area);
}
