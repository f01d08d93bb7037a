//! 分页栏组件
//!
//! `◀ Previous  Page n/m  Next ▶`，不可用的一侧置灰。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染分页栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let view = &app.roster.view;

    let enabled = Style::default().fg(c.highlight).add_modifier(Modifier::BOLD);
    let prev_style = if view.has_previous_page() {
        enabled
    } else {
        Styles::disabled()
    };
    let next_style = if view.has_next_page() {
        enabled
    } else {
        Styles::disabled()
    };

    let (current, total) = page_numbers(view.page_index(), view.page_count());

    let line = Line::from(vec![
        Span::styled(format!("◀ {}", texts.pagination.previous), prev_style),
        Span::raw("  "),
        Span::styled(
            format!("{} {current}/{total}", texts.pagination.page),
            Style::default().fg(c.fg),
        ),
        Span::raw("  "),
        Span::styled(format!("{} ▶", texts.pagination.next), next_style),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// 一基页码；空列表显示 1/1
fn page_numbers(page_index: usize, page_count: usize) -> (usize, usize) {
    (page_index + 1, page_count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers_are_one_based() {
        assert_eq!(page_numbers(0, 3), (1, 3));
        assert_eq!(page_numbers(2, 3), (3, 3));
        assert_eq!(page_numbers(0, 0), (1, 1));
    }
}
