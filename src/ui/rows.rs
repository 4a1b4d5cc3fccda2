//! Category rows: one strip of titles per leading genre

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::state::CategoryRows;
use crate::ui::{scroll_offset, Theme};

pub fn render(frame: &mut Frame, area: Rect, rows: &CategoryRows, focused: bool) {
    let title = if focused {
        " CATEGORIES · a: see all "
    } else {
        " CATEGORIES "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border(focused))
        .title(Span::styled(title, Theme::title()));

    if rows.is_empty() {
        let text = if rows.is_loading() {
            "Loading categories..."
        } else {
            "No categories"
        };
        frame.render_widget(Paragraph::new(text).style(Theme::dimmed()).block(block), area);
        return;
    }

    let (selected_row, selected_item) = rows.selection();
    // Each row takes a heading line and a strip line
    let visible_rows = (area.height.saturating_sub(2) / 2) as usize;
    let offset = scroll_offset(selected_row, visible_rows);

    let mut lines = Vec::new();
    for (r, row) in rows.rows().iter().enumerate().skip(offset).take(visible_rows) {
        let row_selected = focused && r == selected_row;
        let heading_style = if row_selected {
            Theme::accent()
        } else {
            Theme::title()
        };
        lines.push(Line::from(Span::styled(row.name.clone(), heading_style)));

        let item_offset = if row_selected { selected_item } else { 0 };
        let mut strip = Vec::new();
        if item_offset > 0 {
            strip.push(Span::styled("‹ ", Theme::dimmed()));
        }
        for (i, movie) in row.movies.iter().enumerate().skip(item_offset) {
            let style = if row_selected && i == selected_item {
                Theme::highlighted()
            } else {
                Theme::text()
            };
            strip.push(Span::styled(format!(" {} ", movie.title), style));
            strip.push(Span::styled("│", Theme::dimmed()));
        }
        lines.push(Line::from(strip));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
