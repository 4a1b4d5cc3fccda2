//! Genre filter bar

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::Theme;

/// Chips kept visible to the left of the cursor when the bar scrolls
const LEAD: usize = 2;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Genres;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border(focused))
        .title(Span::styled(" GENRES ", Theme::title()));

    if app.genres.is_empty() {
        frame.render_widget(
            Paragraph::new("Loading genres...")
                .style(Theme::loading())
                .block(block),
            area,
        );
        return;
    }

    let active = app.catalog.genre();
    let start = app.genre_cursor.saturating_sub(LEAD);

    let mut spans = Vec::new();
    if start > 0 {
        spans.push(Span::styled("‹ ", Theme::dimmed()));
    }
    for (i, genre) in app.genres.iter().enumerate().skip(start) {
        let is_active = active == Some(&genre.id);
        let under_cursor = focused && i == app.genre_cursor;
        spans.push(Span::styled(
            format!(" {} ", genre.name),
            Theme::chip(is_active, under_cursor),
        ));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
