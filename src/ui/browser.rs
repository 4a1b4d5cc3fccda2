//! Catalog grid
//!
//! Current catalog page as a selectable list, with the active filter and
//! "Page X of Y" in the border title.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::{CatalogFilter, Movie};
use crate::ui::{scroll_offset, Theme};

/// Border title for the catalog on screen
pub fn title(app: &App) -> String {
    let label = match &app.catalog.committed().filter {
        CatalogFilter::Popular => "Popular".to_string(),
        CatalogFilter::Genre(id) => app.genres.resolve(id).to_string(),
        CatalogFilter::Search(query) => format!("Results for \"{}\"", query),
    };
    format!(
        " {} · Page {} of {} ",
        label,
        app.catalog.page(),
        app.catalog.max_page()
    )
}

fn item(movie: &Movie, selected: bool) -> ListItem<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let title_style = if selected {
        Theme::highlighted()
    } else {
        Theme::text()
    };

    ListItem::new(Line::from(vec![
        Span::styled(marker, Theme::accent()),
        Span::styled(movie.title.clone(), title_style),
        Span::styled(format!(" ({})", movie.release_year), Theme::year()),
        Span::raw("  "),
        Span::styled(format!("★ {:.1}", movie.rating), Theme::rating(movie.rating)),
        Span::raw("  "),
        Span::styled(movie.genres.clone(), Theme::genre()),
    ]))
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Grid;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border(focused))
        .title(Span::styled(title(app), Theme::title()));

    let movies = app.catalog.movies();
    if movies.is_empty() {
        let text = if app.catalog.is_loading() {
            "Loading movies..."
        } else {
            "No movies found"
        };
        frame.render_widget(
            Paragraph::new(text)
                .style(Theme::dimmed())
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let visible = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(app.grid.selected, visible);
    let items: Vec<ListItem> = movies
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, movie)| item(movie, focused && i == app.grid.selected))
        .collect();

    frame.render_widget(List::new(items).block(block).style(Theme::text()), area);
}
