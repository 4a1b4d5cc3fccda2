//! Movie details view
//!
//! Known fields render immediately; the trailer section appears once the
//! lookup settles.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{DetailsPanel, TrailerStatus};
use crate::ui::Theme;

/// Trailer section lines; empty while the lookup is pending
pub fn trailer_lines(status: &TrailerStatus) -> Vec<Line<'static>> {
    match status {
        TrailerStatus::Pending => Vec::new(),
        TrailerStatus::Available(trailer) => vec![
            Line::from(Span::styled("TRAILER", Theme::accent())),
            Line::from(Span::styled(trailer.name.clone(), Theme::text())),
            Line::from(vec![
                Span::styled("Embed: ", Theme::dimmed()),
                Span::styled(trailer.embed_url(), Theme::text()),
            ]),
            Line::from(vec![
                Span::styled("Watch: ", Theme::dimmed()),
                Span::styled(trailer.watch_url(), Theme::text()),
            ]),
        ],
        TrailerStatus::Unavailable => vec![
            Line::from(Span::styled("TRAILER", Theme::accent())),
            Line::from(Span::styled(
                status.notice().unwrap_or_default(),
                Theme::dimmed(),
            )),
        ],
        TrailerStatus::Failed(_) => vec![
            Line::from(Span::styled("TRAILER", Theme::accent())),
            Line::from(Span::styled(
                status.notice().unwrap_or_default(),
                Theme::error(),
            )),
        ],
    }
}

pub fn render(frame: &mut Frame, area: Rect, panel: Option<&DetailsPanel>) {
    let Some(panel) = panel else {
        let empty = Paragraph::new("No movie selected")
            .style(Theme::dimmed())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Theme::border(false)),
            );
        frame.render_widget(empty, area);
        return;
    };

    let movie = &panel.movie;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border(true))
        .title(Span::styled(format!(" {} ", movie.title), Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("▶ ", Theme::accent()),
            Span::styled(movie.title.clone(), Theme::hero_title()),
        ]),
        Line::from(vec![
            Span::styled(movie.release_year.to_string(), Theme::year()),
            Span::styled(" │ ", Theme::dimmed()),
            Span::styled(format!("★ {}", movie.rating_label()), Theme::rating(movie.rating)),
        ]),
        Line::from(vec![
            Span::styled("Genre: ", Theme::dimmed()),
            Span::styled(movie.genres.clone(), Theme::text()),
        ]),
        Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            Theme::dimmed(),
        )),
        Line::from(Span::styled("OVERVIEW", Theme::accent())),
        Line::from(Span::styled(movie.description.clone(), Theme::text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Poster:   ", Theme::dimmed()),
            Span::styled(movie.poster.clone(), Theme::dimmed()),
        ]),
        Line::from(vec![
            Span::styled("Backdrop: ", Theme::dimmed()),
            Span::styled(movie.backdrop.clone(), Theme::dimmed()),
        ]),
    ];

    let trailer = trailer_lines(&panel.trailer);
    if !trailer.is_empty() {
        lines.push(Line::from(""));
        lines.extend(trailer);
    }

    frame.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let footer = Line::from(vec![
        Span::styled(" ESC ", Theme::keybind()),
        Span::styled("Back to browse", Theme::dimmed()),
    ]);
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Trailer;
    use crate::state::details::{NO_TRAILER_NOTICE, TRAILER_FAILED_NOTICE};

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_pending_renders_nothing() {
        assert!(trailer_lines(&TrailerStatus::Pending).is_empty());
    }

    #[test]
    fn test_available_shows_embed_url() {
        let status = TrailerStatus::Available(Trailer {
            key: "dQw4w9WgXcQ".into(),
            name: "Official Trailer".into(),
            site: "YouTube".into(),
        });
        assert!(text(&trailer_lines(&status)).contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_notices() {
        assert!(text(&trailer_lines(&TrailerStatus::Unavailable)).contains(NO_TRAILER_NOTICE));
        let failed = TrailerStatus::Failed("401".into());
        assert!(text(&trailer_lines(&failed)).contains(TRAILER_FAILED_NOTICE));
    }
}
