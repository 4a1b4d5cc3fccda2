//! Featured movie banner

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::HeroRotation;
use crate::ui::Theme;

/// Position dots, one per movie in the rotation
pub fn dots(hero: &HeroRotation) -> Line<'static> {
    let spans: Vec<Span> = (0..hero.len())
        .map(|i| {
            let current = i == hero.index();
            Span::styled(if current { "● " } else { "○ " }, Theme::dot(current))
        })
        .collect();
    Line::from(spans)
}

pub fn render(frame: &mut Frame, area: Rect, hero: &HeroRotation, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border(focused))
        .title(Span::styled(" FEATURED ", Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(movie) = hero.current() else {
        frame.render_widget(
            Paragraph::new("Loading featured movies...").style(Theme::loading()),
            inner,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let lines = vec![
        Line::from(Span::styled(movie.title.clone(), Theme::hero_title())),
        Line::from(vec![
            Span::styled(movie.release_year.to_string(), Theme::year()),
            Span::styled(" │ ", Theme::dimmed()),
            Span::styled(format!("★ {}", movie.rating_label()), Theme::rating(movie.rating)),
            Span::styled(" │ ", Theme::dimmed()),
            Span::styled(movie.genres.clone(), Theme::genre()),
        ]),
        Line::from(Span::styled(movie.description.clone(), Theme::text())),
        Line::from(Span::styled(
            hero.background().unwrap_or_default().to_string(),
            Theme::dimmed(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);

    let mut footer = dots(hero);
    if focused {
        footer.spans.push(Span::styled("  ←→ ", Theme::keybind()));
        footer.spans.push(Span::styled("browse  ", Theme::dimmed()));
        footer.spans.push(Span::styled("↵ ", Theme::keybind()));
        footer.spans.push(Span::styled("details", Theme::dimmed()));
    }
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movie, ReleaseYear};

    fn movie(id: u64) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            poster: String::new(),
            backdrop: String::new(),
            description: String::new(),
            release_year: ReleaseYear::Unknown,
            rating: 0.0,
            genres: String::new(),
        }
    }

    #[test]
    fn test_dots_mark_current_index() {
        let mut hero = HeroRotation::new();
        hero.seed((1..=3).map(movie).collect());
        hero.select(1);

        let text: String = dots(&hero).spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "○ ● ○ ");
    }
}
