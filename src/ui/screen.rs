//! Top-level screen layout: header, content, status bar, error popup

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus, InputMode};
use crate::state::View;
use crate::ui::{browser, detail, genres, hero, rows, Theme};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Theme::text()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    match app.view() {
        View::Browse => render_browse(frame, chunks[1], app),
        View::Details => detail::render(frame, chunks[1], app.details.panel()),
    }
    render_status_bar(frame, chunks[2], app);

    if let Some(ref error) = app.error {
        render_error_popup(frame, area, error);
    }
}

/// Logo and search box
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(1)])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("CINE", Theme::hero_title()),
        Span::styled("SCOPE", Theme::title()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border(false)),
    );
    frame.render_widget(logo, header_chunks[0]);

    let editing = app.input_mode == InputMode::Editing;
    let text = app.search.text();
    let search_text = if editing {
        let split = text
            .char_indices()
            .nth(app.search.cursor())
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        let (before, after) = text.split_at(split);
        format!("⌕ {}│{}", before, after)
    } else if text.is_empty() {
        "⌕ Press / to search movies...".to_string()
    } else {
        format!("⌕ {}", text)
    };

    let search_box = Paragraph::new(search_text)
        .style(Theme::input(editing))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border(editing))
                .title(Span::styled(" SEARCH ", Theme::title())),
        );
    frame.render_widget(search_box, header_chunks[1]);
}

/// Hero, genre bar, catalog grid and category rows
fn render_browse(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),      // Hero
            Constraint::Length(3),      // Genre bar
            Constraint::Percentage(60), // Grid
            Constraint::Percentage(40), // Rows
        ])
        .split(area);

    hero::render(frame, chunks[0], &app.hero, app.focus == Focus::Hero);
    genres::render(frame, chunks[1], app);
    browser::render(frame, chunks[2], app);
    rows::render(frame, chunks[3], &app.rows, app.focus == Focus::Rows);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::DIM),
        ),
        InputMode::Editing => Span::styled(
            " SEARCH ",
            Style::default()
                .fg(Theme::TEXT)
                .bg(Theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let location = match app.view() {
        View::Browse => app.focus.label(),
        View::Details => "Details",
    };

    let loading = if app.catalog.is_loading() || app.rows.is_loading() {
        Span::styled(" ⟳ loading ", Theme::loading())
    } else {
        Span::raw("")
    };

    let help = match app.view() {
        View::Browse => " q:quit  /:search  tab:focus  [ ]:page  r:reload ",
        View::Details => " q:quit  esc:back ",
    };

    let status_line = Line::from(vec![
        mode_indicator,
        Span::styled(format!(" {} ", location.to_uppercase()), Theme::dimmed()),
        loading,
        Span::raw(" │ "),
        Span::styled(help, Theme::dimmed()),
    ]);

    frame.render_widget(Paragraph::new(status_line).style(Theme::status_bar()), area);
}

/// Blocking error notice; any key dismisses it
fn render_error_popup(frame: &mut Frame, area: Rect, error: &str) {
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = 6.min(area.height);

    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(vec![
        Line::from(Span::styled(error, Theme::error())),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss", Theme::dimmed())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Theme::error())
            .title(Span::styled(" ERROR ", Theme::error()))
            .style(Style::default().bg(Theme::BACKGROUND)),
    );

    frame.render_widget(popup, popup_area);
}
