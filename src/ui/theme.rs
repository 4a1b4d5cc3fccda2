//! Marquee theme for cinescope
//!
//! Dark cinema palette: charcoal background, marquee red for focus and
//! titles, gold for ratings.

use ratatui::style::{Color, Modifier, Style};

/// Cinema color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #141414 (charcoal)
    pub const BACKGROUND: Color = Color::Rgb(0x14, 0x14, 0x14);

    /// Surface for panels and the status bar: #1f1f1f
    pub const SURFACE: Color = Color::Rgb(0x1f, 0x1f, 0x1f);

    /// Primary: #e50914 (marquee red)
    pub const PRIMARY: Color = Color::Rgb(0xe5, 0x09, 0x14);

    /// Gold: #f5c518 (ratings, keybinds)
    pub const GOLD: Color = Color::Rgb(0xf5, 0xc5, 0x18);

    /// Text: #e5e5e5
    pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);

    /// Dim: #808080
    pub const DIM: Color = Color::Rgb(0x80, 0x80, 0x80);

    /// Match green: #46d369
    pub const SUCCESS: Color = Color::Rgb(0x46, 0xd3, 0x69);

    /// Warning: #e87c03
    pub const WARNING: Color = Color::Rgb(0xe8, 0x7c, 0x03);

    /// Error: #ff4d4d
    pub const ERROR: Color = Color::Rgb(0xff, 0x4d, 0x4d);

    /// Border: #404040
    pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);

    /// Border when focused
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    /// Selected row / chip (inverted on red)
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .add_modifier(Modifier::BOLD)
    }

    /// Large banner title
    pub fn hero_title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(Self::GOLD)
            .add_modifier(Modifier::BOLD)
    }

    /// Border for a section, red when it has keyboard focus
    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Self::BORDER_FOCUSED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::BORDER)
        }
    }

    pub fn input(editing: bool) -> Style {
        let style = Style::default().fg(Self::TEXT).bg(Self::SURFACE);
        if editing {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn keybind() -> Style {
        Style::default().fg(Self::GOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::DIM)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn year() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn genre() -> Style {
        Style::default().fg(Self::DIM).add_modifier(Modifier::ITALIC)
    }

    /// Rating coloured by score
    pub fn rating(rating: f32) -> Style {
        let color = if rating >= 7.5 {
            Self::SUCCESS
        } else if rating >= 6.0 {
            Self::GOLD
        } else if rating >= 4.0 {
            Self::WARNING
        } else {
            Self::DIM
        };
        Style::default().fg(color)
    }

    /// Genre chip in the filter bar
    pub fn chip(active: bool, under_cursor: bool) -> Style {
        let style = if active {
            Self::highlighted()
        } else {
            Style::default().fg(Self::TEXT).bg(Self::SURFACE)
        };
        if under_cursor {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    /// Hero position dot
    pub fn dot(current: bool) -> Style {
        if current {
            Style::default().fg(Self::PRIMARY)
        } else {
            Style::default().fg(Self::BORDER)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Relative luminance per WCAG 2.0
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two colors, from 1 (same) to 21 (black on white)
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG AA for normal text (4.5:1)
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// WCAG AA for large text (3:1)
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}

pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}
