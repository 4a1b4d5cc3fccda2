//! Terminal UI components
//!
//! Built with ratatui. Rendering only reads [`App`](crate::app::App);
//! every state change goes through the app's key and message handlers.

pub mod browser;
pub mod detail;
pub mod genres;
pub mod hero;
pub mod rows;
pub mod screen;
pub mod theme;

pub use screen::render;
pub use theme::Theme;

/// First visible index that keeps `selected` inside a window of `visible` items
pub(crate) fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 || selected < visible {
        0
    } else {
        selected + 1 - visible
    }
}
