//! cinescope - movie browser for the terminal
//!
//! Browse TMDB from a keyboard-driven TUI: a rotating featured banner, a
//! genre filter bar, paginated discover/search results, per-genre category
//! rows and a details view with trailer lookup. Every browse action is also
//! available as a scriptable CLI command.
//!
//! # Modules
//!
//! - `models` - Movie, genre, catalog and trailer types
//! - `api` - TMDB client
//! - `state` - Pure controllers (catalog/pagination, hero, view, details, rows)
//! - `app` - Application state, key handling, effects and messages
//! - `runtime` - Runs effects on tokio tasks
//! - `ui` - TUI components

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod runtime;
pub mod state;
pub mod ui;

// Re-export commonly used types
pub use models::{
    CatalogCursor, CatalogFilter, CatalogPage, CategoryRow, Genre, GenreId, GenreMap, Movie,
    ReleaseYear, Trailer,
};

pub use api::{TmdbClient, TmdbError};
pub use app::{App, Effect, Message};
pub use config::Config;
pub use error::{ConfigError, FetchError};
pub use runtime::Dispatcher;
