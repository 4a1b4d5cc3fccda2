//! API clients for external services
//!
//! - TMDB: genre list, discover/search listings, trailer lookup

pub mod tmdb;

pub use tmdb::{TmdbClient, TmdbError};
