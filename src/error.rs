//! Error kinds surfaced to the state layer

use thiserror::Error;

use crate::api::tmdb::TmdbError;

/// Failure of a provider request, classified by what it was for
#[derive(Error, Debug)]
pub enum FetchError {
    /// Genre or movie listing request failed (blocking notice, state untouched)
    #[error("catalog fetch failed: {0}")]
    Catalog(#[source] TmdbError),

    /// Trailer lookup failed (inline notice in the details view)
    #[error("details fetch failed: {0}")]
    Details(#[source] TmdbError),
}

/// Configuration problems that prevent talking to the provider
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no TMDB API key: set TMDB_API_KEY or tmdb_api_key in {0}")]
    MissingApiKey(String),

    #[error("could not read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
