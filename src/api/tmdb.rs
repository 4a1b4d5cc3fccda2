//! TMDB (The Movie Database) API client
//!
//! Provides the genre list, popularity/genre discovery, free-text search and
//! trailer lookup, and normalizes raw records into [`Movie`]s.
//! API docs: https://developer.themoviedb.org/docs

use futures::future::join_all;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{
    backdrop_url, poster_url, CatalogCursor, CatalogFilter, CatalogPage, CategoryRow, Genre,
    GenreId, GenreMap, Movie, ReleaseYear, Trailer, NO_DESCRIPTION, TRAILER_SITE, TRAILER_TYPE,
    UNKNOWN_GENRE, UNTITLED,
};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default response language
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Number of genres that get a category row on the home view
pub const CATEGORY_ROW_COUNT: usize = 6;

/// Movies shown per category row
pub const CATEGORY_ROW_ITEMS: usize = 12;

/// TMDB API error types
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("Invalid or missing API key (401)")]
    Unauthorized,

    #[error("Resource not found (404)")]
    NotFound,

    #[error("Rate limited (429)")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// TMDB API client
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    language: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Override the response language (e.g. "de-DE")
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Full request URL with credential and language appended
    fn url(&self, endpoint: &str) -> String {
        let sep = if endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}api_key={}&language={}",
            self.base_url,
            endpoint,
            sep,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.language)
        )
    }

    /// Make an authenticated GET request and decode the JSON body
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T, TmdbError> {
        debug!(endpoint, "tmdb request");

        let response = self
            .client
            .get(self.url(endpoint))
            .header("Accept", "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                serde_json::from_str(&body)
                    .map_err(|e| TmdbError::InvalidResponse(format!("JSON parse error: {}", e)))
            }
            StatusCode::UNAUTHORIZED => Err(TmdbError::Unauthorized),
            StatusCode::NOT_FOUND => Err(TmdbError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => Err(TmdbError::RateLimited),
            status => Err(TmdbError::ServerError(status.as_u16())),
        }
    }

    /// Fetch the movie genre list
    pub async fn fetch_genres(&self) -> Result<GenreMap, TmdbError> {
        let response: GenresResponse = self.get("/genre/movie/list").await?;
        debug!(count = response.genres.len(), "genres loaded");
        Ok(GenreMap::new(response.genres))
    }

    /// Fetch one catalog page. Genre names resolve through `genres`.
    pub async fn fetch_catalog(
        &self,
        cursor: &CatalogCursor,
        genres: &GenreMap,
    ) -> Result<CatalogPage, TmdbError> {
        let response: ListResponse = self.get(&catalog_endpoint(cursor)).await?;
        Ok(response.into_page(genres))
    }

    /// Find the first hosted trailer for a movie
    pub async fn fetch_trailer(&self, movie_id: u64) -> Result<Option<Trailer>, TmdbError> {
        let endpoint = format!("/movie/{}/videos", movie_id);
        let response: VideosResponse = self.get(&endpoint).await?;
        Ok(response.into_trailer())
    }

    /// Top movies of one genre for a category row
    pub async fn fetch_category_row(
        &self,
        genre: &Genre,
        genres: &GenreMap,
    ) -> Result<CategoryRow, TmdbError> {
        let cursor = CatalogCursor::genre(genre.id.clone(), 1);
        let mut page = self.fetch_catalog(&cursor, genres).await?;
        page.movies.truncate(CATEGORY_ROW_ITEMS);
        Ok(CategoryRow {
            genre: genre.id.clone(),
            name: genre.name.clone(),
            movies: page.movies,
        })
    }

    /// Category rows for the leading genres. Rows that fail are skipped.
    pub async fn fetch_category_rows(&self, genres: &GenreMap) -> Vec<CategoryRow> {
        let requests = genres
            .iter()
            .take(CATEGORY_ROW_COUNT)
            .map(|genre| self.fetch_category_row(genre, genres));

        join_all(requests)
            .await
            .into_iter()
            .filter_map(|row| match row {
                Ok(row) => Some(row),
                Err(e) => {
                    warn!(error = %e, "category row failed");
                    None
                }
            })
            .collect()
    }
}

/// Endpoint (path + query, no credential) addressing a catalog page.
///
/// Search ignores the genre; otherwise a popularity-sorted discover listing is
/// requested, with `with_genres` only when a genre is selected.
pub fn catalog_endpoint(cursor: &CatalogCursor) -> String {
    match &cursor.filter {
        CatalogFilter::Search(query) => format!(
            "/search/movie?query={}&page={}&include_adult=false",
            urlencoding::encode(query),
            cursor.page
        ),
        CatalogFilter::Popular => format!(
            "/discover/movie?sort_by=popularity.desc&page={}",
            cursor.page
        ),
        CatalogFilter::Genre(id) => format!(
            "/discover/movie?sort_by=popularity.desc&page={}&with_genres={}",
            cursor.page,
            urlencoding::encode(id.as_str())
        ),
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct GenresResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    results: Vec<MovieRaw>,
    total_pages: Option<u32>,
}

impl ListResponse {
    fn into_page(self, genres: &GenreMap) -> CatalogPage {
        CatalogPage {
            movies: self
                .results
                .into_iter()
                .map(|m| m.into_movie(genres))
                .collect(),
            total_pages: self.total_pages.unwrap_or(1).max(1),
        }
    }
}

/// Genre reference on a record: a bare id or an `{id, name}` object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenreRef {
    Object { id: GenreId, name: Option<String> },
    Id(GenreId),
}

impl GenreRef {
    fn display_name<'a>(&'a self, genres: &'a GenreMap) -> &'a str {
        match self {
            GenreRef::Id(id) => genres.resolve(id),
            GenreRef::Object { id, name } => genres
                .name(id)
                .or(name.as_deref())
                .unwrap_or(UNKNOWN_GENRE),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MovieRaw {
    id: u64,
    // Movies use "title", TV uses "name"
    title: Option<String>,
    name: Option<String>,
    // Movies use "release_date", TV uses "first_air_date"
    release_date: Option<String>,
    first_air_date: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    vote_average: Option<f32>,
    genre_ids: Option<Vec<GenreRef>>,
    genres: Option<Vec<GenreRef>>,
}

impl MovieRaw {
    fn into_movie(self, genres: &GenreMap) -> Movie {
        let title = first_present([self.title, self.name]).unwrap_or_else(|| UNTITLED.to_string());
        let date = first_present([self.release_date, self.first_air_date]);
        let genre_names = self
            .genre_ids
            .or(self.genres)
            .unwrap_or_default()
            .iter()
            .map(|g| g.display_name(genres))
            .collect::<Vec<_>>()
            .join(", ");

        Movie {
            id: self.id,
            title,
            poster: poster_url(self.poster_path.as_deref()),
            backdrop: backdrop_url(self.backdrop_path.as_deref(), self.poster_path.as_deref()),
            description: first_present([self.overview])
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            release_year: ReleaseYear::from_date(date.as_deref()),
            rating: self.vote_average.unwrap_or(0.0),
            genres: genre_names,
        }
    }
}

/// First value that is present and not blank
fn first_present<const N: usize>(values: [Option<String>; N]) -> Option<String> {
    values
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    results: Vec<VideoRaw>,
}

impl VideosResponse {
    fn into_trailer(self) -> Option<Trailer> {
        self.results
            .into_iter()
            .find(|v| v.kind == TRAILER_TYPE && v.site == TRAILER_SITE && !v.key.is_empty())
            .map(|v| Trailer {
                key: v.key,
                name: v.name,
                site: v.site,
            })
    }
}

#[derive(Debug, Deserialize)]
struct VideoRaw {
    #[serde(default)]
    key: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    site: String,
    #[serde(rename = "type", default)]
    kind: String,
}
