//! Data structures and types for cinescope
//!
//! Contains the shared models used across the application:
//! - **Movies**: normalized catalog records and their image/placeholder rules
//! - **Genres**: canonical genre ids and the provider's id → name map
//! - **Catalog**: filter/page cursors and fetched pages
//! - **Trailers**: video-hosting references for the details view

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Image & Fallback Constants
// =============================================================================

/// Base host for provider image assets
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Size token used for posters
pub const POSTER_SIZE: &str = "w500";

/// Size token used for backdrops
pub const BACKDROP_SIZE: &str = "original";

/// Placeholder used when the provider has no poster
pub const POSTER_PLACEHOLDER: &str =
    "https://via.placeholder.com/300x450/000000/FFFFFF?text=No+Image";

/// Placeholder used when the provider has neither backdrop nor poster
pub const BACKDROP_PLACEHOLDER: &str =
    "https://via.placeholder.com/1280x720/000000/FFFFFF?text=No+Image";

/// Description shown when the provider has no overview
pub const NO_DESCRIPTION: &str = "No description available.";

/// Title shown when the provider has neither title nor name
pub const UNTITLED: &str = "Untitled";

/// Display name for genre ids missing from the genre map
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Build a poster URL, falling back to the placeholder
pub fn poster_url(poster_path: Option<&str>) -> String {
    match non_empty(poster_path) {
        Some(path) => format!("{}/{}{}", IMAGE_BASE_URL, POSTER_SIZE, path),
        None => POSTER_PLACEHOLDER.to_string(),
    }
}

/// Build a backdrop URL: backdrop, else poster, else the wide placeholder
pub fn backdrop_url(backdrop_path: Option<&str>, poster_path: Option<&str>) -> String {
    match (non_empty(backdrop_path), non_empty(poster_path)) {
        (Some(path), _) => format!("{}/{}{}", IMAGE_BASE_URL, BACKDROP_SIZE, path),
        (None, Some(_)) => poster_url(poster_path),
        (None, None) => BACKDROP_PLACEHOLDER.to_string(),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

// =============================================================================
// Genre Models
// =============================================================================

/// Canonical genre identifier.
///
/// The provider sends numeric ids; they are converted to strings at the
/// deserialization boundary so the rest of the app only ever compares strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GenreId(String);

impl GenreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for GenreId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => GenreId(n.to_string()),
            RawId::Text(s) => GenreId(s),
        })
    }
}

impl From<u64> for GenreId {
    fn from(id: u64) -> Self {
        GenreId(id.to_string())
    }
}

impl From<&str> for GenreId {
    fn from(id: &str) -> Self {
        GenreId(id.to_string())
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single provider genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// Provider genre id → display name mapping, in provider order.
///
/// Populated once before the first catalog render, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreMap {
    genres: Vec<Genre>,
}

impl GenreMap {
    /// Build a map, keeping the first entry for duplicated ids
    pub fn new(genres: Vec<Genre>) -> Self {
        let mut unique: Vec<Genre> = Vec::with_capacity(genres.len());
        for genre in genres {
            if !unique.iter().any(|g| g.id == genre.id) {
                unique.push(genre);
            }
        }
        Self { genres: unique }
    }

    /// Look up a genre name
    pub fn name(&self, id: &GenreId) -> Option<&str> {
        self.genres
            .iter()
            .find(|g| &g.id == id)
            .map(|g| g.name.as_str())
    }

    /// Resolve a genre name for display ("Unknown" if missing)
    pub fn resolve(&self, id: &GenreId) -> &str {
        self.name(id).unwrap_or(UNKNOWN_GENRE)
    }

    /// Position of a genre in provider order
    pub fn position(&self, id: &GenreId) -> Option<usize> {
        self.genres.iter().position(|g| &g.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Genre> {
        self.genres.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Genre> {
        self.genres.iter()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}

// =============================================================================
// Movie Models
// =============================================================================

/// Release year of a movie, or `Unknown` when the provider has no date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleaseYear {
    Year(i32),
    #[default]
    Unknown,
}

impl ReleaseYear {
    /// Parse the year out of a provider date such as "2022-03-04"
    pub fn from_date(date: Option<&str>) -> Self {
        date.map(str::trim)
            .and_then(|d| d.get(..4))
            .filter(|y| y.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|y| y.parse::<i32>().ok())
            .map(ReleaseYear::Year)
            .unwrap_or(ReleaseYear::Unknown)
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            ReleaseYear::Year(y) => Some(*y),
            ReleaseYear::Unknown => None,
        }
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseYear::Year(y) => write!(f, "{}", y),
            ReleaseYear::Unknown => f.write_str("Unknown"),
        }
    }
}

// Serialized as an integer year or the literal "Unknown"
impl Serialize for ReleaseYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReleaseYear::Year(y) => serializer.serialize_i32(*y),
            ReleaseYear::Unknown => serializer.serialize_str("Unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for ReleaseYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawYear {
            Number(i32),
            Text(String),
        }

        Ok(match RawYear::deserialize(deserializer)? {
            RawYear::Number(y) => ReleaseYear::Year(y),
            RawYear::Text(s) => ReleaseYear::from_date(Some(&s)),
        })
    }
}

/// Normalized movie record, built fresh from every provider response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster: String,
    pub backdrop: String,
    pub description: String,
    pub release_year: ReleaseYear,
    pub rating: f32,
    pub genres: String,
}

impl Movie {
    /// Hero background: backdrop if present, else poster
    pub fn background(&self) -> &str {
        if self.backdrop.is_empty() {
            &self.poster
        } else {
            &self.backdrop
        }
    }

    /// Rating formatted as "7.8/10"
    pub fn rating_label(&self) -> String {
        format!("{:.1}/10", self.rating)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - ⭐ {:.1}",
            self.title, self.release_year, self.rating
        )
    }
}

// =============================================================================
// Catalog Models
// =============================================================================

/// What the catalog is listing. Genre and free-text search exclude each other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogFilter {
    /// Popularity-sorted listing without a genre
    #[default]
    Popular,
    /// Popularity-sorted listing restricted to one genre
    Genre(GenreId),
    /// Free-text search
    Search(String),
}

impl CatalogFilter {
    /// Sentinel query used when no free-text search is active
    pub const POPULAR: &'static str = "popular";

    /// Filter for a search box value. Blank input and the `"popular"`
    /// sentinel both mean the popular listing.
    pub fn from_query(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == Self::POPULAR {
            CatalogFilter::Popular
        } else {
            CatalogFilter::Search(trimmed.to_string())
        }
    }

    /// Query text, or "popular" when not searching
    pub fn query(&self) -> &str {
        match self {
            CatalogFilter::Search(q) => q,
            _ => Self::POPULAR,
        }
    }

    /// Active genre, only when not searching
    pub fn genre(&self) -> Option<&GenreId> {
        match self {
            CatalogFilter::Genre(id) => Some(id),
            _ => None,
        }
    }
}

/// Filter plus page: everything needed to address one catalog page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCursor {
    pub filter: CatalogFilter,
    pub page: u32,
}

impl CatalogCursor {
    pub fn new(filter: CatalogFilter, page: u32) -> Self {
        Self {
            filter,
            page: page.max(1),
        }
    }

    pub fn popular(page: u32) -> Self {
        Self::new(CatalogFilter::Popular, page)
    }

    pub fn genre(id: GenreId, page: u32) -> Self {
        Self::new(CatalogFilter::Genre(id), page)
    }

    /// Search cursor; the text goes through [`CatalogFilter::from_query`]
    pub fn search(query: &str, page: u32) -> Self {
        Self::new(CatalogFilter::from_query(query), page)
    }
}

impl Default for CatalogCursor {
    fn default() -> Self {
        Self::popular(1)
    }
}

/// One fetched catalog page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub movies: Vec<Movie>,
    /// Raw provider page count (at least 1)
    pub total_pages: u32,
}

/// A "category row" on the home view: top movies of one genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub genre: GenreId,
    pub name: String,
    pub movies: Vec<Movie>,
}

// =============================================================================
// Trailer Models
// =============================================================================

/// Video type accepted as a trailer
pub const TRAILER_TYPE: &str = "Trailer";

/// Hosting site accepted for trailers
pub const TRAILER_SITE: &str = "YouTube";

/// Opaque reference to a hosted trailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    pub key: String,
    pub name: String,
    pub site: String,
}

impl Trailer {
    /// Embeddable player URL
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.key)
    }

    /// Regular watch page URL
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.key)
    }
}

impl fmt::Display for Trailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.embed_url())
    }
}
