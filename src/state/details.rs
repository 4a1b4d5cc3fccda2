//! Details panel and its trailer lookup

use crate::error::FetchError;
use crate::models::{Movie, Trailer};
use crate::state::sequence::{Delivery, RequestSeq};

/// Notice shown when the movie has no hosted trailer
pub const NO_TRAILER_NOTICE: &str = "No trailer available for this movie.";

/// Notice shown when the trailer lookup failed
pub const TRAILER_FAILED_NOTICE: &str = "Unable to load trailer. Check your connection or API key.";

/// Trailer section of the details panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailerStatus {
    /// Lookup in flight; nothing is rendered for the section
    Pending,
    Available(Trailer),
    Unavailable,
    /// Lookup failed, with the underlying reason for the log
    Failed(String),
}

impl TrailerStatus {
    /// Inline notice for the section, if any
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            TrailerStatus::Unavailable => Some(NO_TRAILER_NOTICE),
            TrailerStatus::Failed(_) => Some(TRAILER_FAILED_NOTICE),
            TrailerStatus::Pending | TrailerStatus::Available(_) => None,
        }
    }

    pub fn trailer(&self) -> Option<&Trailer> {
        match self {
            TrailerStatus::Available(t) => Some(t),
            _ => None,
        }
    }
}

/// A trailer lookup tagged with its sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailerRequest {
    pub seq: u64,
    pub movie_id: u64,
}

/// Movie shown in the details view plus its trailer section
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsPanel {
    pub movie: Movie,
    pub trailer: TrailerStatus,
}

/// Owns the open details panel. Closing it supersedes any lookup in flight.
#[derive(Debug, Clone, Default)]
pub struct DetailsLoader {
    panel: Option<DetailsPanel>,
    seq: RequestSeq,
}

impl DetailsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a movie and start its trailer lookup
    pub fn open(&mut self, movie: Movie) -> TrailerRequest {
        let request = TrailerRequest {
            seq: self.seq.issue(),
            movie_id: movie.id,
        };
        self.panel = Some(DetailsPanel {
            movie,
            trailer: TrailerStatus::Pending,
        });
        request
    }

    pub fn close(&mut self) {
        self.panel = None;
        self.seq.invalidate();
    }

    /// Settle the trailer section if the result answers the latest lookup
    pub fn resolve(
        &mut self,
        seq: u64,
        result: Result<Option<Trailer>, FetchError>,
    ) -> Delivery {
        if !self.seq.is_current(seq) {
            return Delivery::Stale;
        }
        let Some(panel) = self.panel.as_mut() else {
            return Delivery::Stale;
        };

        panel.trailer = match result {
            Ok(Some(trailer)) => TrailerStatus::Available(trailer),
            Ok(None) => TrailerStatus::Unavailable,
            Err(e) => TrailerStatus::Failed(e.to_string()),
        };
        Delivery::Applied
    }

    pub fn panel(&self) -> Option<&DetailsPanel> {
        self.panel.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TmdbError;
    use crate::models::ReleaseYear;

    fn movie(id: u64) -> Movie {
        Movie {
            id,
            title: "Alien".into(),
            poster: String::new(),
            backdrop: String::new(),
            description: String::new(),
            release_year: ReleaseYear::Year(1979),
            rating: 8.1,
            genres: "Horror".into(),
        }
    }

    fn trailer() -> Trailer {
        Trailer {
            key: "abc123".into(),
            name: "Official Trailer".into(),
            site: "YouTube".into(),
        }
    }

    #[test]
    fn test_open_starts_pending() {
        let mut loader = DetailsLoader::new();
        let request = loader.open(movie(348));
        assert_eq!(request.movie_id, 348);
        let panel = loader.panel().unwrap();
        assert_eq!(panel.trailer, TrailerStatus::Pending);
        assert_eq!(panel.trailer.notice(), None);
    }

    #[test]
    fn test_resolve_outcomes() {
        let mut loader = DetailsLoader::new();

        let seq = loader.open(movie(1)).seq;
        loader.resolve(seq, Ok(Some(trailer())));
        assert_eq!(loader.panel().unwrap().trailer.trailer(), Some(&trailer()));

        let seq = loader.open(movie(2)).seq;
        loader.resolve(seq, Ok(None));
        assert_eq!(loader.panel().unwrap().trailer.notice(), Some(NO_TRAILER_NOTICE));

        let seq = loader.open(movie(3)).seq;
        loader.resolve(seq, Err(FetchError::Details(TmdbError::Unauthorized)));
        assert_eq!(
            loader.panel().unwrap().trailer.notice(),
            Some(TRAILER_FAILED_NOTICE)
        );
    }

    #[test]
    fn test_late_trailer_for_previous_movie_is_dropped() {
        let mut loader = DetailsLoader::new();
        let first = loader.open(movie(1)).seq;
        loader.close();
        let second = loader.open(movie(2)).seq;

        assert_eq!(loader.resolve(first, Ok(Some(trailer()))), Delivery::Stale);
        assert_eq!(loader.panel().unwrap().trailer, TrailerStatus::Pending);
        assert_eq!(loader.resolve(second, Ok(None)), Delivery::Applied);
    }

    #[test]
    fn test_resolve_after_close_is_stale() {
        let mut loader = DetailsLoader::new();
        let seq = loader.open(movie(1)).seq;
        loader.close();
        assert_eq!(loader.resolve(seq, Ok(None)), Delivery::Stale);
        assert!(!loader.is_open());
    }
}
