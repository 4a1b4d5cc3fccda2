//! Rotating hero banner

use std::time::Duration;

use crate::models::Movie;

/// Default auto-advance interval
pub const DEFAULT_HERO_INTERVAL: Duration = Duration::from_secs(5);

/// What a hero transition did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroChange {
    /// The banner now shows the movie at this index
    Displayed { index: usize },
    /// Nothing to show or nothing changed
    Unchanged,
}

/// Banner state: the movies being cycled and the one on display.
///
/// The timer and manual selection write the same index, so a manual pick is
/// simply where the next automatic advance starts from.
#[derive(Debug, Clone, Default)]
pub struct HeroRotation {
    movies: Vec<Movie>,
    index: usize,
}

impl HeroRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rotation with fresh results. Empty results keep the old banner.
    pub fn seed(&mut self, movies: Vec<Movie>) -> HeroChange {
        if movies.is_empty() {
            return HeroChange::Unchanged;
        }
        self.movies = movies;
        self.index = 0;
        HeroChange::Displayed { index: 0 }
    }

    /// Timer tick: move to the next movie, wrapping around
    pub fn advance(&mut self) -> HeroChange {
        if self.movies.is_empty() {
            return HeroChange::Unchanged;
        }
        self.index = (self.index + 1) % self.movies.len();
        HeroChange::Displayed { index: self.index }
    }

    /// Jump straight to a position (dot indicator). Out-of-range picks are ignored.
    pub fn select(&mut self, index: usize) -> HeroChange {
        if index >= self.movies.len() {
            return HeroChange::Unchanged;
        }
        self.index = index;
        HeroChange::Displayed { index }
    }

    /// Manual step to the previous movie
    pub fn select_prev(&mut self) -> HeroChange {
        match self.movies.len() {
            0 => HeroChange::Unchanged,
            len => self.select((self.index + len - 1) % len),
        }
    }

    /// Manual step to the next movie
    pub fn select_next(&mut self) -> HeroChange {
        match self.movies.len() {
            0 => HeroChange::Unchanged,
            len => self.select((self.index + 1) % len),
        }
    }

    pub fn current(&self) -> Option<&Movie> {
        self.movies.get(self.index)
    }

    /// Background image of the movie on display
    pub fn background(&self) -> Option<&str> {
        self.current().map(Movie::background)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReleaseYear;

    fn movie(id: u64) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            poster: format!("poster-{}", id),
            backdrop: format!("backdrop-{}", id),
            description: String::new(),
            release_year: ReleaseYear::Unknown,
            rating: 0.0,
            genres: String::new(),
        }
    }

    #[test]
    fn test_advance_on_empty_is_noop() {
        let mut hero = HeroRotation::new();
        assert_eq!(hero.advance(), HeroChange::Unchanged);
        assert!(hero.current().is_none());
    }

    #[test]
    fn test_seed_displays_first() {
        let mut hero = HeroRotation::new();
        assert_eq!(hero.seed(vec![movie(1), movie(2)]), HeroChange::Displayed { index: 0 });
        assert_eq!(hero.current().map(|m| m.id), Some(1));
        assert_eq!(hero.background(), Some("backdrop-1"));
    }

    #[test]
    fn test_seed_with_empty_keeps_banner() {
        let mut hero = HeroRotation::new();
        hero.seed(vec![movie(1), movie(2)]);
        hero.advance();
        assert_eq!(hero.seed(Vec::new()), HeroChange::Unchanged);
        assert_eq!(hero.index(), 1);
    }

    #[test]
    fn test_manual_select_sets_next_tick_start() {
        let mut hero = HeroRotation::new();
        hero.seed((1..=4).map(movie).collect());
        hero.select(2);
        assert_eq!(hero.advance(), HeroChange::Displayed { index: 3 });
        assert_eq!(hero.advance(), HeroChange::Displayed { index: 0 });
        assert_eq!(hero.select(9), HeroChange::Unchanged);
    }

    #[test]
    fn test_select_prev_wraps() {
        let mut hero = HeroRotation::new();
        hero.seed((1..=3).map(movie).collect());
        assert_eq!(hero.select_prev(), HeroChange::Displayed { index: 2 });
    }

    #[test]
    fn test_background_falls_back_to_poster() {
        let mut m = movie(1);
        m.backdrop.clear();
        let mut hero = HeroRotation::new();
        hero.seed(vec![m]);
        assert_eq!(hero.background(), Some("poster-1"));
    }
}
