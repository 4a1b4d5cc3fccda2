//! Category rows shown under the catalog grid

use crate::models::{CategoryRow, Movie};
use crate::state::sequence::{Delivery, RequestSeq};

/// Per-genre rows plus a two-axis selection (row, item within row)
#[derive(Debug, Clone, Default)]
pub struct CategoryRows {
    rows: Vec<CategoryRow>,
    seq: RequestSeq,
    loading: bool,
    row: usize,
    item: usize,
}

impl CategoryRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a (re)load; returns the sequence number for the response
    pub fn request(&mut self) -> u64 {
        self.loading = true;
        self.seq.issue()
    }

    /// Replace the rows if this answers the latest load
    pub fn apply(&mut self, seq: u64, rows: Vec<CategoryRow>) -> Delivery {
        if !self.seq.is_current(seq) {
            return Delivery::Stale;
        }
        self.rows = rows;
        self.loading = false;
        self.row = 0;
        self.item = 0;
        Delivery::Applied
    }

    pub fn rows(&self) -> &[CategoryRow] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (row, item) of the highlighted entry
    pub fn selection(&self) -> (usize, usize) {
        (self.row, self.item)
    }

    pub fn selected_row(&self) -> Option<&CategoryRow> {
        self.rows.get(self.row)
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.selected_row()?.movies.get(self.item)
    }

    pub fn up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.clamp_item();
        }
    }

    pub fn down(&mut self) {
        if self.row + 1 < self.rows.len() {
            self.row += 1;
            self.clamp_item();
        }
    }

    pub fn left(&mut self) {
        self.item = self.item.saturating_sub(1);
    }

    pub fn right(&mut self) {
        let len = self.selected_row().map(|r| r.movies.len()).unwrap_or(0);
        if self.item + 1 < len {
            self.item += 1;
        }
    }

    fn clamp_item(&mut self) {
        let len = self.selected_row().map(|r| r.movies.len()).unwrap_or(0);
        self.item = self.item.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GenreId, ReleaseYear};

    fn row(genre: u64, items: u64) -> CategoryRow {
        CategoryRow {
            genre: GenreId::from(genre),
            name: format!("Genre {}", genre),
            movies: (0..items)
                .map(|i| Movie {
                    id: genre * 100 + i,
                    title: format!("M{}", i),
                    poster: String::new(),
                    backdrop: String::new(),
                    description: String::new(),
                    release_year: ReleaseYear::Unknown,
                    rating: 0.0,
                    genres: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_navigation_clamps_item_to_row_length() {
        let mut rows = CategoryRows::new();
        let seq = rows.request();
        rows.apply(seq, vec![row(28u64, 5), row(35u64, 2)]);

        for _ in 0..4 {
            rows.right();
        }
        assert_eq!(rows.selection(), (0, 4));

        rows.down();
        assert_eq!(rows.selection(), (1, 1));
        assert_eq!(rows.selected_movie().map(|m| m.id), Some(3501));

        rows.down();
        assert_eq!(rows.selection(), (1, 1));
    }

    #[test]
    fn test_stale_rows_are_dropped() {
        let mut rows = CategoryRows::new();
        let old = rows.request();
        let new = rows.request();
        assert_eq!(rows.apply(old, vec![row(28u64, 1)]), Delivery::Stale);
        assert!(rows.is_loading());
        assert_eq!(rows.apply(new, Vec::new()), Delivery::Applied);
        assert!(!rows.is_loading());
        assert!(rows.selected_movie().is_none());
    }
}
