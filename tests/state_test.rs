//! State controller tests
//!
//! Pagination bounds, genre/search exclusion, stale response handling and
//! hero rotation, driven through the public controllers only.

use cinescope::models::{CatalogFilter, CatalogPage, CategoryRow, GenreId, Movie, ReleaseYear};
use cinescope::state::{
    CatalogChange, CatalogState, CategoryRows, Delivery, HeroChange, HeroRotation, NavChange,
    View, ViewNavigator, MAX_PAGES,
};

fn movie(id: u64) -> Movie {
    Movie {
        id,
        title: format!("Movie {}", id),
        poster: String::new(),
        backdrop: String::new(),
        description: String::new(),
        release_year: ReleaseYear::Unknown,
        rating: 5.0,
        genres: String::new(),
    }
}

fn page(ids: &[u64], total_pages: u32) -> CatalogPage {
    CatalogPage {
        movies: ids.iter().copied().map(movie).collect(),
        total_pages,
    }
}

fn seq_of(change: &CatalogChange) -> u64 {
    change.request().expect("expected a refetch").seq
}

/// Catalog showing popular page 1 with the given page count
fn loaded(total_pages: u32) -> CatalogState {
    let mut catalog = CatalogState::new();
    let seq = seq_of(&catalog.reload());
    assert_eq!(catalog.apply(seq, page(&[1, 2], total_pages)), Delivery::Applied);
    catalog
}

// =============================================================================
// Pagination
// =============================================================================

mod pagination {
    use super::*;

    #[test]
    fn test_page_stays_within_bounds() {
        for total in [1u32, 2, 7, 500, 9_000] {
            let mut catalog = loaded(total);
            let max = total.min(MAX_PAGES);

            for _ in 0..(max + 3) {
                if let Some(request) = catalog.next_page().into_request() {
                    catalog.apply(request.seq, page(&[1], total));
                }
                assert!(catalog.page() >= 1 && catalog.page() <= max);
            }
            assert_eq!(catalog.page(), max);
            assert_eq!(catalog.next_page(), CatalogChange::Unchanged);

            for _ in 0..(max + 3) {
                if let Some(request) = catalog.prev_page().into_request() {
                    catalog.apply(request.seq, page(&[1], total));
                }
                assert!(catalog.page() >= 1);
            }
            assert_eq!(catalog.page(), 1);
            assert_eq!(catalog.prev_page(), CatalogChange::Unchanged);
        }
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut catalog = loaded(12);
        let request = catalog.go_to_page(400).into_request().unwrap();
        assert_eq!(request.cursor.page, 12);

        catalog.apply(request.seq, page(&[1], 12));
        let request = catalog.go_to_page(0).into_request().unwrap();
        assert_eq!(request.cursor.page, 1);
    }

    #[test]
    fn test_zero_total_pages_counts_as_one() {
        let catalog = loaded(0);
        assert_eq!(catalog.max_page(), 1);
    }

    #[test]
    fn test_page_stays_in_range_when_total_shrinks() {
        let mut catalog = loaded(10);
        let request = catalog.go_to_page(5).into_request().unwrap();
        catalog.apply(request.seq, page(&[5], 10));
        assert_eq!(catalog.page(), 5);

        let request = catalog.reload().into_request().unwrap();
        assert_eq!(request.cursor.page, 5);
        catalog.apply(request.seq, page(&[], 3));

        assert_eq!(catalog.page(), 3);
        assert!(catalog.page() <= catalog.max_page());

        let prev = catalog.prev_page().into_request().unwrap();
        assert_eq!(prev.cursor.page, 2);
        catalog.apply(prev.seq, page(&[2], 3));

        let next = catalog.next_page().into_request().unwrap();
        assert_eq!(next.cursor.page, 3);
        catalog.apply(next.seq, page(&[3], 3));
        assert_eq!(catalog.next_page(), CatalogChange::Unchanged);
    }

    #[test]
    fn test_rapid_next_page_keeps_latest() {
        let mut catalog = loaded(10);
        let first = catalog.next_page().into_request().unwrap();
        let second = catalog.next_page().into_request().unwrap();
        assert_eq!(second.cursor.page, 3);

        assert_eq!(catalog.apply(second.seq, page(&[30], 10)), Delivery::Applied);
        assert_eq!(catalog.apply(first.seq, page(&[20], 10)), Delivery::Stale);
        assert_eq!(catalog.page(), 3);
        assert_eq!(catalog.movies()[0].id, 30);
    }
}

// =============================================================================
// Filters
// =============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_popular() {
        let mut catalog = loaded(5);
        let action = GenreId::from(28u64);

        let on = catalog.toggle_genre(action.clone()).into_request().unwrap();
        assert_eq!(on.cursor.filter, CatalogFilter::Genre(action.clone()));
        assert_eq!(on.cursor.page, 1);
        catalog.apply(on.seq, page(&[3], 5));

        let off = catalog.toggle_genre(action).into_request().unwrap();
        assert_eq!(off.cursor.filter, CatalogFilter::Popular);
        catalog.apply(off.seq, page(&[1], 5));
        assert_eq!(catalog.genre(), None);
        assert_eq!(catalog.query(), "popular");
    }

    #[test]
    fn test_search_and_genre_exclude_each_other() {
        let mut catalog = loaded(5);

        catalog.toggle_genre(GenreId::from(28u64));
        assert!(catalog.genre().is_some());

        catalog.set_query("heat");
        assert_eq!(catalog.genre(), None);
        assert_eq!(catalog.query(), "heat");

        catalog.toggle_genre(GenreId::from(80u64));
        assert_eq!(catalog.query(), "popular");
        assert_eq!(catalog.genre(), Some(&GenreId::from(80u64)));
    }

    #[test]
    fn test_blank_query_returns_to_popular() {
        let mut catalog = loaded(5);
        let request = catalog.set_query("alien").into_request().unwrap();
        catalog.apply(request.seq, page(&[9], 2));

        let request = catalog.set_query("   ").into_request().unwrap();
        assert_eq!(request.cursor.filter, CatalogFilter::Popular);
    }

    #[test]
    fn test_popular_query_means_no_search() {
        let mut catalog = loaded(5);
        let request = catalog.set_query("alien").into_request().unwrap();
        catalog.apply(request.seq, page(&[9], 2));

        let request = catalog.set_query(" popular ").into_request().unwrap();
        assert_eq!(request.cursor.filter, CatalogFilter::Popular);
        catalog.apply(request.seq, page(&[1], 5));
        assert_eq!(catalog.query(), "popular");
        assert_eq!(catalog.committed().filter, CatalogFilter::Popular);
    }

    #[test]
    fn test_same_filter_on_page_one_is_unchanged() {
        let mut catalog = loaded(5);
        assert_eq!(catalog.set_query(""), CatalogChange::Unchanged);
    }

    #[test]
    fn test_pending_filter_switch_caps_paging() {
        let mut catalog = loaded(50);
        catalog.set_query("matrix");
        assert_eq!(catalog.next_page(), CatalogChange::Unchanged);
    }

    #[test]
    fn test_genre_change_reports_selection() {
        let mut catalog = loaded(5);
        match catalog.toggle_genre(GenreId::from(28u64)) {
            CatalogChange::Refetch {
                selection: Some(selection),
                ..
            } => {
                assert_eq!(selection.previous, None);
                assert_eq!(selection.current, Some(GenreId::from(28u64)));
            }
            other => panic!("unexpected change: {:?}", other),
        }
    }
}

// =============================================================================
// Failures
// =============================================================================

mod failures {
    use super::*;

    #[test]
    fn test_failure_leaves_catalog_untouched() {
        let mut catalog = loaded(5);
        let before: Vec<u64> = catalog.movies().iter().map(|m| m.id).collect();

        let request = catalog.toggle_genre(GenreId::from(28u64)).into_request().unwrap();
        assert_eq!(catalog.fail(request.seq), Delivery::Applied);

        assert_eq!(catalog.page(), 1);
        assert_eq!(catalog.genre(), None);
        assert!(!catalog.is_loading());
        let after: Vec<u64> = catalog.movies().iter().map(|m| m.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_stale_failure_ignored() {
        let mut catalog = loaded(5);
        let old = catalog.next_page().into_request().unwrap();
        let new = catalog.next_page().into_request().unwrap();

        assert_eq!(catalog.fail(old.seq), Delivery::Stale);
        assert!(catalog.is_loading());
        assert_eq!(catalog.apply(new.seq, page(&[3], 5)), Delivery::Applied);
    }
}

// =============================================================================
// Hero Rotation
// =============================================================================

mod hero {
    use super::*;

    #[test]
    fn test_ticks_wrap_modulo_length() {
        for len in 1..=6u64 {
            let mut hero = HeroRotation::new();
            hero.seed((0..len).map(movie).collect());

            for ticks in 0..20usize {
                assert_eq!(hero.index(), ticks % len as usize);
                hero.advance();
            }
        }
    }

    #[test]
    fn test_empty_rotation_does_nothing() {
        let mut hero = HeroRotation::new();
        assert_eq!(hero.advance(), HeroChange::Unchanged);
        assert_eq!(hero.select_next(), HeroChange::Unchanged);
        assert!(hero.current().is_none());
    }

    #[test]
    fn test_manual_pick_is_next_tick_start() {
        let mut hero = HeroRotation::new();
        hero.seed((0..5).map(movie).collect());

        hero.select(3);
        assert_eq!(hero.advance(), HeroChange::Displayed { index: 4 });
        assert_eq!(hero.advance(), HeroChange::Displayed { index: 0 });
        assert_eq!(hero.select_prev(), HeroChange::Displayed { index: 4 });
    }

    #[test]
    fn test_reseed_resets_index() {
        let mut hero = HeroRotation::new();
        hero.seed((0..5).map(movie).collect());
        hero.select(4);

        hero.seed(vec![movie(10), movie(11)]);
        assert_eq!(hero.index(), 0);
        assert_eq!(hero.current().map(|m| m.id), Some(10));
    }
}

// =============================================================================
// Views and Rows
// =============================================================================

mod views {
    use super::*;

    #[test]
    fn test_navigation_cycle() {
        let mut nav = ViewNavigator::new();
        assert_eq!(nav.view(), View::Browse);
        assert_eq!(nav.back(), NavChange::Unchanged);
        assert_eq!(nav.open(), NavChange::Entered(View::Details));
        assert_eq!(nav.open(), NavChange::Unchanged);
        assert_eq!(nav.back(), NavChange::Entered(View::Browse));
    }

    #[test]
    fn test_rows_drop_stale_and_clamp_selection() {
        let mut rows = CategoryRows::new();
        let old = rows.request();
        let new = rows.request();

        let row = |genre: u64, count: u64| CategoryRow {
            genre: GenreId::from(genre),
            name: format!("Genre {}", genre),
            movies: (0..count).map(movie).collect(),
        };

        assert_eq!(rows.apply(old, vec![row(1, 3)]), Delivery::Stale);
        assert!(rows.is_empty());
        assert_eq!(rows.apply(new, vec![row(28, 5), row(35, 2)]), Delivery::Applied);

        for _ in 0..10 {
            rows.right();
        }
        assert_eq!(rows.selection(), (0, 4));

        rows.down();
        assert_eq!(rows.selection(), (1, 1));
        assert_eq!(rows.selected_row().map(|r| r.name.as_str()), Some("Genre 35"));
    }
}
