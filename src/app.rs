//! App state and core application logic
//!
//! Owns every state controller, maps keyboard input onto them and turns
//! their changes into [`Effect`]s for the runtime. Results come back as
//! [`Message`]s and are applied through [`App::apply_message`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::error::FetchError;
use crate::models::{CatalogPage, CategoryRow, GenreMap, Movie, Trailer};
use crate::state::{
    CatalogChange, CatalogRequest, CatalogState, CategoryRows, DetailsLoader, HeroChange,
    HeroRotation, NavChange, TrailerRequest, View, ViewNavigator,
};

/// Blocking notice shown when a catalog fetch fails
pub const CATALOG_ERROR_NOTICE: &str =
    "Failed to load movies. Check your API key or internet connection.";

/// Grid rows skipped by PageUp / PageDown
const GRID_PAGE_SIZE: usize = 10;

// =============================================================================
// Input Mode / Focus
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

/// Browse-view section receiving navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Hero,
    Genres,
    #[default]
    Grid,
    Rows,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Hero, Focus::Genres, Focus::Grid, Focus::Rows];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Hero => "Featured",
            Focus::Genres => "Genres",
            Focus::Grid => "Movies",
            Focus::Rows => "Categories",
        }
    }
}

// =============================================================================
// Effects and Messages
// =============================================================================

/// Work the runtime must perform on behalf of the state layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadCatalog(CatalogRequest),
    LoadTrailer(TrailerRequest),
    LoadRows { seq: u64 },
}

/// Result of an [`Effect`], delivered back to the app
#[derive(Debug)]
pub enum Message {
    /// Genre map became available (sent once per process)
    GenresLoaded(GenreMap),
    CatalogLoaded { seq: u64, page: CatalogPage },
    CatalogFailed { seq: u64, error: FetchError },
    TrailerLoaded {
        seq: u64,
        result: Result<Option<Trailer>, FetchError>,
    },
    RowsLoaded { seq: u64, rows: Vec<CategoryRow> },
}

// =============================================================================
// Selection State
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    /// Move selection up
    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down
    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Move selection up by a page
    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
    }

    /// Move selection down by a page
    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    /// Jump to first item
    pub fn first(&mut self) {
        self.selected = 0;
    }

    /// Jump to last item
    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }
}

// =============================================================================
// Search Input
// =============================================================================

/// Search box text with a cursor counted in characters
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Delete character at cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Browse section receiving navigation keys
    pub focus: Focus,
    /// Blocking error popup
    pub error: Option<String>,

    pub search: SearchInput,
    pub genres: GenreMap,
    /// Highlighted chip in the genre bar
    pub genre_cursor: usize,
    pub catalog: CatalogState,
    pub grid: ListState,
    pub hero: HeroRotation,
    pub rows: CategoryRows,
    pub nav: ViewNavigator,
    pub details: DetailsLoader,
}

impl Default for App {
    fn default() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            focus: Focus::default(),
            error: None,

            search: SearchInput::default(),
            genres: GenreMap::default(),
            genre_cursor: 0,
            catalog: CatalogState::new(),
            grid: ListState::default(),
            hero: HeroRotation::new(),
            rows: CategoryRows::new(),
            nav: ViewNavigator::new(),
            details: DetailsLoader::new(),
        }
    }
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects for the initial screen: the popular listing, page 1
    pub fn start(&mut self) -> Vec<Effect> {
        let change = self.catalog.reload();
        self.catalog_effects(change)
    }

    pub fn view(&self) -> View {
        self.nav.view()
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Movie under the grid cursor
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.catalog.movies().get(self.grid.selected)
    }

    /// Timer tick: advance the hero banner
    pub fn tick(&mut self) -> HeroChange {
        self.hero.advance()
    }

    fn catalog_effects(&mut self, change: CatalogChange) -> Vec<Effect> {
        match change {
            CatalogChange::Unchanged => Vec::new(),
            CatalogChange::Refetch { request, selection } => {
                if let Some(selection) = selection {
                    debug!(
                        previous = ?selection.previous,
                        current = ?selection.current,
                        "genre selection changed"
                    );
                }
                vec![Effect::LoadCatalog(request)]
            }
        }
    }

    /// Open the details view for a movie
    pub fn open_movie(&mut self, movie: Movie) -> Vec<Effect> {
        if self.nav.open() == NavChange::Unchanged {
            return Vec::new();
        }
        debug!(movie_id = movie.id, "opening details");
        let request = self.details.open(movie);
        vec![Effect::LoadTrailer(request)]
    }

    /// Leave the details view
    pub fn close_details(&mut self) {
        if self.nav.back() == NavChange::Entered(View::Browse) {
            self.details.close();
        }
    }

    /// Toggle the genre under the genre-bar cursor
    pub fn toggle_selected_genre(&mut self) -> Vec<Effect> {
        let Some(genre) = self.genres.get(self.genre_cursor) else {
            return Vec::new();
        };
        let change = self.catalog.toggle_genre(genre.id.clone());
        if change != CatalogChange::Unchanged {
            self.search.clear();
        }
        self.catalog_effects(change)
    }

    /// Show the full catalog for the highlighted category row
    pub fn show_selected_row(&mut self) -> Vec<Effect> {
        let Some(row) = self.rows.selected_row() else {
            return Vec::new();
        };
        let genre = row.genre.clone();
        if let Some(position) = self.genres.position(&genre) {
            self.genre_cursor = position;
        }
        let change = self.catalog.show_genre(genre);
        if change != CatalogChange::Unchanged {
            self.search.clear();
            self.focus = Focus::Grid;
        }
        self.catalog_effects(change)
    }

    fn apply_search_text(&mut self) -> Vec<Effect> {
        let change = self.catalog.set_query(self.search.text());
        self.catalog_effects(change)
    }

    // -------------------------------------------------------------------------
    // Message Application
    // -------------------------------------------------------------------------

    /// Apply a runtime result. Results for superseded requests are dropped.
    pub fn apply_message(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::GenresLoaded(genres) => {
                let first = self.genres.is_empty();
                info!(count = genres.len(), "genre map ready");
                self.genres = genres;
                self.genre_cursor = self.genre_cursor.min(self.genres.len().saturating_sub(1));
                if first && !self.genres.is_empty() {
                    return vec![Effect::LoadRows {
                        seq: self.rows.request(),
                    }];
                }
            }
            Message::CatalogLoaded { seq, page } => {
                if self.catalog.apply(seq, page).is_applied() {
                    let movies = self.catalog.movies().to_vec();
                    info!(
                        query = self.catalog.query(),
                        page = self.catalog.page(),
                        count = movies.len(),
                        "catalog updated"
                    );
                    self.grid = ListState::new(movies.len());
                    self.hero.seed(movies);
                } else {
                    debug!(seq, "dropping stale catalog page");
                }
            }
            Message::CatalogFailed { seq, error } => {
                if self.catalog.fail(seq).is_applied() {
                    warn!(error = %error, "catalog fetch failed");
                    self.error = Some(CATALOG_ERROR_NOTICE.to_string());
                } else {
                    debug!(seq, "dropping stale catalog failure");
                }
            }
            Message::TrailerLoaded { seq, result } => {
                if !self.nav.is_details() {
                    debug!(seq, "trailer arrived after leaving details");
                    return Vec::new();
                }
                if let Err(e) = &result {
                    warn!(error = %e, "trailer lookup failed");
                }
                self.details.resolve(seq, result);
            }
            Message::RowsLoaded { seq, rows } => {
                self.rows.apply(seq, rows);
            }
        }
        Vec::new()
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returning the effects it caused
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return Vec::new();
        }

        // Any key dismisses the error popup
        if self.error.take().is_some() {
            return Vec::new();
        }

        if self.input_mode == InputMode::Editing {
            return self.handle_editing_key(key);
        }

        if key.code == KeyCode::Char('q') {
            self.quit();
            return Vec::new();
        }

        match self.nav.view() {
            View::Details => self.handle_details_key(key),
            View::Browse => self.handle_browse_key(key),
        }
    }

    /// Handle keys in editing (text input) mode. Every edit re-queries.
    fn handle_editing_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        let edited = match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                false
            }
            KeyCode::Char(c) => {
                self.search.insert(c);
                true
            }
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => {
                self.search.cursor_left();
                false
            }
            KeyCode::Right => {
                self.search.cursor_right();
                false
            }
            KeyCode::Home => {
                self.search.cursor_home();
                false
            }
            KeyCode::End => {
                self.search.cursor_end();
                false
            }
            _ => false,
        };

        if edited {
            self.apply_search_text()
        } else {
            Vec::new()
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.close_details(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.input_mode = InputMode::Editing;
                self.search.cursor_end();
                return Vec::new();
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Vec::new();
            }
            KeyCode::Char(']') | KeyCode::Char('n') => {
                let change = self.catalog.next_page();
                return self.catalog_effects(change);
            }
            KeyCode::Char('[') | KeyCode::Char('p') => {
                let change = self.catalog.prev_page();
                return self.catalog_effects(change);
            }
            KeyCode::Char('r') => {
                let change = self.catalog.reload();
                return self.catalog_effects(change);
            }
            _ => {}
        }

        match self.focus {
            Focus::Hero => self.handle_hero_key(key),
            Focus::Genres => self.handle_genres_key(key),
            Focus::Grid => self.handle_grid_key(key),
            Focus::Rows => self.handle_rows_key(key),
        }
    }

    fn handle_hero_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.hero.select_prev();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.hero.select_next();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as usize) - ('1' as usize);
                self.hero.select(idx);
            }
            KeyCode::Enter => {
                if let Some(movie) = self.hero.current().cloned() {
                    return self.open_movie(movie);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_genres_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.genre_cursor = self.genre_cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.genre_cursor + 1 < self.genres.len() {
                    self.genre_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => return self.toggle_selected_genre(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_grid_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.grid.up(),
            KeyCode::Down | KeyCode::Char('j') => self.grid.down(),
            KeyCode::PageUp => self.grid.page_up(GRID_PAGE_SIZE),
            KeyCode::PageDown => self.grid.page_down(GRID_PAGE_SIZE),
            KeyCode::Home => self.grid.first(),
            KeyCode::End => self.grid.last(),
            KeyCode::Enter => {
                if let Some(movie) = self.selected_movie().cloned() {
                    return self.open_movie(movie);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_rows_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.rows.up(),
            KeyCode::Down | KeyCode::Char('j') => self.rows.down(),
            KeyCode::Left | KeyCode::Char('h') => self.rows.left(),
            KeyCode::Right | KeyCode::Char('l') => self.rows.right(),
            KeyCode::Char('a') => return self.show_selected_row(),
            KeyCode::Enter => {
                if let Some(movie) = self.rows.selected_movie().cloned() {
                    return self.open_movie(movie);
                }
            }
            _ => {}
        }
        Vec::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
