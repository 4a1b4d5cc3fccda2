//! Pure UI state controllers
//!
//! Nothing here performs I/O. Controls return a description of what changed
//! (for example a request to issue), and responses are delivered back with
//! the sequence number they were issued under.

pub mod catalog;
pub mod details;
pub mod hero;
pub mod rows;
pub mod sequence;
pub mod view;

pub use catalog::{CatalogChange, CatalogRequest, CatalogState, SelectionChange, MAX_PAGES};
pub use details::{DetailsLoader, DetailsPanel, TrailerRequest, TrailerStatus};
pub use hero::{HeroChange, HeroRotation, DEFAULT_HERO_INTERVAL};
pub use rows::CategoryRows;
pub use sequence::{Delivery, RequestSeq};
pub use view::{NavChange, View, ViewNavigator};
