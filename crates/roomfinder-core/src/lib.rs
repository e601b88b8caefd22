// crates/roomfinder-core/src/lib.rs

//! roomfinder-core
//! ===============
//!
//! Room lookup and map-page state for a campus room locator.
//!
//! - [`RoomIndex`] is built once from a static room table and answers exact
//!   lookups (`"pa5"` → `PA-05`) and ranked autocomplete queries.
//! - [`SuggestionSelector`] is the search box: text, dropdown and the
//!   keyboard/mouse highlight.
//! - [`MapViewportController`] keeps exactly one result marker on a map
//!   widget reached through the [`MapCapability`] trait.
//! - [`LayoutCoordinator`] tracks the side menu and route panel.
//! - [`MapPage`] owns all of the above for one view of the map page.
//!
//! ```rust
//! use roomfinder_core::prelude::*;
//! use std::sync::Arc;
//!
//! let index = Arc::new(RoomIndex::from_json_str(
//!     r#"{"salas":[{"id_sala":5,"n_sala":"PA-05","latitude":-25.45,"longitude":-49.23,"unidade_adm":1}]}"#,
//! )?);
//!
//! let mut page = MapPage::new(index, MapPageConfig::default());
//! let map = HeadlessMap::new(DEFAULT_CENTER, DEFAULT_ZOOM);
//! let probe = map.clone();
//! page.on_map_ready(map).ok();
//!
//! page.input("pa5");
//! let outcome = page.key(NavKey::Enter).unwrap();
//! assert_eq!(outcome.room().map(|r| r.code()), Some("PA-05"));
//! assert_eq!(probe.state().marker_count(), 1);
//! # Ok::<(), roomfinder_core::RoomError>(())
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod index;
pub mod layout;
pub mod loader;
pub mod model;
pub mod nav;
pub mod page;
pub mod prelude;
pub mod route;
pub mod schedule;
pub mod search; // Ranking + resolver
pub mod selector;
pub mod text;
pub mod traits;
pub mod viewport;

// Re-exports
pub use crate::common::{IndexStats, LatLng};
pub use crate::config::MapPageConfig;
pub use crate::error::{Result, RoomError};
pub use crate::index::RoomIndex;
pub use crate::layout::LayoutCoordinator;
pub use crate::model::{Room, RoomTable};
pub use crate::page::{MapPage, SearchOutcome};
pub use crate::search::{SearchResolver, Suggestion};
pub use crate::selector::SuggestionSelector;
// Export the Search Trait (Crucial for users!)
pub use crate::traits::RoomSearch;
pub use crate::viewport::{HeadlessMap, MapCapability, MapViewportController};
