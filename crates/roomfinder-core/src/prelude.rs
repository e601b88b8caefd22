//! roomfinder prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::{IndexStats, LatLng};
pub use crate::config::{MapPageConfig, DEFAULT_CENTER, DEFAULT_ZOOM};
pub use crate::error::{Result, RoomError};
pub use crate::index::RoomIndex;
pub use crate::layout::{route_panel_offset, LayoutCoordinator, LayoutTransition};
pub use crate::model::{Room, RoomTable};
pub use crate::nav::{AppRoute, HomeSection};
pub use crate::page::{MapPage, SearchOutcome};
pub use crate::route::{RouteField, RoutePanel};
pub use crate::search::{SearchResolver, Suggestion};
pub use crate::selector::{Commit, CommitKind, NavKey, SuggestionSelector, SuggestionSource};
pub use crate::text::{normalize_exact, normalize_match};
pub use crate::traits::{RoomSearch, DEFAULT_SUGGESTION_LIMIT};
pub use crate::viewport::{HeadlessMap, MapCapability, MapViewportController, MarkerSpec};
