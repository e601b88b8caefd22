// crates/roomfinder-core/src/route.rs
use crate::selector::{Commit, SuggestionSelector};
use std::time::Duration;

pub const ORIGIN_PLACEHOLDER: &str = "Meu local";
pub const DESTINATION_PLACEHOLDER: &str = "Local destino";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteField {
    Origin,
    Destination,
}

impl RouteField {
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Origin => ORIGIN_PLACEHOLDER,
            Self::Destination => DESTINATION_PLACEHOLDER,
        }
    }
}

/// The route panel: an origin and a destination box, no dropdowns.
///
/// There is no routing engine behind it; submitted terms are recorded and
/// otherwise ignored.
#[derive(Debug, Clone, Default)]
pub struct RoutePanel {
    origin: SuggestionSelector,
    destination: SuggestionSelector,
}

impl RoutePanel {
    pub fn new() -> Self {
        Self {
            origin: SuggestionSelector::without_suggestions(),
            destination: SuggestionSelector::without_suggestions(),
        }
    }

    pub fn field(&self, which: RouteField) -> &SuggestionSelector {
        match which {
            RouteField::Origin => &self.origin,
            RouteField::Destination => &self.destination,
        }
    }

    pub fn field_mut(&mut self, which: RouteField) -> &mut SuggestionSelector {
        match which {
            RouteField::Origin => &mut self.origin,
            RouteField::Destination => &mut self.destination,
        }
    }

    /// Submit one of the boxes. The commit is handed back but triggers nothing.
    pub fn submit(&mut self, which: RouteField) -> Option<Commit> {
        self.field_mut(which).submit()
    }

    /// Travel time between origin and destination. Always `None`.
    pub fn estimate_route_time(&self) -> Option<Duration> {
        None
    }
}
