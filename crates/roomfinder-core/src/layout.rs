// crates/roomfinder-core/src/layout.rs
use crate::config::LayoutMetrics;
use tracing::debug;

/// Left offset of the route panel, in CSS pixels.
///
/// Pure function of the menu state: the panel sits right of the menu,
/// whatever its current width, plus a fixed gap.
///
/// ```rust
/// use roomfinder_core::config::LayoutMetrics;
/// use roomfinder_core::layout::route_panel_offset;
///
/// let m = LayoutMetrics::default();
/// assert_eq!(route_panel_offset(&m, true), 260 + 16);
/// assert_eq!(route_panel_offset(&m, false), 64 + 16);
/// ```
pub fn route_panel_offset(metrics: &LayoutMetrics, menu_open: bool) -> u32 {
    let menu = if menu_open {
        metrics.menu_width_open
    } else {
        metrics.menu_width_closed
    };
    menu.saturating_add(metrics.route_panel_gap)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutState {
    pub menu_open: bool,
    pub route_panel_open: bool,
}

/// Which surface a transition moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutTransition {
    Menu { open: bool },
    RoutePanel { open: bool },
}

/// Side menu and route panel state.
///
/// Every toggle returns exactly one [`LayoutTransition`]; the owner turns
/// each one into one deferred map-size invalidation.
#[derive(Debug, Clone, Default)]
pub struct LayoutCoordinator {
    state: LayoutState,
    metrics: LayoutMetrics,
}

impl LayoutCoordinator {
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self {
            state: LayoutState::default(),
            metrics,
        }
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn route_panel_offset(&self) -> u32 {
        route_panel_offset(&self.metrics, self.state.menu_open)
    }

    /// The top search bar and the route panel never show together.
    pub fn search_bar_visible(&self) -> bool {
        !self.state.route_panel_open
    }

    /// Opening or closing the menu leaves the route panel alone.
    pub fn toggle_menu(&mut self) -> LayoutTransition {
        self.state.menu_open = !self.state.menu_open;
        debug!(open = self.state.menu_open, "menu toggled");
        LayoutTransition::Menu {
            open: self.state.menu_open,
        }
    }

    /// Opening the route panel collapses the menu to its strip.
    pub fn toggle_route_panel(&mut self) -> LayoutTransition {
        let open = !self.state.route_panel_open;
        self.state.route_panel_open = open;
        if open {
            self.state.menu_open = false;
        }
        debug!(open = open, "route panel toggled");
        LayoutTransition::RoutePanel { open }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_widths_saturate() {
        let m = LayoutMetrics {
            menu_width_open: u32::MAX,
            menu_width_closed: 64,
            route_panel_gap: 16,
        };
        assert_eq!(route_panel_offset(&m, true), u32::MAX);
        assert_eq!(route_panel_offset(&m, false), 80);
    }

    #[test]
    fn opening_route_panel_collapses_menu() {
        let mut layout = LayoutCoordinator::default();
        layout.toggle_menu();
        assert_eq!(
            layout.toggle_route_panel(),
            LayoutTransition::RoutePanel { open: true }
        );
        assert!(!layout.state().menu_open);
        assert!(!layout.search_bar_visible());
    }
}
