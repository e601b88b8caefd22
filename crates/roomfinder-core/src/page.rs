// crates/roomfinder-core/src/page.rs
use crate::config::MapPageConfig;
use crate::index::RoomIndex;
use crate::layout::{LayoutCoordinator, LayoutTransition};
use crate::model::Room;
use crate::route::RoutePanel;
use crate::schedule::{DeferredQueue, TaskId};
use crate::search::SearchResolver;
use crate::selector::{Commit, NavKey, SuggestionSelector, SuggestionSource};
use crate::viewport::{LifecycleState, MapCapability, MapViewportController};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, trace};

/// Result of running a search on the map page.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The term resolved. `placed` is `false` when the map was not ready,
    /// in which case nothing was drawn.
    Located { room: Room, placed: bool },
    /// Nothing matched; show `notice` to the user. Any previous marker
    /// stays where it was.
    NotFound { term: String, notice: String },
}

impl SearchOutcome {
    pub fn room(&self) -> Option<&Room> {
        match self {
            Self::Located { room, .. } => Some(room),
            Self::NotFound { .. } => None,
        }
    }
}

/// Everything that lives for one view of the map page.
///
/// Owns the top search box, the result marker (through the viewport
/// controller), the side-panel layout, the route panel and the queue of
/// pending map-size invalidations. Dropping the page tears the map down.
///
/// Deferred work runs on the caller's clock: pass the current time to
/// [`toggle_menu`], [`toggle_route_panel`] and [`run_due`], or call
/// [`transition_end`] when the host reports that the panel animation
/// finished.
///
/// [`toggle_menu`]: MapPage::toggle_menu
/// [`toggle_route_panel`]: MapPage::toggle_route_panel
/// [`run_due`]: MapPage::run_due
/// [`transition_end`]: MapPage::transition_end
pub struct MapPage<M: MapCapability> {
    config: MapPageConfig,
    resolver: SearchResolver,
    search_bar: SuggestionSelector,
    viewport: MapViewportController<M>,
    layout: LayoutCoordinator,
    route_panel: RoutePanel,
    invalidations: DeferredQueue,
}

impl<M: MapCapability> MapPage<M> {
    pub fn new(index: Arc<RoomIndex>, config: MapPageConfig) -> Self {
        let resolver = SearchResolver::new(index).with_limit(config.suggestion_limit);
        Self {
            search_bar: SuggestionSelector::new(SuggestionSource::From(resolver.clone())),
            viewport: MapViewportController::new(config.close_up_zoom, config.tooltip),
            layout: LayoutCoordinator::new(config.layout),
            route_panel: RoutePanel::new(),
            invalidations: DeferredQueue::new(),
            resolver,
            config,
        }
    }

    pub fn config(&self) -> &MapPageConfig {
        &self.config
    }

    pub fn resolver(&self) -> &SearchResolver {
        &self.resolver
    }

    pub fn search_bar(&self) -> &SuggestionSelector {
        &self.search_bar
    }

    pub fn viewport(&self) -> &MapViewportController<M> {
        &self.viewport
    }

    pub fn layout(&self) -> &LayoutCoordinator {
        &self.layout
    }

    pub fn route_panel(&self) -> &RoutePanel {
        &self.route_panel
    }

    pub fn route_panel_mut(&mut self) -> &mut RoutePanel {
        &mut self.route_panel
    }

    /// Hand over the freshly created map. Adds the tile layer and the result
    /// layer; a second map is returned unused.
    pub fn on_map_ready(&mut self, mut map: M) -> Result<(), M> {
        if self.viewport.state() != LifecycleState::Uninitialized {
            return self.viewport.on_map_ready(map);
        }
        map.add_tile_layer(&self.config.tiles);
        self.viewport.on_map_ready(map)
    }

    // -------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------

    /// Resolve `term` exactly and drop the marker on the room.
    pub fn handle_search(&mut self, term: &str) -> SearchOutcome {
        match self.resolver.resolve_exact(term) {
            Some(room) => {
                let room = room.clone();
                let placed = self
                    .viewport
                    .place_marker(room.latitude, room.longitude, &room.code);
                info!(code = %room.code, placed = placed, "room located");
                SearchOutcome::Located { room, placed }
            }
            None => {
                info!(term = %term, "room not found");
                SearchOutcome::NotFound {
                    term: term.to_owned(),
                    notice: self.config.not_found_notice.clone(),
                }
            }
        }
    }

    fn dispatch(&mut self, commit: Option<Commit>) -> Option<SearchOutcome> {
        commit.map(|c| self.handle_search(&c.value))
    }

    /// The top search box, but only while it is on screen. Events aimed at
    /// a hidden bar are dropped.
    fn visible_search_bar(&mut self) -> Option<&mut SuggestionSelector> {
        if self.layout.search_bar_visible() {
            Some(&mut self.search_bar)
        } else {
            trace!("search bar hidden; event ignored");
            None
        }
    }

    pub fn input(&mut self, text: impl Into<String>) {
        if let Some(bar) = self.visible_search_bar() {
            bar.input(text);
        }
    }

    pub fn focus(&mut self) {
        if let Some(bar) = self.visible_search_bar() {
            bar.focus();
        }
    }

    pub fn key(&mut self, key: NavKey) -> Option<SearchOutcome> {
        let commit = self.visible_search_bar()?.key(key);
        self.dispatch(commit)
    }

    /// The magnifier button: search the typed text.
    pub fn submit(&mut self) -> Option<SearchOutcome> {
        let commit = self.visible_search_bar()?.submit();
        self.dispatch(commit)
    }

    pub fn hover(&mut self, index: usize) {
        if let Some(bar) = self.visible_search_bar() {
            bar.hover(index);
        }
    }

    pub fn leave(&mut self) {
        if let Some(bar) = self.visible_search_bar() {
            bar.leave();
        }
    }

    pub fn click_suggestion(&mut self, index: usize) -> Option<SearchOutcome> {
        let commit = self.visible_search_bar()?.click(index);
        self.dispatch(commit)
    }

    pub fn click_outside(&mut self) {
        self.search_bar.click_outside();
    }

    // -------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------

    pub fn toggle_menu(&mut self, now: Duration) -> (LayoutTransition, TaskId) {
        let t = self.layout.toggle_menu();
        (t, self.schedule_invalidation(now))
    }

    /// Also the route icon next to the search bar. Opening the panel hides
    /// the search bar, so its dropdown is closed too.
    pub fn toggle_route_panel(&mut self, now: Duration) -> (LayoutTransition, TaskId) {
        let t = self.layout.toggle_route_panel();
        if !self.layout.search_bar_visible() {
            self.search_bar.click_outside();
        }
        (t, self.schedule_invalidation(now))
    }

    fn schedule_invalidation(&mut self, now: Duration) -> TaskId {
        let id = self
            .invalidations
            .schedule(now, self.config.invalidate_delay());
        debug!(task = ?id, pending = self.invalidations.pending(), "size invalidation scheduled");
        id
    }

    pub fn cancel_invalidation(&mut self, id: TaskId) -> bool {
        self.invalidations.cancel(id)
    }

    /// Run the invalidations whose delay has elapsed. Returns how many fired.
    pub fn run_due(&mut self, now: Duration) -> usize {
        let fired = self.invalidations.run_due(now);
        self.apply(fired.len())
    }

    /// The panel transition reported completion: invalidate now.
    pub fn transition_end(&mut self) -> usize {
        let fired = self.invalidations.flush();
        self.apply(fired.len())
    }

    fn apply(&mut self, fired: usize) -> usize {
        for _ in 0..fired {
            self.viewport.notify_layout_changed();
        }
        fired
    }

    pub fn pending_invalidations(&self) -> usize {
        self.invalidations.pending()
    }

    pub fn next_invalidation(&self) -> Option<Duration> {
        self.invalidations.next_deadline()
    }

    pub fn route_panel_offset(&self) -> u32 {
        self.layout.route_panel_offset()
    }

    pub fn search_bar_visible(&self) -> bool {
        self.layout.search_bar_visible()
    }

    /// Leave the page: drop pending work and destroy the map.
    pub fn teardown(&mut self) {
        self.invalidations.flush();
        self.viewport.destroy();
    }
}
