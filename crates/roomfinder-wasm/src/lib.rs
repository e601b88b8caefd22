//! roomfinder-wasm: WebAssembly bindings for roomfinder-core
//!
//! Embeds the bundled room table in the WASM binary and exposes it to
//! JavaScript, together with a [`RoomLocator`] that runs the whole map page
//! (search box, result marker, side menu, route panel) on top of Leaflet.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Queries: `get_room_count()`, `find_room("pa5")`, `suggest_rooms("pa1")`,
//!   `get_stats()`, `route_panel_offset(menuOpen)`
//! - `new RoomLocator("map")`: the map page bound to a DOM container
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { RoomLocator } from 'roomfinder-wasm';
//!
//! await init();
//! const page = new RoomLocator('map');
//! input.addEventListener('input', e => render(page.input(e.target.value)));
//! input.addEventListener('keydown', e => {
//!   if (page.key_down(e.key)) e.preventDefault();
//!   render(page.suggestions());
//! });
//! menuButton.onclick = () => {
//!   routePanel.style.left = `${page.toggle_menu()}px`;
//! };
//! menu.addEventListener('transitionend', () => page.transition_end());
//! ```
//!
//! Notes
//! -----
//! - Leaflet must be loaded first; the bindings call the global `L`.
//! - The room table is compiled by `build.rs`; rebuild the crate after
//!   editing `classrooms.json`.
//! - Size invalidations after a panel toggle fire from `setTimeout` or from
//!   `transition_end()`, whichever comes first.

mod leaflet;

pub use leaflet::LeafletMap;

use once_cell::sync::OnceCell;
use roomfinder_core::layout::route_panel_offset as offset_for;
use roomfinder_core::prelude::*;
use std::result::Result;
use serde_json::json;
use serde_wasm_bindgen::to_value;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// 1. Embed the room table built by build.rs
#[cfg(not(docsrs))]
static EMBEDDED_DB: &[u8] = include_bytes!(env!("ROOM_DB_PATH"));

// Docs stub
#[cfg(docsrs)]
static EMBEDDED_DB: &[u8] = b"";

// 2. Static Instance
static INDEX: OnceCell<Arc<RoomIndex>> = OnceCell::new();

fn index() -> Result<Arc<RoomIndex>, JsValue> {
    INDEX
        .get_or_try_init(|| RoomIndex::from_bytes(EMBEDDED_DB).map(Arc::new))
        .cloned()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(JsValue::from)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing roomfinder WASM module...".into());

    match index() {
        Ok(idx) => {
            web_sys::console::log_1(&format!("✓ Loaded {} rooms", idx.len()).into())
        }
        Err(e) => web_sys::console::error_2(&"room table failed to load:".into(), &e),
    }
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_room_count() -> Result<usize, JsValue> {
    Ok(index()?.len())
}

/// The room a typed term resolves to, or `null`.
#[wasm_bindgen]
pub fn find_room(term: &str) -> Result<JsValue, JsValue> {
    let idx = index()?;
    match idx.resolve_exact(term) {
        Some(room) => js(room),
        None => Ok(JsValue::NULL),
    }
}

/// Dropdown rows (`{key, label, value}`) for a partial code.
#[wasm_bindgen]
pub fn suggest_rooms(query: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
    let resolver = SearchResolver::new(index()?)
        .with_limit(limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT));
    js(&resolver.suggestions(query))
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    let stats = index()?.stats();
    let stats = json!({
        "rooms": stats.rooms,
        "adminUnits": stats.admin_units,
        "exactKeys": stats.exact_keys
    });
    js(&stats)
}

/// Left offset in px of the route panel for the default layout.
#[wasm_bindgen]
pub fn route_panel_offset(menu_open: bool) -> u32 {
    offset_for(&MapPageConfig::default().layout, menu_open)
}

/* --------------------------------------------------------------------------
   Map Page
-------------------------------------------------------------------------- */

/// Monotonic page clock (`performance.now()`); the invalidation queue
/// relies on it never going backwards, which `Date.now()` does not promise.
fn now() -> Duration {
    let ms = web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now());
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

fn alert(message: &str) {
    match web_sys::window() {
        Some(w) => {
            if w.alert_with_message(message).is_err() {
                web_sys::console::warn_1(&message.into());
            }
        }
        None => web_sys::console::warn_1(&message.into()),
    }
}

/// The map page bound to one DOM container.
///
/// Call [`teardown`](RoomLocator::teardown) (or `free()`) when the page
/// goes away; the Leaflet map is removed either way.
#[wasm_bindgen]
pub struct RoomLocator {
    page: Rc<RefCell<MapPage<LeafletMap>>>,
}

#[wasm_bindgen]
impl RoomLocator {
    /// `config` is an optional object with the same fields as the JSON
    /// page config; missing fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, config: JsValue) -> Result<RoomLocator, JsValue> {
        let config: MapPageConfig = if config.is_undefined() || config.is_null() {
            MapPageConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let map = LeafletMap::create(container_id, config.initial_center, config.initial_zoom);
        let mut page = MapPage::new(index()?, config);
        if page.on_map_ready(map).is_err() {
            return Err(JsValue::from_str("map already attached"));
        }
        Ok(Self {
            page: Rc::new(RefCell::new(page)),
        })
    }

    /// Text changed; returns the rows to render.
    pub fn input(&self, text: String) -> Result<JsValue, JsValue> {
        let mut page = self.page.borrow_mut();
        page.input(text);
        js(page.search_bar().visible_suggestions())
    }

    pub fn suggestions(&self) -> Result<JsValue, JsValue> {
        js(self.page.borrow().search_bar().visible_suggestions())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.page.borrow().search_bar().selected_index()
    }

    pub fn value(&self) -> String {
        self.page.borrow().search_bar().value().to_owned()
    }

    pub fn is_open(&self) -> bool {
        self.page.borrow().search_bar().is_open()
    }

    pub fn focus(&self) {
        self.page.borrow_mut().focus();
    }

    /// Returns `true` when the key was handled (caller should
    /// `preventDefault`).
    pub fn key_down(&self, key: &str) -> bool {
        let Ok(key) = key.parse::<NavKey>() else {
            return false;
        };
        let outcome = self.page.borrow_mut().key(key);
        report(outcome);
        true
    }

    /// The magnifier button.
    pub fn submit(&self) {
        let outcome = self.page.borrow_mut().submit();
        report(outcome);
    }

    pub fn hover(&self, index: usize) {
        self.page.borrow_mut().hover(index);
    }

    pub fn leave(&self) {
        self.page.borrow_mut().leave();
    }

    pub fn click(&self, index: usize) {
        let outcome = self.page.borrow_mut().click_suggestion(index);
        report(outcome);
    }

    pub fn click_outside(&self) {
        self.page.borrow_mut().click_outside();
    }

    /// Returns the new route panel offset in px.
    pub fn toggle_menu(&self) -> u32 {
        let at = now();
        self.page.borrow_mut().toggle_menu(at);
        self.arm_timer(at);
        self.page.borrow().route_panel_offset()
    }

    /// Returns whether the top search bar is visible afterwards.
    pub fn toggle_route_panel(&self) -> bool {
        let at = now();
        self.page.borrow_mut().toggle_route_panel(at);
        self.arm_timer(at);
        self.page.borrow().search_bar_visible()
    }

    /// Hook for the panel's `transitionend` event.
    pub fn transition_end(&self) -> usize {
        self.page.borrow_mut().transition_end()
    }

    pub fn menu_open(&self) -> bool {
        self.page.borrow().layout().state().menu_open
    }

    pub fn route_panel_open(&self) -> bool {
        self.page.borrow().layout().state().route_panel_open
    }

    pub fn route_panel_offset(&self) -> u32 {
        self.page.borrow().route_panel_offset()
    }

    pub fn search_bar_visible(&self) -> bool {
        self.page.borrow().search_bar_visible()
    }

    pub fn teardown(&self) {
        self.page.borrow_mut().teardown();
    }
}

impl RoomLocator {
    /// One browser timer per scheduled invalidation. The closure only holds
    /// a weak handle, so a freed page is never touched.
    ///
    /// Timers may fire a hair before the clock reaches the deadline, so the
    /// callback runs the queue at no earlier than the deadline it was armed
    /// for.
    fn arm_timer(&self, scheduled_at: Duration) {
        let delay = self.page.borrow().config().invalidate_delay();
        let due = scheduled_at + delay;
        let weak: Weak<RefCell<MapPage<LeafletMap>>> = Rc::downgrade(&self.page);
        let callback = Closure::once_into_js(move || {
            if let Some(page) = weak.upgrade() {
                if let Ok(mut page) = page.try_borrow_mut() {
                    page.run_due(now().max(due));
                }
            }
        });

        let Some(window) = web_sys::window() else {
            return;
        };
        let delay = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay,
        ) {
            web_sys::console::warn_2(&"setTimeout failed:".into(), &e);
        }
    }
}

fn report(outcome: Option<SearchOutcome>) {
    if let Some(SearchOutcome::NotFound { notice, .. }) = outcome {
        alert(&notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn page_clock_never_goes_backwards() {
        let mut last = now();
        for _ in 0..1_000 {
            let t = now();
            assert!(t >= last, "{t:?} < {last:?}");
            last = t;
        }
    }
}
