// crates/roomfinder-core/src/viewport/headless.rs
use super::{MapCapability, MarkerSpec};
use crate::common::LatLng;
use crate::config::TileLayerConfig;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// What a headless map has been asked to show so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessState {
    pub center: Option<LatLng>,
    pub zoom: Option<u8>,
    /// Whether the last `set_view` asked for an animated transition.
    pub animated: bool,
    pub tile_layers: Vec<String>,
    /// Marker groups, indexed by layer handle.
    pub layers: Vec<Vec<MarkerSpec>>,
    pub size_invalidations: usize,
    pub destroyed: bool,
}

impl HeadlessState {
    pub fn marker_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }
}

/// In-memory [`MapCapability`] for terminals and tests.
///
/// Clones share the same recorded state, so a probe kept by the caller
/// still sees what happened after the map itself was handed to a
/// controller (and even after the controller destroyed it).
#[derive(Debug, Clone, Default)]
pub struct HeadlessMap {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessMap {
    /// A map "bound to a container" with an initial view.
    pub fn new(center: LatLng, zoom: u8) -> Self {
        let map = Self::default();
        {
            let mut s = map.state.borrow_mut();
            s.center = Some(center);
            s.zoom = Some(zoom);
        }
        map
    }

    pub fn state(&self) -> Ref<'_, HeadlessState> {
        self.state.borrow()
    }
}

impl MapCapability for HeadlessMap {
    type Layer = usize;

    fn add_tile_layer(&mut self, tiles: &TileLayerConfig) {
        self.state
            .borrow_mut()
            .tile_layers
            .push(tiles.url_template.clone());
    }

    fn create_layer_group(&mut self) -> usize {
        let mut s = self.state.borrow_mut();
        s.layers.push(Vec::new());
        s.layers.len() - 1
    }

    fn clear_layer(&mut self, layer: &usize) {
        if let Some(markers) = self.state.borrow_mut().layers.get_mut(*layer) {
            markers.clear();
        }
    }

    fn add_marker(&mut self, layer: &usize, marker: &MarkerSpec) {
        if let Some(markers) = self.state.borrow_mut().layers.get_mut(*layer) {
            markers.push(marker.clone());
        }
    }

    fn set_view(&mut self, center: LatLng, zoom: u8, animate: bool) {
        let mut s = self.state.borrow_mut();
        s.center = Some(center);
        s.zoom = Some(zoom);
        s.animated = animate;
    }

    fn invalidate_size(&mut self) {
        self.state.borrow_mut().size_invalidations += 1;
    }

    fn destroy(&mut self) {
        let mut s = self.state.borrow_mut();
        s.layers.clear();
        s.tile_layers.clear();
        s.destroyed = true;
    }
}
