// crates/roomfinder-core/src/viewport/mod.rs

//! # Map Viewport
//!
//! The map widget itself is an external collaborator; this module only
//! describes what it must be able to do ([`MapCapability`]) and owns the
//! single result marker on top of it ([`MapViewportController`]).

use crate::common::LatLng;
use crate::config::{TileLayerConfig, TooltipOptions, CLOSE_UP_ZOOM};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

mod headless;

pub use headless::HeadlessMap;

/// A marker with its hover tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub position: LatLng,
    pub label: String,
    pub tooltip: TooltipOptions,
}

/// What the tile-rendering map widget has to offer.
///
/// Creating the widget (binding it to a container with an initial
/// center/zoom) is the implementor's constructor; everything after that
/// goes through this trait.
pub trait MapCapability {
    /// Handle to a group of markers that can be cleared as a whole.
    type Layer;

    fn add_tile_layer(&mut self, tiles: &TileLayerConfig);
    fn create_layer_group(&mut self) -> Self::Layer;
    fn clear_layer(&mut self, layer: &Self::Layer);
    fn add_marker(&mut self, layer: &Self::Layer, marker: &MarkerSpec);
    fn set_view(&mut self, center: LatLng, zoom: u8, animate: bool);
    /// Drop the widget's cached container size.
    fn invalidate_size(&mut self);
    fn destroy(&mut self);
}

/// Where the controller is in the map's life.
enum Lifecycle<M: MapCapability> {
    Uninitialized,
    Ready { map: M, results: M::Layer },
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Ready,
    Destroyed,
}

/// Owns the map handle, its result layer and the one result marker.
///
/// Every marker/viewport call made outside the `Ready` state is a guarded
/// no-op: a search fired during the first render simply does nothing.
pub struct MapViewportController<M: MapCapability> {
    lifecycle: Lifecycle<M>,
    marker: Option<MarkerSpec>,
    close_up_zoom: u8,
    tooltip: TooltipOptions,
}

impl<M: MapCapability> Default for MapViewportController<M> {
    fn default() -> Self {
        Self::new(CLOSE_UP_ZOOM, TooltipOptions::default())
    }
}

impl<M: MapCapability> MapViewportController<M> {
    pub fn new(close_up_zoom: u8, tooltip: TooltipOptions) -> Self {
        Self {
            lifecycle: Lifecycle::Uninitialized,
            marker: None,
            close_up_zoom,
            tooltip,
        }
    }

    pub fn state(&self) -> LifecycleState {
        match self.lifecycle {
            Lifecycle::Uninitialized => LifecycleState::Uninitialized,
            Lifecycle::Ready { .. } => LifecycleState::Ready,
            Lifecycle::Destroyed => LifecycleState::Destroyed,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == LifecycleState::Ready
    }

    /// Take ownership of a freshly created map and give it a result layer.
    ///
    /// Only accepted once. A map offered in any other state is handed back
    /// untouched so the caller can dispose of it.
    pub fn on_map_ready(&mut self, mut map: M) -> Result<(), M> {
        if !matches!(self.lifecycle, Lifecycle::Uninitialized) {
            warn!(state = ?self.state(), "map offered twice; ignoring");
            return Err(map);
        }
        let results = map.create_layer_group();
        self.lifecycle = Lifecycle::Ready { map, results };
        debug!("map ready");
        Ok(())
    }

    /// The active marker, if any.
    pub fn marker(&self) -> Option<&MarkerSpec> {
        self.marker.as_ref()
    }

    pub fn map(&self) -> Option<&M> {
        match &self.lifecycle {
            Lifecycle::Ready { map, .. } => Some(map),
            _ => None,
        }
    }

    /// Replace the result marker and fly to it.
    ///
    /// Returns `false` (and changes nothing) when the map is not ready.
    pub fn place_marker(&mut self, lat: f64, lng: f64, label: &str) -> bool {
        let Lifecycle::Ready { map, results } = &mut self.lifecycle else {
            debug!(label = %label, "place_marker before map ready");
            return false;
        };

        let spec = MarkerSpec {
            position: LatLng::new(lat, lng),
            label: label.to_owned(),
            tooltip: self.tooltip,
        };
        map.clear_layer(results);
        map.add_marker(results, &spec);
        map.set_view(spec.position, self.close_up_zoom, true);
        self.marker = Some(spec);
        true
    }

    pub fn clear(&mut self) {
        if let Lifecycle::Ready { map, results } = &mut self.lifecycle {
            map.clear_layer(results);
            self.marker = None;
        }
    }

    /// The visible container box changed; make the widget re-measure.
    pub fn notify_layout_changed(&mut self) {
        if let Lifecycle::Ready { map, .. } = &mut self.lifecycle {
            map.invalidate_size();
        }
    }

    /// Tear the map down. Idempotent.
    pub fn destroy(&mut self) {
        if let Lifecycle::Ready { mut map, results } =
            std::mem::replace(&mut self.lifecycle, Lifecycle::Destroyed)
        {
            map.clear_layer(&results);
            map.destroy();
            debug!("map destroyed");
        }
        self.lifecycle = Lifecycle::Destroyed;
        self.marker = None;
    }
}

impl<M: MapCapability> Drop for MapViewportController<M> {
    fn drop(&mut self) {
        self.destroy();
    }
}
