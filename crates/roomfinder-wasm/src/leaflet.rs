//! Leaflet-backed [`MapCapability`].
//!
//! Expects the page to have loaded Leaflet so that the global `L` exists.
use roomfinder_core::common::LatLng;
use roomfinder_core::config::TileLayerConfig;
use roomfinder_core::viewport::{MapCapability, MarkerSpec};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

mod sys {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Map;
        pub type TileLayer;
        pub type LayerGroup;
        pub type Marker;

        #[wasm_bindgen(js_namespace = L, js_name = map)]
        pub fn map(container_id: &str) -> Map;
        #[wasm_bindgen(method, js_name = setView)]
        pub fn set_view(this: &Map, center: &JsValue, zoom: u8, options: &JsValue) -> Map;
        #[wasm_bindgen(method, js_name = invalidateSize)]
        pub fn invalidate_size(this: &Map);
        #[wasm_bindgen(method)]
        pub fn remove(this: &Map) -> Map;

        #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
        pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;
        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_tiles_to(this: &TileLayer, map: &Map) -> TileLayer;

        #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
        pub fn layer_group() -> LayerGroup;
        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_group_to(this: &LayerGroup, map: &Map) -> LayerGroup;
        #[wasm_bindgen(method, js_name = addLayer)]
        pub fn add_layer(this: &LayerGroup, layer: &Marker) -> LayerGroup;
        #[wasm_bindgen(method, js_name = clearLayers)]
        pub fn clear_layers(this: &LayerGroup) -> LayerGroup;

        #[wasm_bindgen(js_namespace = L, js_name = marker)]
        pub fn marker(position: &JsValue) -> Marker;
        #[wasm_bindgen(method, js_name = bindTooltip)]
        pub fn bind_tooltip(this: &Marker, content: &str, options: &JsValue) -> Marker;
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    max_zoom: u8,
    attribution: &'a str,
}

#[derive(Serialize)]
struct ViewOptions {
    animate: bool,
}

fn lat_lng(p: LatLng) -> JsValue {
    js_sys::Array::of2(&p.lat.into(), &p.lng.into()).into()
}

fn options<T: Serialize>(value: &T) -> JsValue {
    to_value(value).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("leaflet options not serialized: {e}").into());
        JsValue::UNDEFINED
    })
}

/// A Leaflet map bound to a DOM container.
pub struct LeafletMap {
    map: sys::Map,
}

impl LeafletMap {
    /// `L.map(container_id).setView(center, zoom)`.
    pub fn create(container_id: &str, center: LatLng, zoom: u8) -> Self {
        let map = sys::map(container_id);
        map.set_view(&lat_lng(center), zoom, &options(&ViewOptions { animate: false }));
        Self { map }
    }
}

impl MapCapability for LeafletMap {
    type Layer = sys::LayerGroup;

    fn add_tile_layer(&mut self, tiles: &TileLayerConfig) {
        let opts = options(&TileOptions {
            max_zoom: tiles.max_zoom,
            attribution: &tiles.attribution,
        });
        sys::tile_layer(&tiles.url_template, &opts).add_tiles_to(&self.map);
    }

    fn create_layer_group(&mut self) -> sys::LayerGroup {
        sys::layer_group().add_group_to(&self.map)
    }

    fn clear_layer(&mut self, layer: &sys::LayerGroup) {
        layer.clear_layers();
    }

    fn add_marker(&mut self, layer: &sys::LayerGroup, spec: &MarkerSpec) {
        let marker = sys::marker(&lat_lng(spec.position));
        marker.bind_tooltip(&spec.label, &options(&spec.tooltip));
        layer.add_layer(&marker);
    }

    fn set_view(&mut self, center: LatLng, zoom: u8, animate: bool) {
        self.map
            .set_view(&lat_lng(center), zoom, &options(&ViewOptions { animate }));
    }

    fn invalidate_size(&mut self) {
        self.map.invalidate_size();
    }

    fn destroy(&mut self) {
        self.map.remove();
    }
}
