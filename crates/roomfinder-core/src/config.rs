// crates/roomfinder-core/src/config.rs
use crate::common::LatLng;
use crate::error::{Result, RoomError};
use crate::traits::DEFAULT_SUGGESTION_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// -----------------------------------------------------------------------------
// DEFAULTS
// -----------------------------------------------------------------------------

/// Centro Politécnico, Curitiba.
pub const DEFAULT_CENTER: LatLng = LatLng::new(-25.450223, -49.233239);
pub const DEFAULT_ZOOM: u8 = 16;
/// Zoom used when jumping to a found room.
pub const CLOSE_UP_ZOOM: u8 = 19;
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>";

pub const MENU_WIDTH_OPEN: u32 = 260;
pub const MENU_WIDTH_CLOSED: u32 = 64;
pub const ROUTE_PANEL_GAP: u32 = 16;
/// Roughly the length of the side-panel CSS transition.
pub const LAYOUT_SETTLE_MS: u64 = 250;

pub const NOT_FOUND_NOTICE: &str = "Sala não encontrada. Tente algo como: PA-05";

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipDirection {
    Top,
    Bottom,
    Left,
    Right,
    Center,
    Auto,
}

impl TooltipDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipOptions {
    /// Non-permanent tooltips only show on hover.
    pub permanent: bool,
    pub direction: TooltipDirection,
    /// Pixel offset from the marker anchor.
    pub offset: (i32, i32),
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            permanent: false,
            direction: TooltipDirection::Top,
            offset: (0, -10),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayerConfig {
    pub url_template: String,
    pub max_zoom: u8,
    pub attribution: String,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url_template: OSM_TILE_URL.to_owned(),
            max_zoom: CLOSE_UP_ZOOM,
            attribution: OSM_ATTRIBUTION.to_owned(),
        }
    }
}

/// Side-panel widths in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub menu_width_open: u32,
    pub menu_width_closed: u32,
    pub route_panel_gap: u32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            menu_width_open: MENU_WIDTH_OPEN,
            menu_width_closed: MENU_WIDTH_CLOSED,
            route_panel_gap: ROUTE_PANEL_GAP,
        }
    }
}

/// Everything a map page needs besides the room index.
///
/// Every field has a default, so a JSON file only has to name what it
/// overrides:
///
/// ```rust
/// use roomfinder_core::config::MapPageConfig;
///
/// let cfg = MapPageConfig::from_json_str(r#"{ "suggestion_limit": 5 }"#).unwrap();
/// assert_eq!(cfg.suggestion_limit, 5);
/// assert_eq!(cfg.close_up_zoom, 19);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapPageConfig {
    pub initial_center: LatLng,
    pub initial_zoom: u8,
    pub close_up_zoom: u8,
    pub tiles: TileLayerConfig,
    pub tooltip: TooltipOptions,
    pub suggestion_limit: usize,
    pub layout: LayoutMetrics,
    pub invalidate_delay_ms: u64,
    pub not_found_notice: String,
}

impl Default for MapPageConfig {
    fn default() -> Self {
        Self {
            initial_center: DEFAULT_CENTER,
            initial_zoom: DEFAULT_ZOOM,
            close_up_zoom: CLOSE_UP_ZOOM,
            tiles: TileLayerConfig::default(),
            tooltip: TooltipOptions::default(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            layout: LayoutMetrics::default(),
            invalidate_delay_ms: LAYOUT_SETTLE_MS,
            not_found_notice: NOT_FOUND_NOTICE.to_owned(),
        }
    }
}

impl MapPageConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            RoomError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.initial_center.is_valid() {
            return Err(RoomError::Config(format!(
                "initial_center {:?} is not a valid coordinate",
                self.initial_center
            )));
        }
        if self.close_up_zoom > self.tiles.max_zoom {
            return Err(RoomError::Config(format!(
                "close_up_zoom {} exceeds tiles.max_zoom {}",
                self.close_up_zoom, self.tiles.max_zoom
            )));
        }
        if self.suggestion_limit == 0 {
            return Err(RoomError::Config("suggestion_limit must be > 0".into()));
        }
        Ok(())
    }

    pub fn invalidate_delay(&self) -> Duration {
        Duration::from_millis(self.invalidate_delay_ms)
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    pub fn with_invalidate_delay(mut self, delay: Duration) -> Self {
        self.invalidate_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_layout(mut self, layout: LayoutMetrics) -> Self {
        self.layout = layout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        MapPageConfig::default().validate().unwrap();
    }

    #[test]
    fn huge_delay_clamps_instead_of_wrapping() {
        let cfg = MapPageConfig::default().with_invalidate_delay(Duration::MAX);
        assert_eq!(cfg.invalidate_delay_ms, u64::MAX);
        let cfg = MapPageConfig::default().with_invalidate_delay(Duration::from_millis(40));
        assert_eq!(cfg.invalidate_delay(), Duration::from_millis(40));
    }

    #[test]
    fn rejects_zoom_past_tiles() {
        let err = MapPageConfig::from_json_str(r#"{ "close_up_zoom": 22 }"#).unwrap_err();
        assert!(matches!(err, RoomError::Config(_)));
    }

    #[test]
    fn nested_sections_merge_with_defaults() {
        let cfg = MapPageConfig::from_json_str(
            r#"{ "layout": { "menu_width_open": 300 }, "tooltip": { "direction": "bottom" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.layout.menu_width_open, 300);
        assert_eq!(cfg.layout.menu_width_closed, MENU_WIDTH_CLOSED);
        assert_eq!(cfg.tooltip.direction, TooltipDirection::Bottom);
        assert_eq!(cfg.tooltip.offset, (0, -10));
    }
}
