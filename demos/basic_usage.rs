//! Basic usage example for roomfinder-rs
//!
//! This example demonstrates how to:
//! - Load the bundled room table
//! - Resolve typed room codes, including the `pa5` shorthand
//! - Rank autocomplete suggestions
//! - Drive a map page against the headless map

use roomfinder_rs::prelude::*;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== roomfinder-rs Basic Usage Example ===\n");

    println!("Loading room table...");
    let index = RoomIndex::load_shared()?;
    let stats = index.stats();
    println!(
        "✓ {} rooms in {} administrative units\n",
        stats.rooms, stats.admin_units
    );

    // Example 1: Exact lookup
    println!("--- Example 1: Exact lookup ---");
    for term in ["pa5", "PA 05", "lab-02", "XYZ-123"] {
        match index.resolve_exact(term) {
            Some(room) => println!(
                "{term:>8} -> {} ({:.6}, {:.6})",
                room.code(),
                room.latitude,
                room.longitude
            ),
            None => println!("{term:>8} -> not found"),
        }
    }
    println!();

    // Example 2: Autocomplete
    println!("--- Example 2: Suggestions for \"pa1\" ---");
    for (i, room) in index.suggest("pa1", DEFAULT_SUGGESTION_LIMIT).iter().enumerate() {
        println!("{}. {}", i + 1, room.code());
    }
    println!();

    // Example 3: The map page
    println!("--- Example 3: Map page ---");
    let mut page = MapPage::new(index, MapPageConfig::default());
    let map = HeadlessMap::new(DEFAULT_CENTER, DEFAULT_ZOOM);
    let probe = map.clone();
    if page.on_map_ready(map).is_err() {
        println!("map was already attached");
    }

    page.input("pc");
    page.key(NavKey::ArrowDown);
    if let Some(outcome) = page.key(NavKey::Enter) {
        println!("search box committed: {outcome:?}");
    }
    {
        let state = probe.state();
        println!(
            "markers: {}, center: {:?}, zoom: {:?}",
            state.marker_count(),
            state.center,
            state.zoom
        );
    }

    page.toggle_menu(Duration::ZERO);
    println!("route panel offset with menu open: {}px", page.route_panel_offset());
    let fired = page.run_due(page.config().invalidate_delay());
    println!("size invalidations after the transition: {fired}");

    page.teardown();
    println!("\n✓ Done");
    Ok(())
}
