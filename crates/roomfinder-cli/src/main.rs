//! roomfinder: command-line interface for roomfinder-core
//!
//! Inspect the room table and try searches from the terminal, with the same
//! normalization and ranking the map page uses.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ roomfinder stats
//!
//! - Resolve a code (shorthand `paN` works for the PA building)
//!   $ roomfinder find pa5
//!
//! - Autocomplete
//!   $ roomfinder suggest pa1 --limit 3
//!
//! - Full page flow against a headless map
//!   $ roomfinder locate "PA 05"
//!
//! Data source
//! -----------
//!
//! By default the CLI loads `classrooms.json` bundled with `roomfinder-core`
//! and caches a binary copy next to it. Use `--input <path>` for another
//! table and `--config <path>` for page settings (suggestion limit, zoom,
//! not-found notice).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use roomfinder_core::layout::route_panel_offset;
use roomfinder_core::prelude::*;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => MapPageConfig::load_from_path(path)
            .with_context(|| format!("loading config {path}"))?,
        None => MapPageConfig::default(),
    };

    // Determine input file (default JSON inside roomfinder-core)
    let input_path = args.input.unwrap_or_else(|| {
        RoomIndex::default_dataset_path()
            .to_string_lossy()
            .to_string()
    });
    debug!(input = %input_path, "loading rooms");
    let index = Arc::new(
        RoomIndex::load_from_path(&input_path)
            .with_context(|| format!("loading rooms from {input_path}"))?,
    );

    match args.command {
        Commands::Stats => {
            let stats = index.stats();
            println!("Room table statistics:");
            println!("  Rooms: {}", stats.rooms);
            println!("  Administrative units: {}", stats.admin_units);
            println!("  Distinct search keys: {}", stats.exact_keys);
        }

        Commands::Rooms => {
            for r in index.rooms() {
                println!(
                    "{:>4}  {:<10} {:>11.6} {:>11.6}  unit {}",
                    r.id, r.code, r.latitude, r.longitude, r.admin_unit
                );
            }
        }

        Commands::Find { term } => match index.resolve_exact(&term) {
            Some(r) => {
                println!("Room: {}", r.code());
                println!("Id: {}", r.id);
                println!("Position: {:.6}, {:.6}", r.latitude, r.longitude);
                println!("Administrative unit: {}", r.admin_unit);
            }
            None => eprintln!("{}", config.not_found_notice),
        },

        Commands::Suggest { query, limit } => {
            let limit = limit.unwrap_or(config.suggestion_limit);
            let rows = index.suggest(&query, limit);
            if rows.is_empty() {
                println!("No rooms match: {query}");
            } else {
                for r in rows {
                    println!("{}", r.code());
                }
            }
        }

        Commands::Locate { term } => {
            let mut page = MapPage::new(index, config);
            let map = HeadlessMap::new(page.config().initial_center, page.config().initial_zoom);
            let probe = map.clone();
            if page.on_map_ready(map).is_err() {
                anyhow::bail!("map page already had a map");
            }

            page.input(term);
            match page.submit() {
                Some(SearchOutcome::Located { room, .. }) => {
                    let state = probe.state();
                    println!("Marker: {}", room.code());
                    if let Some(c) = state.center {
                        println!("View: {:.6}, {:.6} @ zoom {:?}", c.lat, c.lng, state.zoom);
                    }
                }
                Some(SearchOutcome::NotFound { notice, .. }) => eprintln!("{notice}"),
                None => eprintln!("Nothing to search"),
            }
            page.teardown();
        }

        Commands::Build { out } => build(&input_path, &index, out)?,

        Commands::Layout { menu_open } => {
            let offset = route_panel_offset(&config.layout, menu_open);
            println!("Route panel offset: {offset}px");
        }
    }

    Ok(())
}

#[cfg(feature = "builder")]
fn build(input_path: &str, index: &RoomIndex, out: Option<String>) -> anyhow::Result<()> {
    use roomfinder_core::loader::{common_io, CACHE_SUFFIX};

    let out = out.map(std::path::PathBuf::from).unwrap_or_else(|| {
        common_io::get_cache_path(std::path::Path::new(input_path), CACHE_SUFFIX)
    });
    index
        .save_as(&out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {} rooms to {}", index.len(), out.display());
    Ok(())
}

#[cfg(not(feature = "builder"))]
fn build(_input_path: &str, _index: &RoomIndex, _out: Option<String>) -> anyhow::Result<()> {
    anyhow::bail!("this binary was built without the 'builder' feature")
}
