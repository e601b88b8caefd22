use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for roomfinder
#[derive(Debug, Parser)]
#[command(
    name = "roomfinder",
    version,
    about = "Look up campus rooms by code, as the map page search box does"
)]
pub struct CliArgs {
    /// Path to the room table (.json, .json.gz or a .bin cache; default: bundled classrooms.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Optional JSON file with map page settings
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG wins when set.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the room table
    Stats,

    /// List all rooms
    Rooms,

    /// Resolve a typed code exactly (e.g. pa5, PA 05, LAB-01)
    Find {
        term: String,
    },

    /// Rank autocomplete suggestions for a partial code
    Suggest {
        query: String,

        /// Maximum number of rows (default: the page setting)
        #[arg(short = 'l', long = "limit")]
        limit: Option<usize>,
    },

    /// Run a search on a headless map page and print where the marker lands
    Locate {
        term: String,
    },

    /// Compile the room table into a bincode cache
    Build {
        /// Output path (default: next to the input, <input>.<cache suffix>)
        #[arg(short = 'o', long = "out")]
        out: Option<String>,
    },

    /// Print the route panel offset for a menu state
    Layout {
        #[arg(long = "menu-open")]
        menu_open: bool,
    },
}
