//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::Season;

use crate::core::settings::MAX_PLAYERS_TO_FETCH;

/// Arguments for commands that aggregate tournament results
#[derive(Debug, Args)]
pub struct ResultsArgs {
    /// Maximum number of players (by standings rank) to fetch results for.
    #[clap(long, default_value_t = MAX_PLAYERS_TO_FETCH)]
    pub max_players: usize,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch and update the tournament schedule.
    Schedule,

    /// Fetch FedEx Cup standings (also the roster for `results`).
    Fedex,

    /// Aggregate tournament results from player stats.
    ///
    /// Reads the roster from `fedex_standings.json`, scraping standings first
    /// if the file is missing.
    Results {
        #[clap(flatten)]
        args: ResultsArgs,
    },

    /// Run all scrapers (schedule, fedex, results).
    All {
        #[clap(flatten)]
        args: ResultsArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "espn-golf", about = "PGA Tour scraper for ESPN's golf API")]
pub struct GolfCli {
    /// Enable debug logging.
    #[clap(long, global = true)]
    pub debug: bool,

    /// Season year (or set `ESPN_GOLF_SEASON`).
    #[clap(long, short, global = true)]
    pub season: Option<Season>,

    /// Output directory (or set `ESPN_GOLF_OUTPUT_DIR`; default `./output`).
    #[clap(long, short, global = true)]
    pub output_dir: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
