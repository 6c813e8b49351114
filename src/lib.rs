//! ESPN Golf Scraper Library
//!
//! Fetches PGA Tour data from ESPN's public golf API and turns per-player
//! event stats into per-tournament leaderboards.
//!
//! ## Features
//!
//! - **Paced Requests**: One client spaces every request and retries
//!   transient failures with exponential backoff
//! - **Schedule & Standings**: Season calendar and FedEx Cup standings
//! - **Tournament Results**: Aggregates each rostered player's event finishes
//!   into ranked per-tournament result sets, skipping players whose fetch fails
//! - **JSON Output**: Timestamped, pretty-printed files under one output directory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_golf::{commands::{common::CommandContext, results::scrape_tournament_results}, Season};
//!
//! # async fn example() -> espn_golf::Result<()> {
//! let ctx = CommandContext::new(Season::new(2026), "output".into())?;
//! let (report, summary) = scrape_tournament_results(&ctx, 50).await?;
//! println!("{} tournaments, {} players failed", report.tournaments.len(), summary.players_failed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ESPN_GOLF_SEASON=2026
//! export ESPN_GOLF_OUTPUT_DIR=/var/lib/espn-golf
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;

// Re-export commonly used types
pub use cli::types::{AthleteId, EventId, Season};
pub use error::{EspnError, Result};
pub use espn::types::{EventResult, PlayerRef, TournamentResultSet};

pub const SEASON_ENV_VAR: &str = "ESPN_GOLF_SEASON";
pub const OUTPUT_DIR_ENV_VAR: &str = "ESPN_GOLF_OUTPUT_DIR";
