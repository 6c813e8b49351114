//! Command implementations for the ESPN golf scraper

pub mod common;
pub mod results;
pub mod run_all;
pub mod schedule;
pub mod standings;

use std::path::PathBuf;

use crate::{core::settings::OUTPUT_DIR, Result, Season, OUTPUT_DIR_ENV_VAR, SEASON_ENV_VAR};

/// Season from the CLI, else `ESPN_GOLF_SEASON`, else the current season.
///
/// An env var that is set but not a year is an error rather than silently
/// falling back.
pub fn resolve_season(season: Option<Season>) -> Result<Season> {
    match season {
        Some(season) => Ok(season),
        None => match std::env::var(SEASON_ENV_VAR) {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(Season::default()),
        },
    }
}

/// Output directory from the CLI, else `ESPN_GOLF_OUTPUT_DIR`, else `./output`.
pub fn resolve_output_dir(output_dir: Option<PathBuf>) -> PathBuf {
    output_dir
        .or_else(|| {
            std::env::var(OUTPUT_DIR_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(OUTPUT_DIR))
}
