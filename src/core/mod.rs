//! Core utilities for the ESPN golf scraper
//!
//! This module consolidates the pieces the scrapers share:
//! - `http`: default request headers
//! - `logging`: tracing subscriber setup
//! - `output`: JSON file sink
//! - `settings`: static configuration

pub mod http;
pub mod logging;
pub mod output;
pub mod settings;

// Re-export commonly used items for convenience
pub use output::{slugify, tournament_filename, OutputWriter};
