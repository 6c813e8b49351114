//! Type-safe wrappers for ESPN golf identifiers and seasons.

pub mod ids;
pub mod time;

pub use ids::{AthleteId, EventId};
pub use time::Season;
