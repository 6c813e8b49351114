//! ESPN golf API access and result processing.

pub mod aggregate;
pub mod client;
pub mod extract;
pub mod types;
