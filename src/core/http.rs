//! HTTP utilities for ESPN API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

/// Headers sent with every ESPN request.
///
/// ESPN's public golf endpoints answer bare clients inconsistently, so
/// requests identify as a desktop browser.
pub fn default_header_map(user_agent: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    Ok(h)
}
