//! Error types for the ESPN golf scraper

use thiserror::Error;


pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Request to {url} failed after {attempts} attempt(s)")]
    RequestExhausted {
        url: String,
        attempts: u32,
        #[source]
        source: Box<EspnError>,
    },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Statistics category `{name}` not found in ESPN response")]
    CategoryNotFound { name: String },

    #[error("Player roster unavailable: {message}")]
    MissingRoster { message: String },
}

impl EspnError {
    /// Classify a reqwest failure into the transient request taxonomy.
    pub fn from_request(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            EspnError::Timeout {
                url: url.to_string(),
            }
        } else if let Some(status) = err.status() {
            EspnError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
        } else if err.is_decode() {
            EspnError::Decode {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            EspnError::Http(err)
        }
    }

    /// The last underlying failure when retries were exhausted, otherwise `self`.
    pub fn root_cause(&self) -> &EspnError {
        match self {
            EspnError::RequestExhausted { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
