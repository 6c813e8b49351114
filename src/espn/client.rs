//! Paced, retrying client for ESPN's public golf API.
//!
//! Every request through one [`EspnClient`] is spaced at least
//! [`RetryPolicy::min_interval`] after the start of the previous one, and
//! transient failures are retried with exponential backoff. Pacing happens
//! once per logical request; retries wait on the backoff schedule only.

use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    cli::types::{AthleteId, Season},
    core::{http::default_header_map, settings},
    EspnError, Result,
};


/// Where the three ESPN endpoints live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Host for scoreboard and statistics.
    pub site_api: String,
    /// Host for per-athlete stats.
    pub web_api: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            site_api: settings::SITE_API_HOST.to_string(),
            web_api: settings::WEB_API_HOST.to_string(),
        }
    }
}

impl Endpoints {
    /// Serve every endpoint from one host (e.g. a mock server).
    pub fn with_host(host: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            site_api: host.clone(),
            web_api: host,
        }
    }

    pub fn scoreboard_url(&self) -> String {
        format!("{}{}", self.site_api, settings::SCOREBOARD_PATH)
    }

    pub fn statistics_url(&self) -> String {
        format!("{}{}", self.site_api, settings::STATISTICS_PATH)
    }

    pub fn player_stats_url(&self, athlete_id: &AthleteId) -> String {
        format!(
            "{}{}",
            self.web_api,
            settings::PLAYER_STATS_PATH.replace("{athlete_id}", athlete_id.as_str())
        )
    }
}

/// Pacing and retry discipline for outbound requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Minimum gap between the starts of two consecutive requests.
    pub min_interval: Duration,
    /// Total tries per request, including the first. Zero is treated as one.
    pub max_attempts: u32,
    /// Backoff before retry `n` (0-based) is `backoff_unit * backoff_base^n`.
    pub backoff_base: u32,
    pub backoff_unit: Duration,
    /// Per-attempt HTTP timeout.
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            min_interval: settings::REQUEST_DELAY,
            max_attempts: settings::MAX_ATTEMPTS,
            backoff_base: settings::RETRY_BACKOFF_BASE,
            backoff_unit: settings::RETRY_BACKOFF_UNIT,
            timeout: settings::REQUEST_TIMEOUT,
        }
    }
}

impl RetryPolicy {
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay after failed attempt `attempt` (0-based) before the next one.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.backoff_unit
            .saturating_mul(self.backoff_base.saturating_pow(attempt))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    pub retry: RetryPolicy,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            retry: RetryPolicy::default(),
            user_agent: settings::USER_AGENT.to_string(),
        }
    }
}

/// Source of one player's raw statistics payload.
///
/// The aggregation pass only needs this one operation, which keeps it
/// independent of HTTP.
pub trait PlayerStatsSource {
    fn fetch_player_stats(
        &self,
        athlete_id: &AthleteId,
        season: Season,
    ) -> impl Future<Output = Result<Value>> + Send;
}

pub struct EspnClient {
    http: Client,
    config: ClientConfig,
    /// Start time of the most recent request; the lock is held across the
    /// pacing sleep so concurrent callers queue behind each other.
    last_request: Mutex<Option<Instant>>,
}

impl EspnClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .default_headers(default_header_map(&config.user_agent)?)
            .timeout(config.retry.timeout)
            .build()?;

        Ok(Self {
            http,
            config,
            last_request: Mutex::new(None),
        })
    }

    /// Wait until `min_interval` has passed since the previous request
    /// started, then record now as the start of this one.
    async fn pace(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.config.retry.min_interval {
                let wait = self.config.retry.min_interval - elapsed;
                debug!("Rate limiting: sleeping {:?}", wait);
                sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    async fn get_once(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| EspnError::from_request(e, url))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| EspnError::from_request(e, url))
    }

    /// GET `url` and decode the JSON body, subject to pacing and retries.
    ///
    /// # Errors
    ///
    /// [`EspnError::RequestExhausted`] wrapping the last failure once every
    /// attempt has failed.
    #[instrument(skip(self, query))]
    pub async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        self.pace().await;

        let attempts = self.config.retry.attempts();
        let mut attempt = 0u32;
        loop {
            match self.get_once(url, query).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    warn!(
                        "Request failed (attempt {}/{}): {}",
                        attempt + 1,
                        attempts,
                        e
                    );
                    if attempt + 1 >= attempts {
                        error!("All retries failed for {}", url);
                        return Err(EspnError::RequestExhausted {
                            url: url.to_string(),
                            attempts,
                            source: Box::new(e),
                        });
                    }
                    let wait = self.config.retry.backoff_delay(attempt);
                    info!("Retrying in {:?}...", wait);
                    sleep(wait).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Scoreboard, including the season calendar.
    pub async fn scoreboard(&self) -> Result<Value> {
        info!("Fetching scoreboard data...");
        self.fetch(&self.config.endpoints.scoreboard_url(), &[]).await
    }

    /// Tour statistics, including the FedEx Cup leaders.
    pub async fn statistics(&self) -> Result<Value> {
        info!("Fetching statistics data...");
        self.fetch(&self.config.endpoints.statistics_url(), &[]).await
    }

    /// One athlete's per-event stats for `season`.
    pub async fn player_stats(&self, athlete_id: &AthleteId, season: Season) -> Result<Value> {
        debug!("Fetching stats for athlete {}...", athlete_id);
        let url = self.config.endpoints.player_stats_url(athlete_id);
        self.fetch(&url, &[("season", season.to_string())]).await
    }
}

impl PlayerStatsSource for EspnClient {
    fn fetch_player_stats(
        &self,
        athlete_id: &AthleteId,
        season: Season,
    ) -> impl Future<Output = Result<Value>> + Send {
        self.player_stats(athlete_id, season)
    }
}
