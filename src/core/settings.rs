//! Static configuration for the scraper.
//!
//! Everything here can be overridden at runtime: hosts through
//! [`Endpoints`](crate::espn::client::Endpoints), pacing through
//! [`RetryPolicy`](crate::espn::client::RetryPolicy), and season/output
//! location through the environment or CLI flags.

use std::time::Duration;

/// Host serving the scoreboard and statistics endpoints.
pub const SITE_API_HOST: &str = "https://site.api.espn.com";

/// Host serving per-athlete endpoints.
pub const WEB_API_HOST: &str = "https://site.web.api.espn.com";

pub const SCOREBOARD_PATH: &str = "/apis/site/v2/sports/golf/pga/scoreboard";
pub const STATISTICS_PATH: &str = "/apis/site/v2/sports/golf/pga/statistics";

/// `{athlete_id}` is substituted per request.
pub const PLAYER_STATS_PATH: &str = "/apis/common/v3/sports/golf/athletes/{athlete_id}/stats";

pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const CURRENT_SEASON: u16 = 2026;

pub const REQUEST_DELAY: Duration = Duration::from_millis(1500);
pub const MAX_ATTEMPTS: u32 = 3;
pub const RETRY_BACKOFF_BASE: u32 = 2;
pub const RETRY_BACKOFF_UNIT: Duration = Duration::from_secs(1);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const MAX_PLAYERS_TO_FETCH: usize = 150;

pub const OUTPUT_DIR: &str = "output";
pub const TOURNAMENT_RESULTS_SUBDIR: &str = "tournament_results";

pub const SCHEDULE_FILE: &str = "tournament_schedule.json";
pub const STANDINGS_FILE: &str = "fedex_standings.json";

/// Name of the statistics category and per-event stat carrying FedEx Cup points.
pub const CUP_POINTS_STAT: &str = "cupPoints";
