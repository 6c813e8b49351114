use serde::{Deserialize, Serialize};

use crate::cli::types::{AthleteId, EventId, Season};

#[cfg(test)]
mod tests;

/// Leading character ESPN uses for shared positions ("T5").
pub const TIE_MARKER: char = 'T';

/// Sort rank given to positions that are not numeric (CUT, WD, DQ, empty).
pub const UNRANKED: u32 = u32::MAX;

/// A player eligible for result aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    pub athlete_id: AthleteId,
    pub display_name: String,
}

impl PlayerRef {
    pub fn new(athlete_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            athlete_id: AthleteId::new(athlete_id),
            display_name: display_name.into(),
        }
    }
}

/// One player's finish in one tournament.
///
/// Serializes in the per-tournament file layout; the event fields live on
/// the enclosing [`TournamentResultSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventResult {
    #[serde(skip_serializing)]
    pub event_id: EventId,
    #[serde(skip_serializing)]
    pub event_name: String,
    pub athlete_id: AthleteId,
    #[serde(rename = "name")]
    pub display_name: String,
    /// Raw display position, e.g. "1", "T5", "CUT".
    pub position: String,
    #[serde(rename = "fedex_points")]
    pub points: u32,
}

impl EventResult {
    pub fn placement(&self) -> Placement {
        Placement::parse(&self.position)
    }
}

/// Interpretation of a raw position string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub rank: Option<u32>,
    pub tied: bool,
}

impl Placement {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (marked, digits) = match raw.strip_prefix(TIE_MARKER) {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let rank = digits.parse::<u32>().ok();
        Self {
            rank,
            tied: marked && rank.is_some(),
        }
    }

    pub fn sort_key(&self) -> u32 {
        self.rank.unwrap_or(UNRANKED)
    }
}

/// Ranked results for one tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentResultSet {
    pub event_id: EventId,
    #[serde(rename = "name")]
    pub event_name: String,
    pub results: Vec<EventResult>,
}

impl TournamentResultSet {
    pub fn new(event_id: EventId, event_name: impl Into<String>) -> Self {
        Self {
            event_id,
            event_name: event_name.into(),
            results: Vec::new(),
        }
    }

    /// Order results by placement; unranked positions go last and equal
    /// ranks keep their insertion order.
    pub fn sort_by_placement(&mut self) {
        self.results
            .sort_by_cached_key(|result| result.placement().sort_key());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub event_id: EventId,
    pub name: String,
    /// `YYYY-MM-DD`, empty when ESPN omits it.
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub season: Season,
    pub events: Vec<ScheduleEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingsEntry {
    pub rank: u32,
    pub athlete_id: AthleteId,
    pub name: String,
    pub fedex_points: u32,
}

/// FedEx Cup standings; also the roster the results pass reads back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub season: Season,
    #[serde(default)]
    pub standings: Vec<StandingsEntry>,
}

impl From<&StandingsEntry> for PlayerRef {
    fn from(entry: &StandingsEntry) -> Self {
        Self {
            athlete_id: entry.athlete_id.clone(),
            display_name: entry.name.clone(),
        }
    }
}
