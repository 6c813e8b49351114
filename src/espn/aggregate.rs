//! Tournament result aggregation.
//!
//! Walks the roster once, pulls each player's stats through a
//! [`PlayerStatsSource`], and folds the extracted per-event results into one
//! leaderboard per tournament. A player whose fetch fails is logged and
//! skipped; everyone else still lands in the output.

use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::{
    cli::types::{AthleteId, EventId, Season},
    espn::{
        client::PlayerStatsSource,
        extract::extract_event_results,
        types::{EventResult, PlayerRef, TournamentResultSet},
    },
};


/// Log a progress line every this many players.
const PROGRESS_EVERY: usize = 10;

/// In-progress grouping of event results by tournament.
#[derive(Debug, Default)]
pub struct TournamentAccumulator {
    groups: BTreeMap<EventId, TournamentResultSet>,
}

impl TournamentAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one result to its tournament's group.
    ///
    /// The group is created on first sight and keeps the event name from
    /// that first result. Returns `false` if the athlete already has a
    /// result in this group, in which case the new one is dropped.
    pub fn add(&mut self, result: EventResult) -> bool {
        let group = self
            .groups
            .entry(result.event_id.clone())
            .or_insert_with(|| {
                TournamentResultSet::new(result.event_id.clone(), result.event_name.clone())
            });

        if group
            .results
            .iter()
            .any(|existing| existing.athlete_id == result.athlete_id)
        {
            debug!(
                "Ignoring duplicate result for athlete {} in event {}",
                result.athlete_id, result.event_id
            );
            return false;
        }

        group.results.push(result);
        true
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drop empty groups and rank the rest by placement.
    pub fn finalize(mut self) -> BTreeMap<EventId, TournamentResultSet> {
        self.groups.retain(|_, group| !group.results.is_empty());
        self.groups
            .par_iter_mut()
            .for_each(|(_, group)| group.sort_by_placement());
        self.groups
    }
}

/// Outcome of one roster pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationReport {
    /// Finalized leaderboards keyed by event id.
    pub tournaments: BTreeMap<EventId, TournamentResultSet>,
    /// Players whose stats were fetched successfully.
    pub players_fetched: usize,
    /// Players skipped because their fetch failed.
    pub players_failed: Vec<AthleteId>,
}

/// Aggregate per-tournament results for the first `max_players` roster entries.
///
/// Roster order decides who is included when truncating. Fetch failures are
/// recovered here and never abort the pass.
pub async fn aggregate_tournament_results<S: PlayerStatsSource>(
    source: &S,
    roster: &[PlayerRef],
    max_players: usize,
    season: Season,
) -> AggregationReport {
    let roster = &roster[..roster.len().min(max_players)];
    info!("Aggregating tournament results for {} players", roster.len());

    let mut accumulator = TournamentAccumulator::new();
    let mut players_fetched = 0;
    let mut players_failed = Vec::new();

    for (i, player) in roster.iter().enumerate() {
        if (i + 1) % PROGRESS_EVERY == 0 {
            info!("Progress: {}/{} players processed", i + 1, roster.len());
        }

        match source.fetch_player_stats(&player.athlete_id, season).await {
            Ok(payload) => {
                players_fetched += 1;
                let results =
                    extract_event_results(&payload, &player.athlete_id, &player.display_name);
                debug!(
                    "{} results for {} ({})",
                    results.len(),
                    player.display_name,
                    player.athlete_id
                );
                for result in results {
                    accumulator.add(result);
                }
            }
            Err(e) => {
                warn!(
                    "Failed to fetch stats for {} ({}): {}",
                    player.display_name, player.athlete_id, e
                );
                players_failed.push(player.athlete_id.clone());
            }
        }
    }

    let tournaments = accumulator.finalize();
    info!(
        "Aggregated {} tournaments from {} players ({} failed)",
        tournaments.len(),
        players_fetched,
        players_failed.len()
    );

    AggregationReport {
        tournaments,
        players_fetched,
        players_failed,
    }
}
