//! Defensive extraction from ESPN's loosely-structured JSON.
//!
//! Every function here is total: a missing key, index, or unexpected type
//! drops the smallest enclosing unit (one event, one leader) instead of
//! failing the whole payload.

use serde_json::Value;

use crate::{
    cli::types::{AthleteId, EventId},
    core::settings::CUP_POINTS_STAT,
    espn::types::{EventResult, ScheduleEvent, StandingsEntry},
    EspnError, Result,
};


/// Read `key` as a string, accepting numbers too (ESPN mixes the two for ids).
pub fn string_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a points value as a float and truncate it. Absent, unparseable,
/// or negative values are 0.
pub fn points_value(value: Option<&Value>) -> u32 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(points) if points.is_finite() && points > 0.0 => points.trunc() as u32,
        _ => 0,
    }
}

/// The first ten characters of an ISO timestamp (`YYYY-MM-DD`).
fn date_prefix(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.chars().take(10).collect())
        .unwrap_or_default()
}

/// Build the result for one entry of `eventsStats`, or `None` if any
/// required piece is missing.
fn event_result(event: &Value, athlete_id: &AthleteId, display_name: &str) -> Option<EventResult> {
    let event_id = string_field(event, "id").filter(|id| !id.is_empty())?;
    let event_name = event
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let competitor = event.pointer("/competitions/0/competitors/0")?;

    let position = competitor
        .pointer("/status/position/displayName")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let points = competitor
        .get("stats")
        .and_then(Value::as_array)
        .and_then(|stats| {
            stats
                .iter()
                .find(|s| s.get("name").and_then(Value::as_str) == Some(CUP_POINTS_STAT))
        })
        .map(|stat| points_value(stat.get("value")))
        .unwrap_or(0);

    Some(EventResult {
        event_id: EventId::new(event_id),
        event_name,
        athlete_id: athlete_id.clone(),
        display_name: display_name.to_string(),
        position,
        points,
    })
}

/// Extract every tournament result from one player's stats payload.
///
/// Path: `leaguesStats[0].eventsStats[*].competitions[0].competitors[0]`.
/// Returns an empty list when the payload has no league stats at all.
pub fn extract_event_results(
    payload: &Value,
    athlete_id: &AthleteId,
    display_name: &str,
) -> Vec<EventResult> {
    let Some(events) = payload
        .pointer("/leaguesStats/0/eventsStats")
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    events
        .iter()
        .filter_map(|event| event_result(event, athlete_id, display_name))
        .collect()
}

/// Extract the season calendar from a scoreboard payload.
pub fn extract_schedule(payload: &Value) -> Vec<ScheduleEvent> {
    let Some(calendar) = payload
        .pointer("/leagues/0/calendar")
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    calendar
        .iter()
        .filter(|entry| entry.is_object())
        .map(|entry| ScheduleEvent {
            event_id: EventId::new(string_field(entry, "id").unwrap_or_default()),
            name: entry
                .get("label")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            start_date: date_prefix(entry, "startDate"),
            end_date: date_prefix(entry, "endDate"),
        })
        .collect()
}

/// Extract FedEx Cup standings from a statistics payload.
///
/// Ranks are 1-based positions in the leaders list.
///
/// # Errors
///
/// [`EspnError::CategoryNotFound`] when no `cupPoints` category exists. An
/// empty leaders list is not an error.
pub fn extract_standings(payload: &Value) -> Result<Vec<StandingsEntry>> {
    let category = payload
        .pointer("/stats/categories")
        .and_then(Value::as_array)
        .and_then(|categories| {
            categories
                .iter()
                .find(|c| c.get("name").and_then(Value::as_str) == Some(CUP_POINTS_STAT))
        })
        .ok_or_else(|| EspnError::CategoryNotFound {
            name: CUP_POINTS_STAT.to_string(),
        })?;

    let leaders = category
        .get("leaders")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    Ok(leaders
        .iter()
        .zip(1u32..)
        .map(|(leader, rank)| {
            let athlete = leader.get("athlete");
            StandingsEntry {
                rank,
                athlete_id: AthleteId::new(
                    athlete
                        .and_then(|a| string_field(a, "id"))
                        .unwrap_or_default(),
                ),
                name: athlete
                    .and_then(|a| a.get("displayName"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                fedex_points: points_value(leader.get("value")),
            }
        })
        .collect())
}
