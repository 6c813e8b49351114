//! Unit tests for ESPN golf types

use super::*;
use serde_json::json;

fn result_at(athlete: &str, position: &str) -> EventResult {
    EventResult {
        event_id: EventId::new("401703489"),
        event_name: "The Sentry".to_string(),
        athlete_id: AthleteId::new(athlete),
        display_name: format!("Player {athlete}"),
        position: position.to_string(),
        points: 0,
    }
}

fn positions(set: &TournamentResultSet) -> Vec<&str> {
    set.results.iter().map(|r| r.position.as_str()).collect()
}

#[cfg(test)]
mod placement_tests {
    use super::*;

    #[test]
    fn test_parse_plain_rank() {
        assert_eq!(
            Placement::parse("1"),
            Placement {
                rank: Some(1),
                tied: false
            }
        );
    }

    #[test]
    fn test_parse_tied_rank() {
        assert_eq!(
            Placement::parse("T5"),
            Placement {
                rank: Some(5),
                tied: true
            }
        );
    }

    #[test]
    fn test_parse_non_numeric_codes() {
        for raw in ["CUT", "WD", "DQ", "", "T", "-"] {
            let placement = Placement::parse(raw);
            assert_eq!(placement.rank, None, "{raw}");
            assert!(!placement.tied, "{raw}");
            assert_eq!(placement.sort_key(), UNRANKED);
        }
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(Placement::parse(" T12 ").rank, Some(12));
    }
}

#[cfg(test)]
mod ranking_tests {
    use super::*;

    #[test]
    fn test_sort_mixed_positions() {
        let mut set = TournamentResultSet::new(EventId::new("1"), "Event");
        for (athlete, position) in [("a", "T5"), ("b", "3"), ("c", "CUT"), ("d", "1"), ("e", "T5")]
        {
            set.results.push(result_at(athlete, position));
        }

        set.sort_by_placement();

        assert_eq!(positions(&set), vec!["1", "3", "T5", "T5", "CUT"]);
        // ties keep encounter order
        assert_eq!(set.results[2].athlete_id.as_str(), "a");
        assert_eq!(set.results[3].athlete_id.as_str(), "e");
    }

    #[test]
    fn test_sort_is_numeric_not_lexical() {
        let mut set = TournamentResultSet::new(EventId::new("1"), "Event");
        for (athlete, position) in [("a", "10"), ("b", "2"), ("c", "1")] {
            set.results.push(result_at(athlete, position));
        }

        set.sort_by_placement();

        assert_eq!(positions(&set), vec!["1", "2", "10"]);
    }

    #[test]
    fn test_sort_two_entries() {
        let mut set = TournamentResultSet::new(EventId::new("1"), "Event");
        set.results.push(result_at("a", "2"));
        set.results.push(result_at("b", "1"));

        set.sort_by_placement();

        assert_eq!(positions(&set), vec!["1", "2"]);
    }

    #[test]
    fn test_unranked_keep_encounter_order() {
        let mut set = TournamentResultSet::new(EventId::new("1"), "Event");
        for (athlete, position) in [("a", "WD"), ("b", "CUT"), ("c", "4")] {
            set.results.push(result_at(athlete, position));
        }

        set.sort_by_placement();

        assert_eq!(positions(&set), vec!["4", "WD", "CUT"]);
    }
}

#[cfg(test)]
mod serialization_tests {
    use super::*;

    #[test]
    fn test_tournament_result_set_file_layout() {
        let mut set = TournamentResultSet::new(EventId::new("401703489"), "The Sentry");
        set.results.push(EventResult {
            points: 700,
            ..result_at("9478", "1")
        });

        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(
            value,
            json!({
                "event_id": "401703489",
                "name": "The Sentry",
                "results": [{
                    "athlete_id": "9478",
                    "name": "Player 9478",
                    "position": "1",
                    "fedex_points": 700
                }]
            })
        );
    }

    #[test]
    fn test_standings_deserialize_with_missing_fields() {
        let standings: Standings = serde_json::from_value(json!({
            "season": 2026,
            "standings": [
                {
                    "rank": 1,
                    "athlete_id": "9478",
                    "name": "Scottie Scheffler",
                    "fedex_points": 2000
                },
                {"athlete_id": "10140"}
            ],
            "last_updated": "2026-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(standings.season, Season::new(2026));
        assert_eq!(standings.standings.len(), 2);
        assert_eq!(standings.standings[1].rank, 0);
        assert_eq!(standings.standings[1].name, "");
    }

    #[test]
    fn test_standings_entry_without_athlete_id_defaults_to_empty() {
        let entry: StandingsEntry =
            serde_json::from_value(json!({"rank": 4, "name": "Unknown"})).unwrap();

        assert_eq!(entry.rank, 4);
        assert_eq!(entry.athlete_id, AthleteId::default());
        assert!(entry.athlete_id.as_str().is_empty());
        assert_eq!(entry.fedex_points, 0);
    }

    #[test]
    fn test_standings_without_list_is_empty() {
        let standings: Standings = serde_json::from_value(json!({"season": 2026})).unwrap();
        assert!(standings.standings.is_empty());
    }

    #[test]
    fn test_player_ref_from_standings_entry() {
        let entry = StandingsEntry {
            rank: 3,
            athlete_id: AthleteId::new("4848"),
            name: "Justin Thomas".to_string(),
            fedex_points: 900,
        };

        let player = PlayerRef::from(&entry);
        assert_eq!(player, PlayerRef::new("4848", "Justin Thomas"));
    }
}
