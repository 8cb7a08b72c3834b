//! Normalizers from raw OpenF1 records to view models.
//!
//! Sessions are filtered: records missing any field the races table renders
//! are dropped. Drivers and constructors map totally, one row out per row in,
//! with upstream order preserved in all three cases.

use tracing::debug;

use crate::model::{ConstructorStanding, DriverStanding, RaceSession, Standings};

use super::raw::{RawConstructor, RawDriver, RawSession};

/// JS-truthiness for an optional string: present and non-empty.
/// A whitespace-only value counts as present.
fn non_empty(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some(s) if !s.is_empty())
}

/// Keep predicate for raw sessions.
///
/// `date_start` must be non-empty after trimming; the four text fields must
/// be non-empty without trimming. `round` is not required.
fn is_renderable(raw: &RawSession) -> bool {
    raw.date_start
        .as_deref()
        .is_some_and(|d| !d.trim().is_empty())
        && non_empty(&raw.location)
        && non_empty(&raw.country_name)
        && non_empty(&raw.session_type)
        && non_empty(&raw.session_name)
}

/// Filters and maps raw sessions into races-table rows.
///
/// Survivors carry their upstream field values verbatim; in particular the
/// date string is not trimmed here, only validated.
pub fn sessions(raw: Vec<RawSession>) -> Vec<RaceSession> {
    let total = raw.len();
    let rows: Vec<RaceSession> = raw
        .into_iter()
        .filter(is_renderable)
        .map(|r| RaceSession {
            round: r.round,
            date: r.date_start.unwrap_or_default(),
            circuit: r.location.unwrap_or_default(),
            country: r.country_name.unwrap_or_default(),
            session: r.session_type.unwrap_or_default(),
            name: r.session_name.unwrap_or_default(),
        })
        .collect();
    if rows.len() < total {
        debug!(
            dropped = total - rows.len(),
            total, "dropped incomplete session records"
        );
    }
    rows
}

/// Maps raw drivers into listing rows, one per record.
pub fn drivers(raw: Vec<RawDriver>) -> Vec<DriverStanding> {
    raw.into_iter()
        .map(|r| DriverStanding {
            number: r.driver_number,
            first_name: r.first_name,
            last_name: r.last_name,
            team: r.team_name,
            // The drivers endpoint carries no points; the session key fills
            // that column.
            points: r.session_key,
            headshot_url: r.headshot_url,
        })
        .collect()
}

/// Maps raw constructors into listing rows, one per record.
pub fn constructors(raw: Vec<RawConstructor>) -> Vec<ConstructorStanding> {
    raw.into_iter()
        .map(|r| ConstructorStanding {
            name: r.name,
            points: r.points,
        })
        .collect()
}

/// Builds the combined standings payload from both raw datasets.
pub fn standings(
    raw_drivers: Vec<RawDriver>,
    raw_constructors: Vec<RawConstructor>,
) -> Standings {
    Standings {
        drivers: drivers(raw_drivers),
        constructors: constructors(raw_constructors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_session(name: &str) -> RawSession {
        RawSession {
            date_start: Some("2024-03-07T14:30:00+00:00".to_string()),
            location: Some("Sakhir".to_string()),
            country_name: Some("Bahrain".to_string()),
            session_type: Some("Race".to_string()),
            session_name: Some(name.to_string()),
            round: Some(1),
        }
    }

    #[test]
    fn keeps_complete_sessions_and_drops_incomplete() {
        let incomplete = RawSession {
            date_start: Some(String::new()),
            ..full_session("Sprint")
        };
        let rows = sessions(vec![full_session("Race"), incomplete]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Race");
    }

    #[test]
    fn whitespace_only_date_is_dropped() {
        let raw = RawSession {
            date_start: Some("   ".to_string()),
            ..full_session("Race")
        };
        assert!(sessions(vec![raw]).is_empty());
    }

    #[test]
    fn missing_date_is_dropped() {
        let raw = RawSession {
            date_start: None,
            ..full_session("Race")
        };
        assert!(sessions(vec![raw]).is_empty());
    }

    #[test]
    fn empty_location_is_dropped_but_whitespace_location_kept() {
        let empty = RawSession {
            location: Some(String::new()),
            ..full_session("Race")
        };
        assert!(sessions(vec![empty]).is_empty());

        // The text fields are not trimmed, so a whitespace value passes.
        let spaces = RawSession {
            location: Some(" ".to_string()),
            ..full_session("Race")
        };
        let rows = sessions(vec![spaces]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].circuit, " ");
    }

    #[test]
    fn every_required_text_field_is_checked() {
        for strip in 0..4 {
            let mut raw = full_session("Race");
            match strip {
                0 => raw.location = None,
                1 => raw.country_name = None,
                2 => raw.session_type = None,
                _ => raw.session_name = None,
            }
            assert!(sessions(vec![raw]).is_empty(), "field {} not checked", strip);
        }
    }

    #[test]
    fn session_fields_carry_over_verbatim() {
        let raw = RawSession {
            date_start: Some("  2024-03-07T14:30:00+00:00  ".to_string()),
            ..full_session("Qualifying")
        };
        let rows = sessions(vec![raw]);
        // Validation trims, the mapped value does not.
        assert_eq!(rows[0].date, "  2024-03-07T14:30:00+00:00  ");
        assert_eq!(rows[0].circuit, "Sakhir");
        assert_eq!(rows[0].country, "Bahrain");
        assert_eq!(rows[0].session, "Race");
        assert_eq!(rows[0].name, "Qualifying");
        assert_eq!(rows[0].round, Some(1));
    }

    #[test]
    fn missing_round_is_allowed() {
        let raw = RawSession {
            round: None,
            ..full_session("Race")
        };
        let rows = sessions(vec![raw]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].round, None);
    }

    #[test]
    fn upstream_order_is_preserved() {
        let rows = sessions(vec![
            full_session("Practice 1"),
            full_session("Qualifying"),
            full_session("Race"),
        ]);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Practice 1", "Qualifying", "Race"]);
    }

    #[test]
    fn empty_input_normalizes_to_empty_output() {
        assert!(sessions(Vec::new()).is_empty());
        assert!(drivers(Vec::new()).is_empty());
        assert!(constructors(Vec::new()).is_empty());
    }

    #[test]
    fn drivers_map_is_total() {
        let raw = vec![
            RawDriver {
                driver_number: Some(1),
                first_name: Some("Max".to_string()),
                last_name: Some("Verstappen".to_string()),
                team_name: Some("Red Bull Racing".to_string()),
                session_key: Some(9158.0),
                headshot_url: Some("https://example.com/max.png".to_string()),
            },
            RawDriver::default(),
        ];
        let rows = drivers(raw);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, Some(1));
        assert_eq!(rows[0].points, Some(9158.0));
        assert_eq!(
            rows[0].headshot_url.as_deref(),
            Some("https://example.com/max.png")
        );
        // A fully empty record still produces a row.
        assert_eq!(rows[1].number, None);
        assert_eq!(rows[1].first_name, None);
        assert_eq!(rows[1].points, None);
    }

    #[test]
    fn constructors_map_is_total() {
        let raw = vec![
            RawConstructor {
                name: Some("McLaren".to_string()),
                points: Some(285.5),
            },
            RawConstructor::default(),
        ];
        let rows = constructors(raw);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name.as_deref(), Some("McLaren"));
        assert_eq!(rows[0].points, Some(285.5));
        assert_eq!(rows[1].name, None);
    }

    #[test]
    fn standings_combines_both_datasets() {
        let combined = standings(
            vec![RawDriver::default(), RawDriver::default()],
            vec![RawConstructor::default()],
        );
        assert_eq!(combined.drivers.len(), 2);
        assert_eq!(combined.constructors.len(), 1);
    }
}
