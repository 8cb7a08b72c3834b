//! Shared formatting helpers for TUI widgets.
//!
//! Pure string formatting only (no ratatui styles, no layout). Anything that
//! turns a model value into a table cell lives here so widgets stay thin.

use chrono::{DateTime, NaiveDateTime};

/// Placeholder for cells with no value.
pub const EMPTY_CELL: &str = "-";

/// Shown when a session date cannot be parsed.
const DATE_FALLBACK: &str = "Date TBC";

/// Formats a session start timestamp for the races table.
///
/// Accepts RFC 3339 (`2024-03-07T14:30:00+00:00`, `...Z`) or a naive
/// `2024-03-07T14:30:00` timestamp, with optional fractional seconds, and
/// renders `"07 Mar 2024 14:30"`. Anything unparsable renders `"Date TBC"`.
pub fn format_session_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DATE_FALLBACK.to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%d %b %Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d %b %Y %H:%M").to_string();
    }
    DATE_FALLBACK.to_string()
}

/// Formats a points value.
///
/// Integral values drop the decimals (`"25"`), fractional keep one
/// (`"25.5"`), absent renders `"-"`.
pub fn format_points(points: Option<f64>) -> String {
    match points {
        Some(p) if p.fract() == 0.0 => format!("{:.0}", p),
        Some(p) => format!("{:.1}", p),
        None => EMPTY_CELL.to_string(),
    }
}

/// Joins the non-empty parts of a driver's name with a space.
/// Both parts absent (or empty) renders `"-"`.
pub fn driver_name(first: Option<&str>, last: Option<&str>) -> String {
    let parts: Vec<&str> = [first, last]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        parts.join(" ")
    }
}

/// Formats an optional integer cell.
pub fn format_opt_i64(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => EMPTY_CELL.to_string(),
    }
}

/// Formats an optional text cell (`"-"` when absent or empty).
pub fn format_opt_str(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_date_parses_rfc3339_with_offset_and_z() {
        assert_eq!(
            format_session_date("2024-03-07T14:30:00+00:00"),
            "07 Mar 2024 14:30"
        );
        assert_eq!(
            format_session_date("2023-09-16T13:30:00Z"),
            "16 Sep 2023 13:30"
        );
    }

    #[test]
    fn session_date_parses_naive_timestamps() {
        assert_eq!(
            format_session_date("2024-03-07T14:30:00"),
            "07 Mar 2024 14:30"
        );
        assert_eq!(
            format_session_date("2024-03-07T14:30:00.000"),
            "07 Mar 2024 14:30"
        );
    }

    #[test]
    fn session_date_tolerates_surrounding_whitespace() {
        assert_eq!(
            format_session_date("  2024-03-07T14:30:00+00:00  "),
            "07 Mar 2024 14:30"
        );
    }

    #[test]
    fn unparsable_session_date_falls_back() {
        assert_eq!(format_session_date("next sunday"), "Date TBC");
        assert_eq!(format_session_date(""), "Date TBC");
        assert_eq!(format_session_date("   "), "Date TBC");
    }

    #[test]
    fn points_drop_decimals_when_integral() {
        assert_eq!(format_points(Some(25.0)), "25");
        assert_eq!(format_points(Some(0.0)), "0");
        assert_eq!(format_points(Some(25.5)), "25.5");
        assert_eq!(format_points(None), "-");
    }

    #[test]
    fn driver_name_joins_available_parts() {
        assert_eq!(driver_name(Some("Max"), Some("Verstappen")), "Max Verstappen");
        assert_eq!(driver_name(None, Some("Verstappen")), "Verstappen");
        assert_eq!(driver_name(Some("Max"), None), "Max");
        assert_eq!(driver_name(None, None), "-");
        assert_eq!(driver_name(Some(""), Some("")), "-");
    }

    #[test]
    fn optional_cells_render_placeholder() {
        assert_eq!(format_opt_i64(Some(44)), "44");
        assert_eq!(format_opt_i64(None), "-");
        assert_eq!(format_opt_str(Some("McLaren")), "McLaren");
        assert_eq!(format_opt_str(Some("")), "-");
        assert_eq!(format_opt_str(None), "-");
    }
}
