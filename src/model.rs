//! Normalized view models rendered by the TUI.
//!
//! These are the shapes the widgets consume. They are produced exclusively by
//! [`crate::api::normalize`]; raw upstream records never reach the renderer.

/// One race-weekend session that passed normalization.
///
/// The string fields are guaranteed non-empty by the normalizer's keep
/// predicate. `date` is carried verbatim (untrimmed) from the upstream
/// `date_start` and parsed only at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceSession {
    pub round: Option<i64>,
    pub date: String,
    pub circuit: String,
    pub country: String,
    pub session: String,
    pub name: String,
}

/// One driver listing row. Every field is optional; missing values render
/// as placeholder cells.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverStanding {
    pub number: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub team: Option<String>,
    pub points: Option<f64>,
    pub headshot_url: Option<String>,
}

/// One constructor listing row.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorStanding {
    pub name: Option<String>,
    pub points: Option<f64>,
}

/// Both standings datasets, delivered together by one fetch cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Standings {
    pub drivers: Vec<DriverStanding>,
    pub constructors: Vec<ConstructorStanding>,
}
