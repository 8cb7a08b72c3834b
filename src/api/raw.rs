//! Raw OpenF1 record shapes as they arrive on the wire.
//!
//! Every field is optional: absent or `null` JSON values decode to `None`
//! instead of failing the whole body. A field of the wrong JSON type still
//! fails the array decode, which surfaces as a fetch failure.

use serde::Deserialize;

/// One record from `GET /sessions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSession {
    pub date_start: Option<String>,
    pub location: Option<String>,
    pub country_name: Option<String>,
    pub session_type: Option<String>,
    pub session_name: Option<String>,
    pub round: Option<i64>,
}

/// One record from `GET /drivers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDriver {
    pub driver_number: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub team_name: Option<String>,
    pub session_key: Option<f64>,
    pub headshot_url: Option<String>,
}

/// One record from `GET /constructors`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConstructor {
    pub name: Option<String>,
    pub points: Option<f64>,
}
