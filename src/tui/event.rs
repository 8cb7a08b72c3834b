//! Events delivered to the UI loop by background fetch tasks.

use crate::api::FetchError;
use crate::model::{RaceSession, Standings};

/// Outcome of one fetch cycle, tagged with the generation it ran under.
///
/// The generation is compared against the owning view's current generation
/// when the event is applied; stale completions are dropped.
#[derive(Debug)]
pub enum DataEvent {
    /// Sessions fetch for the races view completed.
    Races {
        generation: u64,
        outcome: Result<Vec<RaceSession>, FetchError>,
    },
    /// Combined drivers + constructors fetch completed.
    Standings {
        generation: u64,
        outcome: Result<Standings, FetchError>,
    },
}
