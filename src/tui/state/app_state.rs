//! Top-level application state and route switching.

use super::views::{ContactView, RacesView, StandingsView};
use super::{InputMode, Route};

/// Fetch cycle requested by a route switch or a retry.
///
/// Carries the generation the cycle runs under; the caller spawns the
/// matching fetch task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteCycle {
    Races(u64),
    Standings(u64),
}

/// Top-level TUI state shared by input handling and rendering.
pub struct AppState {
    /// Active route.
    pub route: Route,
    /// Input mode (Form while editing the contact form).
    pub input_mode: InputMode,
    pub races: RacesView,
    pub standings: StandingsView,
    pub contact: ContactView,
    /// Spinner animation frame, advanced on tick while the active view loads.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: Route::Home,
            input_mode: InputMode::Normal,
            races: RacesView::default(),
            standings: StandingsView::default(),
            contact: ContactView::default(),
            spinner_frame: 0,
        }
    }

    /// Switches the active route.
    ///
    /// Same-route switches are no-ops. Entering a data view always begins a
    /// fresh fetch cycle (previous rows are discarded at this instant); the
    /// returned [`RouteCycle`] tells the caller which fetch to spawn. Leaving
    /// a data view orphans its in-flight cycle so a late completion cannot
    /// write into hidden state. Entering the contact view resets the form.
    pub fn switch_route(&mut self, route: Route) -> Option<RouteCycle> {
        if self.route == route {
            return None;
        }
        match self.route {
            Route::Races => self.races.data.invalidate(),
            Route::Standings => self.standings.data.invalidate(),
            Route::Home | Route::Contact => {}
        }
        self.route = route;
        self.input_mode = InputMode::Normal;
        match route {
            Route::Home => None,
            Route::Races => Some(RouteCycle::Races(self.races.activate())),
            Route::Standings => Some(RouteCycle::Standings(self.standings.activate())),
            Route::Contact => {
                self.contact.reset();
                None
            }
        }
    }

    /// Re-runs the fetch cycle for the active data view. Only available from
    /// the error panel; anywhere else this is a no-op.
    pub fn retry_active(&mut self) -> Option<RouteCycle> {
        match self.route {
            Route::Races if self.races.data.is_error() => {
                Some(RouteCycle::Races(self.races.activate()))
            }
            Route::Standings if self.standings.data.is_error() => {
                Some(RouteCycle::Standings(self.standings.activate()))
            }
            _ => None,
        }
    }

    /// True when the active route has a fetch cycle in flight.
    pub fn is_loading(&self) -> bool {
        match self.route {
            Route::Races => self.races.data.is_loading(),
            Route::Standings => self.standings.data.is_loading(),
            Route::Home | Route::Contact => false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crate::model::Standings;

    #[test]
    fn starts_on_home_without_a_cycle() {
        let state = AppState::new();
        assert_eq!(state.route, Route::Home);
        assert!(!state.is_loading());
    }

    #[test]
    fn entering_a_data_view_starts_a_cycle() {
        let mut state = AppState::new();
        let cycle = state.switch_route(Route::Races);
        assert_eq!(cycle, Some(RouteCycle::Races(1)));
        assert!(state.races.data.is_loading());
        assert!(state.is_loading());
    }

    #[test]
    fn same_route_switch_is_a_noop() {
        let mut state = AppState::new();
        let first = state.switch_route(Route::Standings);
        assert_eq!(first, Some(RouteCycle::Standings(1)));
        assert_eq!(state.switch_route(Route::Standings), None);
    }

    #[test]
    fn reentering_a_data_view_always_refetches() {
        let mut state = AppState::new();
        let Some(RouteCycle::Races(first)) = state.switch_route(Route::Races) else {
            panic!("expected a races cycle");
        };
        state
            .races
            .data
            .finish_cycle(first, Ok(vec![]));

        state.switch_route(Route::Home);
        let second = state.switch_route(Route::Races);
        // New cycle, new generation, previous rows discarded.
        assert!(matches!(second, Some(RouteCycle::Races(g)) if g > first));
        assert!(state.races.data.is_loading());
    }

    #[test]
    fn leaving_a_data_view_orphans_its_cycle() {
        let mut state = AppState::new();
        let Some(RouteCycle::Standings(generation)) = state.switch_route(Route::Standings) else {
            panic!("expected a standings cycle");
        };
        state.switch_route(Route::Home);

        let applied = state
            .standings
            .data
            .finish_cycle(generation, Ok(Standings::default()));
        assert!(!applied);
        assert!(state.standings.data.is_loading());
    }

    #[test]
    fn retry_only_fires_from_an_error_state() {
        let mut state = AppState::new();
        assert_eq!(state.retry_active(), None);

        let Some(RouteCycle::Races(generation)) = state.switch_route(Route::Races) else {
            panic!("expected a races cycle");
        };
        // Loading: no retry yet.
        assert_eq!(state.retry_active(), None);

        state
            .races
            .data
            .finish_cycle(generation, Err(FetchError::Status(500)));
        let retry = state.retry_active();
        assert!(matches!(retry, Some(RouteCycle::Races(g)) if g > generation));
        assert!(state.races.data.is_loading());
    }

    #[test]
    fn entering_contact_resets_the_form() {
        let mut state = AppState::new();
        state.switch_route(Route::Contact);
        state.contact.name.push_str("Jo");
        state.contact.submitted = true;

        state.switch_route(Route::Home);
        state.switch_route(Route::Contact);
        assert!(state.contact.name.is_empty());
        assert!(!state.contact.submitted);
    }

    #[test]
    fn route_switch_leaves_form_mode() {
        let mut state = AppState::new();
        state.switch_route(Route::Contact);
        state.input_mode = InputMode::Form;

        state.switch_route(Route::Home);
        assert_eq!(state.input_mode, InputMode::Normal);
    }
}
