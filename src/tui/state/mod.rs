//! Application state management.

mod app_state;
mod views;

pub use app_state::{AppState, RouteCycle};
pub use views::{ContactField, LoadState, StandingsTab};

/// Available routes in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Races,
    Standings,
    Contact,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[Route::Home, Route::Races, Route::Standings, Route::Contact]
    }
}

impl Route {
    /// Returns the display name of the route.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Races => "Races",
            Route::Standings => "Standings",
            Route::Contact => "Contact",
        }
    }

    /// Returns the next route.
    pub fn next(&self) -> Route {
        match self {
            Route::Home => Route::Races,
            Route::Races => Route::Standings,
            Route::Standings => Route::Contact,
            Route::Contact => Route::Home,
        }
    }

    /// Returns the previous route.
    pub fn prev(&self) -> Route {
        match self {
            Route::Home => Route::Contact,
            Route::Races => Route::Home,
            Route::Standings => Route::Races,
            Route::Contact => Route::Standings,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Editing the contact form.
    Form,
}
