//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{FetchError, OpenF1Client, RawConstructor, RawDriver, normalize};
use crate::model::Standings;

use super::event::DataEvent;
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, RouteCycle};

/// Combines the two concurrent standings fetches into one outcome.
/// Either failure fails the whole view; partial data is discarded.
fn combine_standings(
    drivers: Result<Vec<RawDriver>, FetchError>,
    constructors: Result<Vec<RawConstructor>, FetchError>,
) -> Result<Standings, FetchError> {
    match (drivers, constructors) {
        (Ok(drivers), Ok(constructors)) => Ok(normalize::standings(drivers, constructors)),
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

/// Main TUI application.
pub struct App {
    client: OpenF1Client,
    state: AppState,
    events_tx: mpsc::UnboundedSender<DataEvent>,
    events_rx: mpsc::UnboundedReceiver<DataEvent>,
    should_quit: bool,
}

impl App {
    /// Creates a new App backed by the given API client.
    pub fn new(client: OpenF1Client) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            client,
            state: AppState::new(),
            events_tx,
            events_rx,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub async fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal before a panic message is printed
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            default_hook(info);
        }));

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            // Drain completed fetches
            while let Ok(data_event) = self.events_rx.try_recv() {
                self.apply_data_event(data_event);
            }

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()?
                    && key.kind == KeyEventKind::Press
                {
                    match handle_key(&mut self.state, key) {
                        KeyAction::Quit => self.should_quit = true,
                        KeyAction::StartCycle(cycle) => self.spawn_fetch(cycle),
                        KeyAction::None => {}
                    }
                }
            } else if self.state.is_loading() {
                self.state.spinner_frame = self.state.spinner_frame.wrapping_add(1);
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Applies a completed fetch to the view that started it.
    fn apply_data_event(&mut self, data_event: DataEvent) {
        match data_event {
            DataEvent::Races {
                generation,
                outcome,
            } => {
                if let Err(e) = &outcome {
                    warn!(error = %e, "race schedule fetch failed");
                }
                if !self.state.races.data.finish_cycle(generation, outcome) {
                    debug!(generation, "dropped stale race schedule result");
                }
            }
            DataEvent::Standings {
                generation,
                outcome,
            } => {
                if let Err(e) = &outcome {
                    warn!(error = %e, "standings fetch failed");
                }
                if !self.state.standings.data.finish_cycle(generation, outcome) {
                    debug!(generation, "dropped stale standings result");
                }
            }
        }
    }

    /// Spawns the fetch task for a freshly started cycle.
    fn spawn_fetch(&self, cycle: RouteCycle) {
        debug!(?cycle, "fetch cycle started");
        match cycle {
            RouteCycle::Races(generation) => self.spawn_races_fetch(generation),
            RouteCycle::Standings(generation) => self.spawn_standings_fetch(generation),
        }
    }

    fn spawn_races_fetch(&self, generation: u64) {
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = client.sessions().await.map(normalize::sessions);
            let _ = tx.send(DataEvent::Races {
                generation,
                outcome,
            });
        });
    }

    fn spawn_standings_fetch(&self, generation: u64) {
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let (drivers, constructors) = tokio::join!(client.drivers(), client.constructors());
            let outcome = combine_standings(drivers, constructors);
            let _ = tx.send(DataEvent::Standings {
                generation,
                outcome,
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::{LoadState, Route};

    fn app() -> App {
        App::new(OpenF1Client::new("http://localhost:0"))
    }

    #[test]
    fn either_standings_failure_fails_both() {
        let driver = RawDriver {
            driver_number: Some(1),
            ..RawDriver::default()
        };

        let outcome = combine_standings(Ok(vec![driver.clone()]), Err(FetchError::Status(500)));
        assert_eq!(outcome, Err(FetchError::Status(500)));

        let outcome = combine_standings(
            Err(FetchError::Request("connection refused".to_string())),
            Ok(vec![]),
        );
        assert_eq!(
            outcome,
            Err(FetchError::Request("connection refused".to_string()))
        );

        let outcome = combine_standings(Ok(vec![driver]), Ok(vec![]));
        let standings = outcome.expect("both halves succeeded");
        assert_eq!(standings.drivers.len(), 1);
        assert!(standings.constructors.is_empty());
    }

    #[test]
    fn current_generation_result_lands_in_the_view() {
        let mut app = app();
        let Some(RouteCycle::Races(generation)) = app.state.switch_route(Route::Races) else {
            panic!("expected a races cycle");
        };

        app.apply_data_event(DataEvent::Races {
            generation,
            outcome: Ok(vec![]),
        });
        assert_eq!(app.state.races.data.load(), &LoadState::Loaded(vec![]));
    }

    #[test]
    fn stale_result_cannot_overwrite_a_newer_cycle() {
        let mut app = app();
        let Some(RouteCycle::Races(stale)) = app.state.switch_route(Route::Races) else {
            panic!("expected a races cycle");
        };
        // Leaving and re-entering the view starts a newer cycle.
        let _ = app.state.switch_route(Route::Home);
        let Some(RouteCycle::Races(current)) = app.state.switch_route(Route::Races) else {
            panic!("expected a races cycle");
        };
        assert!(current > stale);

        app.apply_data_event(DataEvent::Races {
            generation: stale,
            outcome: Ok(vec![]),
        });
        assert!(app.state.races.data.is_loading());

        app.apply_data_event(DataEvent::Races {
            generation: current,
            outcome: Ok(vec![]),
        });
        assert!(app.state.races.data.loaded().is_some());
    }

    #[test]
    fn failed_standings_fetch_surfaces_the_error_text() {
        let mut app = app();
        let Some(RouteCycle::Standings(generation)) = app.state.switch_route(Route::Standings)
        else {
            panic!("expected a standings cycle");
        };

        app.apply_data_event(DataEvent::Standings {
            generation,
            outcome: Err(FetchError::Status(503)),
        });
        assert_eq!(
            app.state.standings.data.load(),
            &LoadState::Error("server returned HTTP 503".to_string())
        );
    }

    #[test]
    fn result_for_a_left_view_is_dropped() {
        let mut app = app();
        let Some(RouteCycle::Races(generation)) = app.state.switch_route(Route::Races) else {
            panic!("expected a races cycle");
        };
        let _ = app.state.switch_route(Route::Home);

        app.apply_data_event(DataEvent::Races {
            generation,
            outcome: Ok(vec![]),
        });
        // Leaving the view orphaned its cycle; the late result is ignored.
        assert!(app.state.races.data.is_loading());
    }
}
