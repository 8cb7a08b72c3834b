//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, ContactField, InputMode, Route, RouteCycle, StandingsTab};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// A route switch or retry started a fetch cycle; spawn its fetch.
    StartCycle(RouteCycle),
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Form => handle_form_mode(state, key),
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Route navigation
        KeyCode::Tab => switch(state, state.route.next()),
        KeyCode::BackTab => switch(state, state.route.prev()),
        KeyCode::Char('1') => switch(state, Route::Home),
        KeyCode::Char('2') => switch(state, Route::Races),
        KeyCode::Char('3') => switch(state, Route::Standings),
        KeyCode::Char('4') => switch(state, Route::Contact),

        // Retry the failed fetch cycle (error panel only)
        KeyCode::Char('r') | KeyCode::Char('R') => match state.retry_active() {
            Some(cycle) => KeyAction::StartCycle(cycle),
            None => KeyAction::None,
        },

        // Standings sub-tabs: d/c select directly, arrows toggle
        KeyCode::Char('d') | KeyCode::Char('D') if state.route == Route::Standings => {
            state.standings.switch_tab(StandingsTab::Drivers);
            KeyAction::None
        }
        KeyCode::Char('c') | KeyCode::Char('C') if state.route == Route::Standings => {
            state.standings.switch_tab(StandingsTab::Constructors);
            KeyAction::None
        }
        KeyCode::Left | KeyCode::Right if state.route == Route::Standings => {
            state.standings.switch_tab(state.standings.tab.toggle());
            KeyAction::None
        }

        // Row navigation on the active data table
        KeyCode::Up | KeyCode::Char('k') => {
            match state.route {
                Route::Races => state.races.select_prev(),
                Route::Standings => state.standings.select_prev(),
                Route::Home | Route::Contact => {}
            }
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            match state.route {
                Route::Races => state.races.select_next(),
                Route::Standings => state.standings.select_next(),
                Route::Home | Route::Contact => {}
            }
            KeyAction::None
        }

        // Contact: enter the form
        KeyCode::Enter if state.route == Route::Contact => {
            state.contact.submitted = false;
            state.input_mode = InputMode::Form;
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

fn switch(state: &mut AppState, route: Route) -> KeyAction {
    match state.switch_route(route) {
        Some(cycle) => KeyAction::StartCycle(cycle),
        None => KeyAction::None,
    }
}

/// Handles keys while editing the contact form.
fn handle_form_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            KeyAction::None
        }
        KeyCode::Tab | KeyCode::Down => {
            state.contact.focus = state.contact.focus.next();
            KeyAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.contact.focus = state.contact.focus.prev();
            KeyAction::None
        }
        KeyCode::Enter => {
            // Enter advances fields; on the send button it submits.
            if state.contact.focus == ContactField::Send {
                state.contact.submit();
                state.input_mode = InputMode::Normal;
            } else {
                state.contact.focus = state.contact.focus.next();
            }
            KeyAction::None
        }
        KeyCode::Backspace => {
            if let Some(value) = state.contact.focused_value_mut() {
                value.pop();
            }
            KeyAction::None
        }
        KeyCode::Char(c) => {
            // Ignore control/alt-modified chars
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                return KeyAction::None;
            }
            if let Some(value) = state.contact.focused_value_mut() {
                value.push(c);
            }
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}
