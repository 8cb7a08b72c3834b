//! Per-view state: the two remote data views and the contact form.

use ratatui::widgets::TableState;

use crate::api::FetchError;
use crate::model::{DriverStanding, RaceSession, Standings};

/// Mutually exclusive display states of a remote data view.
///
/// The renderer shows exactly one of a spinner panel, an error panel, or the
/// data table(s); there is no state where data and an error coexist.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Fetch cycle in flight, nothing to show yet.
    Loading,
    /// Fetch cycle failed; the message is shown in the error panel.
    Error(String),
    /// Fetch cycle completed with normalized rows.
    Loaded(T),
}

/// Load state of one remote list view plus the fetch-cycle generation used
/// to drop stale completions.
///
/// The generation only moves forward. `begin_cycle` discards whatever was
/// loaded; `invalidate` orphans an in-flight cycle without touching the
/// visible state (used when the view is left while a fetch is pending).
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteData<T> {
    generation: u64,
    load: LoadState<T>,
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            load: LoadState::Loading,
        }
    }
}

impl<T> RemoteData<T> {
    /// Starts a new fetch cycle and returns the generation it runs under.
    pub fn begin_cycle(&mut self) -> u64 {
        self.generation += 1;
        self.load = LoadState::Loading;
        self.generation
    }

    /// Orphans the current cycle. A completion carrying an older generation
    /// will be dropped by [`RemoteData::finish_cycle`].
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Applies a fetch outcome if it belongs to the current cycle.
    /// Returns `false` when the completion was stale and dropped.
    pub fn finish_cycle(&mut self, generation: u64, outcome: Result<T, FetchError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.load = match outcome {
            Ok(data) => LoadState::Loaded(data),
            Err(e) => LoadState::Error(e.to_string()),
        };
        true
    }

    pub fn load(&self) -> &LoadState<T> {
        &self.load
    }

    pub fn loaded(&self) -> Option<&T> {
        match &self.load {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.load, LoadState::Error(_))
    }
}

/// Races view: fetched sessions plus table selection.
#[derive(Debug, Default)]
pub struct RacesView {
    pub data: RemoteData<Vec<RaceSession>>,
    pub table: TableState,
}

impl RacesView {
    /// Renderable row count (0 unless loaded).
    pub fn len(&self) -> usize {
        self.data.loaded().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Begins a fresh fetch cycle and clears the selection.
    pub fn activate(&mut self) -> u64 {
        self.table = TableState::default();
        self.data.begin_cycle()
    }

    pub fn select_next(&mut self) {
        let len = self.len();
        select_next_in(&mut self.table, len);
    }

    pub fn select_prev(&mut self) {
        let len = self.len();
        select_prev_in(&mut self.table, len);
    }
}

/// Sub-tabs of the standings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StandingsTab {
    #[default]
    Drivers,
    Constructors,
}

impl StandingsTab {
    /// Returns the display name of the sub-tab.
    pub fn name(&self) -> &'static str {
        match self {
            StandingsTab::Drivers => "Drivers",
            StandingsTab::Constructors => "Constructors",
        }
    }

    /// Returns the other sub-tab.
    pub fn toggle(&self) -> StandingsTab {
        match self {
            StandingsTab::Drivers => StandingsTab::Constructors,
            StandingsTab::Constructors => StandingsTab::Drivers,
        }
    }
}

/// Standings view: one fetch cycle feeds two sub-tabbed tables.
///
/// Loading and error states apply to the view as a whole; switching sub-tabs
/// never refetches.
#[derive(Debug, Default)]
pub struct StandingsView {
    pub data: RemoteData<Standings>,
    pub tab: StandingsTab,
    pub drivers_table: TableState,
    pub constructors_table: TableState,
}

impl StandingsView {
    /// Begins a fresh fetch cycle; the sub-tab returns to Drivers and both
    /// selections are cleared.
    pub fn activate(&mut self) -> u64 {
        self.tab = StandingsTab::Drivers;
        self.drivers_table = TableState::default();
        self.constructors_table = TableState::default();
        self.data.begin_cycle()
    }

    pub fn switch_tab(&mut self, tab: StandingsTab) {
        self.tab = tab;
    }

    /// Row count of the active sub-tab's table.
    pub fn active_len(&self) -> usize {
        match (self.data.loaded(), self.tab) {
            (Some(s), StandingsTab::Drivers) => s.drivers.len(),
            (Some(s), StandingsTab::Constructors) => s.constructors.len(),
            (None, _) => 0,
        }
    }

    /// The driver behind the current drivers-table selection.
    pub fn selected_driver(&self) -> Option<&DriverStanding> {
        let idx = self.drivers_table.selected()?;
        self.data.loaded()?.drivers.get(idx)
    }

    pub fn select_next(&mut self) {
        let len = self.active_len();
        select_next_in(self.active_table_mut(), len);
    }

    pub fn select_prev(&mut self) {
        let len = self.active_len();
        select_prev_in(self.active_table_mut(), len);
    }

    fn active_table_mut(&mut self) -> &mut TableState {
        match self.tab {
            StandingsTab::Drivers => &mut self.drivers_table,
            StandingsTab::Constructors => &mut self.constructors_table,
        }
    }
}

fn select_next_in(table: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let next = match table.selected() {
        Some(i) if i + 1 < len => i + 1,
        Some(i) => i.min(len - 1),
        None => 0,
    };
    table.select(Some(next));
}

fn select_prev_in(table: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let prev = match table.selected() {
        Some(i) => i.saturating_sub(1).min(len - 1),
        None => 0,
    };
    table.select(Some(prev));
}

/// Focusable elements of the contact form, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
    Send,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
            ContactField::Send => "Send",
        }
    }

    pub fn next(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Subject,
            ContactField::Subject => ContactField::Message,
            ContactField::Message => ContactField::Send,
            ContactField::Send => ContactField::Name,
        }
    }

    pub fn prev(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Send,
            ContactField::Email => ContactField::Name,
            ContactField::Subject => ContactField::Email,
            ContactField::Message => ContactField::Subject,
            ContactField::Send => ContactField::Message,
        }
    }
}

/// Local state of the contact form. Nothing here ever leaves the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactView {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focus: ContactField,
    pub submitted: bool,
}

impl ContactView {
    /// Mount-fresh state: empty fields, focus on the first field.
    pub fn reset(&mut self) {
        *self = ContactView::default();
    }

    /// The text buffer behind the focused field, if it is editable.
    pub fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Subject => Some(&mut self.subject),
            ContactField::Message => Some(&mut self.message),
            ContactField::Send => None,
        }
    }

    /// Read access to a field's buffer (empty for the send button).
    pub fn field_value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
            ContactField::Send => "",
        }
    }

    /// Submits the form: clears the fields and records the confirmation.
    pub fn submit(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.focus = ContactField::Name;
        self.submitted = true;
    }
}
