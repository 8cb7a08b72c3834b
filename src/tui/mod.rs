//! Terminal User Interface for pitwall.
//!
//! This module provides an interactive TUI for browsing the Formula 1
//! season schedule and championship standings fetched from the OpenF1 API.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, Route};
