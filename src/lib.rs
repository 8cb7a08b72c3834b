//! pitwall - Formula 1 schedule and standings in the terminal.
//!
//! This library provides the pieces wired together by the `pitwall` binary:
//! - `api` - OpenF1 HTTP client and record normalizers
//! - `model` - normalized view models
//! - `fmt` - display formatting helpers
//! - `tui` - the interactive terminal front-end

pub mod api;
pub mod fmt;
pub mod model;
pub mod tui;
