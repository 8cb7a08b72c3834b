//! TUI widgets for pitwall.

mod contact;
mod footer;
mod home;
mod navbar;
mod races;
mod standings;
mod status;

pub use contact::render_contact;
pub use footer::render_footer;
pub use home::render_home;
pub use navbar::render_navbar;
pub use races::render_races;
pub use standings::render_standings;
