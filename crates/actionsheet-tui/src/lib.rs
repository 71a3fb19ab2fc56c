//! Terminal presenter for actionsheet.
//!
//! Uses `ratatui` + `crossterm` for rendering.

mod presenter;
/// Cursor state of a shown sheet.
pub mod state;
mod ui;

pub use presenter::TerminalPresenter;
pub use state::{Focus, SheetViewState};
