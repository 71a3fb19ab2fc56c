//! `Presenter` capability.

use anyhow::{Result, bail};

use crate::controller::SessionId;
use crate::sheet::Sheet;

/// Draws a sheet and tears it down again.
///
/// Interaction is reported back to the controller by the host as
/// `DialogEvent`s; the presenter itself never settles anything.
pub trait Presenter {
    /// Shows the sheet for `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be displayed.
    fn show(&mut self, session: SessionId, sheet: &Sheet) -> Result<()>;

    /// Removes the sheet for `session` from the screen.
    fn dismiss(&mut self, session: SessionId);
}

/// Headless presenter that records every call.
///
/// Used by tests and by scripted hosts that deliver events without a screen.
#[derive(Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct RecordingPresenter {
    /// Sheets shown, in order.
    pub shown: Vec<(SessionId, Sheet)>,
    /// Sessions dismissed, in order.
    pub dismissed: Vec<SessionId>,
    fail_next_show: bool,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `show` call fail.
    pub const fn fail_next_show(&mut self) {
        self.fail_next_show = true;
    }

    /// The most recently shown sheet.
    #[must_use]
    pub fn last_sheet(&self) -> Option<&Sheet> {
        self.shown.last().map(|(_, sheet)| sheet)
    }

    /// Sessions that were shown and not yet dismissed.
    #[must_use]
    pub fn on_screen(&self) -> Vec<SessionId> {
        self.shown
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| !self.dismissed.contains(id))
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn show(&mut self, session: SessionId, sheet: &Sheet) -> Result<()> {
        if self.fail_next_show {
            self.fail_next_show = false;
            bail!("presenter unavailable");
        }
        self.shown.push((session, sheet.clone()));
        Ok(())
    }

    fn dismiss(&mut self, session: SessionId) {
        self.dismissed.push(session);
    }
}
