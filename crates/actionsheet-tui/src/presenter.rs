//! `TerminalPresenter`: shows sheets in the alternate screen.

use std::io;
use std::time::Duration;

use actionsheet_core::{DialogEvent, Presenter, SessionId, Sheet};
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::state::SheetViewState;
use super::ui;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Presenter drawing to the controlling terminal.
///
/// The host pumps input with [`TerminalPresenter::next_event`] and forwards
/// returned events to the controller.
#[derive(Default)]
pub struct TerminalPresenter {
    terminal: Option<Term>,
    view: Option<(SessionId, SheetViewState)>,
}

impl std::fmt::Debug for TerminalPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalPresenter")
            .field("active", &self.terminal.is_some())
            .field("session", &self.view.as_ref().map(|(id, _)| *id))
            .finish()
    }
}

impl TerminalPresenter {
    /// Creates a presenter. The terminal is untouched until a sheet is shown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session currently drawn, if any.
    #[must_use]
    pub fn session(&self) -> Option<SessionId> {
        self.view.as_ref().map(|(id, _)| *id)
    }

    /// Waits up to 100 ms for input.
    ///
    /// Navigation keys are handled here. Returns `Some` for input that ends
    /// the session.
    ///
    /// # Errors
    ///
    /// Returns an error if polling, reading, or redrawing fails.
    pub fn next_event(&mut self) -> Result<Option<DialogEvent>> {
        if self.view.is_none() {
            return Ok(None);
        }

        if !event::poll(Duration::from_millis(100)).context("failed to poll events")? {
            return Ok(None);
        }

        match event::read().context("failed to read event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(key.code, key.modifiers)
            }
            Event::Resize(..) => {
                self.redraw()?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// Handles one key press. Returns `Some` to end the session.
    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Result<Option<DialogEvent>> {
        let Some((_, state)) = self.view.as_mut() else {
            return Ok(None);
        };

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(DialogEvent::Dismiss)),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Some(DialogEvent::Dismiss));
            }
            KeyCode::Enter | KeyCode::Char(' ') => return Ok(state.activate()),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                return Ok(c.to_digit(10).and_then(|d| state.shortcut(d)));
            }
            KeyCode::Up | KeyCode::Char('k') => state.move_up(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => state.move_down(),
            _ => return Ok(None),
        }

        self.redraw()?;
        Ok(None)
    }

    /// Draws the current view.
    fn redraw(&mut self) -> Result<()> {
        if let (Some(terminal), Some((_, state))) = (self.terminal.as_mut(), self.view.as_ref()) {
            terminal
                .draw(|frame| ui::draw(frame, state))
                .context("failed to draw sheet")?;
        }
        Ok(())
    }

    /// Enters raw mode and the alternate screen.
    fn enter(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            return Ok(());
        }

        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = crossterm::execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("failed to enter alternate screen");
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => {
                self.terminal = Some(terminal);
                Ok(())
            }
            Err(e) => {
                let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(e).context("failed to create terminal")
            }
        }
    }

    /// Restores the terminal if this presenter changed it.
    fn leave(&mut self) -> Result<()> {
        if self.terminal.take().is_none() {
            return Ok(());
        }
        // Cleanup (always attempt both steps)
        let raw = disable_raw_mode().context("failed to disable raw mode");
        crossterm::execute!(io::stdout(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        raw
    }
}

impl Presenter for TerminalPresenter {
    fn show(&mut self, session: SessionId, sheet: &Sheet) -> Result<()> {
        self.enter()?;
        self.view = Some((session, SheetViewState::new(sheet.clone())));
        if let Err(e) = self.redraw() {
            self.view = None;
            let _ = self.leave();
            return Err(e);
        }
        tracing::debug!(session = %session, "Sheet drawn");
        Ok(())
    }

    fn dismiss(&mut self, session: SessionId) {
        if self.session() == Some(session) {
            self.view = None;
        }
        if let Err(e) = self.leave() {
            tracing::warn!(error = %e, "Failed to restore terminal");
        }
    }
}

impl Drop for TerminalPresenter {
    fn drop(&mut self) {
        if let Err(e) = self.leave() {
            tracing::warn!(error = %e, "Failed to restore terminal");
        }
    }
}
