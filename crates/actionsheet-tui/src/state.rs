//! Sheet cursor state.

use actionsheet_core::{DialogEvent, Sheet};

/// What the cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// An option row.
    Row(usize),
    /// The cancel row.
    Cancel,
    /// Nothing selectable (no rows, no cancel row).
    Empty,
}

/// View state for one shown sheet.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct SheetViewState {
    /// The sheet being drawn.
    pub sheet: Sheet,
    /// Cursor over option rows followed by the cancel row.
    pub cursor: usize,
}

impl SheetViewState {
    /// Creates state with the cursor on the first entry.
    #[must_use]
    pub const fn new(sheet: Sheet) -> Self {
        Self { sheet, cursor: 0 }
    }

    /// Number of cursor stops (option rows plus the cancel row).
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn stops(&self) -> usize {
        self.sheet.row_count() + usize::from(self.sheet.has_cancel_row())
    }

    /// What the cursor currently points at.
    #[must_use]
    pub fn focus(&self) -> Focus {
        if self.cursor < self.sheet.row_count() {
            Focus::Row(self.cursor)
        } else if self.sheet.has_cancel_row() {
            Focus::Cancel
        } else {
            Focus::Empty
        }
    }

    /// Moves the cursor up, stopping at the first entry.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Moves the cursor down, stopping at the last entry.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.stops() {
            self.cursor += 1;
        }
    }

    /// Event for activating the focused entry.
    #[must_use]
    pub fn activate(&self) -> Option<DialogEvent> {
        match self.focus() {
            Focus::Row(position) => Some(DialogEvent::OptionTap(position)),
            Focus::Cancel => Some(DialogEvent::CancelTap),
            Focus::Empty => None,
        }
    }

    /// Event for a 1-based digit shortcut, if that row exists.
    #[must_use]
    pub fn shortcut(&self, digit: u32) -> Option<DialogEvent> {
        let position = usize::try_from(digit.checked_sub(1)?).ok()?;
        (position < self.sheet.row_count()).then_some(DialogEvent::OptionTap(position))
    }
}

#[cfg(test)]
mod tests {
    use actionsheet_core::SelectionRequest;

    use super::*;

    fn make_state(cancel: bool) -> SheetViewState {
        let mut request = SelectionRequest::new(["Copy", "Move", "Delete"]);
        if cancel {
            request = request.with_cancel_label("Cancel");
        }
        SheetViewState::new(Sheet::from_request(&request))
    }

    #[test]
    fn test_initial_state() {
        // Arrange & Act
        let state = make_state(true);

        // Assert
        assert_eq!(state.cursor, 0);
        assert_eq!(state.stops(), 4);
        assert_eq!(state.focus(), Focus::Row(0));
    }

    #[test]
    fn test_move_down_up() {
        // Arrange
        let mut state = make_state(true);

        // Act & Assert
        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq!(state.focus(), Focus::Cancel);

        state.move_down(); // should stay on cancel
        assert_eq!(state.cursor, 3);

        state.move_up();
        assert_eq!(state.focus(), Focus::Row(2));

        state.move_up();
        state.move_up();
        state.move_up(); // should stay at 0
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_no_cancel_row_stops_at_last_option() {
        // Arrange
        let mut state = make_state(false);

        // Act
        for _ in 0..5 {
            state.move_down();
        }

        // Assert
        assert_eq!(state.focus(), Focus::Row(2));
    }

    #[test]
    fn test_activate_row_and_cancel() {
        // Arrange
        let mut state = make_state(true);
        state.move_down();

        // Act & Assert
        assert_eq!(state.activate(), Some(DialogEvent::OptionTap(1)));
        state.move_down();
        state.move_down();
        assert_eq!(state.activate(), Some(DialogEvent::CancelTap));
    }

    #[test]
    fn test_activate_empty_sheet() {
        // Arrange
        let state = SheetViewState::new(Sheet::from_request(&SelectionRequest::default()));

        // Act & Assert
        assert_eq!(state.focus(), Focus::Empty);
        assert_eq!(state.activate(), None);
    }

    #[test]
    fn test_empty_sheet_with_cancel_focuses_cancel() {
        // Arrange
        let request = SelectionRequest::default().with_cancel_label("Close");
        let state = SheetViewState::new(Sheet::from_request(&request));

        // Act & Assert
        assert_eq!(state.focus(), Focus::Cancel);
        assert_eq!(state.activate(), Some(DialogEvent::CancelTap));
    }

    #[test]
    fn test_shortcut() {
        // Arrange
        let state = make_state(true);

        // Act & Assert
        assert_eq!(state.shortcut(1), Some(DialogEvent::OptionTap(0)));
        assert_eq!(state.shortcut(3), Some(DialogEvent::OptionTap(2)));
        assert_eq!(state.shortcut(4), None);
        assert_eq!(state.shortcut(0), None);
    }
}
