//! `SelectionResult` returned through the reply channel.

use std::fmt;

use serde::{Serialize, Serializer};

/// Outcome of one dialog session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::module_name_repetitions)]
pub enum SelectionResult {
    /// A row was chosen (0-based position in the displayed rows).
    Selected(usize),
    /// Cancel row chosen, or the sheet was dismissed.
    Cancelled,
}

impl SelectionResult {
    /// Integer code for a cancelled session.
    pub const CANCELLED_CODE: i64 = -1;

    /// Returns the host-facing integer: the row index, or `-1`.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Selected(index) => i64::try_from(index).unwrap_or(i64::MAX),
            Self::Cancelled => Self::CANCELLED_CODE,
        }
    }

    /// Returns the chosen row, if any.
    #[must_use]
    pub const fn selected(self) -> Option<usize> {
        match self {
            Self::Selected(index) => Some(index),
            Self::Cancelled => None,
        }
    }
}

impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for SelectionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}
