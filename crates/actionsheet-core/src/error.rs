//! Controller error types.

use thiserror::Error;

use crate::controller::{DialogEvent, SessionId};

/// Why a `present` call was not shown.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum PresentError {
    /// A session is active and the policy is `Reject`.
    #[error("a selection sheet is already presenting (session {active})")]
    Busy {
        /// The session currently on screen.
        active: SessionId,
    },
    /// The policy is `Queue` and the queue is full.
    #[error("selection queue is full ({capacity} waiting)")]
    QueueFull {
        /// Configured capacity.
        capacity: usize,
    },
    /// The presenter failed to show the sheet. The reply was settled with `-1`.
    #[error("failed to show selection sheet")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// A busy policy name that is not one of the config names.
#[derive(Debug, Error)]
#[error("invalid busy policy: {0}")]
pub struct PolicyParseError(#[source] pub serde::de::value::Error);

/// Why an event was not applied to a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum DialogError {
    /// No session is active, so there is nothing to settle.
    #[error("no active selection session for {0:?}")]
    NoActiveSession(DialogEvent),
    /// The tapped row does not exist on the sheet.
    #[error("row {position} is out of range ({rows} rows)")]
    RowOutOfRange {
        /// Tapped position.
        position: usize,
        /// Number of displayed rows.
        rows: usize,
    },
    /// A cancel tap arrived but the sheet has no cancel row.
    #[error("sheet has no cancel row")]
    NoCancelRow,
}
