//! Single-flight selection dialog ("action sheet") core.
//!
//! A [`SelectionDialogController`] accepts one [`SelectionRequest`] at a time,
//! renders it through a [`Presenter`], and settles a one-shot result channel
//! exactly once with the chosen row index or `-1`.

/// Cancel-row color parsing.
pub mod color;
/// Dialog controller state machine.
pub mod controller;
/// Error types.
pub mod error;
/// Busy policy for reentrant `present` calls.
pub mod policy;
/// Presenter capability and a headless implementation.
pub mod presenter;
/// Inbound selection request.
pub mod request;
/// Selection result.
pub mod result;
/// Render description derived from a request.
pub mod sheet;

pub use color::{Color, ColorParseError};
pub use controller::{
    DialogEvent, PresentOutcome, SelectionDialogController, SessionId, Settlement,
};
pub use error::{DialogError, PolicyParseError, PresentError};
pub use policy::{BusyPolicy, ControllerOptions};
pub use presenter::{Presenter, RecordingPresenter};
pub use request::SelectionRequest;
pub use result::SelectionResult;
pub use sheet::{CancelRow, Header, Row, Sheet};
