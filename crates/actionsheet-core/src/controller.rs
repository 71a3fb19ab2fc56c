//! Single-flight selection dialog controller.
//!
//! The controller is either `Idle` or `Presenting` exactly one session.
//! Each session owns one reply channel, and the three ways a session can end
//! (option tap, cancel tap, dismiss) all go through the same settle path,
//! which consumes the reply. An event that arrives after settlement finds the
//! controller `Idle` and is reported as [`DialogError::NoActiveSession`].
//!
//! Policy for inputs the host may get wrong:
//! - `present` while presenting follows [`BusyPolicy`] (`Ignore` by default,
//!   which drops the call without settling its reply).
//! - Non-string options are dropped; row positions refer to the string rows.
//! - An invalid tint color falls back to `#222222`.
//! - An empty option list is shown as a sheet with no rows.

use std::collections::VecDeque;
use std::fmt;
use std::mem;

use tokio::sync::oneshot;

use crate::error::{DialogError, PresentError};
use crate::policy::{BusyPolicy, ControllerOptions};
use crate::presenter::Presenter;
use crate::request::SelectionRequest;
use crate::result::SelectionResult;
use crate::sheet::Sheet;

/// Identifies one dialog session. Monotonic per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// Wraps a raw id. Controllers assign their own; this is for presenters
    /// driven outside a controller.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// User interaction delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// Option row at this position was tapped.
    OptionTap(usize),
    /// The cancel row was tapped.
    CancelTap,
    /// The sheet was dismissed from outside (back, tap outside, Esc).
    Dismiss,
}

/// What happened to a `present` call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentOutcome {
    /// The sheet is on screen.
    Shown(SessionId),
    /// Dropped because a session is active; the reply will never settle.
    Ignored,
    /// Waiting behind the active session.
    Queued {
        /// Requests ahead of this one in the queue.
        position: usize,
    },
}

/// A settled session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The session that ended.
    pub session: SessionId,
    /// The value sent on its reply channel.
    pub result: SelectionResult,
}

/// Reply channel of one session. Settling consumes it.
#[derive(Debug)]
struct Responder {
    session: SessionId,
    tx: oneshot::Sender<SelectionResult>,
}

impl Responder {
    fn settle(self, result: SelectionResult) {
        if self.tx.send(result).is_err() {
            tracing::debug!(session = %self.session, "Result receiver dropped before settlement");
        }
    }
}

#[derive(Debug)]
struct DialogSession {
    id: SessionId,
    sheet: Sheet,
    responder: Responder,
}

#[derive(Debug)]
enum DialogState {
    Idle,
    Presenting(DialogSession),
}

/// A request waiting under [`BusyPolicy::Queue`].
#[derive(Debug)]
struct PendingRequest {
    request: SelectionRequest,
    reply: oneshot::Sender<SelectionResult>,
}

/// Presents one selection sheet at a time and settles each reply once.
#[derive(Debug)]
pub struct SelectionDialogController<P> {
    presenter: P,
    options: ControllerOptions,
    state: DialogState,
    queue: VecDeque<PendingRequest>,
    next_id: u64,
}

impl<P: Presenter> SelectionDialogController<P> {
    /// Creates an idle controller with default options.
    #[must_use]
    pub fn new(presenter: P) -> Self {
        Self::with_options(presenter, ControllerOptions::default())
    }

    /// Creates an idle controller.
    #[must_use]
    pub fn with_options(presenter: P, options: ControllerOptions) -> Self {
        Self {
            presenter,
            options,
            state: DialogState::Idle,
            queue: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Presents `request`, settling `reply` once the session ends.
    ///
    /// While a session is active the call follows the configured
    /// [`BusyPolicy`].
    ///
    /// # Errors
    ///
    /// - [`PresentError::Busy`] under `Reject` while presenting.
    /// - [`PresentError::QueueFull`] under `Queue` when the queue is full.
    /// - [`PresentError::Render`] if the presenter fails; `reply` has then
    ///   already been settled with [`SelectionResult::Cancelled`].
    pub fn present(
        &mut self,
        request: SelectionRequest,
        reply: oneshot::Sender<SelectionResult>,
    ) -> Result<PresentOutcome, PresentError> {
        let DialogState::Presenting(active) = &self.state else {
            return self.start(request, reply).map(PresentOutcome::Shown);
        };
        let active = active.id;

        match self.options.busy_policy {
            BusyPolicy::Ignore => {
                tracing::warn!(
                    active = %active,
                    "Selection sheet already presenting, request ignored"
                );
                Ok(PresentOutcome::Ignored)
            }
            BusyPolicy::Reject => Err(PresentError::Busy { active }),
            BusyPolicy::Replace => {
                tracing::warn!(active = %active, "Replacing active selection sheet");
                self.finish(SelectionResult::Cancelled);
                self.start(request, reply).map(PresentOutcome::Shown)
            }
            BusyPolicy::Queue => {
                let position = self.queue.len();
                if position >= self.options.queue_capacity {
                    return Err(PresentError::QueueFull {
                        capacity: self.options.queue_capacity,
                    });
                }
                self.queue.push_back(PendingRequest { request, reply });
                tracing::debug!(active = %active, position, "Selection request queued");
                Ok(PresentOutcome::Queued { position })
            }
        }
    }

    /// Applies a user interaction to the active session.
    ///
    /// On success the controller is `Idle` (or showing the next queued
    /// request) by the time the reply is observable.
    ///
    /// # Errors
    ///
    /// - [`DialogError::NoActiveSession`] if nothing is presenting.
    /// - [`DialogError::RowOutOfRange`] for a tap outside the displayed rows.
    /// - [`DialogError::NoCancelRow`] for a cancel tap on a sheet without one.
    ///
    /// The session stays active on the last two.
    pub fn handle(&mut self, event: DialogEvent) -> Result<Settlement, DialogError> {
        let DialogState::Presenting(session) = &self.state else {
            tracing::warn!(?event, "Dialog event with no active session");
            return Err(DialogError::NoActiveSession(event));
        };

        let result = match event {
            DialogEvent::OptionTap(position) => {
                let rows = session.sheet.row_count();
                if position >= rows {
                    return Err(DialogError::RowOutOfRange { position, rows });
                }
                SelectionResult::Selected(position)
            }
            DialogEvent::CancelTap => {
                if !session.sheet.has_cancel_row() {
                    return Err(DialogError::NoCancelRow);
                }
                SelectionResult::Cancelled
            }
            DialogEvent::Dismiss => SelectionResult::Cancelled,
        };

        let Some(session) = self.finish(result) else {
            return Err(DialogError::NoActiveSession(event));
        };
        self.promote_queued();

        Ok(Settlement { session, result })
    }

    /// Whether a session is active.
    #[must_use]
    pub const fn is_presenting(&self) -> bool {
        matches!(self.state, DialogState::Presenting(_))
    }

    /// The active session, if any.
    #[must_use]
    pub const fn active_session(&self) -> Option<SessionId> {
        match &self.state {
            DialogState::Presenting(session) => Some(session.id),
            DialogState::Idle => None,
        }
    }

    /// The sheet of the active session, if any.
    #[must_use]
    pub const fn active_sheet(&self) -> Option<&Sheet> {
        match &self.state {
            DialogState::Presenting(session) => Some(&session.sheet),
            DialogState::Idle => None,
        }
    }

    /// Number of requests waiting under [`BusyPolicy::Queue`].
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Construction options.
    #[must_use]
    pub const fn options(&self) -> ControllerOptions {
        self.options
    }

    /// The presenter.
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The presenter, mutably (for hosts that pump input through it).
    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Opens a session and shows it. Must only be called while `Idle`.
    fn start(
        &mut self,
        request: SelectionRequest,
        reply: oneshot::Sender<SelectionResult>,
    ) -> Result<SessionId, PresentError> {
        let id = SessionId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        let session = DialogSession {
            id,
            sheet: Sheet::from_request(&request),
            responder: Responder {
                session: id,
                tx: reply,
            },
        };
        tracing::debug!(
            session = %id,
            rows = session.sheet.row_count(),
            cancel_row = session.sheet.has_cancel_row(),
            "Presenting selection sheet"
        );

        if let Err(e) = self.presenter.show(id, &session.sheet) {
            tracing::warn!(session = %id, error = %e, "Presenter failed, settling as cancelled");
            session.responder.settle(SelectionResult::Cancelled);
            return Err(PresentError::Render(e.into()));
        }

        self.state = DialogState::Presenting(session);
        Ok(id)
    }

    /// Returns to `Idle`, tears down the presenter, then settles the reply.
    fn finish(&mut self, result: SelectionResult) -> Option<SessionId> {
        let DialogState::Presenting(session) = mem::replace(&mut self.state, DialogState::Idle)
        else {
            return None;
        };
        self.presenter.dismiss(session.id);
        tracing::debug!(session = %session.id, result = %result, "Selection settled");
        session.responder.settle(result);
        Some(session.id)
    }

    /// Shows queued requests until one is on screen or the queue is empty.
    fn promote_queued(&mut self) {
        while !self.is_presenting() {
            let Some(pending) = self.queue.pop_front() else {
                break;
            };
            if let Err(e) = self.start(pending.request, pending.reply) {
                tracing::warn!(error = %e, "Queued selection sheet failed to show");
            }
        }
    }
}
