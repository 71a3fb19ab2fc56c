//! Render description handed to a `Presenter`.

use crate::color::Color;
use crate::request::SelectionRequest;

/// Title and message block above the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Title text.
    pub title: Option<String>,
    /// Message text.
    pub message: Option<String>,
}

/// One selectable option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Row label.
    pub text: String,
    /// Display hint for high-consequence actions.
    pub destructive: bool,
}

/// The cancel row below the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelRow {
    /// Cancel label.
    pub text: String,
    /// Text color.
    pub color: Color,
}

/// Everything a presenter needs to draw one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Present only if the request carries a title or a message.
    pub header: Option<Header>,
    /// Option rows, string entries only, in request order.
    pub rows: Vec<Row>,
    /// Present only if the request carries a cancel label.
    pub cancel: Option<CancelRow>,
}

impl Sheet {
    /// Builds the sheet for a request.
    ///
    /// Non-string options are dropped, an out-of-range destructive index marks
    /// nothing, and an unparseable tint falls back to [`Color::DEFAULT_CANCEL`].
    #[must_use]
    pub fn from_request(request: &SelectionRequest) -> Self {
        let header = (request.title.is_some() || request.message.is_some()).then(|| Header {
            title: request.title.clone(),
            message: request.message.clone(),
        });

        let destructive = request.destructive_position();
        let rows = request
            .option_labels()
            .into_iter()
            .enumerate()
            .map(|(position, text)| Row {
                text,
                destructive: destructive == Some(position),
            })
            .collect();

        let cancel = request.cancel_label.as_ref().map(|text| CancelRow {
            text: text.clone(),
            color: Color::resolve_or(request.tint_color.as_deref(), Color::DEFAULT_CANCEL),
        });

        Self {
            header,
            rows,
            cancel,
        }
    }

    /// Number of option rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the sheet has a cancel row.
    #[must_use]
    pub const fn has_cancel_row(&self) -> bool {
        self.cancel.is_some()
    }
}
