//! `SelectionRequest` and its bridge (JSON) form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default for `destructive_index`: no destructive row.
const fn no_destructive_row() -> i64 {
    -1
}

/// A single request to present a selection sheet.
///
/// `options` keeps the raw entries handed over by the host. Only string
/// entries are displayed; anything else is dropped when the sheet is built,
/// and row indices refer to the filtered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::module_name_repetitions)]
pub struct SelectionRequest {
    /// Sheet title.
    #[serde(default)]
    pub title: Option<String>,
    /// Message shown under the title.
    #[serde(default)]
    pub message: Option<String>,
    /// Cancel row label. No cancel row is shown when absent.
    #[serde(default, alias = "cancel")]
    pub cancel_label: Option<String>,
    /// Option entries in display order.
    #[serde(default)]
    pub options: Vec<Value>,
    /// Index into the filtered options to mark as destructive.
    /// Out-of-range values mark nothing.
    #[serde(default = "no_destructive_row")]
    pub destructive_index: i64,
    /// Cancel row text color.
    #[serde(default)]
    pub tint_color: Option<String>,
}

impl Default for SelectionRequest {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            cancel_label: None,
            options: Vec::new(),
            destructive_index: no_destructive_row(),
            tint_color: None,
        }
    }
}

impl SelectionRequest {
    /// Creates a request with the given option labels.
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: labels
                .into_iter()
                .map(|label| Value::String(label.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the cancel row label.
    #[must_use]
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    /// Sets the destructive row index.
    #[must_use]
    pub const fn with_destructive_index(mut self, index: i64) -> Self {
        self.destructive_index = index;
        self
    }

    /// Sets the cancel row tint color.
    #[must_use]
    pub fn with_tint_color(mut self, color: impl Into<String>) -> Self {
        self.tint_color = Some(color.into());
        self
    }

    /// Returns the string options in display order.
    #[must_use]
    pub fn option_labels(&self) -> Vec<String> {
        self.options
            .iter()
            .filter_map(|entry| entry.as_str().map(String::from))
            .collect()
    }

    /// Returns the destructive index as a row position, if it can be one.
    #[must_use]
    pub fn destructive_position(&self) -> Option<usize> {
        usize::try_from(self.destructive_index).ok()
    }
}
