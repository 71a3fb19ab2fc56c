//! What `present` does while a session is already active.

use std::str::FromStr;

use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};

use crate::error::PolicyParseError;

/// Handling of a `present` call that arrives while a sheet is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusyPolicy {
    /// Drop the call. Its reply channel is never settled.
    #[default]
    Ignore,
    /// Fail the call with `PresentError::Busy`.
    Reject,
    /// Cancel the active session (settles `-1`) and show the new request.
    Replace,
    /// Hold the call and show it once the active session settles.
    Queue,
}

impl FromStr for BusyPolicy {
    type Err = PolicyParseError;

    /// Parses the same lowercase names the config file uses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: serde::de::value::StrDeserializer<'_, serde::de::value::Error> =
            s.into_deserializer();
        Self::deserialize(name).map_err(PolicyParseError)
    }
}

/// Controller construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Busy-reentry policy.
    pub busy_policy: BusyPolicy,
    /// Maximum number of waiting requests under [`BusyPolicy::Queue`].
    pub queue_capacity: usize,
}

impl ControllerOptions {
    /// Default queue capacity.
    pub const DEFAULT_QUEUE_CAPACITY: usize = 8;

    /// Options with the given policy and the default capacity.
    #[must_use]
    pub const fn with_policy(busy_policy: BusyPolicy) -> Self {
        Self {
            busy_policy,
            queue_capacity: Self::DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::with_policy(BusyPolicy::default())
    }
}
