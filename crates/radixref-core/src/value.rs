//! Evaluation output types.
//!
//! Every evaluation produces exactly one [`Evaluation`]: a textual value, a
//! [`Timestamp`] that may still be at its empty sentinel, and a
//! [`ValueStatus`] quality flag. Error conditions are carried as Bad-status
//! values with a descriptive message, never as panics or propagated errors.

use chrono::{DateTime, Utc};
use std::fmt;

/// Placeholder value used when evaluation produced no textual result
pub const NO_DATA: &str = "No Data";

/// Quality flag attached to every evaluation result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValueStatus {
    /// The value is usable data
    Good,
    /// The value carries an error or status message
    Bad,
}

impl fmt::Display for ValueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueStatus::Good => write!(f, "Good"),
            ValueStatus::Bad => write!(f, "Bad"),
        }
    }
}

/// An instant that may be unset.
///
/// A fresh evaluation starts at the empty sentinel; the timestamp is filled
/// in from the attached time anchor or the caller's time context, and remains
/// empty when neither is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    /// The "not yet determined" sentinel
    pub const EMPTY: Timestamp = Timestamp(None);

    /// Creates a timestamp for the current instant
    pub fn now() -> Self {
        Self(Some(Utc::now()))
    }

    /// Returns true if this timestamp is still at the sentinel
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the underlying instant, if set
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(Some(instant))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(instant) => write!(f, "{}", instant.to_rfc3339()),
            None => write!(f, "(empty)"),
        }
    }
}

/// The output unit of a single evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Evaluation {
    /// Textual result, or a human-readable status message when Bad
    pub value: String,
    /// Timestamp of the result; empty sentinel when undeterminable
    pub timestamp: Timestamp,
    /// Quality flag
    pub status: ValueStatus,
}

impl Evaluation {
    /// Creates a Good-status result carrying a usable value
    pub fn good(value: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            value: value.into(),
            timestamp,
            status: ValueStatus::Good,
        }
    }

    /// Creates a Bad-status result carrying an error message
    pub fn bad(message: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            value: message.into(),
            timestamp,
            status: ValueStatus::Bad,
        }
    }

    /// Creates the Good-status placeholder result for the no-input case
    pub fn no_data(timestamp: Timestamp) -> Self {
        Self::good(NO_DATA, timestamp)
    }

    /// Returns true if the value is usable data
    pub fn is_good(&self) -> bool {
        self.status == ValueStatus::Good
    }
}
