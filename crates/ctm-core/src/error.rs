//! Error types for the scheduling core.

use chrono::NaiveTime;
use thiserror::Error;

/// Malformed input rejected before it enters the model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A duration value was negative.
    #[error("duration must not be negative, got {value}")]
    NegativeDuration { value: i64 },

    /// A duration value does not fit in 32 bits.
    #[error("duration {value} is too large")]
    DurationTooLarge { value: i64 },

    /// A time window ends before it starts.
    #[error("window ends at {end} before it starts at {start}")]
    InvertedWindow { start: NaiveTime, end: NaiveTime },
}

/// A registration batch asked for more time than the conference has left.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("exceeding time limit: batch needs {requested} minutes but only {remaining} remain")]
pub struct CapacityExceeded {
    /// Minutes the rejected batch would have consumed.
    pub requested: u64,
    /// Minutes left before the batch was offered.
    pub remaining: u32,
}

/// A talk could not be placed into a session.
///
/// Only the scheduler sees this; callers get the talk back in the
/// unscheduled report instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("talk '{topic}' does not fit: {remaining} minutes left in session")]
pub struct DoesNotFit {
    pub topic: String,
    pub remaining: u32,
}

/// Failure while registering talks pulled from a [`TalkSource`](crate::TalkSource).
#[derive(Debug, Error)]
pub enum RegisterError<E: std::error::Error + 'static> {
    /// The source itself failed; the error is passed through untouched.
    #[error(transparent)]
    Source(E),

    /// The loaded batch did not fit in the remaining time.
    #[error(transparent)]
    Capacity(#[from] CapacityExceeded),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_exceeded_message_names_both_sides() {
        let err = CapacityExceeded {
            requested: 500,
            remaining: 420,
        };
        assert_eq!(
            err.to_string(),
            "exceeding time limit: batch needs 500 minutes but only 420 remain"
        );
    }

    #[test]
    fn inverted_window_message() {
        let err = ValidationError::InvertedWindow {
            start: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "window ends at 09:00:00 before it starts at 12:00:00"
        );
    }
}
