//! Error types for copyright year validation.
//!
//! Display helpers never surface these errors; they collapse them to an empty
//! string. The enum exists for callers that need to tell "invalid input"
//! apart from "nothing to show".

use thiserror::Error;

/// Reasons a value is rejected as a copyright start year.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CopyrightYearError {
    /// The value is not a number. Numeric strings are rejected too.
    #[error("copyright year must be a number, found {kind}")]
    NotNumeric {
        /// Runtime kind of the rejected value.
        kind: &'static str,
    },

    /// The value is a number with a fractional part, or not finite.
    #[error("copyright year must be a whole number, found {value}")]
    NotInteger {
        /// The rejected number.
        value: f64,
    },

    /// The year predates the earliest accepted copyright year.
    #[error("copyright year {year} is before {minimum}")]
    BeforeMinimum {
        /// The rejected year.
        year: i64,
        /// Earliest accepted year.
        minimum: i32,
    },

    /// The year lies after the current year.
    #[error("copyright year {year} is after the current year {current}")]
    InFuture {
        /// The rejected year.
        year: i64,
        /// Current year at validation time.
        current: i32,
    },
}
