// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for calendar conversions.

/// Error type for every fallible operation in the crate.
///
/// Conversions are deterministic, so none of these are transient: retrying
/// with the same input always yields the same error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// A month number outside the calendar's enumeration.
    #[error("invalid month: {month} (must be 1..={max})")]
    InvalidMonth {
        /// The month number that was provided.
        month: i32,
        /// Highest month number of the calendar (12 or 13).
        max: u8,
    },

    /// A day that does not fit the month, or a non-finite day value.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The day value that was provided.
        day: f64,
        /// The month the day was checked against.
        month: u8,
        /// Number of days in that month for the given year.
        max_day: u8,
    },

    /// A year outside the range supported by the calendar or computus.
    #[error("unsupported year: {year} (supported {min}..={max})")]
    UnsupportedYear {
        /// The year that was provided.
        year: i64,
        /// First supported year.
        min: i64,
        /// Last supported year.
        max: i64,
    },

    /// A Julian Day that is not finite or too far from the epoch to be
    /// decomposed into a calendar date.
    #[error("julian day {jd} is outside the convertible range")]
    ConversionOverflow {
        /// The offending Julian Day value.
        jd: f64,
    },

    /// A sampling grid that cannot produce evenly spaced points.
    #[error("invalid sampling grid: {reason}")]
    InvalidSampling {
        /// What is wrong with the grid.
        reason: &'static str,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CalendarError>;
