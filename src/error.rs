// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for timetable operations.

use thiserror::Error;

/// Result type for timetable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving weekdays or rendering them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value could not be resolved to one of the seven ISO weekdays.
    #[error("Invalid week day: {0}")]
    InvalidDay(String),

    /// The strftime pattern passed to [`Weekday::format`](crate::Weekday::format) is malformed.
    #[error("Invalid format pattern: {0}")]
    InvalidFormat(String),
}

impl Error {
    pub(crate) fn invalid_day(value: impl std::fmt::Display) -> Self {
        Error::InvalidDay(value.to_string())
    }

    /// Returns `true` when this is an [`Error::InvalidDay`].
    pub fn is_invalid_day(&self) -> bool {
        matches!(self, Error::InvalidDay(_))
    }
}
