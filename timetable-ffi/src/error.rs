// SPDX-License-Identifier: AGPL-3.0-or-later

/// Status codes returned by timetable-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimetableStatus {
    /// Success.
    Ok = 0,
    /// A required handle or output pointer was null.
    NullPointer = 1,
    /// The day number is outside 1..=7.
    InvalidDay = 2,
    /// The time of day does not exist (e.g. 25:00).
    InvalidTime = 3,
    /// The calendar date does not exist (e.g. February 30).
    InvalidDate = 4,
    /// No opening at the requested index.
    IndexOutOfRange = 5,
    /// The output buffer cannot hold the result and its terminating NUL.
    BufferTooSmall = 6,
    /// A panic was caught at the boundary.
    Internal = 7,
}

impl From<timetable::Error> for TimetableStatus {
    fn from(err: timetable::Error) -> Self {
        match err {
            timetable::Error::InvalidDay(_) => TimetableStatus::InvalidDay,
            timetable::Error::InvalidFormat(_) => TimetableStatus::Internal,
        }
    }
}
