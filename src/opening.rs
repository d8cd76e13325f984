// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Opening intervals.
//!
//! A [`Timetable`](crate::Timetable) does not own how openings are built; it
//! only needs each one to expose a start time, an end time and a day. That
//! contract is the [`Opening`] trait. [`OpeningHours`] is a ready-made value
//! implementing it.

use crate::error::Result;
use crate::weekday::{DayValue, Weekday};
use chrono::NaiveTime;
use qtty::Seconds;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A contiguous span during which a facility is open on a given weekday.
///
/// `start_time() < end_time()` is the implementor's responsibility; nothing
/// in this crate checks it.
pub trait Opening {
    /// Time of day the opening starts.
    fn start_time(&self) -> NaiveTime;

    /// Time of day the opening ends.
    fn end_time(&self) -> NaiveTime;

    /// The day this opening belongs to, in any form resolvable to a [`Weekday`].
    fn day(&self) -> &dyn DayValue;

    /// Resolve [`Opening::day`] to a [`Weekday`].
    fn weekday(&self) -> Result<Weekday> {
        self.day().to_weekday()
    }

    /// Length of the opening, `end_time - start_time`.
    ///
    /// Negative when the implementor violates `start < end`.
    fn duration(&self) -> Seconds {
        let delta = self.end_time().signed_duration_since(self.start_time());
        Seconds::new(delta.num_milliseconds() as f64 / 1_000.0)
    }

    /// Whether `time` falls in the half-open range `[start, end)`.
    fn contains(&self, time: NaiveTime) -> bool {
        self.start_time() <= time && time < self.end_time()
    }
}

impl<T: Opening + ?Sized> Opening for &T {
    #[inline]
    fn start_time(&self) -> NaiveTime {
        (**self).start_time()
    }

    #[inline]
    fn end_time(&self) -> NaiveTime {
        (**self).end_time()
    }

    #[inline]
    fn day(&self) -> &dyn DayValue {
        (**self).day()
    }
}

impl<T: Opening + ?Sized> Opening for Box<T> {
    #[inline]
    fn start_time(&self) -> NaiveTime {
        (**self).start_time()
    }

    #[inline]
    fn end_time(&self) -> NaiveTime {
        (**self).end_time()
    }

    #[inline]
    fn day(&self) -> &dyn DayValue {
        (**self).day()
    }
}

/// Opening hours on a single weekday.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use qtty::Seconds;
/// use timetable::{Opening, OpeningHours, Weekday};
///
/// let hours = OpeningHours::new(
///     Weekday::Monday,
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
/// );
///
/// assert_eq!(hours.duration(), Seconds::new(30_600.0));
/// assert!(hours.contains(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpeningHours {
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl OpeningHours {
    pub fn new(day: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        OpeningHours { day, start, end }
    }

    /// Build opening hours from any day designation.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDay`](crate::Error::InvalidDay) if `day` does not resolve.
    pub fn try_new(day: impl DayValue, start: NaiveTime, end: NaiveTime) -> Result<Self> {
        Ok(OpeningHours::new(day.to_weekday()?, start, end))
    }
}

impl Opening for OpeningHours {
    #[inline]
    fn start_time(&self) -> NaiveTime {
        self.start
    }

    #[inline]
    fn end_time(&self) -> NaiveTime {
        self.end
    }

    #[inline]
    fn day(&self) -> &dyn DayValue {
        &self.day
    }

    #[inline]
    fn weekday(&self) -> Result<Weekday> {
        Ok(self.day)
    }
}

impl fmt::Display for OpeningHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
