// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! ISO-8601 weekdays.
//!
//! This module provides:
//! - [`Weekday`]: the seven days of the week, numbered 1 (Monday) to 7 (Sunday)
//! - [`DayValue`]: anything that can be resolved to a [`Weekday`] (day numbers,
//!   day names, dates and date strings)

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Date/time layouts accepted when a day is given as text and is not a day name.
const DATETIME_PATTERNS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// One of the seven days of the week, in ISO-8601 order.
///
/// The discriminant is the ISO weekday number, so Monday is `1` and Sunday is
/// `7`. Ordering follows the ISO week (Monday first).
///
/// # Examples
///
/// ```
/// use timetable::Weekday;
///
/// let day = Weekday::create("2014-01-01").unwrap();
/// assert_eq!(day, Weekday::Wednesday);
/// assert_eq!(day.number(), 3);
/// assert_eq!(day.to_string(), "Wednesday");
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// All days of the week, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Pattern used by [`Display`](fmt::Display): the full English day name.
    pub const DEFAULT_FORMAT: &'static str = "%A";

    // ── constructors ──────────────────────────────────────────────────

    /// Resolve any [`DayValue`] into a weekday.
    ///
    /// Accepts ISO day numbers (`1..=7`), day names (`"monday"`, `"Tue"`),
    /// dates and date strings (`"2014-10-14"`).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDay`] if the value does not name a weekday.
    ///
    /// ```
    /// use timetable::Weekday;
    ///
    /// assert_eq!(Weekday::create(7).unwrap(), Weekday::Sunday);
    /// assert_eq!(Weekday::create("friday").unwrap(), Weekday::Friday);
    /// assert!(Weekday::create(100).is_err());
    /// ```
    pub fn create(value: impl DayValue) -> Result<Self> {
        value.to_weekday()
    }

    /// Weekday for an ISO day number, or `None` outside `1..=7`.
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Weekday for an English day name or its three-letter abbreviation.
    ///
    /// Matching ignores case and surrounding whitespace. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Some(Weekday::Monday),
            "tuesday" | "tue" => Some(Weekday::Tuesday),
            "wednesday" | "wed" => Some(Weekday::Wednesday),
            "thursday" | "thu" => Some(Weekday::Thursday),
            "friday" | "fri" => Some(Weekday::Friday),
            "saturday" | "sat" => Some(Weekday::Saturday),
            "sunday" | "sun" => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Day of the week on which `date` falls.
    pub fn of<D: Datelike>(date: &D) -> Self {
        date.weekday().into()
    }

    pub const fn monday() -> Self {
        Weekday::Monday
    }

    pub const fn tuesday() -> Self {
        Weekday::Tuesday
    }

    pub const fn wednesday() -> Self {
        Weekday::Wednesday
    }

    pub const fn thursday() -> Self {
        Weekday::Thursday
    }

    pub const fn friday() -> Self {
        Weekday::Friday
    }

    pub const fn saturday() -> Self {
        Weekday::Saturday
    }

    pub const fn sunday() -> Self {
        Weekday::Sunday
    }

    // ── mutation ──────────────────────────────────────────────────────

    /// Replace this day with the one `value` resolves to.
    ///
    /// On error `self` is left unchanged.
    pub fn set(&mut self, value: impl DayValue) -> Result<()> {
        *self = value.to_weekday()?;
        Ok(())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// ISO day number, `1` (Monday) to `7` (Sunday).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based position in the ISO week.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize - 1
    }

    /// Full English name.
    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// The following day, wrapping Sunday to Monday.
    pub const fn next(self) -> Self {
        Self::ALL[self.number() as usize % 7]
    }

    /// The preceding day, wrapping Monday to Sunday.
    pub const fn previous(self) -> Self {
        Self::ALL[(self.number() as usize + 5) % 7]
    }

    /// Render the day with a chrono `strftime` pattern.
    ///
    /// The day is projected onto the week starting Monday 2011-08-01 at
    /// midnight, so only day-related specifiers are meaningful: `%A` full
    /// name, `%a` abbreviation, `%u` ISO number.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] if the pattern cannot be rendered.
    ///
    /// ```
    /// use timetable::Weekday;
    ///
    /// assert_eq!(Weekday::monday().format("%A").unwrap(), "Monday");
    /// assert_eq!(Weekday::sunday().format("%a (%u)").unwrap(), "Sun (7)");
    /// ```
    pub fn format(&self, pattern: &str) -> Result<String> {
        use std::fmt::Write;

        let reference = NaiveDate::from_isoywd_opt(2011, 31, (*self).into())
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| Error::invalid_day(self.number()))?;

        let mut rendered = String::new();
        write!(rendered, "{}", reference.format(pattern))
            .map_err(|_| Error::InvalidFormat(pattern.to_owned()))?;
        Ok(rendered)
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_day_text(s)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self> {
        Weekday::from_number(number).ok_or_else(|| Error::invalid_day(number))
    }
}

impl From<Weekday> for u8 {
    #[inline]
    fn from(day: Weekday) -> Self {
        day.number()
    }
}

// ── chrono interop ────────────────────────────────────────────────────────

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DayValue trait
// ═══════════════════════════════════════════════════════════════════════════

/// A value that designates a day of the week.
///
/// Implemented for integers (ISO numbers), text (day names or dates), chrono
/// dates and weekdays, and [`Weekday`] itself. The trait is object safe so
/// openings can expose their day as `&dyn DayValue`.
pub trait DayValue {
    /// Resolve to a [`Weekday`], failing with [`Error::InvalidDay`].
    fn to_weekday(&self) -> Result<Weekday>;
}

impl<T: DayValue + ?Sized> DayValue for &T {
    #[inline]
    fn to_weekday(&self) -> Result<Weekday> {
        (**self).to_weekday()
    }
}

impl DayValue for Weekday {
    #[inline]
    fn to_weekday(&self) -> Result<Weekday> {
        Ok(*self)
    }
}

impl DayValue for chrono::Weekday {
    #[inline]
    fn to_weekday(&self) -> Result<Weekday> {
        Ok((*self).into())
    }
}

impl DayValue for str {
    fn to_weekday(&self) -> Result<Weekday> {
        parse_day_text(self)
    }
}

impl DayValue for String {
    fn to_weekday(&self) -> Result<Weekday> {
        parse_day_text(self)
    }
}

impl DayValue for NaiveDate {
    fn to_weekday(&self) -> Result<Weekday> {
        Ok(Weekday::of(self))
    }
}

impl DayValue for NaiveDateTime {
    fn to_weekday(&self) -> Result<Weekday> {
        Ok(Weekday::of(self))
    }
}

impl<Tz: TimeZone> DayValue for DateTime<Tz> {
    fn to_weekday(&self) -> Result<Weekday> {
        Ok(Weekday::of(self))
    }
}

macro_rules! impl_day_value_for_int {
    ($($t:ty),*) => {
        $(
            impl DayValue for $t {
                fn to_weekday(&self) -> Result<Weekday> {
                    u8::try_from(*self)
                        .ok()
                        .and_then(Weekday::from_number)
                        .ok_or_else(|| Error::invalid_day(self))
                }
            }
        )*
    };
}

impl_day_value_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Resolve a day name or a date string.
fn parse_day_text(text: &str) -> Result<Weekday> {
    let trimmed = text.trim();

    if let Some(day) = Weekday::from_name(trimmed) {
        return Ok(day);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Weekday::of(&date));
    }
    for pattern in DATETIME_PATTERNS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(Weekday::of(&datetime));
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Weekday::of(&datetime));
    }

    Err(Error::invalid_day(format!("{text:?}")))
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Weekday {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WeekdayVisitor;

        impl de::Visitor<'_> for WeekdayVisitor {
            type Value = Weekday;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ISO weekday number, a day name or a date")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Weekday, E> {
                v.to_weekday().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Weekday, E> {
                v.to_weekday().map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Weekday, E> {
                v.to_weekday().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(WeekdayVisitor)
    }
}
