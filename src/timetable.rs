// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Weekly timetable.
//!
//! [`Timetable<O>`] buckets openings under the weekday they belong to and keeps
//! an optional validity window `[start, end]` of calendar dates. The window
//! never filters stored openings; it only answers whether a weekday occurs at
//! all while the timetable applies (see [`Timetable::has_day`]).

use crate::error::Result;
use crate::opening::Opening;
use crate::weekday::{DayValue, Weekday};
use chrono::{NaiveDate, NaiveDateTime};
use qtty::{Days, Seconds};

#[cfg(feature = "serde")]
use serde::{de, ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Openings grouped by weekday, with an optional validity window.
///
/// Every weekday is always present, possibly with no openings. Openings keep
/// their insertion order within a day; duplicates and overlaps are stored as
/// given.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use timetable::{OpeningHours, Timetable, Weekday};
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
///
/// let mut timetable = Timetable::new([
///     OpeningHours::new(Weekday::Monday, nine, five),
///     OpeningHours::new(Weekday::Tuesday, nine, five),
/// ])
/// .unwrap();
///
/// assert_eq!(timetable.openings("monday").unwrap().len(), 1);
/// assert!(timetable.openings_on(Weekday::Sunday).is_empty());
///
/// // A single Wednesday.
/// let date = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
/// timetable.set_validity(Some(date), Some(date));
/// assert!(timetable.has_day(Weekday::Wednesday));
/// assert!(!timetable.has_day(Weekday::Monday));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Timetable<O> {
    days: [Vec<O>; 7],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl<O> Default for Timetable<O> {
    fn default() -> Self {
        Timetable {
            days: std::array::from_fn(|_| Vec::new()),
            start: None,
            end: None,
        }
    }
}

impl<O: Opening> Timetable<O> {
    // ── construction ──────────────────────────────────────────────────

    /// Creates a timetable holding `openings`, with no validity window.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDay`](crate::Error::InvalidDay) if any opening's day does
    /// not resolve. Nothing is built in that case.
    pub fn new<I>(openings: I) -> Result<Self>
    where
        I: IntoIterator<Item = O>,
    {
        let mut timetable = Self::default();
        timetable.add_openings(openings)?;
        Ok(timetable)
    }

    /// Appends one opening to the bucket of its weekday.
    pub fn add_opening(&mut self, opening: O) -> Result<()> {
        let day = opening.weekday()?;
        self.days[day.index()].push(opening);
        debug!("added opening on {day}");
        Ok(())
    }

    /// Appends several openings, in iteration order.
    ///
    /// Insertion is all-or-nothing: every day is resolved before any bucket
    /// is touched, so on error the timetable is left as it was.
    pub fn add_openings<I>(&mut self, openings: I) -> Result<()>
    where
        I: IntoIterator<Item = O>,
    {
        let resolved = openings
            .into_iter()
            .map(|opening| opening.weekday().map(|day| (day, opening)))
            .collect::<Result<Vec<_>>>()?;

        let count = resolved.len();
        for (day, opening) in resolved {
            self.days[day.index()].push(opening);
        }
        debug!("added {count} openings");
        Ok(())
    }

    // ── queries ───────────────────────────────────────────────────────

    /// Openings stored for `day`, in insertion order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDay`](crate::Error::InvalidDay) if `day` does not resolve.
    pub fn openings(&self, day: impl DayValue) -> Result<&[O]> {
        Ok(self.openings_on(day.to_weekday()?))
    }

    /// Total opening time on `day`.
    pub fn open_time(&self, day: Weekday) -> Seconds {
        self.openings_on(day)
            .iter()
            .fold(Seconds::new(0.0), |total, opening| total + opening.duration())
    }

    /// Total opening time over the whole week.
    pub fn weekly_open_time(&self) -> Seconds {
        Weekday::ALL
            .into_iter()
            .fold(Seconds::new(0.0), |total, day| total + self.open_time(day))
    }

    /// Whether the facility is open at `at`.
    ///
    /// The date must lie within whichever validity bounds are set, and an
    /// opening on that weekday must contain the time of day.
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        let date = at.date();
        if self.start.is_some_and(|start| date < start) || self.end.is_some_and(|end| date > end) {
            return false;
        }
        self.openings_on(Weekday::of(&date))
            .iter()
            .any(|opening| opening.contains(at.time()))
    }
}

impl<O> Timetable<O> {
    /// Openings stored for `day`, in insertion order.
    #[inline]
    pub fn openings_on(&self, day: Weekday) -> &[O] {
        &self.days[day.index()]
    }

    /// The seven weekdays, Monday first.
    pub fn days(&self) -> [Weekday; 7] {
        Weekday::ALL
    }

    /// Iterates over every weekday with its openings, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[O])> + '_ {
        Weekday::ALL
            .into_iter()
            .zip(self.days.iter().map(Vec::as_slice))
    }

    /// Number of openings over all days.
    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// `true` if no day has any opening.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// Returns `true` if `day` occurs while this timetable applies.
    ///
    /// Without both validity bounds the timetable is open-ended and every
    /// weekday is active. Otherwise the dates of `[start, end]` are scanned
    /// for one falling on `day`; an inverted window contains no dates.
    pub fn has_day(&self, day: Weekday) -> bool {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return true;
        };
        let found = start
            .iter_days()
            .take_while(|date| *date <= end)
            .any(|date| Weekday::of(&date) == day);
        trace!("{day} within {start}..={end}: {found}");
        found
    }

    /// Weekdays for which [`Timetable::has_day`] holds, Monday first.
    pub fn active_days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|day| self.has_day(*day))
            .collect()
    }

    // ── validity window ───────────────────────────────────────────────

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Sets or clears the first date of the validity window.
    pub fn set_start(&mut self, start: Option<NaiveDate>) {
        debug!("validity start set to {start:?}");
        self.start = start;
    }

    /// Sets or clears the last date of the validity window.
    pub fn set_end(&mut self, end: Option<NaiveDate>) {
        debug!("validity end set to {end:?}");
        self.end = end;
    }

    pub fn set_validity(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.set_start(start);
        self.set_end(end);
    }

    /// Number of dates in the validity window, both bounds included.
    ///
    /// `None` unless both bounds are set; zero for an inverted window.
    pub fn validity_days(&self) -> Option<Days> {
        let (start, end) = (self.start?, self.end?);
        let days = (end.signed_duration_since(start).num_days() + 1).max(0);
        Some(Days::new(days as f64))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────
//
// Openings are written as one flat list, Monday first. Reading goes back
// through `Timetable::new` so every opening lands in the bucket of its day.

#[cfg(feature = "serde")]
impl<O: Serialize> Serialize for Timetable<O> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let openings: Vec<&O> = self.days.iter().flatten().collect();
        let mut s = serializer.serialize_struct("Timetable", 3)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.serialize_field("openings", &openings)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, O> Deserialize<'de> for Timetable<O>
where
    O: Opening + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw<O> {
            #[serde(default)]
            start: Option<NaiveDate>,
            #[serde(default)]
            end: Option<NaiveDate>,
            openings: Vec<O>,
        }

        let raw = Raw::<O>::deserialize(deserializer)?;
        let mut timetable = Timetable::new(raw.openings).map_err(de::Error::custom)?;
        timetable.set_validity(raw.start, raw.end);
        Ok(timetable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opening::OpeningHours;
    use chrono::NaiveTime;

    /// Opening whose day is given as free text, like a row read from storage.
    #[derive(Debug, Clone, PartialEq)]
    struct TextOpening {
        day: String,
    }

    impl TextOpening {
        fn on(day: &str) -> Self {
            TextOpening { day: day.to_owned() }
        }
    }

    impl Opening for TextOpening {
        fn start_time(&self) -> NaiveTime {
            NaiveTime::from_hms_opt(8, 0, 0).unwrap()
        }

        fn end_time(&self) -> NaiveTime {
            NaiveTime::from_hms_opt(16, 0, 0).unwrap()
        }

        fn day(&self) -> &dyn DayValue {
            &self.day
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_create_empty() {
        let timetable = Timetable::<TextOpening>::new(Vec::new()).unwrap();
        assert_eq!(timetable.days().len(), 7);
        for day in Weekday::ALL {
            assert!(timetable.openings(day).unwrap().is_empty());
        }
        assert!(timetable.is_empty());
        assert_eq!(timetable.start(), None);
        assert_eq!(timetable.end(), None);
    }

    #[test]
    fn test_add_opening() {
        let mut timetable = Timetable::default();
        timetable.add_opening(TextOpening::on("monday")).unwrap();

        assert_eq!(timetable.openings("monday").unwrap().len(), 1);
        assert_eq!(timetable.openings("tuesday").unwrap().len(), 0);
    }

    #[test]
    fn test_add_openings() {
        let mut timetable = Timetable::default();
        timetable
            .add_openings(vec![TextOpening::on("monday"), TextOpening::on("tuesday")])
            .unwrap();

        assert_eq!(timetable.openings("monday").unwrap().len(), 1);
        assert_eq!(timetable.openings("tuesday").unwrap().len(), 1);
        assert_eq!(timetable.len(), 2);
    }

    #[test]
    fn test_add_opening_invalid_day() {
        let mut timetable = Timetable::default();
        let err = timetable.add_opening(TextOpening::on("someday")).unwrap_err();
        assert!(err.is_invalid_day());
        assert!(timetable.is_empty());
    }

    #[test]
    fn test_add_openings_is_all_or_nothing() {
        let mut timetable = Timetable::new(vec![TextOpening::on("friday")]).unwrap();
        let result = timetable.add_openings(vec![
            TextOpening::on("monday"),
            TextOpening::on("tuesday"),
            TextOpening::on("not a day"),
        ]);

        assert!(result.is_err());
        assert_eq!(timetable.len(), 1);
        assert!(timetable.openings_on(Weekday::Monday).is_empty());
        assert!(timetable.openings_on(Weekday::Tuesday).is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_day() {
        let result = Timetable::new(vec![TextOpening::on("monday"), TextOpening::on("8")]);
        assert!(result.unwrap_err().is_invalid_day());
    }

    #[test]
    fn test_openings_keep_insertion_order_and_duplicates() {
        let early = OpeningHours::new(Weekday::Monday, hm(8, 0), hm(10, 0));
        let late = OpeningHours::new(Weekday::Monday, hm(14, 0), hm(18, 0));
        let timetable = Timetable::new([late, early, late]).unwrap();

        assert_eq!(timetable.openings_on(Weekday::Monday), &[late, early, late]);
    }

    #[test]
    fn test_openings_from_date_string() {
        let timetable = Timetable::new(vec![TextOpening::on("2014-10-14")]).unwrap();
        assert_eq!(timetable.openings("tuesday").unwrap().len(), 1);
        assert_eq!(timetable.openings(2).unwrap().len(), 1);
        assert!(timetable.openings(0).is_err());
    }

    #[test]
    fn test_get_days_fixed_order() {
        let timetable = Timetable::new(vec![TextOpening::on("sunday")]).unwrap();
        assert_eq!(timetable.days(), Weekday::ALL);
        assert_eq!(timetable.days()[0], Weekday::Monday);
        assert_eq!(timetable.days()[6], Weekday::Sunday);
    }

    #[test]
    fn test_has_day_without_dates() {
        let mut timetable = Timetable::<OpeningHours>::default();
        for day in Weekday::ALL {
            assert!(timetable.has_day(day));
        }

        // One bound alone still counts as open-ended.
        timetable.set_start(Some(date(2014, 1, 1)));
        assert!(timetable.has_day(Weekday::Monday));
    }

    #[test]
    fn test_has_day() {
        let mut timetable = Timetable::<OpeningHours>::default();
        timetable.set_start(Some(date(2014, 1, 1))); // Wednesday
        timetable.set_end(Some(date(2014, 1, 1)));

        assert!(timetable.has_day(Weekday::create(3).unwrap()));
        assert!(!timetable.has_day(Weekday::create(1).unwrap()));
    }

    #[test]
    fn test_has_day_false() {
        let mut timetable = Timetable::<OpeningHours>::default();
        timetable.set_start(Some(date(2014, 10, 14))); // Tuesday
        timetable.set_end(Some(date(2014, 10, 14)));

        assert!(!timetable.has_day(Weekday::Monday));
    }

    #[test]
    fn test_has_day_full_week_and_inverted_window() {
        let mut timetable = Timetable::<OpeningHours>::default();
        timetable.set_validity(Some(date(2014, 6, 1)), Some(date(2014, 9, 1)));
        assert_eq!(timetable.active_days(), Weekday::ALL.to_vec());

        timetable.set_validity(Some(date(2014, 9, 1)), Some(date(2014, 6, 1)));
        assert!(timetable.active_days().is_empty());
    }

    #[test]
    fn test_active_days_weekend() {
        let mut timetable = Timetable::<OpeningHours>::default();
        timetable.set_validity(Some(date(2014, 10, 18)), Some(date(2014, 10, 19)));
        assert_eq!(
            timetable.active_days(),
            vec![Weekday::Saturday, Weekday::Sunday]
        );
    }

    #[test]
    fn test_clear_bounds() {
        let mut timetable = Timetable::<OpeningHours>::default();
        timetable.set_validity(Some(date(2014, 10, 14)), Some(date(2014, 10, 14)));
        assert!(!timetable.has_day(Weekday::Monday));

        timetable.set_end(None);
        assert_eq!(timetable.end(), None);
        assert!(timetable.has_day(Weekday::Monday));
    }

    #[test]
    fn test_validity_days() {
        let mut timetable = Timetable::<OpeningHours>::default();
        assert_eq!(timetable.validity_days(), None);

        timetable.set_validity(Some(date(2014, 1, 1)), Some(date(2014, 1, 1)));
        assert_eq!(timetable.validity_days(), Some(Days::new(1.0)));

        timetable.set_validity(Some(date(2014, 1, 1)), Some(date(2014, 12, 31)));
        assert_eq!(timetable.validity_days(), Some(Days::new(365.0)));

        timetable.set_validity(Some(date(2014, 1, 2)), Some(date(2014, 1, 1)));
        assert_eq!(timetable.validity_days(), Some(Days::new(0.0)));
    }

    #[test]
    fn test_open_time() {
        let timetable = Timetable::new([
            OpeningHours::new(Weekday::Monday, hm(8, 0), hm(12, 0)),
            OpeningHours::new(Weekday::Monday, hm(13, 0), hm(17, 30)),
            OpeningHours::new(Weekday::Saturday, hm(10, 0), hm(12, 0)),
        ])
        .unwrap();

        assert_eq!(timetable.open_time(Weekday::Monday), Seconds::new(30_600.0));
        assert_eq!(timetable.open_time(Weekday::Tuesday), Seconds::new(0.0));
        assert_eq!(timetable.weekly_open_time(), Seconds::new(37_800.0));
    }

    #[test]
    fn test_is_open_at() {
        let mut timetable = Timetable::new([
            OpeningHours::new(Weekday::Tuesday, hm(9, 0), hm(12, 0)),
            OpeningHours::new(Weekday::Tuesday, hm(13, 0), hm(17, 0)),
        ])
        .unwrap();
        let tuesday = date(2014, 10, 14);

        assert!(timetable.is_open_at(tuesday.and_time(hm(9, 0))));
        assert!(!timetable.is_open_at(tuesday.and_time(hm(12, 30))));
        assert!(!timetable.is_open_at(tuesday.and_time(hm(17, 0))));
        assert!(!timetable.is_open_at(date(2014, 10, 13).and_time(hm(10, 0))));

        timetable.set_start(Some(date(2014, 10, 20)));
        assert!(!timetable.is_open_at(tuesday.and_time(hm(10, 0))));
        assert!(timetable.is_open_at(date(2014, 10, 21).and_time(hm(10, 0))));

        timetable.set_end(Some(date(2014, 10, 31)));
        assert!(!timetable.is_open_at(date(2014, 11, 4).and_time(hm(10, 0))));
    }

    #[test]
    fn test_iter_covers_every_day() {
        let timetable = Timetable::new(vec![
            TextOpening::on("monday"),
            TextOpening::on("monday"),
            TextOpening::on("thursday"),
        ])
        .unwrap();

        let counts: Vec<(Weekday, usize)> = timetable
            .iter()
            .map(|(day, openings)| (day, openings.len()))
            .collect();
        assert_eq!(counts.len(), 7);
        assert_eq!(counts[0], (Weekday::Monday, 2));
        assert_eq!(counts[3], (Weekday::Thursday, 1));
        assert_eq!(counts[6], (Weekday::Sunday, 0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rebuckets_openings() {
        let timetable = Timetable::new([
            OpeningHours::new(Weekday::Friday, hm(9, 0), hm(17, 0)),
            OpeningHours::new(Weekday::Monday, hm(9, 0), hm(12, 0)),
        ])
        .unwrap();

        let json = serde_json::to_string(&timetable).unwrap();
        assert!(json.contains("\"start\":null"));
        let back: Timetable<OpeningHours> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, timetable);
        assert_eq!(back.openings_on(Weekday::Friday).len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_day() {
        let json = r#"{"openings":[{"day":9,"start":"09:00:00","end":"10:00:00"}]}"#;
        assert!(serde_json::from_str::<Timetable<OpeningHours>>(json).is_err());
    }
}
