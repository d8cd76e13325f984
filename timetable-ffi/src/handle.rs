// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for the timetable aggregate.

use crate::catch_panic;
use crate::error::TimetableStatus;
use chrono::{NaiveDate, NaiveTime, Timelike};
use timetable::{OpeningHours, Timetable, Weekday};

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// Time of day for C interop.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimetableTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimetableTime {
    fn into_chrono(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour.into(), self.minute.into(), self.second.into())
    }

    fn from_chrono(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }
}

/// Calendar date for C interop.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimetableDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl TimetableDate {
    fn into_chrono(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.into(), self.day.into())
    }
}

/// One opening as returned by [`timetable_get_opening`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimetableOpening {
    /// ISO weekday number, 1 (Monday) to 7 (Sunday).
    pub day: u8,
    pub start: TimetableTime,
    pub end: TimetableTime,
}

impl TimetableOpening {
    fn from_hours(hours: &OpeningHours) -> Self {
        Self {
            day: hours.day.number(),
            start: TimetableTime::from_chrono(hours.start),
            end: TimetableTime::from_chrono(hours.end),
        }
    }
}

/// Opaque timetable owned by the caller between [`timetable_new`] and [`timetable_free`].
pub struct TimetableHandle {
    inner: Timetable<OpeningHours>,
}

fn resolve_day(day: i32) -> Result<Weekday, TimetableStatus> {
    Weekday::create(day).map_err(TimetableStatus::from)
}

// ═══════════════════════════════════════════════════════════════════════════
// Lifecycle
// ═══════════════════════════════════════════════════════════════════════════

/// Create an empty, open-ended timetable. Release it with [`timetable_free`].
#[no_mangle]
pub extern "C" fn timetable_new() -> *mut TimetableHandle {
    Box::into_raw(Box::new(TimetableHandle {
        inner: Timetable::default(),
    }))
}

/// Release a timetable created by [`timetable_new`]. Null is a no-op.
///
/// # Safety
/// `handle` must be null or a pointer returned by `timetable_new` that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn timetable_free(handle: *mut TimetableHandle) {
    if !handle.is_null() {
        // SAFETY: the caller guarantees `handle` came from `Box::into_raw` in `timetable_new`.
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Openings
// ═══════════════════════════════════════════════════════════════════════════

/// Append an opening to `day` (ISO number).
///
/// # Safety
/// `handle` must be a live pointer from `timetable_new`.
#[no_mangle]
pub unsafe extern "C" fn timetable_add_opening(
    handle: *mut TimetableHandle,
    day: i32,
    start: TimetableTime,
    end: TimetableTime,
) -> TimetableStatus {
    catch_panic!(TimetableStatus::Internal, {
        // SAFETY: null-checked; the caller guarantees the pointer is live and unaliased.
        let Some(handle) = (unsafe { handle.as_mut() }) else {
            return TimetableStatus::NullPointer;
        };
        let day = match resolve_day(day) {
            Ok(day) => day,
            Err(status) => return status,
        };
        let (Some(start), Some(end)) = (start.into_chrono(), end.into_chrono()) else {
            return TimetableStatus::InvalidTime;
        };
        match handle.inner.add_opening(OpeningHours::new(day, start, end)) {
            Ok(()) => TimetableStatus::Ok,
            Err(err) => err.into(),
        }
    })
}

/// Number of openings stored for `day`.
///
/// # Safety
/// `handle` must be a live pointer from `timetable_new`; `out` must be writable.
#[no_mangle]
pub unsafe extern "C" fn timetable_opening_count(
    handle: *const TimetableHandle,
    day: i32,
    out: *mut usize,
) -> TimetableStatus {
    catch_panic!(TimetableStatus::Internal, {
        // SAFETY: null-checked; the caller guarantees the pointer is live.
        let Some(handle) = (unsafe { handle.as_ref() }) else {
            return TimetableStatus::NullPointer;
        };
        if out.is_null() {
            return TimetableStatus::NullPointer;
        }
        match handle.inner.openings(day) {
            Ok(openings) => {
                unsafe { *out = openings.len() };
                TimetableStatus::Ok
            }
            Err(err) => err.into(),
        }
    })
}

/// Copy the `index`-th opening of `day` (insertion order) into `out`.
///
/// # Safety
/// `handle` must be a live pointer from `timetable_new`; `out` must be writable.
#[no_mangle]
pub unsafe extern "C" fn timetable_get_opening(
    handle: *const TimetableHandle,
    day: i32,
    index: usize,
    out: *mut TimetableOpening,
) -> TimetableStatus {
    catch_panic!(TimetableStatus::Internal, {
        // SAFETY: null-checked; the caller guarantees the pointer is live.
        let Some(handle) = (unsafe { handle.as_ref() }) else {
            return TimetableStatus::NullPointer;
        };
        if out.is_null() {
            return TimetableStatus::NullPointer;
        }
        let openings = match handle.inner.openings(day) {
            Ok(openings) => openings,
            Err(err) => return err.into(),
        };
        match openings.get(index) {
            Some(hours) => {
                unsafe { *out = TimetableOpening::from_hours(hours) };
                TimetableStatus::Ok
            }
            None => TimetableStatus::IndexOutOfRange,
        }
    })
}

/// Total number of openings across the week. Returns 0 for a null handle.
///
/// # Safety
/// `handle` must be null or a live pointer from `timetable_new`.
#[no_mangle]
pub unsafe extern "C" fn timetable_len(handle: *const TimetableHandle) -> usize {
    // SAFETY: null-checked; the caller guarantees the pointer is live.
    unsafe { handle.as_ref() }.map_or(0, |handle| handle.inner.len())
}

// ═══════════════════════════════════════════════════════════════════════════
// Validity window
// ═══════════════════════════════════════════════════════════════════════════

/// Set the validity window. A null `start` or `end` clears that bound.
///
/// Both dates are validated before either bound changes.
///
/// # Safety
/// `handle` must be a live pointer from `timetable_new`; `start` and `end`
/// must each be null or readable.
#[no_mangle]
pub unsafe extern "C" fn timetable_set_validity(
    handle: *mut TimetableHandle,
    start: *const TimetableDate,
    end: *const TimetableDate,
) -> TimetableStatus {
    catch_panic!(TimetableStatus::Internal, {
        // SAFETY: null-checked; the caller guarantees the pointer is live and unaliased.
        let Some(handle) = (unsafe { handle.as_mut() }) else {
            return TimetableStatus::NullPointer;
        };
        // SAFETY: each bound is null-checked by `as_ref`.
        let (start, end) = unsafe { (start.as_ref(), end.as_ref()) };

        let start = match start.map(|date| date.into_chrono()) {
            Some(None) => return TimetableStatus::InvalidDate,
            bound => bound.flatten(),
        };
        let end = match end.map(|date| date.into_chrono()) {
            Some(None) => return TimetableStatus::InvalidDate,
            bound => bound.flatten(),
        };
        handle.inner.set_validity(start, end);
        TimetableStatus::Ok
    })
}

/// Whether `day` occurs inside the validity window (always true when open-ended).
///
/// # Safety
/// `handle` must be a live pointer from `timetable_new`; `out` must be writable.
#[no_mangle]
pub unsafe extern "C" fn timetable_has_day(
    handle: *const TimetableHandle,
    day: i32,
    out: *mut bool,
) -> TimetableStatus {
    catch_panic!(TimetableStatus::Internal, {
        // SAFETY: null-checked; the caller guarantees the pointer is live.
        let Some(handle) = (unsafe { handle.as_ref() }) else {
            return TimetableStatus::NullPointer;
        };
        if out.is_null() {
            return TimetableStatus::NullPointer;
        }
        match resolve_day(day) {
            Ok(day) => {
                unsafe { *out = handle.inner.has_day(day) };
                TimetableStatus::Ok
            }
            Err(status) => status,
        }
    })
}
