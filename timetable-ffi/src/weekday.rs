// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for weekday lookups.

use crate::catch_panic;
use crate::error::TimetableStatus;
use std::os::raw::c_char;
use timetable::Weekday;

/// Returns true if `day` is an ISO weekday number (1..=7).
#[no_mangle]
pub extern "C" fn timetable_weekday_is_valid(day: i32) -> bool {
    Weekday::create(day).is_ok()
}

/// Write the full English name of `day` as a NUL-terminated string.
///
/// Returns BufferTooSmall when `len` cannot hold the name plus its NUL; the
/// buffer is left untouched in that case.
///
/// # Safety
/// `buf` must be a valid, writable pointer to at least `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn timetable_weekday_name(
    day: i32,
    buf: *mut c_char,
    len: usize,
) -> TimetableStatus {
    catch_panic!(TimetableStatus::Internal, {
        if buf.is_null() {
            return TimetableStatus::NullPointer;
        }
        let name = match Weekday::create(day) {
            Ok(weekday) => weekday.name(),
            Err(err) => return err.into(),
        };
        if len <= name.len() {
            return TimetableStatus::BufferTooSmall;
        }
        // SAFETY: `buf` is non-null and the caller guarantees `len` writable bytes,
        // which covers `name.len() + 1`.
        unsafe {
            std::ptr::copy_nonoverlapping(name.as_ptr(), buf.cast::<u8>(), name.len());
            *buf.add(name.len()) = 0;
        }
        TimetableStatus::Ok
    })
}
