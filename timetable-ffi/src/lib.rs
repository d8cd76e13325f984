// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **timetable** — weekly opening-hour schedules.
//!
//! This crate exposes a flat C-compatible API over an opaque timetable handle
//! holding [`timetable::OpeningHours`]. Days cross the boundary as ISO numbers
//! (`1` Monday … `7` Sunday).

/// Run `$body`, turning a panic into `$status` so it never unwinds into C.
macro_rules! catch_panic {
    ($status:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => $status,
        }
    };
}
pub(crate) use catch_panic;

mod error;
mod handle;
mod weekday;

pub use crate::error::*;
pub use crate::handle::*;
pub use crate::weekday::*;

/// Returns the timetable-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn timetable_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
