// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Weekly Timetables
//!
//! This crate models a weekly schedule of opening hours: every ISO weekday
//! maps to an ordered list of opening intervals, and the whole schedule may be
//! bounded to a concrete calendar window.
//!
//! # Core types
//!
//! - [`Weekday`] — one of Monday (`1`) to Sunday (`7`), ISO-8601 numbering.
//! - [`DayValue`] — anything resolvable to a [`Weekday`]: numbers, names, dates.
//! - [`Opening`] — contract for an opening interval (start, end, day).
//! - [`OpeningHours`] — a concrete [`Opening`].
//! - [`Timetable<O>`] — openings bucketed by weekday, plus a validity window.
//!
//! # Validity window
//!
//! A timetable may carry a start and an end date. The window never hides
//! stored openings; [`Timetable::has_day`] uses it to tell whether a weekday
//! occurs at all while the timetable applies.
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize`/`Deserialize` for [`Weekday`], [`OpeningHours`] and [`Timetable`] |

#[macro_use]
extern crate log;

mod error;
mod opening;
mod timetable;
mod weekday;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{Error, Result};
pub use opening::{Opening, OpeningHours};
pub use timetable::Timetable;
pub use weekday::{DayValue, Weekday};
