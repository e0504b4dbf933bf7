// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Analog clock faces.
//!
//! This crate converts between a calendar date-time and the reading of an
//! analog clock: the angles of its hour, minute and second hands plus an
//! AM/PM flag.
//!
//! # Core types
//!
//! - [`AnalogClockFace`] — get/set capability of an angle-based clock.
//! - [`AnalogClock`] — in-memory [`AnalogClockFace`].
//! - [`DigitalClock`] — get/set capability of a date-time based clock.
//! - [`ClockAdapter<F>`] — presents any [`AnalogClockFace`] as a [`DigitalClock`].
//! - [`DayPeriod`] — which half of the day the hour hand refers to.
//! - [`HandAngles`] — the three hand angles of one reading.
//! - [`ClockError`] — failures at the date-time boundary.
//!
//! # Hand geometry
//!
//! Angles are [`qtty::Degrees`], clockwise from twelve o'clock:
//!
//! | Hand | Degrees per unit | Sweeps with |
//! |------|------------------|-------------|
//! | hour | 30 per hour | minutes |
//! | minute | 6 per minute | seconds |
//! | second | 6 per second | — |
//!
//! The raw conversions live in [`convert`].
//!
//! # Validation
//!
//! [`AnalogClock`] stores whatever it is given.  [`ClockAdapter`] checks
//! ranges on the way out ([`DigitalClock::get_date_time`]) and on the raw
//! numeric entry point ([`ClockAdapter::set_components`]); a
//! `chrono::NaiveDateTime` passed to [`DigitalClock::set_date_time`] is
//! already valid.

mod adapter;
mod analog;
pub mod convert;
mod day_period;
mod error;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use adapter::{ClockAdapter, DigitalClock};
pub use analog::{AnalogClock, AnalogClockFace};
pub use convert::HandAngles;
pub use day_period::DayPeriod;
pub use error::{ClockError, TimeField};

/// Adapter over an owned [`AnalogClock`].
pub type AnalogClockAdapter = ClockAdapter<AnalogClock>;
