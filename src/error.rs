// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors raised at the date-time boundary of a clock adapter.

use std::fmt;
use std::ops::RangeInclusive;

/// A calendar or clock field checked by the adapter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimeField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeField {
    /// Accepted values for this field.
    ///
    /// Days are checked against 1–31 regardless of month; whether the
    /// resulting date exists is chrono's call.
    pub const fn range(self) -> RangeInclusive<i64> {
        match self {
            Self::Year => 1..=i32::MAX as i64,
            Self::Month => 1..=12,
            Self::Day => 1..=31,
            Self::Hour => 0..=23,
            Self::Minute | Self::Second => 0..=59,
        }
    }

    /// `Ok(())` if `value` lies in [`range`](Self::range).
    pub fn check(self, value: i64) -> Result<(), ClockError> {
        let range = self.range();
        if range.contains(&value) {
            Ok(())
        } else {
            Err(ClockError::InvalidTimeValue {
                field: self,
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        })
    }
}

/// Errors produced by [`ClockAdapter`](crate::ClockAdapter).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ClockError {
    /// A field lies outside its clock or calendar range.
    #[error("invalid {field} value {value}, expected {min}..={max}")]
    InvalidTimeValue {
        field: TimeField,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Every field is in range but together they name no calendar date
    /// (e.g. February 30).
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    UnrepresentableDate { year: i32, month: u32, day: u32 },
}
