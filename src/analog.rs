// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Angle-based clock state.
//!
//! [`AnalogClockFace`] is the capability of anything that stores a calendar
//! date next to three hand angles and a [`DayPeriod`].  [`AnalogClock`] is
//! the in-memory implementation.
//!
//! The face is a dumb holder: [`set`](AnalogClockFace::set) overwrites every
//! field unconditionally and the getters return exactly what was stored.
//! Range checks belong to whoever builds the angles
//! (see [`ClockAdapter`](crate::ClockAdapter)).

use crate::convert::HandAngles;
use crate::DayPeriod;
use qtty::Degrees;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// AnalogClockFace trait
// ═══════════════════════════════════════════════════════════════════════════

/// Get/set access to an angle-based clock.
pub trait AnalogClockFace {
    /// Overwrite the whole state.
    #[allow(clippy::too_many_arguments)]
    fn set(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        hour_angle: Degrees,
        minute_angle: Degrees,
        second_angle: Degrees,
        period: DayPeriod,
    );

    fn year(&self) -> i32;

    fn month(&self) -> u32;

    fn day(&self) -> u32;

    /// Hour-hand angle, clockwise from twelve.
    fn hour_angle(&self) -> Degrees;

    /// Minute-hand angle, clockwise from twelve.
    fn minute_angle(&self) -> Degrees;

    /// Second-hand angle, clockwise from twelve.
    fn second_angle(&self) -> Degrees;

    /// Which half of the day the hour hand refers to.
    fn day_period(&self) -> DayPeriod;

    /// The three hand angles as one value.
    #[inline]
    fn hands(&self) -> HandAngles {
        HandAngles {
            hour: self.hour_angle(),
            minute: self.minute_angle(),
            second: self.second_angle(),
        }
    }
}

/// A borrowed face is a face, so an adapter can drive a clock it does not own.
impl<F: AnalogClockFace + ?Sized> AnalogClockFace for &mut F {
    #[inline]
    fn set(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        hour_angle: Degrees,
        minute_angle: Degrees,
        second_angle: Degrees,
        period: DayPeriod,
    ) {
        (**self).set(
            year,
            month,
            day,
            hour_angle,
            minute_angle,
            second_angle,
            period,
        )
    }

    #[inline]
    fn year(&self) -> i32 {
        (**self).year()
    }

    #[inline]
    fn month(&self) -> u32 {
        (**self).month()
    }

    #[inline]
    fn day(&self) -> u32 {
        (**self).day()
    }

    #[inline]
    fn hour_angle(&self) -> Degrees {
        (**self).hour_angle()
    }

    #[inline]
    fn minute_angle(&self) -> Degrees {
        (**self).minute_angle()
    }

    #[inline]
    fn second_angle(&self) -> Degrees {
        (**self).second_angle()
    }

    #[inline]
    fn day_period(&self) -> DayPeriod {
        (**self).day_period()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// AnalogClock
// ═══════════════════════════════════════════════════════════════════════════

/// In-memory analog clock.
///
/// A fresh clock sits at [`AnalogClock::EPOCH`]: 0001-01-01 with every hand
/// at twelve, AM.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnalogClock {
    year: i32,
    month: u32,
    day: u32,
    hour_angle: Degrees,
    minute_angle: Degrees,
    second_angle: Degrees,
    day_period: DayPeriod,
}

impl AnalogClock {
    /// 0001-01-01, midnight.
    pub const EPOCH: Self = Self {
        year: 1,
        month: 1,
        day: 1,
        hour_angle: Degrees::new(0.0),
        minute_angle: Degrees::new(0.0),
        second_angle: Degrees::new(0.0),
        day_period: DayPeriod::AM,
    };

    /// A clock at [`EPOCH`](Self::EPOCH).
    #[inline]
    pub const fn new() -> Self {
        Self::EPOCH
    }
}

impl Default for AnalogClock {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl AnalogClockFace for AnalogClock {
    fn set(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        hour_angle: Degrees,
        minute_angle: Degrees,
        second_angle: Degrees,
        period: DayPeriod,
    ) {
        *self = Self {
            year,
            month,
            day,
            hour_angle,
            minute_angle,
            second_angle,
            day_period: period,
        };
    }

    #[inline]
    fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    fn hour_angle(&self) -> Degrees {
        self.hour_angle
    }

    #[inline]
    fn minute_angle(&self) -> Degrees {
        self.minute_angle
    }

    #[inline]
    fn second_angle(&self) -> Degrees {
        self.second_angle
    }

    #[inline]
    fn day_period(&self) -> DayPeriod {
        self.day_period
    }
}

impl fmt::Display for AnalogClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} h={}° m={}° s={}° {}",
            self.year,
            self.month,
            self.day,
            self.hour_angle.value(),
            self.minute_angle.value(),
            self.second_angle.value(),
            self.day_period
        )
    }
}

// Serde support: angles travel as plain degrees.
#[cfg(feature = "serde")]
impl Serialize for AnalogClock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("AnalogClock", 7)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month)?;
        s.serialize_field("day", &self.day)?;
        s.serialize_field("hour_deg", &self.hour_angle.value())?;
        s.serialize_field("minute_deg", &self.minute_angle.value())?;
        s.serialize_field("second_deg", &self.second_angle.value())?;
        s.serialize_field("period", &self.day_period)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for AnalogClock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u32,
            day: u32,
            hour_deg: f64,
            minute_deg: f64,
            second_deg: f64,
            period: DayPeriod,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mut clock = AnalogClock::new();
        clock.set(
            raw.year,
            raw.month,
            raw.day,
            Degrees::new(raw.hour_deg),
            Degrees::new(raw.minute_deg),
            Degrees::new(raw.second_deg),
            raw.period,
        );
        Ok(clock)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
