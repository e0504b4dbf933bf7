// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Digital view over an analog face.
//!
//! [`DigitalClock`] is the date-time shaped capability; [`ClockAdapter`]
//! provides it for any [`AnalogClockFace`] by running the
//! [`convert`](crate::convert) functions on every call:
//!
//! ```text
//! set_date_time:  NaiveDateTime → (h, m, s) → HandAngles + DayPeriod → face.set
//! get_date_time:  face getters → HandAngles + DayPeriod → (h, m, s) → NaiveDateTime
//! ```
//!
//! Sub-second precision is dropped on the way in, so a round trip is exact
//! to the whole second.

use crate::analog::AnalogClockFace;
use crate::convert::HandAngles;
use crate::error::{ClockError, TimeField};
use crate::DayPeriod;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

/// Get/set access to a clock through calendar date-times.
pub trait DigitalClock {
    /// Store `date_time`, truncated to the whole second.
    fn set_date_time(&mut self, date_time: NaiveDateTime);

    /// Read the stored date-time back.
    ///
    /// # Errors
    ///
    /// [`ClockError::InvalidTimeValue`] if a recovered field is out of range,
    /// [`ClockError::UnrepresentableDate`] if the fields name no calendar date.
    fn get_date_time(&self) -> Result<NaiveDateTime, ClockError>;
}

/// Presents an [`AnalogClockFace`] as a [`DigitalClock`].
///
/// The face may be owned or borrowed (`ClockAdapter<&mut F>`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use clockface::{AnalogClock, AnalogClockFace, ClockAdapter, DayPeriod, DigitalClock};
///
/// let mut adapter = ClockAdapter::new(AnalogClock::new());
/// let dt = NaiveDate::from_ymd_opt(2024, 11, 5)
///     .unwrap()
///     .and_hms_opt(15, 45, 10)
///     .unwrap();
///
/// adapter.set_date_time(dt);
/// assert_eq!(adapter.face().hour_angle().value(), 112.5);
/// assert_eq!(adapter.face().day_period(), DayPeriod::PM);
/// assert_eq!(adapter.get_date_time(), Ok(dt));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClockAdapter<F> {
    face: F,
}

impl<F: AnalogClockFace> ClockAdapter<F> {
    /// Wrap `face`.
    #[inline]
    pub fn new(face: F) -> Self {
        Self { face }
    }

    #[inline]
    pub fn face(&self) -> &F {
        &self.face
    }

    #[inline]
    pub fn face_mut(&mut self) -> &mut F {
        &mut self.face
    }

    #[inline]
    pub fn into_inner(self) -> F {
        self.face
    }

    /// Store a date-time given as raw numbers.
    ///
    /// # Errors
    ///
    /// [`ClockError::InvalidTimeValue`] naming the first field out of range,
    /// or [`ClockError::UnrepresentableDate`] for dates such as February 30.
    /// The face is left untouched on error.
    pub fn set_components(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<(), ClockError> {
        let date_time = assemble(year, month, day, hour, minute, second)?;
        self.set_date_time(date_time);
        Ok(())
    }

    /// Store the local wall-clock time and return what was stored.
    pub fn set_now(&mut self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        self.set_date_time(now);
        now
    }
}

impl<F: AnalogClockFace> DigitalClock for ClockAdapter<F> {
    fn set_date_time(&mut self, date_time: NaiveDateTime) {
        let hour = date_time.hour();
        let hands = HandAngles::from_hms(hour, date_time.minute(), date_time.second());
        let period = DayPeriod::from_hour(hour);

        tracing::debug!(
            %date_time,
            hour_deg = hands.hour.value(),
            minute_deg = hands.minute.value(),
            second_deg = hands.second.value(),
            %period,
            "setting analog face"
        );

        self.face.set(
            date_time.year(),
            date_time.month(),
            date_time.day(),
            hands.hour,
            hands.minute,
            hands.second,
            period,
        );
    }

    fn get_date_time(&self) -> Result<NaiveDateTime, ClockError> {
        let period = self.face.day_period();
        let (hour, minute, second) = self.face.hands().to_hms(period);
        let (year, month, day) = (self.face.year(), self.face.month(), self.face.day());

        let date_time = assemble(year, month, day, hour, minute, second)
            .inspect_err(|err| tracing::warn!(%err, "analog face holds an invalid reading"))?;
        tracing::trace!(%date_time, "read analog face");
        Ok(date_time)
    }
}

/// Range-check every field, then let chrono decide whether the date exists.
fn assemble(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<NaiveDateTime, ClockError> {
    TimeField::Year.check(year.into())?;
    TimeField::Month.check(month.into())?;
    TimeField::Day.check(day.into())?;
    TimeField::Hour.check(hour.into())?;
    TimeField::Minute.check(minute.into())?;
    TimeField::Second.check(second.into())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or(ClockError::UnrepresentableDate { year, month, day })
}
