// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hand-angle conversions.
//!
//! Pure functions mapping clock units to the angle of the matching hand on a
//! twelve-hour dial, and back.  Angles are measured clockwise from twelve
//! o'clock in [`Degrees`].
//!
//! # Forward (time → angle)
//!
//! | Hand | Formula |
//! |------|---------|
//! | hour | `(h mod 12)·30 + m·30/60` |
//! | minute | `m·6 + s·6/60` |
//! | second | `s·6` |
//!
//! The hour and minute hands sweep continuously, so each one carries the
//! offset contributed by the next finer unit.
//!
//! # Inverse (angle → time)
//!
//! Each inverse floors `angle / step`.  The fractional offset added by the
//! forward direction is always smaller than one step, so the integer unit is
//! recovered exactly.  Negative or `NaN` angles collapse to 0; infinite or
//! oversized ones saturate at `u32::MAX`.

use crate::DayPeriod;
use qtty::Degrees;

/// Degrees swept by the hour hand per hour.
pub const DEGREES_PER_HOUR: f64 = 30.0;

/// Degrees swept by the minute hand per minute.
pub const DEGREES_PER_MINUTE: f64 = 6.0;

/// Degrees swept by the second hand per second.
pub const DEGREES_PER_SECOND: f64 = 6.0;

/// Hours printed on the dial.
pub const HOURS_ON_DIAL: u32 = 12;

/// Minutes in one turn of the minute hand.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Seconds in one turn of the second hand.
pub const SECONDS_PER_MINUTE: u32 = 60;

// ── time → angle ──────────────────────────────────────────────────────────

/// Hour-hand angle for `hour:minute`.
///
/// `hour` is on the 24-hour clock; 0 and 12 both point straight up.
///
/// ```
/// use clockface::convert::hour_to_angle;
///
/// assert_eq!(hour_to_angle(9, 30).value(), 285.0);
/// assert_eq!(hour_to_angle(12, 0).value(), 0.0);
/// ```
#[inline]
pub fn hour_to_angle(hour: u32, minute: u32) -> Degrees {
    let base = (hour % HOURS_ON_DIAL) as f64 * DEGREES_PER_HOUR;
    let offset = minute as f64 * DEGREES_PER_HOUR / MINUTES_PER_HOUR as f64;
    Degrees::new(base + offset)
}

/// Minute-hand angle for `minute:second`.
#[inline]
pub fn minute_to_angle(minute: u32, second: u32) -> Degrees {
    let base = minute as f64 * DEGREES_PER_MINUTE;
    let offset = second as f64 * DEGREES_PER_MINUTE / SECONDS_PER_MINUTE as f64;
    Degrees::new(base + offset)
}

/// Second-hand angle. The second hand ticks, so there is no sub-second offset.
#[inline]
pub fn second_to_angle(second: u32) -> Degrees {
    Degrees::new(second as f64 * DEGREES_PER_SECOND)
}

// ── angle → time ──────────────────────────────────────────────────────────

#[inline]
fn whole_steps(angle: Degrees, step: f64) -> u32 {
    // `as` saturates: negatives and NaN become 0, +inf becomes u32::MAX.
    (angle.value() / step).floor() as u32
}

/// Recover the 24-hour clock hour from the hour-hand angle and the period.
///
/// The dial hour is `floor(angle / 30)`.  `PM` adds twelve unless the dial
/// already reads twelve; `AM` maps a dial reading of twelve to hour 0.
/// For angles in `[0, 360)` the dial never reads twelve: that case only
/// occurs when the angle lands exactly on a full turn, which is the same
/// hand position as 0°.
///
/// ```
/// use clockface::{convert::angle_to_hour, DayPeriod};
/// use qtty::Degrees;
///
/// assert_eq!(angle_to_hour(Degrees::new(0.0), DayPeriod::AM), 0);
/// assert_eq!(angle_to_hour(Degrees::new(0.0), DayPeriod::PM), 12);
/// assert_eq!(angle_to_hour(Degrees::new(112.5), DayPeriod::PM), 15);
/// ```
pub fn angle_to_hour(hour_angle: Degrees, period: DayPeriod) -> u32 {
    let hour = whole_steps(hour_angle, DEGREES_PER_HOUR);
    match period {
        // Saturate so an oversized angle stays out of range instead of wrapping.
        DayPeriod::PM if hour != HOURS_ON_DIAL => hour.saturating_add(HOURS_ON_DIAL),
        DayPeriod::AM if hour == HOURS_ON_DIAL => 0,
        _ => hour,
    }
}

/// Recover the minute from the minute-hand angle.
#[inline]
pub fn angle_to_minute(minute_angle: Degrees) -> u32 {
    whole_steps(minute_angle, DEGREES_PER_MINUTE)
}

/// Recover the second from the second-hand angle.
#[inline]
pub fn angle_to_second(second_angle: Degrees) -> u32 {
    whole_steps(second_angle, DEGREES_PER_SECOND)
}

// ── HandAngles ────────────────────────────────────────────────────────────

/// The three hand angles of one dial reading.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: Degrees,
    pub minute: Degrees,
    pub second: Degrees,
}

impl HandAngles {
    /// All hands pointing at twelve.
    pub const TWELVE: Self = Self {
        hour: Degrees::new(0.0),
        minute: Degrees::new(0.0),
        second: Degrees::new(0.0),
    };

    /// Hand positions for a 24-hour `hour:minute:second`.
    ///
    /// The period is not encoded here; pair the result with
    /// [`DayPeriod::from_hour`].
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: hour_to_angle(hour, minute),
            minute: minute_to_angle(minute, second),
            second: second_to_angle(second),
        }
    }

    /// Read the dial back as `(hour, minute, second)` on the 24-hour clock.
    pub fn to_hms(&self, period: DayPeriod) -> (u32, u32, u32) {
        (
            angle_to_hour(self.hour, period),
            angle_to_minute(self.minute),
            angle_to_second(self.second),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_hand_carries_minute_offset() {
        assert_eq!(hour_to_angle(9, 30).value(), 285.0);
        assert_eq!(hour_to_angle(15, 45).value(), 112.5);
        assert_eq!(hour_to_angle(3, 45), hour_to_angle(15, 45));
    }

    #[test]
    fn minute_hand_carries_second_offset() {
        assert_eq!(minute_to_angle(30, 15).value(), 181.5);
        assert_eq!(minute_to_angle(45, 10).value(), 271.0);
    }

    #[test]
    fn second_hand_ticks() {
        assert_eq!(second_to_angle(15).value(), 90.0);
        assert_eq!(second_to_angle(10).value(), 60.0);
        assert_eq!(second_to_angle(0).value(), 0.0);
    }

    #[test]
    fn midnight_points_up_in_am() {
        assert_eq!(hour_to_angle(0, 0).value(), 0.0);
        assert_eq!(angle_to_hour(Degrees::new(0.0), DayPeriod::AM), 0);
    }

    #[test]
    fn noon_resolves_to_twelve_in_pm() {
        assert_eq!(hour_to_angle(12, 0).value(), 0.0);
        assert_eq!(angle_to_hour(Degrees::new(0.0), DayPeriod::PM), 12);
    }

    #[test]
    fn full_turn_reads_as_twelve_on_the_dial() {
        assert_eq!(angle_to_hour(Degrees::new(360.0), DayPeriod::AM), 0);
        assert_eq!(angle_to_hour(Degrees::new(360.0), DayPeriod::PM), 12);
    }

    #[test]
    fn inverse_floors_within_a_step() {
        assert_eq!(angle_to_hour(Degrees::new(359.9), DayPeriod::AM), 11);
        assert_eq!(angle_to_hour(Degrees::new(359.9), DayPeriod::PM), 23);
        assert_eq!(angle_to_minute(Degrees::new(181.5)), 30);
        assert_eq!(angle_to_minute(Degrees::new(5.999)), 0);
        assert_eq!(angle_to_second(Degrees::new(354.0)), 59);
    }

    #[test]
    fn negative_and_nan_angles_collapse_to_zero() {
        assert_eq!(angle_to_minute(Degrees::new(-12.0)), 0);
        assert_eq!(angle_to_second(Degrees::new(f64::NAN)), 0);
    }

    #[test]
    fn oversized_pm_angles_saturate_instead_of_wrapping() {
        assert_eq!(angle_to_hour(Degrees::new(f64::INFINITY), DayPeriod::PM), u32::MAX);
        assert_eq!(angle_to_hour(Degrees::new(1e12), DayPeriod::PM), u32::MAX);
        assert_eq!(angle_to_hour(Degrees::new(f64::INFINITY), DayPeriod::AM), u32::MAX);
    }

    #[test]
    fn pm_afternoon_reading() {
        let hands = HandAngles::from_hms(15, 45, 10);
        assert_eq!(hands.hour.value(), 112.5);
        assert_eq!(hands.minute.value(), 271.0);
        assert_eq!(hands.second.value(), 60.0);
        assert_eq!(hands.to_hms(DayPeriod::PM), (15, 45, 10));
    }

    #[test]
    fn every_second_of_the_day_roundtrips() {
        for hour in 0..24 {
            let period = DayPeriod::from_hour(hour);
            for minute in 0..MINUTES_PER_HOUR {
                for second in 0..SECONDS_PER_MINUTE {
                    let hands = HandAngles::from_hms(hour, minute, second);
                    assert_eq!(
                        hands.to_hms(period),
                        (hour, minute, second),
                        "{hour:02}:{minute:02}:{second:02} -> {hands:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn twelve_is_all_zero() {
        assert_eq!(HandAngles::TWELVE, HandAngles::from_hms(0, 0, 0));
        assert_eq!(HandAngles::TWELVE, HandAngles::from_hms(12, 0, 0));
    }
}
