// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-period flag.
//!
//! An analog dial only covers twelve hours, so the hand angles alone cannot
//! tell 03:00 from 15:00.  [`DayPeriod`] carries the missing bit.
//!
//! | Variant | Hours (24 h clock) |
//! |---------|--------------------|
//! | [`DayPeriod::AM`] | `0 ≤ h < 12` |
//! | [`DayPeriod::PM`] | `12 ≤ h` |

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which half of the day a twelve-hour dial reading belongs to.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DayPeriod {
    /// Ante meridiem, midnight up to (not including) midday.
    #[default]
    AM,
    /// Post meridiem, midday up to midnight.
    PM,
}

impl DayPeriod {
    /// First hour of the AM half.
    pub const MIDNIGHT: u32 = 0;

    /// First hour of the PM half.
    pub const MIDDAY: u32 = 12;

    /// Classify a 24-hour clock hour.
    ///
    /// Anything at or past [`MIDDAY`](Self::MIDDAY) is `PM`, including
    /// out-of-range hours such as 24.
    ///
    /// ```
    /// use clockface::DayPeriod;
    ///
    /// assert_eq!(DayPeriod::from_hour(11), DayPeriod::AM);
    /// assert_eq!(DayPeriod::from_hour(12), DayPeriod::PM);
    /// ```
    #[inline]
    pub const fn from_hour(hour: u32) -> Self {
        // Unsigned, so the MIDNIGHT lower bound always holds.
        if hour < Self::MIDDAY {
            Self::AM
        } else {
            Self::PM
        }
    }

    /// Short label, `"AM"` or `"PM"`.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AM => "AM",
            Self::PM => "PM",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
