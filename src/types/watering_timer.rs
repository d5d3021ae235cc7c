// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Auto-shutdown countdown type.
//!
//! This module provides a type-safe representation of the valve's shutdown
//! timer, ensuring values are always within the valid range of 0-14400
//! seconds (4 hours).

use std::fmt;

use crate::error::ValueError;

/// Auto-shutdown countdown in seconds (0-14400).
///
/// Once set, the valve counts down and closes itself when the timer
/// expires. A value of 0 disables the countdown.
///
/// # Examples
///
/// ```
/// use qoto_valve::types::WateringTimer;
///
/// // Water for half an hour
/// let timer = WateringTimer::new(1800).unwrap();
/// assert_eq!(timer.seconds(), 1800);
///
/// // Convenience constructor
/// let timer = WateringTimer::from_minutes(30).unwrap();
/// assert_eq!(timer.seconds(), 1800);
///
/// // Values beyond 4 hours return error
/// assert!(WateringTimer::new(14401).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WateringTimer(u32);

impl WateringTimer {
    /// Countdown disabled (0 seconds).
    pub const OFF: Self = Self(0);

    /// Minimum timer value (alias for [`WateringTimer::OFF`]).
    pub const MIN: Self = Self(0);

    /// Maximum timer value (14400 seconds, 4 hours).
    pub const MAX: Self = Self(14400);

    /// Creates a new watering timer.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value exceeds 14400 seconds.
    pub fn new(seconds: u32) -> Result<Self, ValueError> {
        if seconds > Self::MAX.0 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: Self::MAX.0,
                actual: seconds,
            });
        }
        Ok(Self(seconds))
    }

    /// Creates a watering timer from whole minutes.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the duration exceeds 240 minutes.
    pub fn from_minutes(minutes: u32) -> Result<Self, ValueError> {
        Self::new(minutes.saturating_mul(60))
    }

    /// Creates a watering timer, clamping to the valid range.
    ///
    /// Values above 14400 are clamped to 14400.
    #[must_use]
    pub const fn clamped(seconds: u32) -> Self {
        if seconds > Self::MAX.0 {
            Self::MAX
        } else {
            Self(seconds)
        }
    }

    /// Returns the countdown duration in seconds.
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the countdown is disabled.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WateringTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl TryFrom<u32> for WateringTimer {
    type Error = ValueError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
