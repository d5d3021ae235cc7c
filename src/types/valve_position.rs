// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Valve position type for flow control.
//!
//! This module provides a type-safe representation of valve opening values,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use crate::error::ValueError;

/// Valve opening as a percentage (0-100).
///
/// The QT-05M regulates water volume by partially opening its valve; 0 is
/// fully closed and 100 is fully open. The device's own control grid moves
/// in steps of 5, but intermediate values are accepted on the wire, so this
/// type validates the range only. Use [`ValvePosition::snapped`] to round a
/// value to the device's native grid.
///
/// # Examples
///
/// ```
/// use qoto_valve::types::ValvePosition;
///
/// // Open the valve to 40%
/// let pos = ValvePosition::new(40).unwrap();
/// assert_eq!(pos.value(), 40);
///
/// // Use predefined values
/// assert_eq!(ValvePosition::CLOSED.value(), 0);
/// assert_eq!(ValvePosition::OPEN.value(), 100);
///
/// // Invalid values return error
/// assert!(ValvePosition::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValvePosition(u8);

impl ValvePosition {
    /// Fully closed (0%).
    pub const CLOSED: Self = Self(0);

    /// Fully open (100%).
    pub const OPEN: Self = Self(100);

    /// Minimum position value (alias for [`ValvePosition::CLOSED`]).
    pub const MIN: Self = Self(0);

    /// Maximum position value (alias for [`ValvePosition::OPEN`]).
    pub const MAX: Self = Self(100);

    /// The device's native position step.
    pub const STEP: u8 = 5;

    /// Creates a new valve position.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use qoto_valve::types::ValvePosition;
    ///
    /// let pos = ValvePosition::new(55).unwrap();
    /// assert_eq!(pos.value(), 55);
    /// ```
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u32::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a valve position, clamping to the valid range.
    ///
    /// Values above 100 are clamped to 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use qoto_valve::types::ValvePosition;
    ///
    /// let pos = ValvePosition::clamped(150);
    /// assert_eq!(pos.value(), 100);
    /// ```
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns this position rounded to the nearest multiple of the
    /// device's native step (5).
    ///
    /// # Examples
    ///
    /// ```
    /// use qoto_valve::types::ValvePosition;
    ///
    /// let pos = ValvePosition::new(42).unwrap();
    /// assert_eq!(pos.snapped().value(), 40);
    ///
    /// let pos = ValvePosition::new(98).unwrap();
    /// assert_eq!(pos.snapped().value(), 100);
    /// ```
    #[must_use]
    pub const fn snapped(self) -> Self {
        let step = Self::STEP;
        let rounded = ((self.0 + step / 2) / step) * step;
        Self::clamped(rounded)
    }

    /// Returns the position percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` if the valve is fully closed at this position.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ValvePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for ValvePosition {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
