// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.
//!
//! The translation engine itself is stateless: each decoded
//! [`ReportUpdate`](crate::report::ReportUpdate) only proposes the
//! attributes present in its batch. Hosts that want a running picture of
//! the valve merge successive updates; [`ValveState`] is that merge
//! helper. Nothing in the decode or encode path depends on it.

use serde::{Deserialize, Serialize};

use crate::datapoint::Attribute;
use crate::report::ReportUpdate;

/// Last-reported state of a QT-05M valve.
///
/// All fields are optional because state is unknown until the device
/// reports it. Apply each decoded update as it arrives; the struct keeps
/// the latest value per attribute.
///
/// # Examples
///
/// ```
/// use qoto_valve::datapoint::{DataPoint, DataPointTable};
/// use qoto_valve::report::decode_report;
/// use qoto_valve::state::ValveState;
///
/// let table = DataPointTable::qt05m();
/// let mut state = ValveState::new();
///
/// let update = decode_report(&table, &[DataPoint::value(110, 85)]);
/// assert!(state.apply(&update));
/// assert_eq!(state.battery(), Some(85));
///
/// // Applying the same values again changes nothing.
/// assert!(!state.apply(&update));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValveState {
    /// Current water flow in percent.
    water_flow: Option<u32>,
    /// Duration of the last watering in seconds.
    last_watering_time: Option<u32>,
    /// Remaining auto-shutdown countdown in seconds.
    remaining_watering_time: Option<u32>,
    /// Valve opening in percent.
    valve_state: Option<u32>,
    /// Auto-shutdown countdown setpoint in seconds.
    shutdown_timer: Option<u32>,
    /// Valve opening with auto-shutdown armed, in percent.
    valve_state_auto_shutdown: Option<u32>,
    /// Battery level in percent.
    battery: Option<u32>,
}

impl ValveState {
    /// Creates a new empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a decoded report update into this state.
    ///
    /// Returns `true` if any attribute actually changed value.
    pub fn apply(&mut self, update: &ReportUpdate) -> bool {
        let mut changed = false;
        for (attribute, value) in update.iter() {
            let slot = self.slot_mut(attribute);
            if *slot != Some(value) {
                *slot = Some(value);
                changed = true;
            }
        }
        changed
    }

    /// Returns the last-reported value for an attribute.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<u32> {
        match attribute {
            Attribute::WaterFlow => self.water_flow,
            Attribute::LastWateringTime => self.last_watering_time,
            Attribute::RemainingWateringTime => self.remaining_watering_time,
            Attribute::ValveState => self.valve_state,
            Attribute::ShutdownTimer => self.shutdown_timer,
            Attribute::ValveStateAutoShutdown => self.valve_state_auto_shutdown,
            Attribute::Battery => self.battery,
        }
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut Option<u32> {
        match attribute {
            Attribute::WaterFlow => &mut self.water_flow,
            Attribute::LastWateringTime => &mut self.last_watering_time,
            Attribute::RemainingWateringTime => &mut self.remaining_watering_time,
            Attribute::ValveState => &mut self.valve_state,
            Attribute::ShutdownTimer => &mut self.shutdown_timer,
            Attribute::ValveStateAutoShutdown => &mut self.valve_state_auto_shutdown,
            Attribute::Battery => &mut self.battery,
        }
    }

    /// Returns the current water flow in percent.
    #[must_use]
    pub fn water_flow(&self) -> Option<u32> {
        self.water_flow
    }

    /// Returns the duration of the last watering in seconds.
    #[must_use]
    pub fn last_watering_time(&self) -> Option<u32> {
        self.last_watering_time
    }

    /// Returns the remaining auto-shutdown countdown in seconds.
    #[must_use]
    pub fn remaining_watering_time(&self) -> Option<u32> {
        self.remaining_watering_time
    }

    /// Returns the valve opening in percent.
    #[must_use]
    pub fn valve_state(&self) -> Option<u32> {
        self.valve_state
    }

    /// Returns the auto-shutdown countdown setpoint in seconds.
    #[must_use]
    pub fn shutdown_timer(&self) -> Option<u32> {
        self.shutdown_timer
    }

    /// Returns the valve opening reported with auto-shutdown armed, in
    /// percent.
    #[must_use]
    pub fn valve_state_auto_shutdown(&self) -> Option<u32> {
        self.valve_state_auto_shutdown
    }

    /// Returns the battery level in percent.
    #[must_use]
    pub fn battery(&self) -> Option<u32> {
        self.battery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datapoint::{DataPoint, DataPointTable};
    use crate::report::decode_report;

    #[test]
    fn new_state_is_unknown() {
        let state = ValveState::new();
        assert_eq!(state.battery(), None);
        assert_eq!(state.valve_state(), None);
    }

    #[test]
    fn apply_merges_partial_updates() {
        let table = DataPointTable::qt05m();
        let mut state = ValveState::new();

        let update = decode_report(&table, &[DataPoint::value(110, 85)]);
        assert!(state.apply(&update));

        let update = decode_report(&table, &[DataPoint::value(102, 60)]);
        assert!(state.apply(&update));

        // The second update did not touch the battery.
        assert_eq!(state.battery(), Some(85));
        assert_eq!(state.valve_state(), Some(60));
    }

    #[test]
    fn apply_reports_no_change_for_same_values() {
        let table = DataPointTable::qt05m();
        let mut state = ValveState::new();

        let update = decode_report(&table, &[DataPoint::value(3, 20)]);
        assert!(state.apply(&update));
        assert!(!state.apply(&update));

        let update = decode_report(&table, &[DataPoint::value(3, 25)]);
        assert!(state.apply(&update));
    }

    #[test]
    fn apply_covers_every_attribute() {
        let table = DataPointTable::qt05m();
        let mut state = ValveState::new();

        let batch = [
            DataPoint::value(2, 40),
            DataPoint::value(3, 10),
            DataPoint::value(11, 1800),
            DataPoint::value(101, 900),
            DataPoint::value(107, 1200),
            DataPoint::value(110, 95),
        ];
        state.apply(&decode_report(&table, &batch));

        assert_eq!(state.valve_state_auto_shutdown(), Some(40));
        assert_eq!(state.valve_state(), Some(40)); // mirrored from tag 2
        assert_eq!(state.water_flow(), Some(10));
        assert_eq!(state.shutdown_timer(), Some(1800));
        assert_eq!(state.remaining_watering_time(), Some(900));
        assert_eq!(state.last_watering_time(), Some(1200));
        assert_eq!(state.battery(), Some(95));
    }
}
