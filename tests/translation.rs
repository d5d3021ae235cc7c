// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end tests for the data-point translation surface: realistic
//! report batches in, wire writes out, with the host-side state merge in
//! between.

use qoto_valve::types::{ValvePosition, WateringTimer};
use qoto_valve::{
    Attribute, DataPoint, DataPointTable, DataPointValue, EncodeError, SkipReason, ValveCommand,
    ValveState, decode_report, encode_set,
};

// ============================================================================
// Inbound: report batches as the device actually sends them
// ============================================================================

mod inbound {
    use super::*;

    /// A periodic status report while idle: flow, battery, last watering,
    /// plus the undocumented diagnostic tags 104 and 108 the firmware
    /// always includes.
    #[test]
    fn idle_status_report() {
        let table = DataPointTable::qt05m();
        let batch = [
            DataPoint::value(3, 0),
            DataPoint::value(107, 1740),
            DataPoint::value(110, 92),
            DataPoint::value(104, 0),
            DataPoint::new(108, DataPointValue::Raw(vec![0x00, 0x64, 0x00, 0x00])),
        ];

        let update = decode_report(&table, &batch);

        assert_eq!(update.len(), 3);
        assert_eq!(update.get(Attribute::WaterFlow), Some(0));
        assert_eq!(update.get(Attribute::LastWateringTime), Some(1740));
        assert_eq!(update.get(Attribute::Battery), Some(92));

        let skipped: Vec<u8> = update.skipped().iter().map(|s| s.tag).collect();
        assert_eq!(skipped, vec![104, 108]);
        assert!(
            update
                .skipped()
                .iter()
                .all(|s| s.reason == SkipReason::UnknownTag)
        );
    }

    /// A report during an auto-shutdown watering run: tag 2 stands in for
    /// the plain valve position as well.
    #[test]
    fn watering_run_report() {
        let table = DataPointTable::qt05m();
        let batch = [
            DataPoint::value(2, 40),
            DataPoint::value(3, 38),
            DataPoint::value(101, 840),
        ];

        let update = decode_report(&table, &batch);

        assert_eq!(update.get(Attribute::ValveStateAutoShutdown), Some(40));
        assert_eq!(update.get(Attribute::ValveState), Some(40));
        assert_eq!(update.get(Attribute::WaterFlow), Some(38));
        assert_eq!(update.get(Attribute::RemainingWateringTime), Some(840));
    }

    #[test]
    fn serialized_surface_matches_host_expectation() {
        let table = DataPointTable::qt05m();
        let batch = [DataPoint::value(2, 40), DataPoint::value(110, 92)];

        let update = decode_report(&table, &batch);
        let json = serde_json::to_value(&update).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "valve_state": 40,
                "valve_state_auto_shutdown": 40,
                "battery": 92,
            })
        );
    }
}

// ============================================================================
// Outbound: the three writable attributes and nothing else
// ============================================================================

mod outbound {
    use super::*;

    #[test]
    fn set_commands_produce_single_writes() {
        let table = DataPointTable::qt05m();

        let write = encode_set(&table, "valve_state", 60).unwrap();
        assert_eq!((write.tag, write.value), (102, DataPointValue::Value(60)));

        let write = encode_set(&table, "shutdown_timer", 1800).unwrap();
        assert_eq!((write.tag, write.value), (11, DataPointValue::Value(1800)));

        let write = encode_set(&table, "valve_state_auto_shutdown", 60).unwrap();
        assert_eq!((write.tag, write.value), (2, DataPointValue::Value(60)));
    }

    #[test]
    fn failed_commands_emit_nothing() {
        let table = DataPointTable::qt05m();

        assert!(matches!(
            encode_set(&table, "nonexistent", 1),
            Err(EncodeError::UnknownAttribute(_))
        ));
        assert!(matches!(
            encode_set(&table, "remaining_watering_time", 60),
            Err(EncodeError::ReadOnlyAttribute(_))
        ));
    }

    #[test]
    fn typed_commands_match_raw_encoding() {
        let table = DataPointTable::qt05m();

        let typed = ValveCommand::SetValveAutoShutdown(ValvePosition::new(40).unwrap())
            .to_write(&table)
            .unwrap();
        let raw = encode_set(&table, "valve_state_auto_shutdown", 40).unwrap();
        assert_eq!(typed, raw);

        let typed = ValveCommand::SetShutdownTimer(WateringTimer::from_minutes(30).unwrap())
            .to_write(&table)
            .unwrap();
        let raw = encode_set(&table, "shutdown_timer", 1800).unwrap();
        assert_eq!(typed, raw);
    }
}

// ============================================================================
// Full cycle: command out, asynchronous report back, state merged
// ============================================================================

mod full_cycle {
    use super::*;

    #[test]
    fn command_then_report_converges_host_state() {
        let table = DataPointTable::qt05m();
        let mut state = ValveState::new();

        // Host issues "open to 40% with a 30 minute auto-shutdown".
        let position = ValveCommand::SetValveAutoShutdown(ValvePosition::new(40).unwrap());
        let timer = ValveCommand::SetShutdownTimer(WateringTimer::from_minutes(30).unwrap());
        assert_eq!(position.to_write(&table).unwrap().tag, 2);
        assert_eq!(timer.to_write(&table).unwrap().tag, 11);

        // The device reports the new situation some time later.
        let batch = [
            DataPoint::value(2, 40),
            DataPoint::value(11, 1800),
            DataPoint::value(101, 1795),
            DataPoint::value(3, 35),
        ];
        assert!(state.apply(&decode_report(&table, &batch)));

        assert_eq!(state.valve_state_auto_shutdown(), Some(40));
        assert_eq!(state.valve_state(), Some(40));
        assert_eq!(state.shutdown_timer(), Some(1800));
        assert_eq!(state.remaining_watering_time(), Some(1795));
        assert_eq!(state.water_flow(), Some(35));

        // Countdown ticks arrive as single-entry batches.
        let tick = decode_report(&table, &[DataPoint::value(101, 1740)]);
        assert!(state.apply(&tick));
        assert_eq!(state.remaining_watering_time(), Some(1740));

        // Timer expires, valve closes on its own.
        let closed = [
            DataPoint::value(102, 0),
            DataPoint::value(3, 0),
            DataPoint::value(101, 0),
            DataPoint::value(107, 1800),
        ];
        assert!(state.apply(&decode_report(&table, &closed)));
        assert_eq!(state.valve_state(), Some(0));
        assert_eq!(state.last_watering_time(), Some(1800));
        // The plain close report never touches the auto-shutdown field.
        assert_eq!(state.valve_state_auto_shutdown(), Some(40));
    }

    #[test]
    fn decoding_is_stateless_across_interleaved_batches() {
        let table = DataPointTable::qt05m();
        let a = [DataPoint::value(102, 60)];
        let b = [DataPoint::value(110, 75)];

        let first = decode_report(&table, &a);
        let _interleaved = decode_report(&table, &b);
        let second = decode_report(&table, &a);

        assert_eq!(first, second);
    }
}
