// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound command encoding.
//!
//! A set-command names an attribute and carries the value to write; the
//! encoder resolves the name against the data-point table and produces
//! exactly one wire write for the transport layer to deliver. There is no
//! batching and no response correlation: the device confirms nothing, it
//! just reports its new state later through the normal report path.
//!
//! Two surfaces exist. [`encode_set`] is the raw key/value boundary the
//! host hands commands across; it trusts the value's range (the host's
//! capability layer validated it) but still refuses keys it cannot
//! resolve. [`ValveCommand`] is the typed layer for Rust callers, built on
//! range-validated [`types`](crate::types) values.
//!
//! # Examples
//!
//! ```
//! use qoto_valve::command::{ValveCommand, encode_set};
//! use qoto_valve::datapoint::DataPointTable;
//! use qoto_valve::types::WateringTimer;
//!
//! let table = DataPointTable::qt05m();
//!
//! // Raw host surface
//! let write = encode_set(&table, "shutdown_timer", 1800).unwrap();
//! assert_eq!(write.tag, 11);
//!
//! // Typed surface
//! let cmd = ValveCommand::SetShutdownTimer(WateringTimer::new(1800).unwrap());
//! assert_eq!(cmd.to_write(&table).unwrap(), write);
//! ```

use crate::datapoint::{Attribute, DataPointTable, DataPointValue, DataPointWrite};
use crate::error::EncodeError;
use crate::types::{ValvePosition, WateringTimer};

/// Encodes one named set-command into one wire write.
///
/// The key is the attribute's snake_case wire name. The value is trusted
/// to be in range for its attribute; range checking belongs to the
/// caller's capability layer, not this boundary.
///
/// # Errors
///
/// Returns [`EncodeError::UnknownAttribute`] if the key names nothing in
/// the table, and [`EncodeError::ReadOnlyAttribute`] if it names an
/// attribute the device only reports. In both cases nothing is emitted.
pub fn encode_set(
    table: &DataPointTable,
    key: &str,
    value: u32,
) -> Result<DataPointWrite, EncodeError> {
    let entry = table
        .entry_for_key(key)
        .ok_or_else(|| EncodeError::UnknownAttribute(key.to_string()))?;

    if !entry.writable {
        return Err(EncodeError::ReadOnlyAttribute(key.to_string()));
    }

    Ok(DataPointWrite {
        tag: entry.tag,
        value: DataPointValue::Value(value),
    })
}

/// A typed set-command for one of the valve's writable attributes.
///
/// The three variants mirror the three commands the device accepts: plain
/// valve position (tag 102), auto-shutdown countdown (tag 11), and valve
/// position with auto-shutdown armed (tag 2). Setting the last is an
/// independent write, not a composite of the other two.
///
/// # Examples
///
/// ```
/// use qoto_valve::command::ValveCommand;
/// use qoto_valve::datapoint::DataPointTable;
/// use qoto_valve::types::ValvePosition;
///
/// let table = DataPointTable::qt05m();
/// let cmd = ValveCommand::SetValve(ValvePosition::new(40).unwrap());
///
/// let write = cmd.to_write(&table).unwrap();
/// assert_eq!(write.tag, 102);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveCommand {
    /// Set the valve opening.
    SetValve(ValvePosition),
    /// Set the auto-shutdown countdown.
    SetShutdownTimer(WateringTimer),
    /// Set the valve opening and arm the auto-shutdown countdown.
    SetValveAutoShutdown(ValvePosition),
}

impl ValveCommand {
    /// Returns the attribute this command writes.
    #[must_use]
    pub const fn attribute(&self) -> Attribute {
        match self {
            Self::SetValve(_) => Attribute::ValveState,
            Self::SetShutdownTimer(_) => Attribute::ShutdownTimer,
            Self::SetValveAutoShutdown(_) => Attribute::ValveStateAutoShutdown,
        }
    }

    /// Returns the value this command writes, as it will appear on the
    /// wire.
    #[must_use]
    pub fn raw_value(&self) -> u32 {
        match self {
            Self::SetValve(pos) | Self::SetValveAutoShutdown(pos) => u32::from(pos.value()),
            Self::SetShutdownTimer(timer) => timer.seconds(),
        }
    }

    /// Resolves this command against a data-point table into one wire
    /// write.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnknownAttribute`] if the table (a device
    /// variant's, perhaps) has no entry for this command's attribute.
    pub fn to_write(&self, table: &DataPointTable) -> Result<DataPointWrite, EncodeError> {
        encode_set(table, self.attribute().name(), self.raw_value())
    }
}
