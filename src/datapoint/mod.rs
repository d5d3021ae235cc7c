// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tuya data-point wire model.
//!
//! The QT-05M does not expose standard typed attributes. Everything it
//! reports, and everything it accepts, travels through the vendor tunneling
//! cluster as numbered *data points*: an opaque numeric tag paired with a
//! typed payload. This module models that wire surface:
//!
//! - [`DataPoint`] - one tag/value pair from an inbound report batch
//! - [`DataPointValue`] - the typed payloads the tunnel carries
//! - [`DataPointWrite`] - one outbound tag/value write
//! - [`Attribute`] - the named attributes the tags translate to
//!
//! The tag↔attribute mapping itself lives in [`registry`].

pub mod registry;

pub use registry::{DataPointEntry, DataPointTable};

use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw typed payload carried by the tunneling cluster.
///
/// The transport layer decodes each report entry's payload into one of
/// these before handing it to this library. Which variant a given tag is
/// expected to carry is declared by its registry entry; a mismatch is
/// skipped by the decoder, never trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataPointValue {
    /// Boolean payload.
    Bool(bool),
    /// Unsigned integer payload (Tuya "value" type, big-endian u32 on the
    /// wire).
    Value(u32),
    /// Enum index payload.
    Enum(u8),
    /// Raw byte-string payload.
    Raw(Vec<u8>),
}

impl DataPointValue {
    /// Returns the payload as an unsigned integer, if it is numeric.
    ///
    /// Both `Value` and `Enum` payloads project to an integer; `Bool` and
    /// `Raw` do not.
    #[must_use]
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Enum(v) => Some(u32::from(*v)),
            Self::Bool(_) | Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for DataPointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Value(v) => write!(f, "{v}"),
            Self::Enum(v) => write!(f, "enum:{v}"),
            Self::Raw(bytes) => write!(f, "raw:{bytes:02x?}"),
        }
    }
}

impl From<bool> for DataPointValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u32> for DataPointValue {
    fn from(value: u32) -> Self {
        Self::Value(value)
    }
}

/// One entry of an inbound report batch: a data-point tag and its payload.
///
/// Constructed by the transport layer for each entry of a
/// `commandDataReport`, consumed exactly once by
/// [`decode_report`](crate::report::decode_report).
///
/// # Examples
///
/// ```
/// use qoto_valve::datapoint::{DataPoint, DataPointValue};
///
/// let dp = DataPoint::value(110, 85);
/// assert_eq!(dp.tag, 110);
/// assert_eq!(dp.value, DataPointValue::Value(85));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    /// The firmware-defined data-point tag.
    pub tag: u8,
    /// The decoded payload.
    pub value: DataPointValue,
}

impl DataPoint {
    /// Creates a data point from a tag and any payload.
    #[must_use]
    pub fn new(tag: u8, value: DataPointValue) -> Self {
        Self { tag, value }
    }

    /// Creates a data point carrying an unsigned integer payload.
    #[must_use]
    pub const fn value(tag: u8, value: u32) -> Self {
        Self {
            tag,
            value: DataPointValue::Value(value),
        }
    }

    /// Creates a data point carrying a boolean payload.
    #[must_use]
    pub const fn boolean(tag: u8, value: bool) -> Self {
        Self {
            tag,
            value: DataPointValue::Bool(value),
        }
    }
}

/// One outbound wire write: the tag and payload to tunnel to the device.
///
/// Produced by the command encoder; handed to the transport layer, which
/// owns delivery. A write is never batched with another and carries no
/// expectation of a correlated response; the device reports its new state
/// asynchronously through the normal report path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPointWrite {
    /// The firmware-defined data-point tag.
    pub tag: u8,
    /// The payload to send.
    pub value: DataPointValue,
}

/// The named attributes the QT-05M's data points translate to.
///
/// These names are the host-facing attribute surface: decoder output is
/// keyed by them and set-command keys resolve to them. Serialized form is
/// the snake_case wire name (`"valve_state"`, `"battery"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Current water flow in percent (read-only, tag 3).
    WaterFlow,
    /// Duration of the last watering in seconds (read-only, tag 107).
    LastWateringTime,
    /// Remaining auto-shutdown countdown in seconds (read-only, tag 101).
    RemainingWateringTime,
    /// Valve opening in percent (tag 102).
    ValveState,
    /// Auto-shutdown countdown setpoint in seconds (tag 11).
    ShutdownTimer,
    /// Valve opening with auto-shutdown armed, in percent (tag 2).
    ValveStateAutoShutdown,
    /// Battery level in percent (read-only, tag 110).
    Battery,
}

impl Attribute {
    /// Returns the attribute's snake_case wire name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::WaterFlow => "water_flow",
            Self::LastWateringTime => "last_watering_time",
            Self::RemainingWateringTime => "remaining_watering_time",
            Self::ValveState => "valve_state",
            Self::ShutdownTimer => "shutdown_timer",
            Self::ValveStateAutoShutdown => "valve_state_auto_shutdown",
            Self::Battery => "battery",
        }
    }

    /// Resolves a snake_case wire name back to an attribute.
    ///
    /// Returns `None` for names outside the attribute surface.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "water_flow" => Some(Self::WaterFlow),
            "last_watering_time" => Some(Self::LastWateringTime),
            "remaining_watering_time" => Some(Self::RemainingWateringTime),
            "valve_state" => Some(Self::ValveState),
            "shutdown_timer" => Some(Self::ShutdownTimer),
            "valve_state_auto_shutdown" => Some(Self::ValveStateAutoShutdown),
            "battery" => Some(Self::Battery),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The numeric projection a registry entry declares for its attribute.
///
/// Every QT-05M attribute is numeric and non-negative; the kind records
/// what the integer means so consumers can attach the right unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// A percentage, 0-100.
    Percent,
    /// A duration in seconds.
    Seconds,
}
