// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound report decoding.
//!
//! The transport layer delivers one report event as an ordered batch of
//! data points. [`decode_report`] translates such a batch into a
//! [`ReportUpdate`]: a sparse, named partial update for the host to merge
//! into its durable device state. Decoding is a pure function of the batch
//! and the table; it holds no state across calls, so re-decoding the same
//! batch always yields the same update.
//!
//! No single entry can fail a batch. Entries with an unregistered tag or a
//! payload type the registry does not expect are skipped, logged at
//! `debug`, and recorded on the update for diagnostics.
//!
//! # Examples
//!
//! ```
//! use qoto_valve::datapoint::{Attribute, DataPoint, DataPointTable};
//! use qoto_valve::report::decode_report;
//!
//! let table = DataPointTable::qt05m();
//! let batch = [DataPoint::value(110, 85), DataPoint::value(3, 20)];
//!
//! let update = decode_report(&table, &batch);
//! assert_eq!(update.get(Attribute::Battery), Some(85));
//! assert_eq!(update.get(Attribute::WaterFlow), Some(20));
//! ```

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::datapoint::{Attribute, DataPoint, DataPointTable, DataPointValue};

/// Why a report entry produced no attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The tag has no registry entry. The QT-05M is known to emit such
    /// tags (104 fault alarm, 108 min/max usage).
    UnknownTag,
    /// The tag is registered but the payload type does not match what the
    /// registry expects for it.
    MalformedPayload,
}

/// Diagnostic record of one skipped report entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDataPoint {
    /// The tag that arrived.
    pub tag: u8,
    /// The raw payload that arrived with it.
    pub value: DataPointValue,
    /// Why the entry was skipped.
    pub reason: SkipReason,
}

/// A sparse partial update decoded from one report batch.
///
/// Holds at most one value per attribute; when a batch repeats a tag, the
/// later entry wins. The authoritative merged device state is the host's,
/// not this crate's — an update only proposes the attributes present in
/// its batch (see [`ValveState`](crate::state::ValveState) for a merge
/// helper).
///
/// Serializes to the flat JSON attribute bag the host consumes:
/// `{"valve_state":40,"valve_state_auto_shutdown":40}`. Skipped-entry
/// diagnostics are not part of that surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportUpdate {
    values: BTreeMap<Attribute, u32>,
    skipped: Vec<SkippedDataPoint>,
}

impl ReportUpdate {
    /// Returns the proposed value for an attribute, if its tag was in the
    /// batch.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<u32> {
        self.values.get(&attribute).copied()
    }

    /// Returns `true` if the update proposes no attribute values.
    ///
    /// An update can be empty and still carry skipped-entry diagnostics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of proposed attribute values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates the proposed `(attribute, value)` pairs in attribute
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        self.values.iter().map(|(a, v)| (*a, *v))
    }

    /// Returns the entries the decoder skipped, in arrival order.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedDataPoint] {
        &self.skipped
    }
}

impl Serialize for ReportUpdate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (attribute, value) in &self.values {
            map.serialize_entry(attribute.name(), value)?;
        }
        map.end()
    }
}

/// Decodes one report batch into a partial attribute update.
///
/// Entries are processed strictly in arrival order:
///
/// - an unregistered tag is skipped and recorded, without affecting the
///   rest of the batch;
/// - a registered tag with a non-numeric payload is likewise skipped and
///   recorded;
/// - a registered tag writes its value under its attribute, and under
///   every mirror attribute its entry declares (on the QT-05M, tag 2
///   fills both `valve_state_auto_shutdown` and `valve_state`);
/// - a repeated attribute keeps the later value.
///
/// Values are taken as the device reported them; there is no range
/// validation on decode.
#[must_use]
pub fn decode_report(table: &DataPointTable, batch: &[DataPoint]) -> ReportUpdate {
    let mut update = ReportUpdate::default();

    for dp in batch {
        let Some(entry) = table.entry_of(dp.tag) else {
            tracing::debug!(tag = dp.tag, value = %dp.value, "skipping unknown data point");
            update.skipped.push(SkippedDataPoint {
                tag: dp.tag,
                value: dp.value.clone(),
                reason: SkipReason::UnknownTag,
            });
            continue;
        };

        let Some(value) = dp.value.as_u32() else {
            tracing::debug!(
                tag = dp.tag,
                attribute = %entry.attribute,
                value = %dp.value,
                "skipping data point with unexpected payload type"
            );
            update.skipped.push(SkippedDataPoint {
                tag: dp.tag,
                value: dp.value.clone(),
                reason: SkipReason::MalformedPayload,
            });
            continue;
        };

        update.values.insert(entry.attribute, value);
        for mirror in entry.mirrors {
            update.values.insert(*mirror, value);
        }
    }

    update
}
