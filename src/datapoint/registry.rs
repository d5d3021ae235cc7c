// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The tag↔attribute registry.
//!
//! The registry is the sole source of truth for translation in both
//! directions: inbound reports resolve tags to attributes through it, and
//! outbound commands resolve attribute keys to tags through it. It is a
//! fixed table mirroring the device's reverse-engineered firmware contract,
//! built once and shared by reference; nothing mutates it at runtime.
//!
//! Tags the firmware emits that carry no entry here (the QT-05M sends 104,
//! a fault alarm, and 108, min/max usage) are an expected outcome: the
//! decoder skips them. Unknown is a designed path, not a fault.

use super::{Attribute, ValueKind};

/// One registry entry: the translation contract for a single data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataPointEntry {
    /// The named attribute this data point translates to.
    pub attribute: Attribute,
    /// The firmware-defined tag carrying it on the wire.
    pub tag: u8,
    /// What the numeric payload means.
    pub kind: ValueKind,
    /// Whether the device accepts writes to this tag.
    pub writable: bool,
    /// Attributes that receive a copy of this data point's value on
    /// decode, because the device does not report them separately while
    /// this data point is active.
    pub mirrors: &'static [Attribute],
}

/// Data points of the QOTO QT-05M watering timer.
///
/// Tag numbers and the tag-2 mirror come from the reverse-engineered
/// firmware contract. The mirror reflects observed device behavior: while
/// an auto-shutdown timer is active the device reports position only
/// through tag 2, never through tag 102, so tag 2 stands in for both
/// fields. Whether that is the firmware's intent or a quirk is unknown.
const QT05M: &[DataPointEntry] = &[
    DataPointEntry {
        attribute: Attribute::ValveStateAutoShutdown,
        tag: 2,
        kind: ValueKind::Percent,
        writable: true,
        mirrors: &[Attribute::ValveState],
    },
    DataPointEntry {
        attribute: Attribute::WaterFlow,
        tag: 3,
        kind: ValueKind::Percent,
        writable: false,
        mirrors: &[],
    },
    DataPointEntry {
        attribute: Attribute::ShutdownTimer,
        tag: 11,
        kind: ValueKind::Seconds,
        writable: true,
        mirrors: &[],
    },
    DataPointEntry {
        attribute: Attribute::RemainingWateringTime,
        tag: 101,
        kind: ValueKind::Seconds,
        writable: false,
        mirrors: &[],
    },
    DataPointEntry {
        attribute: Attribute::ValveState,
        tag: 102,
        kind: ValueKind::Percent,
        writable: true,
        mirrors: &[],
    },
    DataPointEntry {
        attribute: Attribute::LastWateringTime,
        tag: 107,
        kind: ValueKind::Seconds,
        writable: false,
        mirrors: &[],
    },
    DataPointEntry {
        attribute: Attribute::Battery,
        tag: 110,
        kind: ValueKind::Percent,
        writable: false,
        mirrors: &[],
    },
];

const fn tags_unique(entries: &[DataPointEntry]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if entries[i].tag == entries[j].tag {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

// The firmware assigns each tag to exactly one attribute; a duplicate here
// would silently misroute reports.
const _: () = assert!(tags_unique(QT05M), "duplicate data-point tag in QT-05M table");

/// The immutable data-point table for one device model.
///
/// Construct once (typically [`DataPointTable::qt05m`]) and share by
/// reference into the decoder and encoder. Lookups are linear scans; the
/// table has single-digit size.
///
/// # Examples
///
/// ```
/// use qoto_valve::datapoint::{Attribute, DataPointTable};
///
/// let table = DataPointTable::qt05m();
/// assert_eq!(table.tag_of(Attribute::Battery), Some(110));
/// assert_eq!(table.attribute_of(110), Some(Attribute::Battery));
/// assert_eq!(table.attribute_of(104), None); // fault alarm, unmapped
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataPointTable {
    entries: &'static [DataPointEntry],
}

impl DataPointTable {
    /// The table for the QOTO QT-05M watering timer.
    #[must_use]
    pub const fn qt05m() -> Self {
        Self { entries: QT05M }
    }

    /// Creates a table over a caller-provided entry set.
    ///
    /// Intended for device variants with different tag assignments or
    /// mirror rules; the entry set is data, the translation logic is not
    /// duplicated.
    #[must_use]
    pub const fn with_entries(entries: &'static [DataPointEntry]) -> Self {
        Self { entries }
    }

    /// Resolves an attribute to its wire tag.
    #[must_use]
    pub fn tag_of(&self, attribute: Attribute) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.attribute == attribute)
            .map(|e| e.tag)
    }

    /// Resolves a wire tag to its named attribute.
    ///
    /// Returns `None` for tags outside the registry; the caller decides
    /// whether that means "skip" (decoder) or nothing, but it is never an
    /// error here.
    #[must_use]
    pub fn attribute_of(&self, tag: u8) -> Option<Attribute> {
        self.entry_of(tag).map(|e| e.attribute)
    }

    /// Returns the full entry for a wire tag.
    #[must_use]
    pub fn entry_of(&self, tag: u8) -> Option<&DataPointEntry> {
        self.entries.iter().find(|e| e.tag == tag)
    }

    /// Returns the full entry for an attribute's wire name.
    #[must_use]
    pub fn entry_for_key(&self, key: &str) -> Option<&DataPointEntry> {
        let attribute = Attribute::from_name(key)?;
        self.entries.iter().find(|e| e.attribute == attribute)
    }

    /// Returns all entries in the table.
    #[must_use]
    pub const fn entries(&self) -> &[DataPointEntry] {
        self.entries
    }
}

impl Default for DataPointTable {
    fn default() -> Self {
        Self::qt05m()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_attribute_bijection() {
        let table = DataPointTable::qt05m();
        for entry in table.entries() {
            assert_eq!(table.tag_of(entry.attribute), Some(entry.tag));
            assert_eq!(table.attribute_of(entry.tag), Some(entry.attribute));
        }
    }

    #[test]
    fn qt05m_tag_assignments() {
        let table = DataPointTable::qt05m();
        assert_eq!(table.tag_of(Attribute::ValveStateAutoShutdown), Some(2));
        assert_eq!(table.tag_of(Attribute::WaterFlow), Some(3));
        assert_eq!(table.tag_of(Attribute::ShutdownTimer), Some(11));
        assert_eq!(table.tag_of(Attribute::RemainingWateringTime), Some(101));
        assert_eq!(table.tag_of(Attribute::ValveState), Some(102));
        assert_eq!(table.tag_of(Attribute::LastWateringTime), Some(107));
        assert_eq!(table.tag_of(Attribute::Battery), Some(110));
    }

    #[test]
    fn undocumented_tags_are_unmapped() {
        let table = DataPointTable::qt05m();
        assert_eq!(table.attribute_of(104), None);
        assert_eq!(table.attribute_of(108), None);
        assert_eq!(table.attribute_of(0), None);
    }

    #[test]
    fn auto_shutdown_mirrors_valve_state() {
        let table = DataPointTable::qt05m();
        let entry = table.entry_of(2).unwrap();
        assert_eq!(entry.mirrors, &[Attribute::ValveState][..]);

        // The plain position report mirrors nothing.
        let entry = table.entry_of(102).unwrap();
        assert!(entry.mirrors.is_empty());
    }

    #[test]
    fn writable_set_is_exactly_three() {
        let table = DataPointTable::qt05m();
        let writable: Vec<u8> = table
            .entries()
            .iter()
            .filter(|e| e.writable)
            .map(|e| e.tag)
            .collect();
        assert_eq!(writable, vec![2, 11, 102]);
    }

    #[test]
    fn entry_for_key_resolves_wire_names() {
        let table = DataPointTable::qt05m();
        assert_eq!(table.entry_for_key("shutdown_timer").unwrap().tag, 11);
        assert!(table.entry_for_key("nonexistent").is_none());
    }
}
