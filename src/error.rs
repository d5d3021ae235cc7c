// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `qoto_valve` library.
//!
//! Two failure families exist: value validation (constructing a constrained
//! type like [`ValvePosition`](crate::types::ValvePosition) with an
//! out-of-range value) and command encoding (a set-command key that cannot be
//! resolved to a writable data point).
//!
//! Inbound report decoding deliberately has no error type: a report entry
//! that cannot be translated is skipped and recorded on the
//! [`ReportUpdate`](crate::report::ReportUpdate), never surfaced as a
//! failure. The device firmware is known to emit undocumented tags and the
//! decoder must keep going.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while encoding an outbound command.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
        /// The actual value that was provided.
        actual: u32,
    },
}

/// Errors raised while resolving an outbound set-command against the
/// data-point table.
///
/// Both variants are fatal for the single command they occur in: no wire
/// write is produced. Neither affects any other command or any inbound
/// report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The command key does not name any registered attribute.
    #[error("unknown attribute: {0:?}")]
    UnknownAttribute(String),

    /// The command key names a registered attribute that the device only
    /// reports and never accepts.
    #[error("attribute {0:?} is read-only")]
    ReadOnlyAttribute(String),
}

/// A specialized `Result` type for this library.
pub type Result<T> = std::result::Result<T, Error>;
