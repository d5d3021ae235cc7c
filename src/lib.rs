// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `qoto_valve` - Tuya data-point translation for the QOTO QT-05M
//! irrigation valve.
//!
//! The QT-05M exposes everything through the Tuya vendor tunneling
//! cluster: numbered data points with opaque typed payloads instead of
//! standard attributes. This library is the translation boundary between
//! that encoding and a host automation platform's named attribute model.
//! It owns no transport: report batches arrive already demultiplexed to
//! tag/value pairs and produced wire writes are handed back for delivery.
//!
//! # What it does
//!
//! - **Decode**: one report batch in, one sparse named partial update out.
//!   Unknown or malformed entries are skipped and recorded, never fatal.
//! - **Encode**: one named set-command in, exactly one tagged wire write
//!   out, or a resolution error with nothing emitted.
//! - **Registry**: the fixed tag↔attribute table both directions share.
//!
//! Decode and encode are pure, stateless and synchronous; calls can be
//! interleaved freely. Commands and the reports they eventually cause are
//! not correlated — the device answers through the normal report path,
//! whenever it does.
//!
//! # Quick Start
//!
//! ```
//! use qoto_valve::{Attribute, DataPoint, DataPointTable, ValveCommand, decode_report};
//! use qoto_valve::types::WateringTimer;
//!
//! let table = DataPointTable::qt05m();
//!
//! // A report arrives from the transport layer.
//! let batch = [DataPoint::value(2, 40), DataPoint::value(110, 85)];
//! let update = decode_report(&table, &batch);
//! assert_eq!(update.get(Attribute::ValveState), Some(40));
//! assert_eq!(update.get(Attribute::Battery), Some(85));
//!
//! // A command goes the other way.
//! let cmd = ValveCommand::SetShutdownTimer(WateringTimer::from_minutes(30)?);
//! let write = cmd.to_write(&table)?;
//! assert_eq!(write.tag, 11);
//! # Ok::<(), qoto_valve::Error>(())
//! ```

pub mod command;
pub mod datapoint;
pub mod error;
pub mod report;
pub mod state;
pub mod types;

pub use command::{ValveCommand, encode_set};
pub use datapoint::{
    Attribute, DataPoint, DataPointEntry, DataPointTable, DataPointValue, DataPointWrite,
    ValueKind,
};
pub use error::{EncodeError, Error, Result, ValueError};
pub use report::{ReportUpdate, SkipReason, SkippedDataPoint, decode_report};
pub use state::ValveState;
pub use types::{ValvePosition, WateringTimer};
