// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the QT-05M's writable attributes.
//!
//! This module provides type-safe representations of the values the valve
//! accepts. Each type ensures values are within their valid ranges at
//! construction time, preventing rejected or misbehaving device writes.
//!
//! # Types
//!
//! - [`ValvePosition`] - Valve opening (0-100%)
//! - [`WateringTimer`] - Auto-shutdown countdown (0-14400 seconds)
//!
//! The decoder does not use these types: inbound reports are trusted as-is
//! and surface as plain integers. Range enforcement only matters in the
//! command direction, before a value reaches the device.

mod valve_position;
mod watering_timer;

pub use valve_position::ValvePosition;
pub use watering_timer::WateringTimer;
