// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # telemetry-snapshot
//!
//! Acquires one snapshot of the on-board sensors and encodes it as a
//! fixed-schema JSON document.
//!
//! # Acquisition Order
//! ```text
//! open bus → voltage → current → probe[0] … probe[n-1] → close bus → encode
//! ```
//! Reads are strictly sequential. A failure anywhere is confined to the
//! affected field, which is rendered as `null`; the document always has
//! every field.
//!
//! # Document
//! ```json
//! {
//!   "timestamp": "2024-01-01T00:00:00Z",
//!   "ina219": { "voltage_v": 1.600, "current_ma": 1.000 },
//!   "ds18b20_temperatures_c": [
//!     { "id": "28-000000000001", "temp_c": 24.750 },
//!     { "id": "28-000000000002", "temp_c": null }
//!   ]
//! }
//! ```
//!
//! # Example
//! ```no_run
//! use telemetry_snapshot::{acquire, AcquisitionConfig};
//!
//! let config = AcquisitionConfig::default();
//! let snapshot = acquire(&config);
//! println!("{}", snapshot.to_json().expect("encoding failed"));
//! ```

mod acquire;
mod config;
mod encoder;
mod error;
mod snapshot;

pub use acquire::{acquire, acquire_with, collect_readings};
pub use config::AcquisitionConfig;
pub use encoder::{encode, encode_compact, format_timestamp, TIMESTAMP_FORMAT};
pub use error::SnapshotError;
pub use snapshot::Snapshot;

pub use power_monitor::PowerReading;
pub use probe_reader::ProbeReading;
pub use sensor_core::Reading;
