// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # probe-reader
//!
//! Reads DS18B20 one-wire temperature probes through the kernel `w1_therm`
//! status text.
//!
//! # Status Format
//! The kernel exposes each probe as `/sys/bus/w1/devices/<id>/w1_slave`:
//! ```text
//! 72 01 4b 46 7f ff 0e 10 57 : crc=57 YES
//! 72 01 4b 46 7f ff 0e 10 57 t=23125
//! ```
//! Line 1 ends in `YES` when the scratchpad CRC matched. Line 2 carries the
//! temperature in millidegrees Celsius after `t=`.
//!
//! # Failure Isolation
//! A probe that cannot be reached, fails its CRC, or reports a malformed
//! temperature yields [`Reading::Unavailable`](sensor_core::Reading) for
//! that probe only.

mod error;
mod parse;
mod reader;
mod source;

pub use error::ProbeError;
pub use parse::{parse_millidegrees, parse_status};
pub use reader::{read_probes, read_temperature, try_read_temperature, ProbeReading};
pub use source::{StatusSource, SysfsStatusSource, DEFAULT_W1_DEVICES_ROOT};
