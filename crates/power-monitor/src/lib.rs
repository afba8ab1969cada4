// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # power-monitor
//!
//! Reads bus voltage and shunt current from an INA219 power monitor over a
//! shared I2C transport.
//!
//! # Register Protocol
//! Each quantity is one register transaction:
//! 1. select the peripheral address on the bus,
//! 2. write a single register-pointer byte,
//! 3. read back exactly two bytes, big-endian.
//!
//! | Register | Pointer | Word | Decoding |
//! |---|---|---|---|
//! | Shunt voltage | `0x01` | `i16` | `raw × 10 µV ÷ R_shunt` → A |
//! | Bus voltage | `0x02` | `u16` | `(raw >> 3) × 4 mV` → V |
//!
//! # Failure Isolation
//! Any selection failure, write or read error, or short transfer makes only
//! that quantity [`Reading::Unavailable`](sensor_core::Reading). There are
//! no retries: one attempt per quantity per acquisition cycle.
//!
//! # Example
//! ```no_run
//! use power_monitor::{BusTransport, LinuxI2cBus, PowerReading};
//!
//! let mut bus = LinuxI2cBus::open("/dev/i2c-1")?;
//! let power = PowerReading::read(&mut bus, 0x40, 0.1);
//! bus.close();
//! println!("{:?} V, {:?} mA", power.voltage.value(), power.current_ma().value());
//! # Ok::<(), power_monitor::BusError>(())
//! ```

mod error;
mod reader;
pub mod register;
mod transport;

pub use error::BusError;
pub use reader::{
    read_current, read_register, read_voltage, try_read_current, try_read_voltage, PowerReading,
};
pub use transport::{BusTransport, LinuxI2cBus};
