// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Register transactions and the voltage/current readers.

use crate::register::{
    decode_bus_voltage, decode_current_amps, shunt_raw, REG_BUS_VOLTAGE, REG_SHUNT_VOLTAGE,
};
use crate::{BusError, BusTransport};
use sensor_core::Reading;

/// Size of every INA219 register in bytes.
const WORD_LEN: usize = 2;

/// Performs one register read: select, write the pointer byte, read a
/// big-endian word.
pub fn read_register<B>(bus: &mut B, address: u8, register: u8) -> Result<u16, BusError>
where
    B: BusTransport + ?Sized,
{
    bus.select_address(address)?;

    let written = bus.write(&[register])?;
    if written != 1 {
        return Err(BusError::ShortWrite {
            expected: 1,
            actual: written,
        });
    }

    let mut buf = [0u8; WORD_LEN];
    let read = bus.read(&mut buf)?;
    if read != WORD_LEN {
        return Err(BusError::ShortRead {
            expected: WORD_LEN,
            actual: read,
        });
    }

    let word = u16::from_be_bytes(buf);
    tracing::debug!("register {register:#04x} @ {address:#04x} = {word:#06x}");
    Ok(word)
}

/// Reads the bus voltage in volts.
pub fn try_read_voltage<B>(bus: &mut B, address: u8) -> Result<f64, BusError>
where
    B: BusTransport + ?Sized,
{
    read_register(bus, address, REG_BUS_VOLTAGE).map(decode_bus_voltage)
}

/// Reads the shunt current in amps.
pub fn try_read_current<B>(bus: &mut B, address: u8, shunt_ohms: f64) -> Result<f64, BusError>
where
    B: BusTransport + ?Sized,
{
    if !(shunt_ohms.is_finite() && shunt_ohms > 0.0) {
        return Err(BusError::InvalidShunt { ohms: shunt_ohms });
    }
    let word = read_register(bus, address, REG_SHUNT_VOLTAGE)?;
    Ok(decode_current_amps(shunt_raw(word), shunt_ohms))
}

/// Reads the bus voltage, folding any failure into `Unavailable`.
pub fn read_voltage<B>(bus: &mut B, address: u8) -> Reading<f64>
where
    B: BusTransport + ?Sized,
{
    match try_read_voltage(bus, address) {
        Ok(v) => Reading::from_f64(v),
        Err(e) => {
            tracing::warn!("voltage unavailable: {e}");
            Reading::Unavailable
        }
    }
}

/// Reads the shunt current in amps, folding any failure into `Unavailable`.
pub fn read_current<B>(bus: &mut B, address: u8, shunt_ohms: f64) -> Reading<f64>
where
    B: BusTransport + ?Sized,
{
    match try_read_current(bus, address, shunt_ohms) {
        Ok(a) => Reading::from_f64(a),
        Err(e) => {
            tracing::warn!("current unavailable: {e}");
            Reading::Unavailable
        }
    }
}

/// Voltage and current from one power monitor, for one acquisition cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PowerReading {
    /// Bus voltage in volts.
    pub voltage: Reading<f64>,
    /// Shunt current in amps.
    pub current: Reading<f64>,
}

impl PowerReading {
    /// A reading with both quantities unavailable.
    pub fn unavailable() -> Self {
        Self {
            voltage: Reading::Unavailable,
            current: Reading::Unavailable,
        }
    }

    /// Reads voltage then current over an already-open bus.
    pub fn read<B>(bus: &mut B, address: u8, shunt_ohms: f64) -> Self
    where
        B: BusTransport + ?Sized,
    {
        let voltage = read_voltage(bus, address);
        let current = read_current(bus, address, shunt_ohms);
        Self { voltage, current }
    }

    /// The current converted to milliamps.
    pub fn current_ma(&self) -> Reading<f64> {
        self.current.scale(1000.0)
    }
}
