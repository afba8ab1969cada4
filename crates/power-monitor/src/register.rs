// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! INA219 register map and raw word decoding.
//!
//! The decoders are pure functions over the 16-bit words returned by the
//! device. Signedness is explicit in the argument types: the bus voltage
//! register is unsigned, the shunt voltage register is two's complement.

/// Shunt voltage register pointer.
pub const REG_SHUNT_VOLTAGE: u8 = 0x01;

/// Bus voltage register pointer.
pub const REG_BUS_VOLTAGE: u8 = 0x02;

/// Low status bits (CNVR, OVF, reserved) below the bus voltage value.
pub const BUS_VOLTAGE_STATUS_BITS: u32 = 3;

/// Bus voltage LSB in volts (4 mV).
pub const BUS_VOLTAGE_LSB_V: f64 = 0.004;

/// Shunt voltage LSB in volts (10 µV).
pub const SHUNT_VOLTAGE_LSB_V: f64 = 0.000_01;

/// Decodes a bus voltage register word into volts.
pub fn decode_bus_voltage(word: u16) -> f64 {
    f64::from(word >> BUS_VOLTAGE_STATUS_BITS) * BUS_VOLTAGE_LSB_V
}

/// Reinterprets a shunt voltage register word as two's complement.
pub fn shunt_raw(word: u16) -> i16 {
    i16::from_be_bytes(word.to_be_bytes())
}

/// Decodes a signed shunt voltage value into volts.
pub fn decode_shunt_voltage(raw: i16) -> f64 {
    f64::from(raw) * SHUNT_VOLTAGE_LSB_V
}

/// Derives the current in amps through a shunt of `shunt_ohms`.
pub fn decode_current_amps(raw: i16, shunt_ohms: f64) -> f64 {
    decode_shunt_voltage(raw) / shunt_ohms
}
