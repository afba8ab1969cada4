// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for bus register transactions.

/// Errors that can occur while talking to a device on the I2C bus.
///
/// None of these escape a reader: they are logged and turned into an
/// unavailable reading for the affected quantity.
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    /// The bus character device could not be opened.
    #[error("failed to open bus device {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    /// The peripheral address could not be selected.
    #[error("failed to select address {address:#04x}: {source}")]
    SelectAddress {
        address: u8,
        source: std::io::Error,
    },

    /// Writing the register pointer failed.
    #[error("register pointer write failed: {source}")]
    Write { source: std::io::Error },

    /// Fewer bytes than requested were written.
    #[error("short write: expected {expected} byte(s), wrote {actual}")]
    ShortWrite { expected: usize, actual: usize },

    /// Reading the register word failed.
    #[error("register read failed: {source}")]
    Read { source: std::io::Error },

    /// Fewer bytes than requested were read.
    #[error("short read: expected {expected} byte(s), got {actual}")]
    ShortRead { expected: usize, actual: usize },

    /// The shunt resistance cannot be used to derive a current.
    #[error("invalid shunt resistance: {ohms} Ω")]
    InvalidShunt { ohms: f64 },
}
