// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Acquisition configuration loaded from TOML files or constructed
//! programmatically.
//!
//! # TOML Format
//! ```toml
//! bus_device = "/dev/i2c-1"
//! address = 0x40
//! shunt_ohms = 0.1
//! w1_devices_root = "/sys/bus/w1/devices"
//! probe_ids = ["28-000000000001", "28-000000000002"]
//! ```
//! Every key is optional; missing keys take the defaults shown above.

use crate::SnapshotError;
use probe_reader::DEFAULT_W1_DEVICES_ROOT;
use std::path::{Path, PathBuf};

/// Highest valid 7-bit I2C address.
const MAX_I2C_ADDRESS: u8 = 0x7F;

/// Parameters for one acquisition cycle.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AcquisitionConfig {
    /// I2C bus character device.
    pub bus_device: PathBuf,
    /// 7-bit address of the INA219.
    pub address: u8,
    /// Shunt resistance in ohms.
    pub shunt_ohms: f64,
    /// Directory containing one-wire slave devices.
    pub w1_devices_root: PathBuf,
    /// DS18B20 identifiers, in output order.
    pub probe_ids: Vec<String>,
}

impl AcquisitionConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SnapshotError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SnapshotError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| SnapshotError::ConfigError(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, SnapshotError> {
        toml::to_string_pretty(self)
            .map_err(|e| SnapshotError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Checks value ranges.
    ///
    /// Probe identifiers are not inspected: they are opaque and may repeat.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if !(self.shunt_ohms.is_finite() && self.shunt_ohms > 0.0) {
            return Err(SnapshotError::ConfigError(format!(
                "shunt_ohms must be a positive number, got {}",
                self.shunt_ohms
            )));
        }
        if self.address > MAX_I2C_ADDRESS {
            return Err(SnapshotError::ConfigError(format!(
                "address {:#04x} is not a 7-bit I2C address",
                self.address
            )));
        }
        Ok(())
    }
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            bus_device: PathBuf::from("/dev/i2c-1"),
            address: 0x40,
            shunt_ohms: 0.1,
            w1_devices_root: PathBuf::from(DEFAULT_W1_DEVICES_ROOT),
            probe_ids: vec!["28-000000000001".to_string(), "28-000000000002".to_string()],
        }
    }
}
