// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommands and shared setup.

pub mod config;
pub mod snapshot;

use std::path::{Path, PathBuf};
use telemetry_snapshot::AcquisitionConfig;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Command-line values that replace configuration file entries.
#[derive(Debug, Default)]
pub struct Overrides {
    pub bus: Option<PathBuf>,
    pub address: Option<u8>,
    pub shunt_ohms: Option<f64>,
    pub w1_root: Option<PathBuf>,
    pub probes: Vec<String>,
}

/// Loads the file configuration (or defaults), applies overrides, validates.
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> anyhow::Result<AcquisitionConfig> {
    let mut config = match path {
        Some(p) => AcquisitionConfig::from_file(p)?,
        None => AcquisitionConfig::default(),
    };

    if let Some(bus) = overrides.bus {
        config.bus_device = bus;
    }
    if let Some(address) = overrides.address {
        config.address = address;
    }
    if let Some(ohms) = overrides.shunt_ohms {
        config.shunt_ohms = ohms;
    }
    if let Some(root) = overrides.w1_root {
        config.w1_devices_root = root;
    }
    if !overrides.probes.is_empty() {
        config.probe_ids = overrides.probes;
    }

    config.validate()?;
    tracing::debug!("configuration: {config:?}");
    Ok(config)
}

/// Parses an address given as decimal (`64`) or hex (`0x40`).
pub fn parse_address(s: &str) -> Result<u8, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}
