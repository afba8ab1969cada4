// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `obc-snap config` command: print the effective configuration.

use telemetry_snapshot::AcquisitionConfig;

pub fn execute(config: &AcquisitionConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
