// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `obc-snap snapshot` command: acquire once and print the document.
//!
//! Sensor failures appear as `null` fields; the command only fails if the
//! document itself cannot be written.

use std::io::Write;
use telemetry_snapshot::AcquisitionConfig;

pub fn execute(config: &AcquisitionConfig, compact: bool) -> anyhow::Result<()> {
    let snapshot = telemetry_snapshot::acquire(config);
    let document = if compact {
        snapshot.to_json_compact()?
    } else {
        snapshot.to_json()?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{document}")?;
    stdout.flush()?;
    Ok(())
}
