// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-probe temperature readers.

use crate::{parse_status, ProbeError, StatusSource};
use sensor_core::Reading;

/// One probe's temperature for one acquisition cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReading {
    /// Probe identifier as configured (opaque, e.g. `28-000000000001`).
    pub id: String,
    /// Temperature in degrees Celsius.
    pub temperature: Reading<f64>,
}

impl ProbeReading {
    /// Creates a reading for `id`.
    pub fn new(id: impl Into<String>, temperature: Reading<f64>) -> Self {
        Self {
            id: id.into(),
            temperature,
        }
    }
}

/// Fetches and parses a probe's status text into degrees Celsius.
pub fn try_read_temperature<S>(source: &S, probe_id: &str) -> Result<f64, ProbeError>
where
    S: StatusSource + ?Sized,
{
    let text = source.fetch_status_text(probe_id)?;
    parse_status(&text)
}

/// Reads one probe, folding any failure into `Unavailable`.
pub fn read_temperature<S>(source: &S, probe_id: &str) -> Reading<f64>
where
    S: StatusSource + ?Sized,
{
    match try_read_temperature(source, probe_id) {
        Ok(celsius) => {
            tracing::debug!("probe {probe_id}: {celsius:.3} C");
            Reading::from_f64(celsius)
        }
        Err(e) => {
            tracing::warn!("probe {probe_id} unavailable: {e}");
            Reading::Unavailable
        }
    }
}

/// Reads every probe in the given order.
///
/// Identifiers are neither sorted nor deduplicated; a repeated id is read
/// (and reported) once per occurrence.
pub fn read_probes<S, I>(source: &S, probe_ids: I) -> Vec<ProbeReading>
where
    S: StatusSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    probe_ids
        .into_iter()
        .map(|id| {
            let id = id.as_ref();
            ProbeReading::new(id, read_temperature(source, id))
        })
        .collect()
}
