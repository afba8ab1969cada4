// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Aggregated point-in-time sensor snapshot.

use crate::{encode, encode_compact, format_timestamp, SnapshotError};
use chrono::{DateTime, Utc};
use power_monitor::PowerReading;
use probe_reader::ProbeReading;

/// One complete, immutable set of readings from a single acquisition cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// When the snapshot was taken.
    pub timestamp: DateTime<Utc>,
    /// Power monitor reading (current held in amps).
    pub power: PowerReading,
    /// Probe readings in configuration order.
    pub probes: Vec<ProbeReading>,
}

impl Snapshot {
    /// Assembles a snapshot from completed readings.
    pub fn new(timestamp: DateTime<Utc>, power: PowerReading, probes: Vec<ProbeReading>) -> Self {
        Self {
            timestamp,
            power,
            probes,
        }
    }

    /// Encodes the snapshot as an indented JSON document.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        encode(&self.timestamp, &self.power, &self.probes)
    }

    /// Encodes the snapshot as single-line JSON.
    pub fn to_json_compact(&self) -> Result<String, SnapshotError> {
        encode_compact(&self.timestamp, &self.power, &self.probes)
    }

    /// Number of probes that produced a temperature.
    pub fn healthy_probes(&self) -> usize {
        self.probes
            .iter()
            .filter(|p| p.temperature.is_present())
            .count()
    }

    /// Returns a summary string suitable for logging.
    ///
    /// # Example output
    /// ```text
    /// Snapshot 2024-01-01T00:00:00Z: 1.600 V, 1.000 mA, probes 1/2 ok
    /// ```
    pub fn summary(&self) -> String {
        let or_na = |text: Option<String>| text.unwrap_or_else(|| "n/a".to_string());
        format!(
            "Snapshot {}: {} V, {} mA, probes {}/{} ok",
            format_timestamp(&self.timestamp),
            or_na(self.power.voltage.to_fixed()),
            or_na(self.power.current_ma().to_fixed()),
            self.healthy_probes(),
            self.probes.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sensor_core::Reading;

    fn sample() -> Snapshot {
        Snapshot::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            PowerReading {
                voltage: Reading::Present(1.6),
                current: Reading::Present(0.001),
            },
            vec![
                ProbeReading::new("28-000000000001", Reading::Present(24.75)),
                ProbeReading::new("28-000000000002", Reading::Unavailable),
            ],
        )
    }

    #[test]
    fn test_summary_format() {
        assert_eq!(
            sample().summary(),
            "Snapshot 2024-01-01T00:00:00Z: 1.600 V, 1.000 mA, probes 1/2 ok"
        );
    }

    #[test]
    fn test_summary_unavailable_power() {
        let mut snap = sample();
        snap.power = PowerReading::unavailable();
        assert!(snap.summary().contains("n/a V, n/a mA"));
    }

    #[test]
    fn test_healthy_probes() {
        assert_eq!(sample().healthy_probes(), 1);
    }

    #[test]
    fn test_to_json_matches_encoder() {
        let snap = sample();
        let direct = encode(&snap.timestamp, &snap.power, &snap.probes).unwrap();
        assert_eq!(snap.to_json().unwrap(), direct);
        assert!(snap.to_json_compact().unwrap().starts_with(r#"{"timestamp":"#));
    }
}
