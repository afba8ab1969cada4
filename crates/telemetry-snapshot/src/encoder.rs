// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Snapshot document encoding.
//!
//! The document layout is fixed: every key is always present, in the same
//! order, whatever the health of the sensors. Present values are rendered
//! with three decimals and unavailable ones as `null`.

use crate::SnapshotError;
use chrono::{DateTime, Utc};
use power_monitor::PowerReading;
use probe_reader::ProbeReading;
use sensor_core::Reading;
use serde::Serialize;

/// `strftime` pattern for the document timestamp (UTC, whole seconds).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Serialize)]
struct Document<'a> {
    timestamp: String,
    ina219: PowerSection,
    ds18b20_temperatures_c: Vec<ProbeEntry<'a>>,
}

#[derive(Serialize)]
struct PowerSection {
    voltage_v: Reading<f64>,
    current_ma: Reading<f64>,
}

#[derive(Serialize)]
struct ProbeEntry<'a> {
    id: &'a str,
    temp_c: Reading<f64>,
}

impl<'a> Document<'a> {
    fn new(timestamp: &DateTime<Utc>, power: &PowerReading, probes: &'a [ProbeReading]) -> Self {
        Self {
            timestamp: format_timestamp(timestamp),
            ina219: PowerSection {
                voltage_v: power.voltage,
                current_ma: power.current_ma(),
            },
            ds18b20_temperatures_c: probes
                .iter()
                .map(|p| ProbeEntry {
                    id: &p.id,
                    temp_c: p.temperature,
                })
                .collect(),
        }
    }
}

/// Renders a timestamp as ISO-8601 UTC with second precision and a `Z` suffix.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Encodes a snapshot as an indented JSON document.
pub fn encode(
    timestamp: &DateTime<Utc>,
    power: &PowerReading,
    probes: &[ProbeReading],
) -> Result<String, SnapshotError> {
    let doc = Document::new(timestamp, power, probes);
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Encodes a snapshot as single-line JSON.
pub fn encode_compact(
    timestamp: &DateTime<Utc>,
    power: &PowerReading,
    probes: &[ProbeReading],
) -> Result<String, SnapshotError> {
    let doc = Document::new(timestamp, power, probes);
    Ok(serde_json::to_string(&doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn epoch_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn power(v: Reading<f64>, a: Reading<f64>) -> PowerReading {
        PowerReading {
            voltage: v,
            current: a,
        }
    }

    #[test]
    fn test_encode_compact_layout() {
        let probes = vec![
            ProbeReading::new("28-000000000001", Reading::Present(24.75)),
            ProbeReading::new("28-000000000002", Reading::Unavailable),
        ];
        let doc = encode_compact(
            &epoch_2024(),
            &power(Reading::Present(1.6), Reading::Present(0.001)),
            &probes,
        )
        .unwrap();
        assert_eq!(
            doc,
            concat!(
                r#"{"timestamp":"2024-01-01T00:00:00Z","#,
                r#""ina219":{"voltage_v":1.600,"current_ma":1.000},"#,
                r#""ds18b20_temperatures_c":["#,
                r#"{"id":"28-000000000001","temp_c":24.750},"#,
                r#"{"id":"28-000000000002","temp_c":null}]}"#
            )
        );
    }

    #[test]
    fn test_unavailable_power_fields_are_null() {
        let doc = encode_compact(&epoch_2024(), &PowerReading::unavailable(), &[]).unwrap();
        assert!(doc.contains(r#""ina219":{"voltage_v":null,"current_ma":null}"#));
        assert!(doc.ends_with(r#""ds18b20_temperatures_c":[]}"#));
    }

    #[test]
    fn test_pretty_is_valid_json() {
        let probes = vec![ProbeReading::new("28-x", Reading::Present(-0.5))];
        let doc = encode(
            &epoch_2024(),
            &power(Reading::Present(12.0), Reading::Unavailable),
            &probes,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(value["timestamp"], "2024-01-01T00:00:00Z");
        assert_eq!(value["ina219"]["voltage_v"], 12.0);
        assert!(value["ina219"]["current_ma"].is_null());
        assert_eq!(value["ds18b20_temperatures_c"][0]["temp_c"], -0.5);
        assert!(doc.contains("12.000"));
        assert!(doc.contains("-0.500"));
    }

    #[test]
    fn test_timestamp_drops_subseconds() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 59).unwrap()
            + chrono::Duration::milliseconds(999);
        assert_eq!(format_timestamp(&ts), "2025-06-30T23:59:59Z");
    }

    #[test]
    fn test_id_is_escaped() {
        let probes = vec![ProbeReading::new("28-\"q\"", Reading::Unavailable)];
        let doc = encode_compact(&epoch_2024(), &PowerReading::unavailable(), &probes).unwrap();
        assert!(doc.contains(r#""id":"28-\"q\"""#));
    }

    #[test]
    fn test_zero_readings_are_numbers() {
        let doc = encode_compact(
            &epoch_2024(),
            &power(Reading::Present(0.0), Reading::Present(0.0)),
            &[],
        )
        .unwrap();
        assert!(doc.contains(r#""voltage_v":0.000,"current_ma":0.000"#));
    }
}
