// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for status parsing and document encoding.

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use telemetry_snapshot::{encode, PowerReading, ProbeReading, Reading};

fn bench_parse_status(c: &mut Criterion) {
    let text = "72 01 4b 46 7f ff 0e 10 57 : crc=57 YES\n72 01 4b 46 7f ff 0e 10 57 t=23125\n";
    c.bench_function("parse_status", |b| {
        b.iter(|| probe_reader::parse_status(black_box(text)))
    });
}

fn bench_encode(c: &mut Criterion) {
    let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let power = PowerReading {
        voltage: Reading::Present(5.012),
        current: Reading::Present(0.2315),
    };
    let probes: Vec<ProbeReading> = (0..16)
        .map(|i| {
            let temperature = if i % 5 == 0 {
                Reading::Unavailable
            } else {
                Reading::Present(20.0 + i as f64 * 0.125)
            };
            ProbeReading::new(format!("28-{i:012x}"), temperature)
        })
        .collect();

    c.bench_function("encode_16_probes", |b| {
        b.iter(|| encode(black_box(&timestamp), black_box(&power), black_box(&probes)))
    });
}

criterion_group!(benches, bench_parse_status, bench_encode);
criterion_main!(benches);
