// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The acquisition cycle.

use crate::{AcquisitionConfig, Snapshot};
use chrono::{DateTime, Utc};
use power_monitor::{BusError, BusTransport, LinuxI2cBus, PowerReading};
use probe_reader::{read_probes, ProbeReading, StatusSource, SysfsStatusSource};

/// Runs one acquisition cycle against the real bus and sysfs tree.
///
/// Never fails: every sensor problem shows up as an unavailable field.
pub fn acquire(config: &AcquisitionConfig) -> Snapshot {
    let bus = LinuxI2cBus::open(&config.bus_device);
    let source = SysfsStatusSource::new(&config.w1_devices_root);
    let (power, probes) = collect_readings(bus, &source, config);
    let snapshot = Snapshot::new(Utc::now(), power, probes);
    tracing::info!("{}", snapshot.summary());
    snapshot
}

/// Runs one acquisition cycle with injected collaborators and a fixed
/// timestamp.
pub fn acquire_with<B, S>(
    bus: Result<B, BusError>,
    source: &S,
    config: &AcquisitionConfig,
    timestamp: DateTime<Utc>,
) -> Snapshot
where
    B: BusTransport,
    S: StatusSource + ?Sized,
{
    let (power, probes) = collect_readings(bus, source, config);
    Snapshot::new(timestamp, power, probes)
}

/// Reads voltage, current, then every probe in order, and releases the bus.
///
/// The bus handle is closed after the probe reads regardless of whether any
/// register read failed.
pub fn collect_readings<B, S>(
    bus: Result<B, BusError>,
    source: &S,
    config: &AcquisitionConfig,
) -> (PowerReading, Vec<ProbeReading>)
where
    B: BusTransport,
    S: StatusSource + ?Sized,
{
    match bus {
        Ok(mut bus) => {
            let power = PowerReading::read(&mut bus, config.address, config.shunt_ohms);
            let probes = read_probes(source, &config.probe_ids);
            bus.close();
            (power, probes)
        }
        Err(e) => {
            tracing::warn!("power monitor unavailable: {e}");
            let probes = read_probes(source, &config.probe_ids);
            (PowerReading::unavailable(), probes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use probe_reader::ProbeError;
    use sensor_core::Reading;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Events = Rc<RefCell<Vec<&'static str>>>;

    /// Answers bus voltage with 0x0C80 and shunt voltage with 0x000A, or
    /// short-reads every register when `short` is set.
    struct EventBus {
        pointer: u8,
        short: bool,
        events: Events,
    }

    impl BusTransport for EventBus {
        fn select_address(&mut self, _address: u8) -> Result<(), BusError> {
            Ok(())
        }

        fn write(&mut self, bytes: &[u8]) -> Result<usize, BusError> {
            self.pointer = bytes[0];
            Ok(bytes.len())
        }

        fn read(&mut self, buf: &mut [u8]) -> Result<usize, BusError> {
            if self.short {
                return Ok(0);
            }
            let word: [u8; 2] = if self.pointer == 0x02 {
                [0x0C, 0x80]
            } else {
                [0x00, 0x0A]
            };
            buf[..2].copy_from_slice(&word);
            Ok(2)
        }

        fn close(self) {
            self.events.borrow_mut().push("close");
        }
    }

    /// Every probe reports 24.750 °C.
    struct EventSource {
        events: Events,
    }

    impl StatusSource for EventSource {
        fn fetch_status_text(&self, _probe_id: &str) -> Result<String, ProbeError> {
            self.events.borrow_mut().push("probe");
            Ok("crc=57 YES\nt=24750\n".to_string())
        }
    }

    fn fixture(short: bool) -> (EventBus, EventSource, Events) {
        let events = Events::default();
        let bus = EventBus {
            pointer: 0,
            short,
            events: Rc::clone(&events),
        };
        let source = EventSource {
            events: Rc::clone(&events),
        };
        (bus, source, events)
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_acquire_reads_and_closes() {
        let (bus, source, events) = fixture(false);
        let snap = acquire_with(Ok(bus), &source, &AcquisitionConfig::default(), timestamp());

        assert!((snap.power.voltage.value().unwrap() - 1.6).abs() < 1e-12);
        assert!((snap.power.current_ma().value().unwrap() - 1.0).abs() < 1e-9);
        assert_eq!(snap.probes.len(), 2);
        assert_eq!(*events.borrow(), ["probe", "probe", "close"]);
    }

    #[test]
    fn test_acquire_closes_after_failed_reads() {
        let (bus, source, events) = fixture(true);
        let snap = acquire_with(Ok(bus), &source, &AcquisitionConfig::default(), timestamp());

        assert_eq!(snap.power, PowerReading::unavailable());
        assert!(snap.probes.iter().all(|p| p.temperature == Reading::Present(24.75)));
        assert_eq!(events.borrow().last(), Some(&"close"));
    }

    #[test]
    fn test_acquire_open_failure() {
        let (_, source, events) = fixture(false);
        let open: Result<EventBus, BusError> = Err(BusError::Open {
            path: "/dev/i2c-1".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        let snap = acquire_with(open, &source, &AcquisitionConfig::default(), timestamp());

        assert!(snap.power.voltage.is_unavailable());
        assert!(snap.power.current.is_unavailable());
        assert!(snap.power.current_ma().is_unavailable());
        assert_eq!(snap.probes[0].temperature, Reading::Present(24.75));
        assert_eq!(*events.borrow(), ["probe", "probe"]);
    }
}
