// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Where probe status text comes from.

use crate::ProbeError;
use std::path::PathBuf;

/// Default sysfs directory holding one-wire slave devices.
pub const DEFAULT_W1_DEVICES_ROOT: &str = "/sys/bus/w1/devices";

/// Name of the status file inside each probe directory.
const STATUS_FILE: &str = "w1_slave";

/// Fetches the raw status text for a probe identifier.
pub trait StatusSource {
    /// Returns the full status text for `probe_id`.
    fn fetch_status_text(&self, probe_id: &str) -> Result<String, ProbeError>;
}

/// Reads `<root>/<id>/w1_slave` from the kernel's one-wire sysfs tree.
#[derive(Debug, Clone)]
pub struct SysfsStatusSource {
    root: PathBuf,
}

impl SysfsStatusSource {
    /// Creates a source rooted at `root` (normally `/sys/bus/w1/devices`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the status file path for `probe_id`.
    pub fn status_path(&self, probe_id: &str) -> PathBuf {
        self.root.join(probe_id).join(STATUS_FILE)
    }
}

impl StatusSource for SysfsStatusSource {
    fn fetch_status_text(&self, probe_id: &str) -> Result<String, ProbeError> {
        let path = self.status_path(probe_id);
        std::fs::read_to_string(&path).map_err(|e| ProbeError::Unreachable {
            path: path.display().to_string(),
            source: e,
        })
    }
}
