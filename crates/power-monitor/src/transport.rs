// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Bus transport abstraction and the Linux `i2c-dev` implementation.
//!
//! On Linux each I2C adapter is exposed as `/dev/i2c-N`. A peripheral is
//! selected with the `I2C_SLAVE` ioctl, after which plain `write(2)` and
//! `read(2)` calls on the file descriptor become bus transfers to it.

use crate::BusError;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// A shared bus handle that can address a peripheral and move bytes.
///
/// Implementations report the number of bytes actually transferred; the
/// caller decides whether a short transfer is an error.
pub trait BusTransport {
    /// Directs subsequent transfers to the device at `address`.
    fn select_address(&mut self, address: u8) -> Result<(), BusError>;

    /// Writes `bytes` to the selected device.
    fn write(&mut self, bytes: &[u8]) -> Result<usize, BusError>;

    /// Reads up to `buf.len()` bytes from the selected device.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, BusError>;

    /// Releases the handle.
    fn close(self)
    where
        Self: Sized,
    {
        drop(self);
    }
}

/// `ioctl` request that sets the target peripheral address.
#[cfg(target_os = "linux")]
const I2C_SLAVE: u16 = 0x0703;

/// A Linux `i2c-dev` character device.
#[derive(Debug)]
pub struct LinuxI2cBus {
    file: File,
    path: PathBuf,
}

impl LinuxI2cBus {
    /// Opens the bus device read/write (e.g., `/dev/i2c-1`).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BusError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| BusError::Open {
                path: path.display().to_string(),
                source: e,
            })?;
        tracing::debug!("opened bus device {}", path.display());
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }
}

impl BusTransport for LinuxI2cBus {
    #[cfg(target_os = "linux")]
    fn select_address(&mut self, address: u8) -> Result<(), BusError> {
        use std::os::unix::io::AsRawFd;

        // SAFETY: the descriptor is owned by `self.file` and stays open for
        // the duration of the call; I2C_SLAVE takes the address by value.
        let rc = unsafe {
            libc::ioctl(
                self.file.as_raw_fd(),
                I2C_SLAVE as _,
                libc::c_ulong::from(address),
            )
        };
        if rc < 0 {
            return Err(BusError::SelectAddress {
                address,
                source: std::io::Error::last_os_error(),
            });
        }
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn select_address(&mut self, address: u8) -> Result<(), BusError> {
        Err(BusError::SelectAddress {
            address,
            source: std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "i2c-dev address selection requires Linux",
            ),
        })
    }

    fn write(&mut self, bytes: &[u8]) -> Result<usize, BusError> {
        self.file
            .write(bytes)
            .map_err(|e| BusError::Write { source: e })
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, BusError> {
        self.file
            .read(buf)
            .map_err(|e| BusError::Read { source: e })
    }

    fn close(self) {
        tracing::debug!("closing bus device {}", self.path.display());
        drop(self.file);
    }
}
