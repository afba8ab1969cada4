// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for configuration and document encoding.
//!
//! Sensor failures are not represented here; they never leave the readers.

/// Errors that can occur outside of sensor acquisition.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Configuration is missing, malformed, or out of range.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// The document could not be serialized.
    #[error("encoding error: {0}")]
    EncodeError(#[from] serde_json::Error),
}
