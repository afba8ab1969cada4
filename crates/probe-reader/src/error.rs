// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for one-wire probe reads.

/// Errors that can occur when reading a probe's status text.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The status text could not be fetched at all.
    #[error("probe status unreachable at {path}: {source}")]
    Unreachable {
        path: String,
        source: std::io::Error,
    },

    /// The device transaction failed its integrity check (no `YES` marker).
    #[error("integrity check failed: {detail}")]
    IntegrityFailure { detail: String },

    /// The temperature token is missing or malformed.
    #[error("malformed temperature: {detail}")]
    ParseFailure { detail: String },
}
