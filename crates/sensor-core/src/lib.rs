// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # sensor-core
//!
//! The value type shared by every sensor reader in the workspace.
//!
//! A [`Reading`] is either a present physical value or an explicit
//! [`Reading::Unavailable`] marker. Readers never fail the acquisition
//! cycle: transport, integrity, and parse failures are folded into
//! `Unavailable` at the reader boundary, so a failed sensor is always
//! distinguishable from one that legitimately reports zero.
//!
//! # Document rendering
//! `Reading<f64>` serializes as a JSON number with exactly three decimal
//! places, or as `null` when unavailable. The field is never omitted.

mod reading;

pub use reading::{Reading, DECIMAL_PLACES};
