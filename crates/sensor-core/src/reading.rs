// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Present-or-unavailable sensor values.

use serde::ser::Error;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// Number of decimal places used when a present value is rendered.
pub const DECIMAL_PLACES: usize = 3;

/// The outcome of reading a single physical quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading<T> {
    /// The sensor produced a value.
    Present(T),
    /// The sensor could not be read for this cycle.
    Unavailable,
}

impl<T> Reading<T> {
    /// Returns `true` if the reading holds a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Reading::Present(_))
    }

    /// Returns `true` if the reading is the unavailable marker.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Reading::Unavailable)
    }

    /// Converts into an `Option`, dropping the distinction between
    /// "never read" and "failed".
    pub fn value(self) -> Option<T> {
        match self {
            Reading::Present(v) => Some(v),
            Reading::Unavailable => None,
        }
    }
}

impl Reading<f64> {
    /// Wraps a float, treating NaN and infinities as `Unavailable`.
    ///
    /// This is the only constructor readers use for computed values, which
    /// keeps non-finite numbers out of the output document.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Reading::Present(value)
        } else {
            Reading::Unavailable
        }
    }

    /// Scales a present value. A result that overflows to infinity becomes
    /// `Unavailable`.
    pub fn scale(self, factor: f64) -> Self {
        match self {
            Reading::Present(v) => Reading::from_f64(v * factor),
            Reading::Unavailable => Reading::Unavailable,
        }
    }

    /// Renders the value as `{:.3}` text, or `None` when unavailable.
    pub fn to_fixed(&self) -> Option<String> {
        match self {
            Reading::Present(v) if v.is_finite() => Some(format!("{:.*}", DECIMAL_PLACES, v)),
            _ => None,
        }
    }
}

impl<T> Default for Reading<T> {
    fn default() -> Self {
        Reading::Unavailable
    }
}

impl Serialize for Reading<f64> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_fixed() {
            Some(text) => RawValue::from_string(text)
                .map_err(<S::Error as Error>::custom)?
                .serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}
