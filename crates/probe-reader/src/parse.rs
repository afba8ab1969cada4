// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Parsing of the two-line `w1_slave` status text.

use crate::ProbeError;

/// Substring on line 1 that marks a CRC-valid transaction.
const VALID_MARKER: &str = "YES";

/// Prefix of the temperature token on line 2.
const TEMPERATURE_TOKEN: &str = "t=";

/// Millidegrees per degree Celsius.
const MILLIDEGREES_PER_DEGREE: f64 = 1000.0;

/// Parses a full status text into degrees Celsius.
///
/// The validity marker is a case-sensitive substring match anywhere on
/// line 1, so `crc=57 YES` and `NOT_YES` both pass.
pub fn parse_status(text: &str) -> Result<f64, ProbeError> {
    let mut lines = text.lines();

    let status = lines.next().ok_or_else(|| ProbeError::IntegrityFailure {
        detail: "status line missing".to_string(),
    })?;
    if !status.contains(VALID_MARKER) {
        return Err(ProbeError::IntegrityFailure {
            detail: format!("no '{VALID_MARKER}' marker in '{}'", status.trim()),
        });
    }

    let data = lines.next().ok_or_else(|| ProbeError::ParseFailure {
        detail: "temperature line missing".to_string(),
    })?;
    let start = data
        .find(TEMPERATURE_TOKEN)
        .ok_or_else(|| ProbeError::ParseFailure {
            detail: format!("no '{TEMPERATURE_TOKEN}' token in '{}'", data.trim()),
        })?;

    let millidegrees = parse_millidegrees(&data[start + TEMPERATURE_TOKEN.len()..])?;
    Ok(millidegrees as f64 / MILLIDEGREES_PER_DEGREE)
}

/// Parses the leading base-10 integer of `s`.
///
/// Leading ASCII whitespace and one `+` or `-` sign are accepted; parsing
/// stops at the first non-digit. Zero digits or a value outside `i64` is
/// an error.
pub fn parse_millidegrees(s: &str) -> Result<i64, ProbeError> {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(ProbeError::ParseFailure {
            detail: format!("no digits after '{TEMPERATURE_TOKEN}'"),
        });
    }

    let digits = &rest[..digits_len];
    let out_of_range = || ProbeError::ParseFailure {
        detail: format!("value '{digits}' out of range"),
    };
    let mut value: i64 = 0;
    for d in digits.bytes() {
        let d = i64::from(d - b'0');
        value = value.checked_mul(10).ok_or_else(out_of_range)?;
        value = if negative {
            value.checked_sub(d)
        } else {
            value.checked_add(d)
        }
        .ok_or_else(out_of_range)?;
    }
    Ok(value)
}
