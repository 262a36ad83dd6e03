// mailbox-utf7, a Rust library for IMAP mailbox name encoding.
// Copyright (C) 2022  soywod <clement.douin@posteo.net>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! UTF-16BE module.
//!
//! This module contains the explicit surrogate pair handling used to
//! turn a non-ASCII run into UTF-16BE bytes and back.

use std::result;

const SURROGATE_HIGH_START: u16 = 0xD800;
const SURROGATE_HIGH_END: u16 = 0xDBFF;
const SURROGATE_LOW_START: u16 = 0xDC00;
const SURROGATE_LOW_END: u16 = 0xDFFF;
const SUPPLEMENTARY_START: u32 = 0x1_0000;

/// Splits a scalar value into one code unit, or two when it lies
/// outside the BMP.
pub fn split_surrogates(c: char) -> (u16, Option<u16>) {
    let c = c as u32;

    if c < SUPPLEMENTARY_START {
        return (c as u16, None);
    }

    let c = c - SUPPLEMENTARY_START;
    let high = SURROGATE_HIGH_START + (c >> 10) as u16;
    let low = SURROGATE_LOW_START + (c & 0x3FF) as u16;
    (high, Some(low))
}

/// Joins a high and a low surrogate back into a scalar value.
///
/// Returns `None` if the units do not form a valid pair.
pub fn join_surrogates(high: u16, low: u16) -> Option<char> {
    if !is_high_surrogate(high) || !is_low_surrogate(low) {
        return None;
    }

    let c = SUPPLEMENTARY_START
        + (((high - SURROGATE_HIGH_START) as u32) << 10)
        + (low - SURROGATE_LOW_START) as u32;
    char::from_u32(c)
}

pub fn is_high_surrogate(unit: u16) -> bool {
    (SURROGATE_HIGH_START..=SURROGATE_HIGH_END).contains(&unit)
}

pub fn is_low_surrogate(unit: u16) -> bool {
    (SURROGATE_LOW_START..=SURROGATE_LOW_END).contains(&unit)
}

/// Expands the given run into its UTF-16BE byte representation.
pub fn encode_be(run: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(run.len() * 2);

    for c in run.chars() {
        let (unit, low) = split_surrogates(c);
        bytes.extend_from_slice(&unit.to_be_bytes());
        if let Some(low) = low {
            bytes.extend_from_slice(&low.to_be_bytes());
        }
    }

    bytes
}

/// Decodes UTF-16BE bytes, reassembling surrogate pairs.
///
/// The bytes must hold a whole number of code units, which
/// [`super::base64::decode`] guarantees. On failure, the first
/// unpaired surrogate unit is returned.
pub(crate) fn decode_be(bytes: &[u8]) -> result::Result<String, u16> {
    let mut text = String::with_capacity(bytes.len() / 2);
    let mut units = bytes
        .chunks_exact(2)
        .map(|unit| u16::from_be_bytes([unit[0], unit[1]]));

    while let Some(unit) = units.next() {
        if is_low_surrogate(unit) {
            return Err(unit);
        }

        if is_high_surrogate(unit) {
            let low = units.next().ok_or(unit)?;
            let c = join_surrogates(unit, low).ok_or(unit)?;
            text.push(c);
            continue;
        }

        // a non-surrogate unit is always a valid scalar value
        text.push(char::from_u32(unit as u32).ok_or(unit)?);
    }

    Ok(text)
}
