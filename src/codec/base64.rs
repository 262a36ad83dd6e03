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

//! Escaped base64 module.
//!
//! Modified UTF-7 carries UTF-16BE bytes in a base64 variant where
//! `/` is replaced by `,`, with neither `=` padding nor line breaks.

use ::base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use std::result;

use super::PayloadError;

/// Base64 engine using the `+,` alphabet.
///
/// Decoding tolerates explicit padding and non-zero trailing bits,
/// so that any payload which becomes valid base64 once `=` padding
/// is restored is accepted.
pub const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::IMAP_MUTF7,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encodes the given bytes with the escaped base64 alphabet.
pub fn encode<B: AsRef<[u8]>>(bytes: B) -> String {
    ENGINE.encode(bytes)
}

/// Decodes an escaped base64 payload back into UTF-16BE bytes.
///
/// Fails if the payload is not valid base64 or if it does not hold a
/// whole number of UTF-16 code units.
pub fn decode<S: AsRef<str>>(payload: S) -> result::Result<Vec<u8>, PayloadError> {
    let bytes = ENGINE.decode(payload.as_ref())?;

    if bytes.len() % 2 != 0 {
        return Err(PayloadError::OddLength(bytes.len()));
    }

    Ok(bytes)
}
