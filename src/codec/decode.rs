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

//! Decoder module.
//!
//! This module contains the conversion of a modified UTF-7 mailbox
//! name, as sent by the server, back into Unicode.

use log::trace;

use super::{
    base64,
    run::{self, Segment, SHIFT},
    utf16, Error, Result,
};

/// Decodes the given modified UTF-7 mailbox name.
///
/// Characters outside of escapes are copied as is. `&-` stands for a
/// literal `&`, and any other `&...-` escape is decoded from escaped
/// base64 then from UTF-16BE.
pub fn decode<S: AsRef<str>>(token: S) -> Result<String> {
    let token = token.as_ref();
    let mut decoded = String::with_capacity(token.len());

    for segment in run::segments(token) {
        match segment? {
            Segment::Literal(text) => decoded.push_str(text),
            Segment::Ampersand => decoded.push(SHIFT),
            Segment::Escaped { offset, payload } => {
                let bytes = base64::decode(payload)
                    .map_err(|err| Error::InvalidEncoding(err, payload.to_owned()))?;
                let text = utf16::decode_be(&bytes)
                    .map_err(|unit| Error::InvalidSurrogate(unit, offset))?;
                decoded.push_str(&text);
            }
        }
    }

    trace!("decoded mailbox name {:?} as {:?}", token, decoded);
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use crate::codec::PayloadError;

    use super::*;

    #[test]
    fn decode_printable_ascii() {
        assert_eq!(decode("").unwrap(), "");
        assert_eq!(decode("INBOX").unwrap(), "INBOX");
        assert_eq!(decode("a-b").unwrap(), "a-b");
    }

    #[test]
    fn decode_ampersand() {
        assert_eq!(decode("a&-b").unwrap(), "a&b");
        assert_eq!(decode("&-&-").unwrap(), "&&");
    }

    #[test]
    fn decode_non_ascii_runs() {
        assert_eq!(decode("caf&AOk-").unwrap(), "café");
        assert_eq!(decode("&ZeVnLIqe-").unwrap(), "日本語");
        assert_eq!(
            decode("~peter/mail/&U,BTFw-/&ZeVnLIqe-").unwrap(),
            "~peter/mail/台北/日本語"
        );
        assert_eq!(decode("&2D3eAA-").unwrap(), "😀");
    }

    #[test]
    fn decode_keeps_text_after_terminator() {
        assert_eq!(decode("&AOk--x").unwrap(), "é-x");
    }

    #[test]
    fn decode_unterminated_escape() {
        assert_eq!(decode("&ZeVn"), Err(Error::UnterminatedEscape(0)));
        assert_eq!(decode("Drafts&"), Err(Error::UnterminatedEscape(6)));
        assert_eq!(decode("&-&AOk"), Err(Error::UnterminatedEscape(2)));
    }

    #[test]
    fn decode_invalid_payload() {
        assert!(matches!(
            decode("&A-"),
            Err(Error::InvalidEncoding(PayloadError::Base64(_), payload)) if payload == "A"
        ));
        assert!(matches!(
            decode("&AO/k-"),
            Err(Error::InvalidEncoding(PayloadError::Base64(_), _))
        ));
        assert_eq!(
            decode("&AA-"),
            Err(Error::InvalidEncoding(
                PayloadError::OddLength(1),
                "AA".into()
            ))
        );
    }

    #[test]
    fn decode_rejects_trailing_odd_byte() {
        // 0x00 0x41 0x00 would otherwise silently decode as "A"
        assert_eq!(
            decode("a&AEEA-"),
            Err(Error::InvalidEncoding(
                PayloadError::OddLength(3),
                "AEEA".into()
            ))
        );
    }

    #[test]
    fn decode_unpaired_surrogate() {
        // lone high surrogate 0xD83D
        assert_eq!(decode("a&2D0-"), Err(Error::InvalidSurrogate(0xD83D, 1)));
        // lone low surrogate 0xDE00
        assert_eq!(decode("&3gA-"), Err(Error::InvalidSurrogate(0xDE00, 0)));
    }
}
