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

//! Run segmenter module.
//!
//! This module splits text into the pieces the encoder and the
//! decoder work on. In the encode direction the input is split into
//! maximal runs of printable ASCII and of everything else. In the
//! decode direction a token is split into literal text, escaped
//! ampersands and escaped base64 payloads.

use super::{Error, Result};

/// Escape shift character.
pub const SHIFT: char = '&';
/// Escape terminator character.
pub const UNSHIFT: char = '-';

/// Returns true if the character can appear as is in an encoded
/// mailbox name, which is the case of printable ASCII.
pub fn is_printable(c: char) -> bool {
    matches!(c, '\u{20}'..='\u{7E}')
}

/// Represents a maximal run of the text to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run<'a> {
    /// Printable ASCII, `&` included.
    Literal(&'a str),
    /// Characters that must be shifted into base64.
    Shifted(&'a str),
}

/// Iterator over the runs of a text, see [`runs`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    rest: &'a str,
}

/// Splits the given text into alternating literal and shifted runs.
///
/// Runs never overlap, are never empty, and concatenated together give
/// back the original text.
pub fn runs(text: &str) -> Runs<'_> {
    Runs { rest: text }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let printable = is_printable(first);
        let end = self
            .rest
            .find(|c: char| is_printable(c) != printable)
            .unwrap_or(self.rest.len());

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;

        if printable {
            Some(Run::Literal(run))
        } else {
            Some(Run::Shifted(run))
        }
    }
}

/// Represents a piece of an encoded mailbox name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied as is, free of any `&`.
    Literal(&'a str),
    /// The `&-` escape, standing for a literal `&`.
    Ampersand,
    /// A non-empty base64 payload found between `&` and `-`.
    Escaped {
        /// Byte offset of the `&` in the token.
        offset: usize,
        payload: &'a str,
    },
}

/// Iterator over the segments of an encoded token, see [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    token: &'a str,
    pos: usize,
}

/// Splits the given encoded token into segments.
///
/// Yields an [`Error::UnterminatedEscape`] and stops if an escape has
/// no terminator.
pub fn segments(token: &str) -> Segments<'_> {
    Segments { token, pos: 0 }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.token[self.pos..];
        if rest.is_empty() {
            return None;
        }

        if !rest.starts_with(SHIFT) {
            let end = rest.find(SHIFT).unwrap_or(rest.len());
            self.pos += end;
            return Some(Ok(Segment::Literal(&rest[..end])));
        }

        let offset = self.pos;
        let escape = &rest[SHIFT.len_utf8()..];

        match escape.find(UNSHIFT) {
            None => {
                self.pos = self.token.len();
                Some(Err(Error::UnterminatedEscape(offset)))
            }
            Some(0) => {
                self.pos += SHIFT.len_utf8() + UNSHIFT.len_utf8();
                Some(Ok(Segment::Ampersand))
            }
            Some(end) => {
                self.pos += SHIFT.len_utf8() + end + UNSHIFT.len_utf8();
                Some(Ok(Segment::Escaped {
                    offset,
                    payload: &escape[..end],
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_partition_mixed_text() {
        let runs: Vec<_> = runs("caf\u{e9}s & 日本語\tx").collect();
        assert_eq!(
            runs,
            vec![
                Run::Literal("caf"),
                Run::Shifted("\u{e9}"),
                Run::Literal("s & "),
                Run::Shifted("日本語\t"),
                Run::Literal("x"),
            ]
        );
    }

    #[test]
    fn runs_of_empty_text() {
        assert_eq!(runs("").next(), None);
    }

    #[test]
    fn control_and_delete_chars_are_shifted() {
        let runs: Vec<_> = runs("a\u{7f}\u{0}b").collect();
        assert_eq!(
            runs,
            vec![
                Run::Literal("a"),
                Run::Shifted("\u{7f}\u{0}"),
                Run::Literal("b"),
            ]
        );
    }

    #[test]
    fn segments_of_token() {
        let segments: Vec<_> = segments("a&-b&AOk-c").collect::<Result<_>>().unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("a"),
                Segment::Ampersand,
                Segment::Literal("b"),
                Segment::Escaped {
                    offset: 4,
                    payload: "AOk",
                },
                Segment::Literal("c"),
            ]
        );
    }

    #[test]
    fn segments_stop_at_unterminated_escape() {
        let mut segments = segments("ok&ZeVn");
        assert_eq!(segments.next(), Some(Ok(Segment::Literal("ok"))));
        assert_eq!(segments.next(), Some(Err(Error::UnterminatedEscape(2))));
        assert_eq!(segments.next(), None);
    }

    #[test]
    fn lone_shift_at_end_is_unterminated() {
        let mut segments = segments("&");
        assert_eq!(segments.next(), Some(Err(Error::UnterminatedEscape(0))));
        assert_eq!(segments.next(), None);
    }
}
