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

//! Encoder module.
//!
//! This module contains the conversion of a Unicode mailbox name into
//! its modified UTF-7 wire form.

use log::trace;

use super::{
    base64,
    run::{self, Run, SHIFT, UNSHIFT},
    utf16,
};

/// Encodes the given mailbox name into modified UTF-7.
///
/// Printable ASCII is copied as is, except `&` which becomes `&-`.
/// Every maximal run of other characters is written as `&`, the
/// escaped base64 of its UTF-16BE bytes, then `-`. Encoding never
/// fails.
pub fn encode<S: AsRef<str>>(text: S) -> String {
    let text = text.as_ref();
    let mut encoded = String::with_capacity(text.len());

    for run in run::runs(text) {
        match run {
            Run::Literal(run) => {
                for c in run.chars() {
                    encoded.push(c);
                    if c == SHIFT {
                        encoded.push(UNSHIFT);
                    }
                }
            }
            Run::Shifted(run) => {
                encoded.push(SHIFT);
                encoded.push_str(&base64::encode(utf16::encode_be(run)));
                encoded.push(UNSHIFT);
            }
        }
    }

    trace!("encoded mailbox name {:?} as {:?}", text, encoded);
    encoded
}
