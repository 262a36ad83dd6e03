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

//! Codec error module.
//!
//! This module contains the errors that can occur while decoding a
//! modified UTF-7 mailbox name. Encoding is total and never fails.

use std::result;
use thiserror::Error;

/// Represents the reason why an escaped base64 payload could not be
/// turned into UTF-16BE bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error(transparent)]
    Base64(#[from] ::base64::DecodeError),
    #[error("decoded payload has an odd length of {0} bytes")]
    OddLength(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot decode escaped payload {1:?}")]
    InvalidEncoding(#[source] PayloadError, String),
    #[error("cannot find terminator of escape starting at offset {0}")]
    UnterminatedEscape(usize),
    #[error("cannot decode unpaired surrogate {0:#06X} in escape at offset {1}")]
    InvalidSurrogate(u16, usize),
}

pub type Result<T> = result::Result<T, Error>;
