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

//! Rust library for IMAP mailbox names.
//!
//! IMAP servers exchange mailbox names in modified UTF-7, a 7-bit
//! representation of Unicode text. This library contains the codec
//! itself, plus the folder helpers sitting on both sides of it: the
//! parsing of `LIST` response lines, the quoting of `SELECT`
//! arguments and the naming of local folder archives.

pub mod codec;
pub use codec::{decode, encode};

#[cfg(feature = "folder")]
pub mod domain;
#[cfg(feature = "folder")]
pub use domain::*;
