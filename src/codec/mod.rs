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

//! Codec module.
//!
//! This module contains the modified UTF-7 codec used to name IMAP
//! mailboxes, as defined in the [RFC3501] section 5.1.3.
//!
//! ```
//! use mailbox_utf7::{decode, encode};
//!
//! assert_eq!(encode("caf\u{e9}"), "caf&AOk-");
//! assert_eq!(decode("&ZeVnLIqe-").unwrap(), "\u{65e5}\u{672c}\u{8a9e}");
//! ```
//!
//! [RFC3501]: https://www.rfc-editor.org/rfc/rfc3501#section-5.1.3

pub mod base64;
pub mod run;
pub mod utf16;

mod error;
pub use error::*;

mod encode;
pub use encode::*;

mod decode;
pub use decode::*;
