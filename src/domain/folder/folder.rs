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

//! Folder module.
//!
//! This module contains the representation of the email folder, and
//! its conversion from and to the IMAP wire format.

use log::debug;
use regex::Regex;
use serde::Serialize;
use std::{
    fmt,
    path::{Component, Path, PathBuf},
    result,
    sync::OnceLock,
};
use thiserror::Error;

use crate::{codec, ArchiveConfig};

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot parse folder from list response line {0:?}")]
    ParseListLineError(String),
    #[error("cannot decode folder name {1:?}")]
    DecodeNameError(#[source] codec::Error, String),
}

pub type Result<T> = result::Result<T, Error>;

/// Matches `[* LIST ](<attrs>) <delim> <name>`, where the delimiter
/// is either a quoted string or `NIL`.
fn list_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r#"^(?:\*\s+(?i:LIST)\s+)?\((?P<attrs>[^)]*)\)\s+(?:"(?P<delim>(?:[^"\\]|\\.)*)"|(?i:NIL))\s+(?P<name>.+?)\s*$"#,
        )
        .expect("list line regex should be valid")
    })
}

/// Represents the folder.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Folder {
    /// Represents the folder attributes, like `\HasNoChildren`.
    pub attrs: Vec<String>,
    /// Represents the folder hierarchie delimiter. Empty when the
    /// server does not use any.
    pub delim: String,
    /// Represents the folder name, as sent over the wire.
    pub raw: String,
    /// Represents the decoded folder name.
    pub name: String,
}

impl Folder {
    /// Builds a folder from its decoded name.
    pub fn from_name<S: AsRef<str>>(name: S) -> Self {
        let name = name.as_ref();
        Self {
            raw: codec::encode(name),
            name: name.to_owned(),
            ..Self::default()
        }
    }

    /// Parses a folder from a line of a `LIST` response, then decodes
    /// its name.
    pub fn from_list_line<S: AsRef<str>>(line: S) -> Result<Self> {
        let mut folder = Self::parse_list_line(line)?;
        folder.name = codec::decode(&folder.raw)
            .map_err(|err| Error::DecodeNameError(err, folder.raw.clone()))?;
        debug!("parsed folder {:?}", folder);
        Ok(folder)
    }

    /// Parses a folder from a line of a `LIST` response, leaving its
    /// decoded name empty.
    pub(crate) fn parse_list_line<S: AsRef<str>>(line: S) -> Result<Self> {
        let line = line.as_ref();
        let captures = list_line_regex()
            .captures(line)
            .ok_or_else(|| Error::ParseListLineError(line.to_owned()))?;

        let attrs = captures
            .name("attrs")
            .map(|attrs| attrs.as_str().split_whitespace().map(String::from).collect())
            .unwrap_or_default();
        let delim = captures
            .name("delim")
            .map(|delim| unquote(delim.as_str()))
            .unwrap_or_default();
        let raw = captures
            .name("name")
            .map(|name| name.as_str())
            .ok_or_else(|| Error::ParseListLineError(line.to_owned()))?;
        let raw = match raw.strip_prefix('"').and_then(|raw| raw.strip_suffix('"')) {
            Some(raw) => unquote(raw),
            None => raw.to_owned(),
        };

        Ok(Self {
            attrs,
            delim,
            raw,
            name: String::new(),
        })
    }

    /// Builds the quoted argument used to select this folder.
    pub fn select_arg(&self) -> String {
        format!("\"{}\"", quote(&self.raw))
    }

    /// Builds the path of the local archive of this folder.
    ///
    /// Hierarchy delimiters are kept in the file name, so a `/`
    /// delimited folder is archived in a sub-directory. Root, prefix,
    /// `.` and `..` components of the name are dropped, so the archive
    /// always stays under the archive directory.
    pub fn archive_path(&self, config: &ArchiveConfig) -> PathBuf {
        let parts: Vec<&str> = Path::new(&self.name)
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => part.to_str(),
                _ => None,
            })
            .collect();

        let mut path = config.dir();
        let name = match parts.split_last() {
            Some((name, parents)) => {
                path.extend(parents);
                *name
            }
            None => "",
        };
        path.push(format!("{}.{}", name, config.ext()));
        path
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Escapes backslashes and double quotes of a quoted string.
fn quote(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Unescapes the content of a quoted string.
fn unquote(s: &str) -> String {
    let mut unquoted = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => unquoted.extend(chars.next()),
            c => unquoted.push(c),
        }
    }

    unquoted
}
