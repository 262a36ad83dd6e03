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

//! Folders module.
//!
//! This module contains the representation of the folders listed by
//! a `LIST` response.

use log::{debug, warn};
use serde::Serialize;
use std::ops;

use super::{Error, Result};
use crate::{codec, DecodeErrorPolicy, Folder};

/// Represents the list of folders.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Folders(pub Vec<Folder>);

impl ops::Deref for Folders {
    type Target = Vec<Folder>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ops::DerefMut for Folders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Folder> for Folders {
    fn from_iter<T: IntoIterator<Item = Folder>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Folders {
    /// Parses the lines of a `LIST` response.
    ///
    /// Folders whose name cannot be decoded are handled according to
    /// the given policy. Lines that are not folders at all always fail.
    pub fn from_list_lines<I, S>(lines: I, policy: DecodeErrorPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut folders = Folders::default();

        for line in lines {
            let mut folder = Folder::parse_list_line(line)?;

            match codec::decode(&folder.raw) {
                Ok(name) => {
                    folder.name = name;
                }
                Err(err) => match policy {
                    DecodeErrorPolicy::Abort => {
                        return Err(Error::DecodeNameError(err, folder.raw));
                    }
                    DecodeErrorPolicy::Skip => {
                        warn!("skipping folder {:?}: {}", folder.raw, err);
                        continue;
                    }
                    DecodeErrorPolicy::Raw => {
                        warn!("keeping undecoded folder name {:?}: {}", folder.raw, err);
                        folder.name = folder.raw.clone();
                    }
                },
            }

            folders.push(folder);
        }

        debug!("parsed {} folder(s)", folders.len());
        Ok(folders)
    }

    /// Finds a folder by its decoded name.
    pub fn find_by_name<S: AsRef<str>>(&self, name: S) -> Option<&Folder> {
        self.iter().find(|folder| folder.name == name.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: [&str; 3] = [
        r#"(\HasNoChildren) "/" "INBOX""#,
        r#"(\HasNoChildren) "/" "Bad&ZeVn""#,
        r#"(\HasNoChildren) "/" "&ZeVnLIqe-""#,
    ];

    #[test]
    fn from_list_lines_aborts() {
        let err = Folders::from_list_lines(LINES, DecodeErrorPolicy::Abort).unwrap_err();

        assert!(matches!(
            err,
            Error::DecodeNameError(codec::Error::UnterminatedEscape(3), raw) if raw == "Bad&ZeVn"
        ));
    }

    #[test]
    fn from_list_lines_skips() {
        let folders = Folders::from_list_lines(LINES, DecodeErrorPolicy::Skip).unwrap();
        let names: Vec<_> = folders.iter().map(|folder| folder.name.as_str()).collect();

        assert_eq!(names, vec!["INBOX", "日本語"]);
    }

    #[test]
    fn from_list_lines_keeps_raw() {
        let folders = Folders::from_list_lines(LINES, DecodeErrorPolicy::Raw).unwrap();
        let names: Vec<_> = folders.iter().map(|folder| folder.name.as_str()).collect();

        assert_eq!(names, vec!["INBOX", "Bad&ZeVn", "日本語"]);
        assert_eq!(folders.find_by_name("Bad&ZeVn").unwrap().raw, "Bad&ZeVn");
    }

    #[test]
    fn from_list_lines_fails_on_garbage() {
        let lines = [r#"() "/" INBOX"#, "garbage"];

        for policy in [
            DecodeErrorPolicy::Abort,
            DecodeErrorPolicy::Skip,
            DecodeErrorPolicy::Raw,
        ] {
            assert!(matches!(
                Folders::from_list_lines(lines, policy),
                Err(Error::ParseListLineError(_))
            ));
        }
    }

    #[test]
    fn from_empty_list() {
        let folders = Folders::from_list_lines(Vec::<String>::new(), DecodeErrorPolicy::default());
        assert_eq!(folders.unwrap(), Folders::default());
    }
}
