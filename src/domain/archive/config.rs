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

//! Archive config module.
//!
//! This module contains the representation of the local archive
//! configuration, which decides where folders are archived and what
//! happens to folders whose name cannot be decoded.

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_ARCHIVE_DIR: &str = ".";
pub const DEFAULT_ARCHIVE_EXT: &str = "mbox";

/// Represents what to do with a folder whose name cannot be decoded.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecodeErrorPolicy {
    /// Stops and returns the decoding error.
    Abort,
    /// Leaves the folder out.
    Skip,
    /// Keeps the folder, using its raw wire name as name.
    Raw,
}

impl Default for DecodeErrorPolicy {
    fn default() -> Self {
        Self::Abort
    }
}

/// Represents the local archive configuration.
#[derive(Debug, Default, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArchiveConfig {
    /// Represents the directory archives are written into.
    pub dir: Option<PathBuf>,
    /// Represents the archive file extension, without leading dot.
    pub ext: Option<String>,
    /// Represents the policy applied to undecodable folder names.
    pub on_decode_error: Option<DecodeErrorPolicy>,
}

impl ArchiveConfig {
    /// Gets the archive directory, with `~` and environment
    /// variables expanded.
    pub fn dir(&self) -> PathBuf {
        match self.dir.as_ref() {
            None => PathBuf::from(DEFAULT_ARCHIVE_DIR),
            Some(dir) => dir
                .to_str()
                .and_then(|dir| shellexpand::full(dir).ok())
                .map(|dir| PathBuf::from(dir.to_string()))
                .unwrap_or_else(|| dir.to_owned()),
        }
    }

    /// Gets the archive file extension.
    pub fn ext(&self) -> &str {
        self.ext
            .as_deref()
            .map(|ext| ext.trim_start_matches('.'))
            .unwrap_or(DEFAULT_ARCHIVE_EXT)
    }

    pub fn on_decode_error(&self) -> DecodeErrorPolicy {
        self.on_decode_error.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn defaults() {
        let config = ArchiveConfig::default();

        assert_eq!(config.dir(), PathBuf::from("."));
        assert_eq!(config.ext(), "mbox");
        assert_eq!(config.on_decode_error(), DecodeErrorPolicy::Abort);
    }

    #[test]
    fn ext_without_leading_dot() {
        let config = ArchiveConfig {
            ext: Some(".eml".into()),
            ..ArchiveConfig::default()
        };

        assert_eq!(config.ext(), "eml");
    }

    #[test]
    fn dir_expands_env_vars() {
        env::set_var("MAILBOX_UTF7_TEST_ARCHIVE_DIR", "/tmp/archives");
        let config = ArchiveConfig {
            dir: Some("$MAILBOX_UTF7_TEST_ARCHIVE_DIR/imap".into()),
            ..ArchiveConfig::default()
        };

        assert_eq!(config.dir(), PathBuf::from("/tmp/archives/imap"));
    }

    #[test]
    fn dir_kept_when_expansion_fails() {
        let config = ArchiveConfig {
            dir: Some("$MAILBOX_UTF7_TEST_UNDEFINED_VAR/imap".into()),
            ..ArchiveConfig::default()
        };

        assert_eq!(
            config.dir(),
            PathBuf::from("$MAILBOX_UTF7_TEST_UNDEFINED_VAR/imap")
        );
    }
}
