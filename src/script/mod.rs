// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Script file loading.
//!
//! Reads an AutoHotkey script from disk and runs it through the core
//! `Parser`. This is the only place the crate touches the filesystem.
//!
//! - **Tilde expansion**: `~/scripts/main.ahk` works as expected
//! - **Typed errors**: missing files and non-UTF-8 content are reported
//!   separately from other I/O failures
//!
//! # Example
//!
//! ```no_run
//! use ahk_hotkey_parser::script::ScriptFile;
//!
//! let script = ScriptFile::load("~/scripts/main.ahk")?;
//! println!("{} expressions", script.tree().len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub use error::ScriptError;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::{ExpressionTree, ParseReport, Parser};

/// A parsed script file
#[derive(Debug)]
pub struct ScriptFile {
    /// Expanded path the script was read from.
    path: PathBuf,
    parser: Parser,
    report: ParseReport,
}

impl ScriptFile {
    /// Reads and parses the script at `path`.
    ///
    /// A leading `~` is expanded to the home directory and a leading
    /// byte-order mark is dropped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = expand_path(path.as_ref())?;
        let content = read_script(&path)?;

        let mut parser = Parser::new();
        let report = parser.parse(&content);

        info!(
            path = %path.display(),
            lines = report.lines().len(),
            recognized = report.matched(),
            "loaded script"
        );

        Ok(Self { path, parser, report })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Everything recognized in the file
    pub fn tree(&self) -> &ExpressionTree {
        self.parser.script()
    }

    pub fn report(&self) -> &ParseReport {
        &self.report
    }
}

/// Expands a leading `~` in `path`.
pub fn expand_path(path: &Path) -> Result<PathBuf, ScriptError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ScriptError::InvalidPath(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// UTF-8 byte-order mark, common in scripts saved by Windows editors
const BYTE_ORDER_MARK: char = '\u{feff}';

fn read_script(path: &Path) -> Result<String, ScriptError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ScriptError::NotFound(path.to_path_buf()),
        ErrorKind::InvalidData => ScriptError::InvalidEncoding(path.to_path_buf()),
        _ => ScriptError::Io(e),
    })?;

    match content.strip_prefix(BYTE_ORDER_MARK) {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(content),
    }
}

#[cfg(test)]
mod tests;
