// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Finding: an identifier that does not follow the naming convention.

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    Key,
    FileName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub path: PathBuf,
    pub kind: FindingKind,
    pub incorrect: String,
    pub corrected: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FindingKind::Key => write!(f, "key"),
            FindingKind::FileName => write!(f, "file-name"),
        }
    }
}

impl Finding {
    /// Create a finding for an incorrect key found on the given line.
    pub fn key(path: &Path, incorrect: &str, corrected: String, line: usize) -> Self {
        Self {
            path: PathBuf::from(path),
            kind: FindingKind::Key,
            incorrect: incorrect.to_string(),
            corrected,
            line: Some(line),
        }
    }

    /// Create a finding for an incorrect file name.
    pub fn file_name(path: &Path, incorrect: &str, corrected: String) -> Self {
        Self {
            path: PathBuf::from(path),
            kind: FindingKind::FileName,
            incorrect: incorrect.to_string(),
            corrected,
            line: None,
        }
    }
}

impl std::fmt::Display for Finding {
    /// Format the `Finding` for display: location, kind, incorrect and corrected identifier.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let str_line = match self.line {
            Some(line) => format!(":{line}"),
            None => String::new(),
        };
        write!(
            f,
            "{}{str_line}: [{}] '{}' -> '{}'",
            self.path.display().to_string().white().bold(),
            self.kind.to_string().yellow(),
            self.incorrect.bright_red(),
            self.corrected.green(),
        )
    }
}
