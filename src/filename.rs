// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Analysis of locale file names.

use std::path::Path;

use crate::{case::Case, finding::Finding};

/// Return the expected file name: the stem converted to the case, the extension kept.
pub fn correct_file_name(file_name: &str, case: Case) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}.{ext}", case.convert(stem)),
        _ => case.convert(file_name),
    }
}

/// Check the name of a file, return a finding if it does not follow the case.
pub fn check_file_name(path: &Path, case: Case) -> Option<Finding> {
    let file_name = path.file_name()?.to_string_lossy();
    let corrected = correct_file_name(&file_name, case);
    if corrected == file_name {
        None
    } else {
        Some(Finding::file_name(path, &file_name, corrected))
    }
}
