// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory utilities.

use std::{
    error::Error,
    path::{Path, PathBuf},
};

use colored::Colorize;
use ignore::{DirEntry, WalkBuilder};
use path_absolutize::Absolutize;

use crate::config::Settings;

/// Return the absolute path, or the path itself if it can not be resolved.
pub fn absolute_path(path: &Path) -> PathBuf {
    path.absolutize()
        .map_or_else(|_| path.to_path_buf(), |p| p.to_path_buf())
}

/// Build a sequential walker sorted by file name, skipping the excluded names.
fn walker(path: &Path, settings: &Settings) -> WalkBuilder {
    let mut builder = WalkBuilder::new(path);
    builder.follow_links(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));
    let exclude = settings.exclude.clone();
    builder.filter_entry(move |entry| {
        entry.depth() == 0
            || !entry
                .file_name()
                .to_str()
                .is_some_and(|name| exclude.iter().any(|n| n == name))
    });
    builder
}

fn warn_entry(settings: &Settings, err: &ignore::Error) {
    if !settings.quiet {
        eprintln!("{}: could not read entry: {err}", "Warning".yellow());
    }
}

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}

/// Find the language codes: sub-directories of the locales directory.
pub fn find_language_codes(settings: &Settings) -> Result<Vec<String>, Box<dyn Error>> {
    if !settings.root.is_dir() {
        return Err(format!(
            "locales directory not found: {}",
            absolute_path(&settings.root).display()
        )
        .into());
    }
    let mut builder = walker(&settings.root, settings);
    builder.max_depth(Some(1));
    let mut codes = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(dirent) => {
                if dirent.depth() == 1
                    && is_dir(&dirent)
                    && let Some(name) = dirent.file_name().to_str()
                {
                    codes.push(name.to_string());
                }
            }
            Err(err) => warn_entry(settings, &err),
        }
    }
    codes.sort();
    Ok(codes)
}

/// Recursively find all locale files of a language (matching the configured extension).
///
/// The .gitignore rules are respected: ignored files are skipped.
pub fn find_locale_files(settings: &Settings, language: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in walker(&settings.root.join(language), settings).build() {
        match entry {
            Ok(dirent) => {
                if dirent.file_type().is_some_and(|ft| ft.is_file())
                    && dirent
                        .path()
                        .extension()
                        .is_some_and(|ext| *ext == *settings.extension)
                {
                    files.push(
                        dirent
                            .path()
                            .strip_prefix("./")
                            .unwrap_or(dirent.path())
                            .to_path_buf(),
                    );
                }
            }
            Err(err) => warn_entry(settings, &err),
        }
    }
    files.sort();
    files
}
