// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display check result.

use std::{error::Error, time::Duration};

use colored::Colorize;

use crate::{args::OutputFormat, checker::LanguageResult, config::Settings};

/// Format the counts of findings for the enabled checks (e.g. `3 incorrect keys`).
fn format_counts(settings: &Settings, keys: usize, file_names: usize) -> String {
    let mut counts = Vec::with_capacity(2);
    if settings.check_keys {
        counts.push(format!("{keys} incorrect keys"));
    }
    if settings.check_filenames {
        counts.push(format!("{file_names} incorrect file names"));
    }
    counts.join(", ")
}

/// Display findings and counts for each language in human format.
fn display_languages_human(result: &[LanguageResult], settings: &Settings) {
    for lang in result {
        if settings.verbose {
            for finding in lang.file_names.iter().chain(&lang.keys) {
                println!("{finding}");
            }
        }
        if lang.count_findings() == 0 {
            println!(
                "{}: {} files, {}",
                lang.language.bold(),
                lang.files,
                "all OK!".green()
            );
        } else {
            println!(
                "{}: {} files, {}",
                lang.language.bold(),
                lang.files,
                format_counts(settings, lang.keys.len(), lang.file_names.len()).bright_red()
            );
        }
    }
}

/// Display result in JSON format.
fn display_languages_json(result: &[LanguageResult]) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string(result)?);
    Ok(())
}

/// Display the result of the checks and return the appropriate exit code.
///
/// Any incorrect key or file name is an error.
pub fn display_result(
    result: &[LanguageResult],
    settings: &Settings,
    elapsed: &Duration,
) -> Result<i32, Box<dyn Error>> {
    let files_checked: usize = result.iter().map(|lang| lang.files).sum();
    let count_keys: usize = result.iter().map(|lang| lang.keys.len()).sum();
    let count_file_names: usize = result.iter().map(|lang| lang.file_names.len()).sum();
    if !settings.quiet {
        match settings.output {
            OutputFormat::Human => display_languages_human(result, settings),
            OutputFormat::Json => display_languages_json(result)?,
        }
    }
    let rc = i32::from(count_keys + count_file_names > 0);
    if settings.display_human() {
        if rc == 0 {
            println!(
                "{} languages checked ({files_checked} files): all OK! [{elapsed:?}]",
                result.len()
            );
        } else {
            println!(
                "{} languages checked ({files_checked} files): {} [{elapsed:?}]",
                result.len(),
                format_counts(settings, count_keys, count_file_names)
            );
        }
    }
    Ok(rc)
}
