// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Checker for locale files.

use std::{error::Error, path::Path, time::Instant};

use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

use crate::{
    args,
    config::{Config, Settings},
    dir::{absolute_path, find_language_codes, find_locale_files},
    filename::check_file_name,
    finding::Finding,
    result::display_result,
};

/// Result of the checks for one language.
#[derive(Debug, Default, Serialize)]
pub struct LanguageResult {
    pub language: String,
    pub files: usize,
    pub keys: Vec<Finding>,
    pub file_names: Vec<Finding>,
}

impl LanguageResult {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            ..Default::default()
        }
    }

    pub fn count_findings(&self) -> usize {
        self.keys.len() + self.file_names.len()
    }
}

/// Read and parse a JSON locale file (a leading BOM is ignored).
pub fn read_json(path: &Path) -> Result<Value, Box<dyn Error>> {
    let buf = std::fs::read(path)
        .map_err(|err| format!("{}: could not read file: {err}", path.display()))?;
    let (content, _) = encoding_rs::UTF_8.decode_with_bom_removal(&buf);
    serde_json::from_str(&content)
        .map_err(|err| format!("{}: invalid JSON: {err}", path.display()).into())
}

/// Check a single locale file, adding the findings to the language result.
///
/// The file content is read only if keys are checked.
pub fn check_file(
    path: &Path,
    settings: &Settings,
    result: &mut LanguageResult,
) -> Result<(), Box<dyn Error>> {
    if settings.verbose && settings.display_human() {
        println!("{}: checking", path.display().to_string().dimmed());
    }
    result.files += 1;
    if settings.check_filenames
        && let Some(finding) = check_file_name(path, settings.filename_case)
    {
        result.file_names.push(finding);
    }
    if settings.check_keys {
        let value = read_json(path)?;
        result
            .keys
            .extend(settings.key_analyzer.check_value(path, &value));
    }
    Ok(())
}

/// Check all locale files of a language.
///
/// The first error (unreadable file, invalid JSON) stops the check.
pub fn check_language(
    settings: &Settings,
    language: &str,
) -> Result<LanguageResult, Box<dyn Error>> {
    let mut result = LanguageResult::new(language);
    for path in find_locale_files(settings, language) {
        check_file(&path, settings, &mut result)?;
    }
    Ok(result)
}

/// Return the languages to check: the ones given on command line (they must exist),
/// or all languages found.
pub fn select_languages(
    requested: &[String],
    available: &[String],
) -> Result<Vec<String>, Box<dyn Error>> {
    if requested.is_empty() {
        return Ok(available.to_vec());
    }
    let unknown: Vec<&str> = requested
        .iter()
        .filter(|lang| !available.contains(lang))
        .map(String::as_str)
        .collect();
    if unknown.is_empty() {
        Ok(requested.to_vec())
    } else {
        Err(format!(
            "unknown language codes: {} (available: {})",
            unknown.join(", "),
            available.join(", ")
        )
        .into())
    }
}

/// Display the settings used to check files.
fn display_settings(args: &args::Cli, settings: &Settings) {
    if !args.show_settings || !settings.display_human() {
        return;
    }
    println!("Configuration:");
    println!("  Locales directory: {}", absolute_path(&settings.root).display());
    println!("  Extension: .{}", settings.extension);
    println!("  Excluded: {}", settings.exclude.join(", "));
    println!(
        "  Check keys: {}",
        if settings.check_keys { "yes" } else { "no" }
    );
    println!(
        "  Allowed key suffixes: {}",
        settings.key_analyzer.suffixes().join(", ")
    );
    println!(
        "  Check file names: {}",
        if settings.check_filenames {
            format!("yes ({} case)", settings.filename_case)
        } else {
            "no".to_string()
        }
    );
    println!("  Output format: {}", settings.output);
}

fn run(args: &args::Cli) -> Result<i32, Box<dyn Error>> {
    let start = Instant::now();
    let settings = Settings::new(args, Config::load(args.config.as_ref())?)?;
    display_settings(args, &settings);
    let codes = find_language_codes(&settings)?;
    if args.list {
        if !settings.quiet {
            for code in &codes {
                println!("{code}");
            }
        }
        return Ok(0);
    }
    let languages = select_languages(&settings.languages, &codes)?;
    let mut result = Vec::with_capacity(languages.len());
    for language in &languages {
        result.push(check_language(&settings, language)?);
    }
    display_result(&result, &settings, &start.elapsed())
}

/// Check and display result for all languages, return the exit code.
pub fn run_check(args: &args::Cli) -> i32 {
    match run(args) {
        Ok(rc) => rc,
        Err(err) => {
            eprintln!("{}: {err}", "Error".bright_red().bold());
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;
    use crate::finding::FindingKind;

    fn create_locales(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for (name, content) in files {
            let path = temp_dir.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        temp_dir
    }

    fn settings_for(root: &Path, extra_args: &[&str]) -> Settings {
        let mut cmd = vec!["localecase", "--quiet", "--root", root.to_str().unwrap()];
        cmd.extend_from_slice(extra_args);
        Settings::new(&args::Cli::parse_from(cmd), Config::default()).unwrap()
    }

    #[test]
    fn test_check_language_ok() {
        let temp_dir = create_locales(&[
            ("en/battle.json", "{\n  \"attackMissed\": \"Missed!\"\n}"),
            ("en/trainer-names.json", "{\n  \"aceTrainer_female\": \"Ace\"\n}"),
        ]);
        let settings = settings_for(temp_dir.path(), &[]);
        let result = check_language(&settings, "en").unwrap();
        assert_eq!(result.files, 2);
        assert_eq!(result.count_findings(), 0);
    }

    #[test]
    fn test_check_language_findings() {
        let temp_dir = create_locales(&[
            ("en/My_Weird_File.json", "{\n  \"ok\": \"\",\n  \"Ace_Trainer_male\": \"\"\n}"),
            ("en/sub/menu.json", "{\"trainer_foo\": \"\"}"),
            ("en/package.json", "{\"Not_Checked\": \"\"}"),
        ]);
        let settings = settings_for(temp_dir.path(), &[]);
        let result = check_language(&settings, "en").unwrap();
        assert_eq!(result.files, 2);
        assert_eq!(result.file_names.len(), 1);
        assert_eq!(result.file_names[0].corrected, "my-weird-file.json");
        assert_eq!(result.keys.len(), 2);
        assert_eq!(result.keys[0].kind, FindingKind::Key);
        assert_eq!(result.keys[0].corrected, "aceTrainer_male");
        assert_eq!(result.keys[0].line, Some(3));
        assert_eq!(result.keys[1].corrected, "trainerFoo");
        assert_eq!(result.keys[1].line, Some(2));
    }

    #[test]
    fn test_check_only_file_names() {
        let temp_dir = create_locales(&[("en/Bad_Name.json", "not json")]);
        let settings = settings_for(temp_dir.path(), &["--filenames"]);
        let result = check_language(&settings, "en").unwrap();
        assert_eq!(result.file_names.len(), 1);
        assert!(result.keys.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = create_locales(&[
            ("en/a.json", "{\"Bad_Key\": \"\"}"),
            ("en/b.json", "{\"key\": }"),
        ]);
        let settings = settings_for(temp_dir.path(), &[]);
        let err = check_language(&settings, "en").unwrap_err();
        assert!(err.to_string().contains("b.json: invalid JSON: "));
    }

    #[test]
    fn test_read_json_bom() {
        let temp_dir = create_locales(&[("en/bom.json", "\u{feff}{\"key\": \"value\"}")]);
        let value = read_json(&temp_dir.path().join("en/bom.json")).unwrap();
        assert_eq!(value["key"], "value");
    }

    #[test]
    fn test_deterministic() {
        let temp_dir = create_locales(&[
            ("en/Z_File.json", "{\"B_Key\": \"\", \"A_Key\": \"\"}"),
            ("en/A_File.json", "{\"C_Key\": \"\"}"),
        ]);
        let settings = settings_for(temp_dir.path(), &[]);
        let first = check_language(&settings, "en").unwrap();
        let second = check_language(&settings, "en").unwrap();
        assert_eq!(first.keys, second.keys);
        assert_eq!(first.file_names, second.file_names);
        assert_eq!(first.keys[0].incorrect, "C_Key");
    }

    #[test]
    fn test_select_languages() {
        let available = vec!["de".to_string(), "en".to_string(), "fr".to_string()];
        assert_eq!(select_languages(&[], &available).unwrap(), available);
        assert_eq!(
            select_languages(&["fr".to_string()], &available).unwrap(),
            vec!["fr"]
        );
        let err = select_languages(&["xx".to_string(), "en".to_string()], &available).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown language codes: xx (available: de, en, fr)"
        );
    }

    #[test]
    fn test_run_check() {
        let temp_dir = create_locales(&[("en/battle.json", "{\"attackMissed\": \"\"}")]);
        let root = temp_dir.path().to_str().unwrap();
        let args = args::Cli::parse_from(["localecase", "-q", "-r", root]);
        assert_eq!(run_check(&args), 0);
        let args = args::Cli::parse_from(["localecase", "-q", "-r", root, "fr"]);
        assert_eq!(run_check(&args), 1);
        let args = args::Cli::parse_from(["localecase", "-q", "-r", "/nonexistent/locales"]);
        assert_eq!(run_check(&args), 1);
    }
}
