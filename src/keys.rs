// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Analysis of the keys in a JSON locale file.

use std::path::Path;

use serde_json::Value;

use crate::{case::Case, finding::Finding};

/// Suffixes used by i18next for context and plurals, kept in snake case.
pub const I18NEXT_SUFFIXES: [&str; 7] = [
    "male", "female", "ordinal", "one", "two", "other", "few",
];

/// Analyzer of keys, with the list of recognized suffixes.
#[derive(Debug, Clone)]
pub struct KeyAnalyzer {
    suffixes: Vec<String>,
}

impl Default for KeyAnalyzer {
    fn default() -> Self {
        Self {
            suffixes: I18NEXT_SUFFIXES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl KeyAnalyzer {
    /// Create an analyzer recognizing the i18next suffixes and the extra ones.
    pub fn new(extra_suffixes: &[String]) -> Self {
        let mut analyzer = Self::default();
        for suffix in extra_suffixes {
            let suffix = suffix.trim_start_matches('_');
            if !suffix.is_empty() && !analyzer.is_suffix(suffix) {
                analyzer.suffixes.push(suffix.to_string());
            }
        }
        analyzer
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    fn is_suffix(&self, segment: &str) -> bool {
        self.suffixes.iter().any(|s| s == segment)
    }

    /// Return the expected form of a key: camel case, with i18next suffixes kept.
    ///
    /// Examples:
    /// - `Ace_Trainer_male` -> `aceTrainer_male`
    /// - `trainer_foo` -> `trainerFoo`
    /// - `pokemon-info` -> `pokemonInfo`
    pub fn correct_key(&self, key: &str) -> String {
        if !key.contains('_') {
            return Case::Camel.convert(key);
        }
        let mut segments = key.split('_');
        let mut corrected = String::with_capacity(key.len());
        if let Some(first) = segments.next() {
            corrected.push_str(&Case::Camel.convert(first));
        }
        for segment in segments {
            if self.is_suffix(segment) {
                corrected.push('_');
                corrected.push_str(segment);
            } else if segment.chars().any(char::is_lowercase) {
                corrected.push_str(&Case::Pascal.convert(segment));
            } else {
                // Upper case segment of a snake case key: a word, not an acronym.
                corrected.push_str(&Case::Pascal.convert(&segment.to_lowercase()));
            }
        }
        corrected
    }

    /// Check all keys of a JSON document and return the incorrect ones.
    ///
    /// Keys of nested objects are checked too, in document order. The line of each key is
    /// its line in the pretty-printed document: `{` is on line 1, so for a flat file the
    /// first key is on line 2.
    pub fn check_value(&self, path: &Path, value: &Value) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut line = 1;
        self.walk(path, value, &mut line, &mut findings);
        findings
    }

    fn walk(&self, path: &Path, value: &Value, line: &mut usize, findings: &mut Vec<Finding>) {
        match value {
            Value::Object(map) if !map.is_empty() => {
                for (key, child) in map {
                    *line += 1;
                    let corrected = self.correct_key(key);
                    if corrected != *key {
                        findings.push(Finding::key(path, key, corrected, *line));
                    }
                    self.walk(path, child, line, findings);
                }
                // Closing brace.
                *line += 1;
            }
            Value::Array(items) if !items.is_empty() => {
                for item in items {
                    *line += 1;
                    self.walk(path, item, line, findings);
                }
                *line += 1;
            }
            _ => {}
        }
    }
}
