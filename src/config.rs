// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration file and settings used to check locale files.

use std::{
    error::Error,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{
    args::{self, OutputFormat},
    case::Case,
    keys::KeyAnalyzer,
};

/// Configuration file read by default in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".localecase.toml";

pub const DEFAULT_ROOT: &str = "locales";

pub const DEFAULT_EXTENSION: &str = "json";

/// Names always ignored: never language codes, never checked.
pub const DEFAULT_EXCLUDE: [&str; 10] = [
    ".git",
    ".github",
    "node_modules",
    "dist",
    "build",
    "target",
    ".DS_Store",
    "Thumbs.db",
    "package.json",
    "package-lock.json",
];

/// Content of the configuration file, all keys are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub root: Option<PathBuf>,
    pub extension: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
    pub filename_case: Option<String>,
}

impl Config {
    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| format!("{}: could not read file: {err}", path.display()))?;
        Self::from_toml(&content)
            .map_err(|err| format!("{}: invalid configuration: {err}", path.display()).into())
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the configuration file given on command line, or the default one if it exists.
    pub fn load(path: Option<&PathBuf>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Settings resolved from the configuration file and the command line.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug)]
pub struct Settings {
    pub root: PathBuf,
    pub extension: String,
    pub exclude: Vec<String>,
    pub key_analyzer: KeyAnalyzer,
    pub filename_case: Case,
    pub check_keys: bool,
    pub check_filenames: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub output: OutputFormat,
    pub languages: Vec<String>,
}

impl Settings {
    /// Build settings: command line arguments override the configuration file.
    ///
    /// If neither keys nor file names are selected, both are checked.
    pub fn new(args: &args::Cli, config: Config) -> Result<Self, Box<dyn Error>> {
        let filename_case = match &config.filename_case {
            Some(name) => Case::from_str(name)?,
            None => Case::Kebab,
        };
        let root = args
            .root
            .clone()
            .or(config.root)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
        let extension = args
            .extension
            .clone()
            .or(config.extension)
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
            .trim_start_matches('.')
            .to_string();
        let mut exclude: Vec<String> = DEFAULT_EXCLUDE.iter().map(ToString::to_string).collect();
        for name in config.exclude.iter().chain(args.exclude.iter()) {
            if !exclude.contains(name) {
                exclude.push(name.clone());
            }
        }
        let check_all = !args.keys && !args.filenames;
        let mut languages: Vec<String> = Vec::new();
        for lang in &args.languages {
            if !languages.contains(lang) {
                languages.push(lang.clone());
            }
        }
        Ok(Self {
            root,
            extension,
            exclude,
            key_analyzer: KeyAnalyzer::new(&config.suffixes),
            filename_case,
            check_keys: check_all || args.keys,
            check_filenames: check_all || args.filenames,
            verbose: args.verbose,
            quiet: args.quiet,
            output: args.output.clone(),
            languages,
        })
    }

    /// Return true if messages in human format can be displayed.
    pub fn display_human(&self) -> bool {
        !self.quiet && self.output == OutputFormat::Human
    }
}
