// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    author,
    name = "localecase",
    about = "Naming convention linter for JSON locale files.",
    after_help = "Keys must be camelCase (i18next suffixes like _male or _one are allowed), \
                  file names must be kebab-case."
)]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Language codes to check (default: all languages found in the locales directory)
    pub languages: Vec<String>,

    /// Check the case of keys
    #[arg(short, long)]
    pub keys: bool,

    /// Check the case of file names
    #[arg(short, long)]
    pub filenames: bool,

    /// Display each incorrect key and file name with the corrected one
    #[arg(short, long)]
    pub verbose: bool,

    /// List the language codes found and exit
    #[arg(short, long)]
    pub list: bool,

    /// Locales directory [default: locales]
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Extension of the locale files [default: json]
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Configuration file [default: .localecase.toml if it exists]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File or directory name to ignore (can be given multiple times)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Display settings used to check files
    #[arg(long)]
    pub show_settings: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Quiet mode: do not report anything, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format.
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    /// Human readable text format
    Human,

    /// JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
