// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Localecase is a linter for the naming conventions of JSON locale files.
//!
//! The locales directory is organized by language code: `<root>/<language>/**/*.json`.
//!
//! Two checks are performed on each language (both by default):
//!
//! - keys (`--keys`): every key must be in camel case; the i18next suffixes used for
//!   context and plurals (`_male`, `_female`, `_ordinal`, `_one`, `_two`, `_other`,
//!   `_few`) are kept in snake case, for example `aceTrainer_male`
//! - file names (`--filenames`): every file name must be in kebab case,
//!   for example `menu-ui-handler.json`
//!
//! The exit code is 1 if any incorrect key or file name is found, so it can be used
//! in CI jobs or pre-commit hooks.
//!
//! # Configuration
//!
//! Settings can be stored in a TOML file, `.localecase.toml` in the current directory
//! by default:
//!
//! ```toml
//! root = "public/locales"
//! extension = "json"
//! exclude = ["legacy.json"]
//! suffixes = ["zero", "many"]
//! filename-case = "kebab"
//! ```

mod args;
mod case;
mod checker;
mod config;
mod dir;
mod filename;
mod finding;
mod keys;
mod result;

use clap::Parser;

use crate::args::Cli;
use crate::checker::run_check;

fn main() {
    let args = Cli::parse();
    let rc = run_check(&args);
    std::process::exit(rc);
}
