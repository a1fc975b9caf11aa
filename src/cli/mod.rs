// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for libcat using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! libcat [global options]            interactive menu
//! libcat [global options] version
//! libcat [global options] options
//! libcat [global options] configs
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Console library catalog manager
///
/// Keeps books and borrowers in memory and edits them through a numbered menu.
#[derive(Debug, Parser)]
#[command(
    name = "libcat",
    author,
    version,
    about = "Console library catalog manager",
    long_about = "libcat Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Keeps books and borrowers in memory and edits them through a\n\
                  numbered menu. Run `libcat` without a command to start the menu.\n\
                  Nothing is saved when the program exits.",
    after_help = "CONFIG FILES:\n\n\
                  By default, libcat loads `libcat.toml` from the current directory\n\
                  if it exists. Additional files can be given with --config; they\n\
                  are loaded afterwards and override earlier values. LIBCAT_*\n\
                  environment variables (e.g. LIBCAT_SEED__ENABLED=false) and\n\
                  --set come last. Use --no-default-config to skip libcat.toml."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute; the menu runs when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by libcat.
    Configs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
