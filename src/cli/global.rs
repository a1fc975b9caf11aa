// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE       ← Additional config files (can repeat)
//! --log-level N       ← stderr verbosity (0-6)
//! --file-log-level N  ← File verbosity (falls back to --log-level)
//! --log-file FILE     ← global.log_file override
//! --no-seed           ← seed.enabled = false
//! --set KEY=VAL       ← Direct config override (dotted key)
//!
//! Precedence: CLI flags > --set > env > --config > libcat.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::config::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::error::ConfigResult;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    /// Logs go to stderr.
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Starts with an empty catalog and registry instead of the sample data.
    #[arg(long = "no-seed")]
    pub no_seed: bool,

    /// Sets an option, such as 'messages.exit_message=Bye' or 'seed.enabled=false'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value, action = clap::ArgAction::Append)]
    pub options: Vec<(String, String)>,

    /// Disables auto loading of libcat.toml, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// `--set` values come first so dedicated flags win over them.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(String, String)> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".into(), level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".into(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".into(), path.display().to_string()));
        }

        if self.no_seed {
            overrides.push(("seed.enabled".into(), "false".into()));
        }

        overrides
    }

    /// Assembles the loader for these options: `libcat.toml` (unless
    /// disabled), every `--config` file, `LIBCAT_*` variables, then the
    /// overrides from [`Self::to_config_overrides`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKey` if a `--set` key is malformed.
    pub fn config_loader(&self) -> ConfigResult<ConfigLoader> {
        let mut loader = ConfigLoader::new();
        if !self.no_default_config {
            loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
        }
        for path in &self.configs {
            loader = loader.add_toml_file(path);
        }
        loader = loader.with_env_prefix(ENV_PREFIX);
        for (key, value) in self.to_config_overrides() {
            loader = loader.set(&key, &value)?;
        }
        Ok(loader)
    }
}

/// Splits `key=value` at the first `=`.
fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
