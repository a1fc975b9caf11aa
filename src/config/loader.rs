// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional(libcat.toml)   [default]   only if present
//!   .add_toml_file(--config)               [file]      must exist
//!   .add_toml_str()                        [inline]
//!   .with_env_prefix(LIBCAT)               [env]       only if vars are set
//!   .set(--set)                            [set]
//!        |
//!        v
//!    build() --> Config (validated)
//! ```
//!
//! Every source that takes part is recorded, so `libcat configs` can show
//! where each layer came from.

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use tracing::debug;

use super::Config;
use crate::error::{ConfigError, ConfigResult};

/// One layer that contributed to the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `libcat.toml` found in the working directory.
    Default(PathBuf),
    /// A file named on the command line.
    File(PathBuf),
    /// TOML text passed directly.
    Inline,
    /// Environment variables carrying the prefix, by name.
    Env { prefix: String, vars: Vec<String> },
    /// A single `--set` override.
    Override { key: String, value: String },
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default(path) => write!(f, "[default] {}", path.display()),
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::Inline => f.write_str("[inline] <string>"),
            Self::Env { prefix, vars } => write!(f, "[env] {prefix}_* ({})", vars.join(", ")),
            Self::Override { key, value } => write!(f, "[set] {key}={value}"),
        }
    }
}

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.sources.push(ConfigSource::File(path.to_path_buf()));
        self
    }

    /// Adds a TOML file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        if path.exists() {
            self.builder = self
                .builder
                .add_source(File::from(path).format(FileFormat::Toml).required(false));
            self.sources.push(ConfigSource::Default(path.to_path_buf()));
        } else {
            debug!(path = %path.display(), "optional config file not present");
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `PREFIX_SECTION__KEY` environment variables on `build()`.
    ///
    /// The variables present right now are recorded as a source.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        let vars = env_var_names(prefix, std::env::vars_os().map(|(name, _)| name));
        if !vars.is_empty() {
            self.sources.push(ConfigSource::Env {
                prefix: prefix.to_string(),
                vars,
            });
        }
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override using a dotted key (`seed.enabled`).
    ///
    /// The value is a string; booleans and numbers are converted when the
    /// merged configuration is deserialized.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKey` if the key is not a dotted path.
    pub fn set(mut self, key: &str, value: &str) -> ConfigResult<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| ConfigError::InvalidKey {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        self.sources.push(ConfigSource::Override {
            key: key.to_string(),
            value: value.to_string(),
        });
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NotFound` if a required file is missing.
    /// - `ConfigError::ParseError` if a TOML source has invalid syntax.
    /// - `ConfigError::Load` if the merged sources do not fit `Config`.
    /// - `ConfigError::InvalidValue` if validation fails (menu item count,
    ///   seed book ids).
    pub fn build(self) -> ConfigResult<Config> {
        if let Some(missing) = self.sources.iter().find_map(|source| match source {
            ConfigSource::File(path) if !path.is_file() => Some(path),
            _ => None,
        }) {
            return Err(ConfigError::NotFound(missing.display().to_string()));
        }

        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let merged = builder.build().map_err(load_error)?;
        let config: Config = merged.try_deserialize().map_err(load_error)?;
        config.validate()?;
        debug!(sources = self.sources.len(), "configuration loaded");
        Ok(config)
    }

    /// Numbered description of every recorded source, in load order.
    #[must_use]
    pub fn describe_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_error(err: config::ConfigError) -> ConfigError {
    match err {
        config::ConfigError::FileParse { uri, cause } => ConfigError::ParseError {
            path: uri.unwrap_or_else(|| "<string>".to_string()),
            message: cause.to_string(),
        },
        other => ConfigError::Load(other.to_string()),
    }
}

/// Names of the variables that the `prefix` environment source will read,
/// sorted for stable output.
pub(crate) fn env_var_names(
    prefix: &str,
    names: impl IntoIterator<Item = std::ffi::OsString>,
) -> Vec<String> {
    // The environment source matches the prefix case-insensitively
    let wanted = format!("{prefix}_").to_ascii_lowercase();
    let mut vars: Vec<String> = names
        .into_iter()
        .filter_map(|name| name.into_string().ok())
        .filter(|name| {
            name.len() > wanted.len() && name.to_ascii_lowercase().starts_with(&wanted)
        })
        .collect();
    vars.sort();
    vars
}
