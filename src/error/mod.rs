// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!      LibcatError (16 bytes)
//!            |
//!      +-----+------+
//!      |            |
//!      v            v
//!   Config       Console
//!    Box           Box
//!
//! ConfigError   NotFound, ParseError, InvalidKey, Load, InvalidValue
//! ConsoleError  InputClosed, Read, Write
//! ```
//!
//! Domain outcomes (id rejected, book not found) are not errors: the menu
//! reports them as messages and carries on. `ConsoleError::InputClosed` is
//! caught by the menu loop and never reaches `LibcatError`.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`, used by logging setup.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`LibcatError`].
pub type LibcatResult<T> = std::result::Result<T, LibcatError>;

/// Result type for configuration loading and validation.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type for terminal I/O.
pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;

/// Failure of a top-level command; the binary maps it to exit code 1.
///
/// Sub-errors are boxed to keep the enum small on the stack.
#[derive(Debug, Error)]
pub enum LibcatError {
    /// Configuration could not be loaded or is invalid.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// The terminal failed while the menu was running.
    #[error("console error: {0}")]
    Console(#[from] Box<ConsoleError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for LibcatError {
                fn from(err: $error) -> Self {
                    LibcatError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ConsoleError => Console,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file passed with `--config` does not exist.
    #[error("config file not found: {0}")]
    NotFound(String),

    /// A TOML source has invalid syntax.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// A `--set` key is not a valid dotted path.
    #[error("invalid config key '{key}': {message}")]
    InvalidKey { key: String, message: String },

    /// The merged sources do not fit the `Config` layout (unknown key,
    /// wrong type, unparsable environment value).
    #[error("failed to load config: {0}")]
    Load(String),

    /// A value deserialized but breaks a rule serde cannot express.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Console Errors ---

/// Terminal I/O errors.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The input stream reached end of file while a prompt was waiting.
    #[error("input closed while waiting for '{prompt}'")]
    InputClosed { prompt: String },

    /// Reading a line from the input failed.
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

impl ConsoleError {
    /// Whether the error only signals that no more input will arrive.
    #[must_use]
    pub const fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed { .. })
    }
}
