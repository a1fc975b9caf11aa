// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for libcat.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. libcat.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. LIBCAT_* env vars
//! 5. --set section.key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! LIBCAT_SEED__ENABLED=false            → seed.enabled = false
//! LIBCAT_GLOBAL__OUTPUT_LOG_LEVEL=4     → global.output_log_level = 4
//! LIBCAT_MESSAGES__EXIT_MESSAGE=Bye     → messages.exit_message = "Bye"
//! ```

pub mod loader;
pub mod messages;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConfigError, ConfigResult};
use crate::model::is_valid_id;

use loader::ConfigLoader;
use messages::{MENU_ITEM_COUNT, Messages};
use types::{GlobalConfig, SeedConfig};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "libcat.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "LIBCAT";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Startup data.
    pub seed: SeedConfig,
    /// Prompt and response table.
    pub messages: Messages,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use libcat::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("libcat.toml")
    ///     .with_env_prefix("LIBCAT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> ConfigResult<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values that serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `messages.menu_items` does not
    /// hold exactly ten entries or a seed book has a malformed id.
    pub fn validate(&self) -> ConfigResult<()> {
        let items = self.messages.menu_items.len();
        if items != MENU_ITEM_COUNT {
            return Err(ConfigError::InvalidValue {
                section: "messages".to_string(),
                key: "menu_items".to_string(),
                message: format!("expected {MENU_ITEM_COUNT} entries, got {items}"),
            });
        }

        if let Some(books) = &self.seed.books
            && let Some(book) = books.iter().find(|book| !is_valid_id(&book.id))
        {
            return Err(ConfigError::InvalidValue {
                section: "seed".to_string(),
                key: "books".to_string(),
                message: format!(
                    "book id '{}' must be one letter followed by four digits",
                    book.id
                ),
            });
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`. Message strings
    /// are shown with `Debug` quoting so trailing spaces stay visible.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_seed_options(&mut options);
        self.format_message_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_seed_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("seed.enabled".into(), self.seed.enabled.to_string());
        options.insert(
            "seed.books".into(),
            self.seed
                .books
                .as_ref()
                .map_or_else(|| "[builtin]".to_string(), |b| b.len().to_string()),
        );
        options.insert(
            "seed.borrowers".into(),
            self.seed
                .borrowers
                .as_ref()
                .map_or_else(|| "[builtin]".to_string(), |b| b.len().to_string()),
        );
    }

    fn format_message_options(&self, options: &mut BTreeMap<String, String>) {
        let m = &self.messages;
        let mut put = |key: &str, value: &str| {
            options.insert(format!("messages.{key}"), format!("{value:?}"));
        };

        put("menu_title", &m.menu_title);
        for (i, item) in m.menu_items.iter().enumerate() {
            put(&format!("menu_items.{}", i + 1), item);
        }
        put("choice_prompt", &m.choice_prompt);
        put("invalid_choice_message", &m.invalid_choice_message);
        put("exit_message", &m.exit_message);
        put("sort_confirmation", &m.sort_confirmation);

        put("add_book_prompts.title", &m.add_book_prompts.title);
        put("add_book_prompts.author", &m.add_book_prompts.author);
        put("add_book_prompts.id", &m.add_book_prompts.id);
        put("add_book_prompts.invalid_id", &m.add_book_prompts.invalid_id);
        put("add_book_prompts.added", &m.add_book_prompts.added);

        put("remove_book_prompts.prompt", &m.remove_book_prompts.prompt);
        put("remove_book_prompts.removed", &m.remove_book_prompts.removed);

        put("add_borrower_prompts.name", &m.add_borrower_prompts.name);
        put("add_borrower_prompts.added", &m.add_borrower_prompts.added);

        put(
            "remove_borrower_prompts.prompt",
            &m.remove_borrower_prompts.prompt,
        );
        put(
            "remove_borrower_prompts.removed",
            &m.remove_borrower_prompts.removed,
        );

        put("search_prompts.book", &m.search_prompts.book);
        put("search_prompts.book_found", &m.search_prompts.book_found);
        put(
            "search_prompts.book_not_found",
            &m.search_prompts.book_not_found,
        );
        put("search_prompts.borrower", &m.search_prompts.borrower);
        put(
            "search_prompts.borrower_found",
            &m.search_prompts.borrower_found,
        );
        put(
            "search_prompts.borrower_not_found",
            &m.search_prompts.borrower_not_found,
        );

        put("display_labels.title", &m.display_labels.title);
        put("display_labels.author", &m.display_labels.author);
        put("display_labels.id", &m.display_labels.id);
        put("display_labels.name", &m.display_labels.name);
        put(
            "display_labels.borrowed_books",
            &m.display_labels.borrowed_books,
        );
        put("display_labels.no_books", &m.display_labels.no_books);
        put("display_labels.no_borrowers", &m.display_labels.no_borrowers);
    }
}
