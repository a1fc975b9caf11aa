// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for libcat.

use crate::config::Config;

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display the configuration sources in load order.
pub fn run_configs_command(sources: &[String]) {
    if sources.is_empty() {
        println!("No configuration sources, using built-in defaults");
    } else {
        for line in sources {
            println!("{line}");
        }
    }
}
