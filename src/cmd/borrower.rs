// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Borrower menu handlers.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::messages::Messages;
use crate::console::Console;
use crate::error::ConsoleResult;
use crate::model::Borrower;
use crate::registry::Registry;

/// Prompts for a name and prepends a borrower with no books.
///
/// # Errors
///
/// Returns a console error if input closes or the terminal fails.
pub fn add_borrower<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    messages: &Messages,
    registry: &mut Registry,
) -> ConsoleResult<()> {
    let prompts = &messages.add_borrower_prompts;
    let name = console.prompt(&prompts.name)?;
    info!(%name, "added borrower");
    registry.add(Borrower::new(name));
    console.line(&prompts.added)
}

/// Prompts for a name and removes every borrower with it.
///
/// # Errors
///
/// Returns a console error if input closes or the terminal fails.
pub fn remove_borrower<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    messages: &Messages,
    registry: &mut Registry,
) -> ConsoleResult<()> {
    let prompts = &messages.remove_borrower_prompts;
    let name = console.prompt(&prompts.prompt)?;
    let removed = registry.remove_by_name(&name);
    debug!(%name, removed, "removed borrower");
    console.line(&prompts.removed)
}

/// Prompts for a name and prints the first borrower with that name and
/// their borrowed ids, or the not-found message.
///
/// # Errors
///
/// Returns a console error if input closes or the terminal fails.
pub fn search_borrower<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    messages: &Messages,
    registry: &Registry,
) -> ConsoleResult<()> {
    let prompts = &messages.search_prompts;
    let name = console.prompt(&prompts.borrower)?;
    match registry.find_by_name(&name) {
        Some(borrower) => {
            let line = messages.display_labels.borrower_line(borrower);
            console.line(&format!("{}{line}", prompts.borrower_found))
        }
        None => console.line(&prompts.borrower_not_found),
    }
}

/// Prints every borrower in registry order, or the empty message.
///
/// # Errors
///
/// Returns a console error if the terminal fails.
pub fn display_borrowers<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    messages: &Messages,
    registry: &Registry,
) -> ConsoleResult<()> {
    let labels = &messages.display_labels;
    if registry.is_empty() {
        return console.line(&labels.no_borrowers);
    }
    for borrower in registry {
        console.line(&labels.borrower_line(borrower))?;
    }
    Ok(())
}
