// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Book menu handlers.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::catalog::{self, Catalog};
use crate::config::messages::Messages;
use crate::console::Console;
use crate::error::ConsoleResult;
use crate::model::{Book, is_valid_id};
use crate::registry::Registry;

/// Prompts for title, author and id, then appends the book.
///
/// The id prompt repeats until the answer passes [`is_valid_id`].
///
/// # Errors
///
/// Returns a console error if input closes or the terminal fails.
pub fn add_book<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    messages: &Messages,
    catalog: &mut Catalog,
) -> ConsoleResult<()> {
    let prompts = &messages.add_book_prompts;
    let title = console.prompt(&prompts.title)?;
    let author = console.prompt(&prompts.author)?;
    let id = loop {
        let id = console.prompt(&prompts.id)?;
        if is_valid_id(&id) {
            break id;
        }
        debug!(%id, "rejected book id");
        console.line(&prompts.invalid_id)?;
    };

    info!(%id, %title, "added book");
    catalog.add(Book::new(title, author, id));
    console.line(&prompts.added)
}

/// Prompts for an id, removes every matching book and scrubs the id from
/// all borrowers. The confirmation is printed even if nothing matched.
///
/// # Errors
///
/// Returns a console error if input closes or the terminal fails.
pub fn remove_book<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    messages: &Messages,
    catalog: &mut Catalog,
    registry: &mut Registry,
) -> ConsoleResult<()> {
    let prompts = &messages.remove_book_prompts;
    let id = console.prompt(&prompts.prompt)?;
    let removal = catalog::remove_book(catalog, registry, &id);
    if removal.books > 0 || removal.references > 0 {
        info!(%id, books = removal.books, references = removal.references, "removed book");
    }
    console.line(&prompts.removed)
}

/// Prompts for an id and prints the first matching book.
///
/// # Errors
///
/// Returns a console error if input closes or the terminal fails.
pub fn search_book<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    messages: &Messages,
    catalog: &Catalog,
) -> ConsoleResult<()> {
    let prompts = &messages.search_prompts;
    let id = console.prompt(&prompts.book)?;
    match catalog.find_by_id(&id) {
        Some(book) => {
            let line = messages.display_labels.book_line(book);
            console.line(&format!("{}{line}", prompts.book_found))
        }
        None => {
            debug!(%id, "book not found");
            console.line(&prompts.book_not_found)
        }
    }
}

/// Prints every book in catalog order.
///
/// # Errors
///
/// Returns a console error if the terminal fails.
pub fn display_books<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    messages: &Messages,
    catalog: &Catalog,
) -> ConsoleResult<()> {
    let labels = &messages.display_labels;
    if catalog.is_empty() {
        return console.line(&labels.no_books);
    }
    for book in catalog {
        console.line(&labels.book_line(book))?;
    }
    Ok(())
}

/// Sorts the catalog by id and confirms.
///
/// # Errors
///
/// Returns a console error if the terminal fails.
pub fn sort_books<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    messages: &Messages,
    catalog: &mut Catalog,
) -> ConsoleResult<()> {
    catalog.sort_by_id();
    debug!(books = catalog.len(), "sorted catalog");
    console.line(&messages.sort_confirmation)
}
