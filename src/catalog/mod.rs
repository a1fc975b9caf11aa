// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Book catalog.
//!
//! ```text
//! Catalog (Vec<Book>, insertion order)
//!   add            push to the back
//!   remove_by_id   drop every match, returns count
//!   find_by_id     first match, linear scan
//!   sort_by_id     stable, ascending byte order of id
//!
//! remove_book(catalog, registry, id)
//!   catalog.remove_by_id(id) --> registry.scrub_book(id)
//! ```

use serde::{Deserialize, Serialize};

use crate::model::Book;
use crate::registry::Registry;

/// Counts reported by [`remove_book`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookRemoval {
    /// Books dropped from the catalog.
    pub books: usize,
    /// Borrowed-list entries dropped across the registry.
    pub references: usize,
}

/// Removes every book with `id` and scrubs that id from all borrowers.
///
/// The scrub runs even when no book matched, so stale references to an id
/// that never existed in the catalog are cleaned too.
pub fn remove_book(catalog: &mut Catalog, registry: &mut Registry, id: &str) -> BookRemoval {
    let books = catalog.remove_by_id(id);
    let references = registry.scrub_book(id);
    tracing::debug!(%id, books, references, "removed book");
    BookRemoval { books, references }
}

/// Ordered collection of books.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Appends a book. Duplicate ids are accepted.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes every book whose id equals `id`.
    ///
    /// Returns the number of books removed.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.id != id);
        before - self.books.len()
    }

    /// First book with the given id, in current order.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Sorts by id. Books sharing an id keep their relative order.
    pub fn sort_by_id(&mut self) {
        self.books.sort_by(|a, b| a.id.cmp(&b.id));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
