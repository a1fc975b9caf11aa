// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Catalog records.
//!
//! ```text
//! Book      title, author, id ("A1234")
//! Borrower  name, borrowed_books ["A1234", "B2345"]
//!              |
//!              '--> weak reference to Book::id, by value
//! ```
//!
//! Neither ids nor names are unique; duplicates are legal and every
//! remove operation acts on all of them.

pub mod id;

use serde::{Deserialize, Serialize};

pub use id::is_valid_id;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub id: String,
}

impl Book {
    /// Creates a book record. The id is stored as given.
    pub fn new(title: impl Into<String>, author: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            id: id.into(),
        }
    }
}

/// A registry entry holding the ids of the books it has borrowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrower {
    pub name: String,
    #[serde(default)]
    pub borrowed_books: Vec<String>,
}

impl Borrower {
    /// Creates a borrower with no borrowed books.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            borrowed_books: Vec::new(),
        }
    }

    /// Creates a borrower with an initial list of book ids.
    pub fn with_books<I, S>(name: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            borrowed_books: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Drops every occurrence of `id` from the borrowed list.
    ///
    /// Returns how many entries were removed.
    pub fn forget_book(&mut self, id: &str) -> usize {
        let before = self.borrowed_books.len();
        self.borrowed_books.retain(|borrowed| borrowed != id);
        before - self.borrowed_books.len()
    }
}
