// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Borrower registry.
//!
//! ```text
//! Registry (VecDeque<Borrower>)
//!   add              push to the front
//!   remove_by_name   drop every match, returns count
//!   find_by_name     first match, front to back
//!   scrub_book       forget a book id in every borrower
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::model::Borrower;

/// Collection of borrowers. New entries are prepended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    borrowers: VecDeque<Borrower>,
}

impl Registry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            borrowers: VecDeque::new(),
        }
    }

    /// Prepends a borrower. Duplicate names are accepted.
    pub fn add(&mut self, borrower: Borrower) {
        self.borrowers.push_front(borrower);
    }

    /// Removes every borrower whose name equals `name`.
    ///
    /// Returns the number of borrowers removed.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.borrowers.len();
        self.borrowers.retain(|borrower| borrower.name != name);
        before - self.borrowers.len()
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Borrower> {
        self.borrowers.iter().find(|borrower| borrower.name == name)
    }

    /// Removes `id` from every borrower's borrowed list.
    ///
    /// Returns the total number of references dropped.
    pub fn scrub_book(&mut self, id: &str) -> usize {
        self.borrowers
            .iter_mut()
            .map(|borrower| borrower.forget_book(id))
            .sum()
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Borrower> {
        self.borrowers.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.borrowers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.borrowers.is_empty()
    }
}

/// Collects in iteration order; the first item stays first.
impl FromIterator<Borrower> for Registry {
    fn from_iter<I: IntoIterator<Item = Borrower>>(iter: I) -> Self {
        Self {
            borrowers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Borrower;
    type IntoIter = std::collections::vec_deque::Iter<'a, Borrower>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
