// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sample data loaded before the first menu prompt.
//!
//! ```text
//! SeedConfig.enabled = false      --> empty catalog + registry
//! SeedConfig.books / .borrowers   --> replace the built-in lists
//! otherwise                       --> SAMPLE_BOOKS / SAMPLE_BORROWERS
//! ```

use crate::catalog::Catalog;
use crate::config::types::SeedConfig;
use crate::model::{Book, Borrower};
use crate::registry::Registry;

/// Built-in books as (title, author, id).
pub const SAMPLE_BOOKS: [(&str, &str, &str); 10] = [
    ("紅樓夢", "曹雪芹", "A1234"),
    ("西遊記", "吳承恩", "B2345"),
    ("水滸傳", "施耐庵", "B3456"),
    ("三國演義", "羅貫中", "C4567"),
    ("金瓶梅", "蘭陵笑笑生", "C5678"),
    ("聊齋志異", "蒲松齡", "D6789"),
    ("儒林外史", "吳敬梓", "D7890"),
    ("封神演義", "許仲琳", "E8901"),
    ("鏡花緣", "李汝珍", "E9012"),
    ("老殘遊記", "劉鶚", "F0123"),
];

/// Built-in borrowers with the ids they hold.
pub const SAMPLE_BORROWERS: [(&str, &[&str]); 5] = [
    ("小明", &["A1234", "B2345"]),
    ("小華", &["C4567"]),
    ("小美", &["D6789", "E8901"]),
    ("小強", &["F0123"]),
    ("小麗", &["B3456", "C5678"]),
];

#[must_use]
pub fn sample_catalog() -> Catalog {
    SAMPLE_BOOKS
        .iter()
        .map(|&(title, author, id)| Book::new(title, author, id))
        .collect()
}

/// Listed order is kept: the first sample borrower is displayed first.
#[must_use]
pub fn sample_registry() -> Registry {
    SAMPLE_BORROWERS
        .iter()
        .map(|&(name, ids)| Borrower::with_books(name, ids.iter().copied()))
        .collect()
}

/// Builds the startup catalog and registry from the seed settings.
#[must_use]
pub fn initial_state(seed: &SeedConfig) -> (Catalog, Registry) {
    if !seed.enabled {
        tracing::debug!("seeding disabled, starting empty");
        return (Catalog::new(), Registry::new());
    }

    let catalog = seed
        .books
        .as_ref()
        .map_or_else(sample_catalog, |books| books.iter().cloned().collect());
    let registry = seed
        .borrowers
        .as_ref()
        .map_or_else(sample_registry, |borrowers| {
            borrowers.iter().cloned().collect()
        });

    tracing::debug!(
        books = catalog.len(),
        borrowers = registry.len(),
        "seeded library"
    );
    (catalog, registry)
}
