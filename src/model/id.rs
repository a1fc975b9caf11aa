// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Book identifier validation.

use regex::Regex;
use std::sync::OnceLock;

/// One ASCII letter followed by exactly four ASCII digits.
pub const ID_PATTERN: &str = "^[A-Za-z][0-9]{4}$";

fn id_regex() -> Option<&'static Regex> {
    static REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(ID_PATTERN).ok()).as_ref()
}

/// Returns `true` iff `id` is one ASCII letter followed by four ASCII digits.
///
/// Surrounding whitespace is not trimmed and makes the id invalid.
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    id_regex().is_some_and(|regex| regex.is_match(id))
}
