// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! menu      Session loop, choice 1-10 --> book::* / borrower::*
//! book      add, remove (cascade), search, display, sort
//! borrower  add, remove, search, display
//! config    options / configs listings
//! ```
//!
//! Every handler prompts through a [`Console`](crate::console::Console) and
//! works on the collections it is handed; handlers never call each other.

pub mod book;
pub mod borrower;
pub mod config;
pub mod menu;
