// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            menu / book / borrower
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML, messages, seeding  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!             catalog     registry   console
//!            Vec<Book>  VecDeque<..> BufRead/Write
//!                 |           |
//!                 +-----+-----+
//!                       v
//!                 model, seed
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod catalog;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod model;
pub mod registry;
pub mod seed;
