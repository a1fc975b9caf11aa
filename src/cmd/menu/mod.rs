// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive menu loop.
//!
//! ```text
//!          +-----------------------------+
//!          v                             |
//!   print title + items 1..10            |
//!   prompt choice                        |
//!     |                                  |
//!     +-- 1..9      --> handler ---------+
//!     +-- other int --> invalid message -+
//!     +-- not a int --> invalid message -+
//!     +-- 10        --> exit message --> SessionEnd::Exit
//!     '-- EOF (any prompt)           --> SessionEnd::InputClosed
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use super::{book, borrower};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::config::messages::Messages;
use crate::console::Console;
use crate::error::{ConsoleResult, LibcatResult};
use crate::registry::Registry;
use crate::seed;

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    RemoveBook,
    SearchBook,
    DisplayBooks,
    SortBooks,
    AddBorrower,
    RemoveBorrower,
    SearchBorrower,
    DisplayBorrowers,
    Exit,
}

impl MenuChoice {
    /// Choices in menu order; index + 1 is the number typed.
    pub const ALL: [Self; 10] = [
        Self::AddBook,
        Self::RemoveBook,
        Self::SearchBook,
        Self::DisplayBooks,
        Self::SortBooks,
        Self::AddBorrower,
        Self::RemoveBorrower,
        Self::SearchBorrower,
        Self::DisplayBorrowers,
        Self::Exit,
    ];

    /// Maps a menu number (1-10) to its choice.
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Parses a line typed at the choice prompt.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer
    /// in 1-10 yields `None`.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        line.trim().parse::<i64>().ok().and_then(Self::from_number)
    }
}

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked the exit choice.
    Exit,
    /// Input reached end of file.
    InputClosed,
}

/// Menu state: the two collections plus the terminal they are driven from.
pub struct Session<'m, R, W> {
    console: Console<R, W>,
    messages: &'m Messages,
    catalog: Catalog,
    registry: Registry,
}

impl<'m, R: BufRead, W: Write> Session<'m, R, W> {
    pub const fn new(
        console: Console<R, W>,
        messages: &'m Messages,
        catalog: Catalog,
        registry: Registry,
    ) -> Self {
        Self {
            console,
            messages,
            catalog,
            registry,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consumes the session, returning the console and final collections.
    pub fn into_parts(self) -> (Console<R, W>, Catalog, Registry) {
        (self.console, self.catalog, self.registry)
    }

    /// Runs the menu until the exit choice or end of input.
    ///
    /// # Errors
    ///
    /// Returns a console error if reading or writing the terminal fails.
    /// End of input is not an error.
    pub fn run(&mut self) -> ConsoleResult<SessionEnd> {
        let end = loop {
            match self.step() {
                Ok(Some(end)) => break end,
                Ok(None) => {}
                Err(e) if e.is_input_closed() => {
                    warn!(error = %e, "input closed, leaving menu");
                    break SessionEnd::InputClosed;
                }
                Err(e) => return Err(e),
            }
        };
        self.console.flush()?;
        Ok(end)
    }

    /// Shows the menu, reads one choice and dispatches it.
    ///
    /// Returns `Some` once the session is over.
    ///
    /// # Errors
    ///
    /// Returns a console error if input closes or the terminal fails.
    pub fn step(&mut self) -> ConsoleResult<Option<SessionEnd>> {
        let messages = self.messages;
        self.console.line(&messages.menu_title)?;
        for line in messages.menu_lines() {
            self.console.line(&line)?;
        }

        let answer = self.console.prompt(&messages.choice_prompt)?;
        let Some(choice) = MenuChoice::parse(&answer) else {
            debug!(input = %answer, "invalid menu choice");
            self.console.line(&messages.invalid_choice_message)?;
            return Ok(None);
        };
        debug!(?choice, "menu choice");

        let console = &mut self.console;
        match choice {
            MenuChoice::AddBook => book::add_book(console, messages, &mut self.catalog)?,
            MenuChoice::RemoveBook => {
                book::remove_book(console, messages, &mut self.catalog, &mut self.registry)?;
            }
            MenuChoice::SearchBook => book::search_book(console, messages, &self.catalog)?,
            MenuChoice::DisplayBooks => book::display_books(console, messages, &self.catalog)?,
            MenuChoice::SortBooks => book::sort_books(console, messages, &mut self.catalog)?,
            MenuChoice::AddBorrower => {
                borrower::add_borrower(console, messages, &mut self.registry)?;
            }
            MenuChoice::RemoveBorrower => {
                borrower::remove_borrower(console, messages, &mut self.registry)?;
            }
            MenuChoice::SearchBorrower => {
                borrower::search_borrower(console, messages, &self.registry)?;
            }
            MenuChoice::DisplayBorrowers => {
                borrower::display_borrowers(console, messages, &self.registry)?;
            }
            MenuChoice::Exit => {
                console.line(&messages.exit_message)?;
                return Ok(Some(SessionEnd::Exit));
            }
        }
        Ok(None)
    }
}

/// Main handler for the interactive menu on stdin/stdout.
///
/// # Errors
///
/// Returns `LibcatError::Console` if the terminal cannot be read or written.
pub fn run_menu_command(config: &Config) -> LibcatResult<()> {
    let (catalog, registry) = seed::initial_state(&config.seed);
    let mut session = Session::new(Console::stdio(), &config.messages, catalog, registry);

    let end = session.run()?;
    info!(?end, "session finished");
    Ok(())
}

#[cfg(test)]
mod tests;
