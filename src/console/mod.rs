// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line-oriented terminal adapter.
//!
//! ```text
//! Console<R: BufRead, W: Write>
//!   prompt(text)  write text (no newline), flush, read one line
//!   line(text)    write text + '\n'
//!
//! Console::stdio()   locked stdin / stdout
//! Console::new(r, w) any reader/writer (tests: &[u8] / Vec<u8>)
//! ```
//!
//! Lines are returned without the trailing `\n` or `\r\n`; all other
//! whitespace is kept as typed. Bytes that are not valid UTF-8 are replaced
//! with U+FFFD instead of failing the read, so a stray byte on stdin is just
//! an unmatched answer.

use std::io::{self, BufRead, Write};

use tracing::{debug, trace};

use crate::error::{ConsoleError, ConsoleResult};

/// Reads answers from `R` and writes prompts and results to `W`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// Console bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` without a newline, flushes, then reads one line.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InputClosed` at end of input, or a read/write
    /// error from the underlying streams.
    pub fn prompt(&mut self, text: &str) -> ConsoleResult<String> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(ConsoleError::Write)?;
        self.read_line(text)
    }

    /// Writes `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Write` if the output cannot be written.
    pub fn line(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{text}").map_err(ConsoleError::Write)
    }

    /// Flushes buffered output.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Write` if flushing fails.
    pub fn flush(&mut self) -> ConsoleResult<()> {
        self.output.flush().map_err(ConsoleError::Write)
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        let mut buf = Vec::new();
        // read_until already retries on ErrorKind::Interrupted
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(ConsoleError::Read)?;
        if read == 0 {
            return Err(ConsoleError::InputClosed {
                prompt: prompt.trim_end().to_string(),
            });
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                let line = String::from_utf8_lossy(e.as_bytes()).into_owned();
                debug!(line = %line, "input was not valid UTF-8, replaced invalid bytes");
                line
            }
        };
        trace!(line = %line, "read input");
        Ok(line)
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
