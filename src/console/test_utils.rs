// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities for console tests.
//!
//! Provides a scripted reader for driving a `Console` through failing reads.

use std::collections::VecDeque;
use std::io::{self, BufReader, Read};

/// One step of a scripted input stream.
pub(crate) enum Step {
    Bytes(&'static [u8]),
    Fail(io::ErrorKind),
}

/// A reader that replays `Step`s in order, then reports end of input.
pub(crate) struct ScriptedInput {
    steps: VecDeque<Step>,
}

impl ScriptedInput {
    pub(crate) fn reader(steps: impl IntoIterator<Item = Step>) -> BufReader<Self> {
        BufReader::new(Self {
            steps: steps.into_iter().collect(),
        })
    }
}

impl Read for ScriptedInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.steps.pop_front() {
            None => Ok(0),
            Some(Step::Fail(kind)) => Err(io::Error::from(kind)),
            Some(Step::Bytes(bytes)) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                if n < bytes.len() {
                    self.steps.push_front(Step::Bytes(&bytes[n..]));
                }
                Ok(n)
            }
        }
    }
}
