// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line reassembly upstream of the translator
//!
//! The translator classifies each chunk independently, so an event line split
//! across two reads is never recognized. [`LineAssembler`] is the adapter for
//! producers whose chunk boundaries are not line boundaries: it buffers
//! partial lines and hands the translator one complete `\n`-terminated line
//! at a time.

use std::io::Write;

use crate::encoder::EventEncoder;
use crate::error::TranslateError;
use crate::translator::{EventTranslator, TranslateOutcome};

/// Reassembles arbitrary chunks into complete lines for a translator
#[derive(Debug)]
pub struct LineAssembler<E, W> {
    translator: EventTranslator<E, W>,
    pending: Vec<u8>,
}

impl<E: EventEncoder, W: Write> LineAssembler<E, W> {
    /// Wrap a translator
    pub fn new(translator: EventTranslator<E, W>) -> Self {
        Self {
            translator,
            pending: Vec::new(),
        }
    }

    /// Append a chunk without translating anything yet
    pub fn push(&mut self, chunk: &[u8]) {
        self.pending.extend_from_slice(chunk);
    }

    /// Translate the next complete buffered line, if one exists
    ///
    /// Returns `Ok(None)` when no complete line is buffered. The line is
    /// consumed from the buffer before translation, so an erroring line is
    /// not retried on the next call.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] if translating the line fails.
    pub fn next_outcome(&mut self) -> Result<Option<TranslateOutcome>, TranslateError> {
        let Some(pos) = self.pending.iter().position(|&b| b == b'\n') else {
            return Ok(None);
        };
        let line: Vec<u8> = self.pending.drain(..=pos).collect();
        self.translator.translate(&line).map(Some)
    }

    /// Feed a chunk, translating every line it completes
    ///
    /// Returns one outcome per completed line, in order. A trailing partial
    /// line is held until its terminator arrives in a later call.
    ///
    /// # Errors
    ///
    /// Returns the first [`TranslateError`] hit; lines completed earlier in
    /// the same call have already been forwarded.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<TranslateOutcome>, TranslateError> {
        self.push(chunk);

        let mut outcomes = Vec::new();
        while let Some(outcome) = self.next_outcome()? {
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// Bytes of the held partial line
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Consume the assembler, returning the translator
    ///
    /// Any unterminated tail is discarded: every pattern requires a line
    /// terminator, so it could never have matched.
    pub fn finish(self) -> EventTranslator<E, W> {
        self.translator
    }
}

/// Conventional `Write` semantics: the whole chunk is consumed, so this
/// adapter can terminate an `io::copy`-style pump.
impl<E: EventEncoder, W: Write> Write for LineAssembler<E, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.feed(buf).map_err(std::io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.translator.flush()
    }
}
