// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The translator write-sink
//!
//! [`EventTranslator`] accepts arbitrary chunks of test-runner output,
//! classifies each chunk against the fixed pattern set, and for each
//! recognized event invokes the encoder and forwards the encoded bytes to the
//! downstream sink. Unrecognized chunks are dropped: verbose runner output is
//! full of progress markers and informational lines that carry no protocol
//! meaning and must not pollute the structured stream.
//!
//! Each call is independent; nothing is buffered across calls, so an event
//! line split over two chunks is not recognized. Put a
//! [`LineAssembler`](crate::linebuf::LineAssembler) upstream when chunk
//! boundaries are not line boundaries.

use std::io::Write;

use tracing::{debug, trace};

use crate::encoder::EventEncoder;
use crate::error::TranslateError;
use crate::event::{Event, EventKind};
use crate::pattern::PatternSet;

/// Result of translating one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOutcome {
    /// Bytes forwarded to the downstream sink (zero for dropped chunks)
    pub bytes_forwarded: usize,
    /// The recognized event kind, if any
    pub event: Option<EventKind>,
}

impl TranslateOutcome {
    /// Outcome for a chunk that matched no pattern
    #[must_use]
    pub fn dropped() -> Self {
        Self {
            bytes_forwarded: 0,
            event: None,
        }
    }
}

/// Translates verbose runner output into an encoded protocol stream
///
/// Holds the compiled pattern set, the encoder, and the downstream sink; all
/// three are fixed at construction. The translator itself keeps no other
/// state.
#[derive(Debug)]
pub struct EventTranslator<E, W> {
    patterns: &'static PatternSet,
    encoder: E,
    sink: W,
}

impl<E: EventEncoder, W: Write> EventTranslator<E, W> {
    /// Create a translator forwarding encoded events to `sink`
    pub fn new(encoder: E, sink: W) -> Self {
        Self {
            patterns: PatternSet::shared(),
            encoder,
            sink,
        }
    }

    /// Translate one chunk of runner output
    ///
    /// Classifies the chunk, and on a match invokes the encoder and forwards
    /// its full output to the sink. A chunk matching no pattern is silently
    /// dropped (zero bytes forwarded, no error). Non-UTF-8 chunks cannot
    /// match a textual pattern and are dropped the same way.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] if the encoder invocation fails or the sink
    /// rejects the write; nothing is forwarded in either case and the call is
    /// not retried.
    pub fn translate(&mut self, chunk: &[u8]) -> Result<TranslateOutcome, TranslateError> {
        let Ok(text) = std::str::from_utf8(chunk) else {
            trace!(len = chunk.len(), "dropping non-UTF-8 chunk");
            return Ok(TranslateOutcome::dropped());
        };

        let Some(event) = self.patterns.classify(text) else {
            trace!(len = chunk.len(), "dropping unrecognized chunk");
            return Ok(TranslateOutcome::dropped());
        };

        self.forward(&event)
    }

    fn forward(&mut self, event: &Event) -> Result<TranslateOutcome, TranslateError> {
        debug!(kind = %event.kind, test_name = %event.test_name, "recognized event");

        let payload = self.encoder.encode(event.kind, &event.test_name)?;
        self.sink.write_all(&payload).map_err(TranslateError::Sink)?;

        Ok(TranslateOutcome {
            bytes_forwarded: payload.len(),
            event: Some(event.kind),
        })
    }

    /// The downstream sink, for inspection in tests
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consume the translator, returning the sink
    pub fn into_sink(self) -> W {
        self.sink
    }
}

/// The write-sink contract: `write` reports the count of bytes forwarded
/// downstream for this chunk, not the count consumed from `buf`.
///
/// A dropped chunk reports `Ok(0)`. Because of this, the translator must be
/// driven one chunk per `write` call; `write_all`-style loops would spin on
/// dropped chunks. [`EventTranslator::translate`] is the primary API.
impl<E: EventEncoder, W: Write> Write for EventTranslator<E, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let outcome = self.translate(buf).map_err(std::io::Error::other)?;
        Ok(outcome.bytes_forwarded)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.sink.flush()
    }
}
