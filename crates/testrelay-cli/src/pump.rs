// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The stdin-to-stdout translation loop
//!
//! Reads raw chunks from the runner's output stream, reassembles them into
//! lines, and drives the translator. Chunk boundaries from a pipe rarely
//! align with line boundaries, so the assembler sits between the reader and
//! the translator.

use std::io::{Read, Write};

use anyhow::Context;
use tracing::{info, warn};

use testrelay_translate::encoder::CommandEncoder;
use testrelay_translate::linebuf::LineAssembler;
use testrelay_translate::summary::RunSummary;
use testrelay_translate::translator::EventTranslator;

use crate::config::Config;

/// What one pump run did
#[derive(Debug)]
pub struct PumpReport {
    /// Stream statistics accumulated from per-line outcomes
    pub summary: RunSummary,
    /// Encoder invocations that failed (nonzero only with --keep-going)
    pub encoder_failures: usize,
}

/// Translate `input` to `output` until end of stream
///
/// On an encoder failure the loop aborts with an error unless
/// `config.keep_going` is set, in which case the failure is logged and the
/// event is lost. An unterminated final line is discarded; it can never
/// match a pattern.
///
/// # Errors
///
/// Returns an error if reading fails, the downstream write fails, or (in
/// strict mode) an encoder invocation fails.
pub fn pump(
    config: &Config,
    mut input: impl Read,
    output: impl Write,
) -> anyhow::Result<PumpReport> {
    let encoder = CommandEncoder::new(config.encoder_program());
    let mut assembler = LineAssembler::new(EventTranslator::new(encoder, output));

    let mut summary = RunSummary::empty();
    let mut encoder_failures = 0usize;
    let mut buf = [0u8; 8192];

    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err).context("reading runner output"),
        };

        assembler.push(&buf[..n]);
        drain(config, &mut assembler, &mut summary, &mut encoder_failures)?;
    }

    if !assembler.pending().is_empty() {
        info!(
            len = assembler.pending().len(),
            "discarding unterminated final line"
        );
    }
    let mut translator = assembler.finish();
    translator
        .flush()
        .context("flushing the downstream stream")?;

    Ok(PumpReport {
        summary,
        encoder_failures,
    })
}

fn drain(
    config: &Config,
    assembler: &mut LineAssembler<CommandEncoder, impl Write>,
    summary: &mut RunSummary,
    encoder_failures: &mut usize,
) -> anyhow::Result<()> {
    loop {
        match assembler.next_outcome() {
            Ok(Some(outcome)) => summary.record(&outcome),
            Ok(None) => return Ok(()),
            Err(err) if config.keep_going => {
                warn!(error = %err, "encoder invocation failed; continuing");
                *encoder_failures += 1;
            }
            Err(err) => return Err(err).context("translating runner output"),
        }
    }
}
