// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the line assembler
//!
//! Feeds arbitrary chunk boundaries through reassembly and translation with
//! an in-process encoder; neither step may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use testrelay_translate::encoder::EncoderError;
use testrelay_translate::event::EventKind;
use testrelay_translate::linebuf::LineAssembler;
use testrelay_translate::translator::EventTranslator;

fuzz_target!(|data: &[u8]| {
    let encoder = |_: EventKind, name: &str| -> Result<Vec<u8>, EncoderError> {
        Ok(name.as_bytes().to_vec())
    };
    let mut assembler = LineAssembler::new(EventTranslator::new(encoder, Vec::new()));

    for chunk in data.chunks(13) {
        let _ = assembler.feed(chunk);
    }
    let _ = assembler.finish();
});
