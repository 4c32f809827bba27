// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the pattern classifier
//!
//! Classification must never panic, whatever bytes the runner produces.

#![no_main]

use libfuzzer_sys::fuzz_target;

use testrelay_translate::pattern::PatternSet;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = PatternSet::shared().classify(text);
    }
});
