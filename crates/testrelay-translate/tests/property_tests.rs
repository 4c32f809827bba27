// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for testrelay-translate
//!
//! These tests use proptest to verify invariants hold for arbitrary inputs,
//! ensuring the classifier and translator are robust against malformed and
//! hostile runner output.

use proptest::prelude::*;

use testrelay_translate::encoder::EncoderError;
use testrelay_translate::event::EventKind;
use testrelay_translate::pattern::PatternSet;
use testrelay_translate::translator::{EventTranslator, TranslateOutcome};

/// Lines that carry none of the four marker tokens
fn markerless_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,_/-]{0,120}"
        .prop_filter("must not contain an event marker", |s| {
            !s.contains("****** Running") && !s.contains("PASS") && !s.contains("FAIL")
                && !s.contains("SKIP")
        })
        .prop_map(|s| format!("{s}\n"))
}

/// Test identifiers in the shape the runner emits
fn test_identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,30}\\.[A-Z][a-zA-Z0-9_]{0,30}"
}

proptest! {
    #[test]
    fn markerless_lines_are_always_dropped(line in markerless_line()) {
        let encoder = |_: EventKind, _: &str| -> Result<Vec<u8>, EncoderError> {
            panic!("encoder must not be invoked for unrecognized input")
        };
        let mut translator = EventTranslator::new(encoder, Vec::new());

        let outcome = translator.translate(line.as_bytes()).expect("no error on drop");
        prop_assert_eq!(outcome, TranslateOutcome::dropped());
        prop_assert!(translator.sink().is_empty());
    }

    #[test]
    fn announce_captures_name_exactly(name in test_identifier()) {
        let chunk = format!("****** Running {name}\n");
        let event = PatternSet::shared().classify(&chunk).expect("announce matches");
        prop_assert_eq!(event.kind, EventKind::Announce);
        prop_assert_eq!(event.test_name, name);
    }

    #[test]
    fn success_requires_duration_failure_forbids_nothing(name in test_identifier()) {
        let patterns = PatternSet::shared();

        let with_duration = format!("PASS: /a/b: {name} 0.12s\n");
        let event = patterns.classify(&with_duration).expect("success matches");
        prop_assert_eq!(event.kind, EventKind::Success);

        let without_duration = format!("PASS: /a/b: {name}\n");
        prop_assert!(patterns.classify(&without_duration).is_none());
    }

    #[test]
    fn classifier_never_panics(chunk in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoder = |_: EventKind, _: &str| -> Result<Vec<u8>, EncoderError> {
            Ok(Vec::new())
        };
        let mut translator = EventTranslator::new(encoder, Vec::new());
        let _ = translator.translate(&chunk);
    }
}
