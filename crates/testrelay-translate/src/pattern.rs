// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Pattern matching for verbose test-runner output
//!
//! This module holds the four compiled patterns that recognize event lines in
//! gocheck-style verbose output, and the classification operation that maps a
//! chunk of text to at most one [`Event`].
//!
//! All patterns use swap-greed (`(?U)`) semantics so captures stay minimal,
//! and all require a line terminator: a fragment without its trailing newline
//! never matches.

use std::sync::LazyLock;

use regex::Regex;

use crate::event::{Event, EventKind};

/// Banner line announcing a test is about to run
const ANNOUNCE_PATTERN: &str = r"(?U)\*\*\*\*\*\* Running (.*)\n";
/// Passed test with a mandatory elapsed-time suffix (e.g. ` 0.12s`)
const SUCCESS_PATTERN: &str = r"(?U)PASS: /.*: (.*)\s*\d*\.\d*s\n";
/// Failed test, bare line terminator after the identifier
const FAILURE_PATTERN: &str = r"(?U)FAIL: /.*: (.*)\n";
/// Skipped test with a parenthesized reason
const SKIP_PATTERN: &str = r"(?U)SKIP: /.*: (.*)\s*\((.*)\)\n";

static SHARED: LazyLock<PatternSet> = LazyLock::new(PatternSet::new);

/// The compiled classification ruleset, one pattern per [`EventKind`]
///
/// Patterns are tried in fixed priority order (Announce, Success, Failure,
/// Skip); the first match wins. The set is immutable once built; use
/// [`PatternSet::shared`] for the process-wide instance.
#[derive(Debug)]
pub struct PatternSet {
    announce: Regex,
    success: Regex,
    failure: Regex,
    skip: Regex,
}

impl PatternSet {
    /// Compile the ruleset
    #[must_use]
    pub fn new() -> Self {
        // Patterns are literals; compilation cannot fail at runtime.
        Self {
            announce: Regex::new(ANNOUNCE_PATTERN).expect("announce pattern compiles"),
            success: Regex::new(SUCCESS_PATTERN).expect("success pattern compiles"),
            failure: Regex::new(FAILURE_PATTERN).expect("failure pattern compiles"),
            skip: Regex::new(SKIP_PATTERN).expect("skip pattern compiles"),
        }
    }

    /// The process-wide compiled ruleset, built once on first use
    #[must_use]
    pub fn shared() -> &'static PatternSet {
        &SHARED
    }

    /// Classify a chunk of runner output as at most one event
    ///
    /// Returns `None` when no pattern matches; unrecognized text (progress
    /// markers, informational lines) carries no protocol meaning.
    #[must_use]
    pub fn classify(&self, text: &str) -> Option<Event> {
        if let Some(caps) = self.announce.captures(text) {
            return Some(Event::new(EventKind::Announce, &caps[1]));
        }
        if let Some(caps) = self.success.captures(text) {
            return Some(Event::new(EventKind::Success, &caps[1]));
        }
        if let Some(caps) = self.failure.captures(text) {
            return Some(Event::new(EventKind::Failure, &caps[1]));
        }
        if let Some(caps) = self.skip.captures(text) {
            let mut event = Event::new(EventKind::Skip, &caps[1]);
            event.reason = Some(caps[2].to_string());
            return Some(event);
        }
        None
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new()
    }
}
