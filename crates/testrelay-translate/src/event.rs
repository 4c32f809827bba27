// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Event types recognized in verbose test-runner output

use serde::{Deserialize, Serialize};

/// The kinds of test-lifecycle events the translator recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A test is about to run (banner line)
    Announce,
    /// A test passed, with an elapsed-time suffix
    Success,
    /// A test failed
    Failure,
    /// A test was skipped, with a parenthesized reason
    Skip,
}

impl EventKind {
    /// The `subunit-output` flag selecting this event kind
    #[must_use]
    pub fn encoder_flag(self) -> &'static str {
        match self {
            EventKind::Announce => "--exists",
            EventKind::Success => "--success",
            EventKind::Failure => "--fail",
            EventKind::Skip => "--skip",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::Announce => "announce",
            EventKind::Success => "success",
            EventKind::Failure => "failure",
            EventKind::Skip => "skip",
        };
        f.write_str(name)
    }
}

/// A single recognized event, extracted from one chunk of runner output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Which lifecycle event was recognized
    pub kind: EventKind,
    /// The captured test identifier
    pub test_name: String,
    /// Skip reason, captured by the pattern but not forwarded to the encoder
    pub reason: Option<String>,
}

impl Event {
    /// Create an event with no skip reason
    #[must_use]
    pub fn new(kind: EventKind, test_name: impl Into<String>) -> Self {
        Self {
            kind,
            test_name: test_name.into(),
            reason: None,
        }
    }
}
