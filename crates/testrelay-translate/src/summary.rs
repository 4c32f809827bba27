// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Aggregated stream statistics
//!
//! The translator itself is stateless; callers that want end-of-stream
//! statistics accumulate them from the per-chunk outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::EventKind;
use crate::translator::TranslateOutcome;

/// Counters accumulated over one translated stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Announce events forwarded
    pub announced: usize,
    /// Success events forwarded
    pub passed: usize,
    /// Failure events forwarded
    pub failed: usize,
    /// Skip events forwarded
    pub skipped: usize,
    /// Chunks that matched no pattern
    pub dropped: usize,
    /// Total protocol bytes forwarded downstream
    pub bytes_forwarded: usize,
    /// When this summary was generated
    pub generated_at: DateTime<Utc>,
}

impl RunSummary {
    /// Create an empty summary
    #[must_use]
    pub fn empty() -> Self {
        Self {
            announced: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
            dropped: 0,
            bytes_forwarded: 0,
            generated_at: Utc::now(),
        }
    }

    /// Fold one outcome into the counters
    pub fn record(&mut self, outcome: &TranslateOutcome) {
        self.bytes_forwarded += outcome.bytes_forwarded;
        match outcome.event {
            Some(EventKind::Announce) => self.announced += 1,
            Some(EventKind::Success) => self.passed += 1,
            Some(EventKind::Failure) => self.failed += 1,
            Some(EventKind::Skip) => self.skipped += 1,
            None => self.dropped += 1,
        }
    }

    /// Check if no failures were forwarded
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Total events forwarded, of any kind
    #[must_use]
    pub fn events(&self) -> usize {
        self.announced + self.passed + self.failed + self.skipped
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn outcome(event: Option<EventKind>, bytes: usize) -> TranslateOutcome {
        TranslateOutcome {
            bytes_forwarded: bytes,
            event,
        }
    }

    #[test]
    fn test_counters_follow_outcomes() {
        let mut summary = RunSummary::empty();
        summary.record(&outcome(Some(EventKind::Announce), 10));
        summary.record(&outcome(Some(EventKind::Success), 12));
        summary.record(&outcome(Some(EventKind::Skip), 8));
        summary.record(&outcome(None, 0));
        summary.record(&outcome(None, 0));

        assert_eq!(summary.announced, 1);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.dropped, 2);
        assert_eq!(summary.bytes_forwarded, 30);
        assert_eq!(summary.events(), 3);
        assert!(summary.all_passed());
    }

    #[test]
    fn test_all_passed_false_after_failure() {
        let mut summary = RunSummary::empty();
        summary.record(&outcome(Some(EventKind::Failure), 9));
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_serializes_to_json() {
        let summary = RunSummary::empty();
        let json = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(json["passed"], 0);
        assert!(json["generated_at"].is_string());
    }
}
