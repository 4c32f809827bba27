// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testrelay-translate: Verbose test-runner log to subunit stream translation
//!
//! This library crate turns the verbose, human-oriented output of a
//! gocheck-style test runner into a subunit v2 protocol stream. Recognized
//! event lines (announce, pass, fail, skip) are handed to an external encoder
//! (`subunit-output` by default) and the encoder's bytes are forwarded
//! verbatim to a downstream sink. Everything else is dropped.
//!
//! # Example
//!
//! ```no_run
//! use testrelay_translate::encoder::CommandEncoder;
//! use testrelay_translate::translator::EventTranslator;
//!
//! let mut translator =
//!     EventTranslator::new(CommandEncoder::default(), std::io::stdout());
//! let outcome = translator
//!     .translate(b"PASS: /suite/lifecycle: pkg.TestBoot 0.12s\n")
//!     .unwrap();
//! assert!(outcome.event.is_some());
//! ```

#![warn(missing_docs)]

pub mod encoder;
pub mod error;
pub mod event;
pub mod linebuf;
pub mod pattern;
pub mod summary;
pub mod translator;

pub use encoder::{CommandEncoder, EventEncoder};
pub use error::TranslateError;
pub use event::{Event, EventKind};
pub use linebuf::LineAssembler;
pub use pattern::PatternSet;
pub use summary::RunSummary;
pub use translator::{EventTranslator, TranslateOutcome};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::encoder::{CommandEncoder, EventEncoder};
    pub use crate::error::TranslateError;
    pub use crate::event::{Event, EventKind};
    pub use crate::translator::{EventTranslator, TranslateOutcome};
}
