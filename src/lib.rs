//! # Introduction
//!
//! covermark instruments C-family script sources for block coverage. It copies
//! each source through unchanged, except for a marker-increment call inserted
//! at the entry of every `function`, `if`, `for` and `while` block, and a single
//! registration call appended at the end listing every marker in the file.
//!
//! ## Pipeline
//!
//! ```text
//! Directory → Discovery → Scanner (per file) → Instrumented sources
//! ```
//!
//! 1. [`discovery`] — lists sources and tests, init file first.
//! 2. [`scanner`] — the streaming state machine. It tells strings, regex
//!    literals and comments apart from real code so that only real trigger
//!    keywords get markers.
//! 3. [`marker`] — marker identities and the statements that carry them.
//! 4. [`project`] — runs the scanner over a whole directory.
//!
//! ## Example
//!
//! ```
//! let out = covermark::instrument_str("app.js", "if (ok) { go(); }").unwrap();
//! assert!(out.text.starts_with(r#"if (ok) {Lapiz.Test.incMk("app.js) 0 : 0");"#));
//! assert_eq!(out.markers.len(), 1);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod marker;
pub mod project;
pub mod scanner;

pub use config::Config;
pub use error::{DiscoveryError, InstrumentError, ScanError};
pub use marker::{Marker, MarkerSyntax};
pub use scanner::{instrument_str, scan, scan_with, Instrumented};
