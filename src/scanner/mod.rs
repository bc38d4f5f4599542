//! Coverage-marker scanner
//!
//! Streams C-family script source from input to output unchanged, except that
//! a marker-increment call is inserted right after the opening brace of every
//! block introduced by `function`, `if`, `for` or `while`, and a registration
//! call listing all markers is appended at the end.
//!
//! - [`cursor`]: read-and-echo primitive with one character of lookahead
//! - [`token`]: letter runs vs single symbols, trigger keywords
//! - [`state`]: explicit state machine (strings, regexes, comments, block entry)
//! - [`transducer`]: the per-file scan session
//!
//! # Known limitation
//!
//! A regex literal is read until the next unescaped `/`, so a slash inside a
//! character class (`/[/]/`) ends the literal early. Write `/[\/]/` instead.

pub mod cursor;
pub mod state;
pub mod token;
pub mod transducer;

use crate::error::ScanError;
use crate::marker::{Marker, MarkerSyntax};
use std::io::{BufReader, Read, Write};
use transducer::Transducer;

/// Instrument `input` into `output` with the default marker calls.
///
/// `label` only names the markers. Returns the inserted markers in the order
/// they were found.
pub fn scan<R: Read, W: Write>(label: &str, input: R, output: W) -> Result<Vec<Marker>, ScanError> {
    scan_with(label, input, output, &MarkerSyntax::default())
}

/// Same as [`scan`], with custom call names.
pub fn scan_with<R: Read, W: Write>(
    label: &str,
    input: R,
    output: W,
    syntax: &MarkerSyntax,
) -> Result<Vec<Marker>, ScanError> {
    Transducer::new(label, BufReader::new(input), output, syntax).run()
}

/// Result of instrumenting an in-memory source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrumented {
    pub text: String,
    pub markers: Vec<Marker>,
}

/// Instrument a source held in memory.
pub fn instrument_str(label: &str, source: &str) -> Result<Instrumented, ScanError> {
    let mut text = Vec::with_capacity(source.len());
    let markers = scan(label, source.as_bytes(), &mut text)?;
    // Input was valid UTF-8 and everything inserted is a `str`.
    let text = String::from_utf8(text).map_err(|e| {
        ScanError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;
    Ok(Instrumented { text, markers })
}
