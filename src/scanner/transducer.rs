//! Scan session: one pass over one input
//!
//! The [`Transducer`] owns everything a scan mutates (cursor, counters, the
//! marker list), so independent scans never share state.

use super::cursor::EchoCursor;
use super::state::{State, Step};
use crate::error::ScanError;
use crate::marker::{Marker, MarkerSyntax};
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Per-file scan session: echoes input to output and records markers.
pub struct Transducer<'a, R, W> {
    label: String,
    cursor: EchoCursor<R, W>,
    syntax: &'a MarkerSyntax,
    state: State,
    markers: Vec<Marker>,
}

impl<'a, R: BufRead, W: Write> Transducer<'a, R, W> {
    pub fn new(label: impl Into<String>, reader: R, writer: W, syntax: &'a MarkerSyntax) -> Self {
        Self {
            label: label.into(),
            cursor: EchoCursor::new(reader, writer),
            syntax,
            state: State::Normal,
            markers: Vec::new(),
        }
    }

    /// Consume the whole input, then append the registration statement.
    ///
    /// Returns the inserted markers in discovery order. On error the scan stops
    /// immediately and no registration statement is written.
    pub fn run(mut self) -> Result<Vec<Marker>, ScanError> {
        while self.advance()? {}

        if let Some(statement) = self.syntax.registration_statement(&self.markers) {
            self.cursor.insert(&statement)?;
        }
        self.cursor.flush()?;

        debug!(
            label = %self.label,
            lines = self.cursor.position().line,
            markers = self.markers.len(),
            "scan complete"
        );
        Ok(self.markers)
    }

    /// Run one transition. Returns `false` at end of input.
    fn advance(&mut self) -> Result<bool, ScanError> {
        let next = match self.state {
            State::Normal => match self.cursor.next_token()? {
                Some(token) => {
                    if let Some(keyword) = token.keyword() {
                        trace!(%keyword, line = self.cursor.position().line, "block entry");
                    }
                    State::after_token(&token)
                }
                None => return Ok(false),
            },
            state => match self.cursor.advance()? {
                Some(ch) => match state.step(ch) {
                    Step::Continue(next) => next,
                    Step::Mark => {
                        self.insert_marker()?;
                        State::Normal
                    }
                },
                None => return Ok(false),
            },
        };

        self.state = next;
        Ok(true)
    }

    fn insert_marker(&mut self) -> Result<(), ScanError> {
        let line = self.cursor.position().line;
        let index = self.cursor.claim_marker_index();
        let marker = Marker::new(self.label.as_str(), line, index);

        trace!(%marker, "inserting marker");
        self.cursor.insert(&self.syntax.increment_statement(&marker))?;
        self.markers.push(marker);
        Ok(())
    }
}
