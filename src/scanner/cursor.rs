//! Read-and-echo cursor
//!
//! Every character is written to the output at the moment it is fetched from
//! the input, before anyone looks at it. Callers therefore never decide what to
//! echo; they only decide what to insert. One character of lookahead is kept,
//! and the line / marker-on-line counters advance on fetch.

use super::token::{is_letter, Token};
use std::io::{self, BufRead, Read, Write};

/// Line and marker-on-line counters of a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Newlines fetched so far
    pub line: usize,
    /// Markers inserted since the last newline
    pub marker: usize,
}

/// Character cursor that echoes everything it reads.
pub struct EchoCursor<R, W> {
    reader: R,
    writer: W,
    peeked: Option<char>,
    exhausted: bool,
    position: Position,
}

impl<R: BufRead, W: Write> EchoCursor<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            peeked: None,
            exhausted: false,
            position: Position::default(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current marker-on-line index and bumps it.
    pub fn claim_marker_index(&mut self) -> usize {
        let index = self.position.marker;
        self.position.marker += 1;
        index
    }

    /// Look at the next character without consuming it.
    ///
    /// The character is fetched (and so echoed) on the first peek.
    pub fn peek(&mut self) -> io::Result<Option<char>> {
        if self.peeked.is_none() {
            self.peeked = self.fetch()?;
        }
        Ok(self.peeked)
    }

    /// Consume the next character. `Ok(None)` is end of input.
    pub fn advance(&mut self) -> io::Result<Option<char>> {
        match self.peeked.take() {
            Some(ch) => Ok(Some(ch)),
            None => self.fetch(),
        }
    }

    /// Consume one token: a run of letters, or a single other character.
    pub fn next_token(&mut self) -> io::Result<Option<Token>> {
        let Some(first) = self.advance()? else {
            return Ok(None);
        };

        if !is_letter(first) {
            return Ok(Some(Token::Symbol(first)));
        }

        let mut word = String::from(first);
        while let Some(ch) = self.peek()? {
            if !is_letter(ch) {
                break;
            }
            word.push(ch);
            self.advance()?;
        }

        Ok(Some(Token::Word(word)))
    }

    /// Write text that does not come from the input.
    pub fn insert(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one character from the input and echo it.
    fn fetch(&mut self) -> io::Result<Option<char>> {
        if self.exhausted {
            return Ok(None);
        }

        let Some(ch) = self.read_char()? else {
            self.exhausted = true;
            return Ok(None);
        };

        if ch == '\n' {
            self.position.line += 1;
            self.position.marker = 0;
        }

        let mut buf = [0u8; 4];
        self.writer.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        Ok(Some(ch))
    }

    /// Decode one UTF-8 code point from the reader.
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let first = loop {
            match self.reader.fill_buf() {
                Ok(buf) => match buf.first() {
                    Some(&byte) => break byte,
                    None => return Ok(None),
                },
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        self.reader.consume(1);

        let width = utf8_width(first).ok_or_else(|| invalid_utf8(first))?;
        let mut bytes = [first, 0, 0, 0];
        if width > 1 {
            self.reader
                .read_exact(&mut bytes[1..width])
                .map_err(|e| match e.kind() {
                    io::ErrorKind::UnexpectedEof => invalid_utf8(first),
                    _ => e,
                })?;
        }

        let decoded = std::str::from_utf8(&bytes[..width])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(decoded.chars().next())
    }
}

/// Encoded length of a UTF-8 sequence from its leading byte.
fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_utf8(first: u8) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid UTF-8 sequence starting with byte 0x{:02x}", first),
    )
}
