//! The shared read position over one input character stream.
//!
//! Exactly one `Cursor` exists per top-level parse. Records and the fields
//! inside them borrow it mutably, one at a time, down the whole recursion; it
//! is never cloned. End-of-input is something you ask about, not an error.

use std::fmt;
use std::io::{self, Read};

use crate::errors::{ParseError, ParseReport};

mod utf8;

use utf8::Utf8Chars;

/// True for the characters skipped between tokens.
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

type CharSource<'a> = Box<dyn Iterator<Item = io::Result<char>> + 'a>;

/// A peekable character stream that tracks its byte offset.
pub struct Cursor<'a> {
    chars: CharSource<'a>,
    lookahead: Option<char>,
    exhausted: bool,
    offset: usize,
    text: Option<&'a str>,
    name: Option<String>,
    fault: Option<io::Error>,
}

impl<'a> Cursor<'a> {
    /// A cursor over an in-memory string.
    pub fn new(input: &'a str) -> Self {
        let mut cursor = Self::from_source(Box::new(input.chars().map(Ok)));
        cursor.text = Some(input);
        cursor
    }

    /// A cursor that decodes UTF-8 from `reader` one character at a time.
    ///
    /// Bytes are pulled one at a time as characters are needed, so the reader
    /// is left at most one character past the last one parsed. Wrap slow
    /// readers in a `BufReader` yourself if that position does not matter.
    ///
    /// A read error or an invalid byte sequence ends the stream early and is
    /// kept as a fault; see [`Cursor::take_fault`].
    pub fn from_reader<R: Read + 'a>(reader: R) -> Self {
        Self::from_source(Box::new(Utf8Chars::new(reader)))
    }

    fn from_source(chars: CharSource<'a>) -> Self {
        Self {
            chars,
            lookahead: None,
            exhausted: false,
            offset: 0,
            text: None,
            name: None,
            fault: None,
        }
    }

    /// Names the input for diagnostics; see [`Cursor::report`].
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn fill(&mut self) {
        if self.lookahead.is_some() || self.exhausted {
            return;
        }
        match self.chars.next() {
            Some(Ok(c)) => self.lookahead = Some(c),
            Some(Err(e)) => {
                tracing::debug!(offset = self.offset, error = %e, "input fault, treating as end of input");
                self.fault = Some(e);
                self.exhausted = true;
            }
            None => self.exhausted = true,
        }
    }

    /// The next character, without consuming it. `None` at end of input.
    pub fn peek(&mut self) -> Option<char> {
        self.fill();
        self.lookahead
    }

    /// Consumes and returns the next character, or `None` if the stream is
    /// already at its end.
    pub fn read(&mut self) -> Option<char> {
        self.fill();
        let c = self.lookahead.take()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    pub fn is_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Consumes blanks until a non-blank character, the `terminator`, or end
    /// of input. The terminator itself is never consumed, even when it is a
    /// blank.
    pub fn skip_whitespace_unless(&mut self, terminator: Option<char>) {
        while let Some(c) = self.peek() {
            if Some(c) == terminator || !is_blank(c) {
                break;
            }
            self.read();
        }
    }

    pub fn skip_whitespace(&mut self) {
        self.skip_whitespace_unless(None);
    }

    /// Takes the I/O or decoding failure that cut the stream short, if any.
    pub fn take_fault(&mut self) -> Option<io::Error> {
        self.fault.take()
    }

    pub fn has_fault(&self) -> bool {
        self.fault.is_some()
    }

    /// Wraps an error raised while reading this cursor into a report that
    /// carries the cursor's name. String cursors also attach their input, so
    /// the report renders a labeled snippet; reader cursors have no text to
    /// show and name the input in the message instead.
    pub fn report(&self, error: ParseError) -> ParseReport {
        match self.text {
            Some(text) => error.with_source(self.name.as_deref().unwrap_or("input"), text),
            None => error.unsourced(self.name.clone()),
        }
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(input: &'a str) -> Self {
        Cursor::new(input)
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("name", &self.name)
            .field("offset", &self.offset)
            .field("lookahead", &self.lookahead)
            .field("exhausted", &self.exhausted)
            .field("fault", &self.fault)
            .finish()
    }
}
