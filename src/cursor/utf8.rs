//! Incremental UTF-8 decoding over `std::io::Read`.

use std::io::{self, Bytes, Read};

fn invalid(message: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

/// Number of bytes in the sequence that `lead` starts, or `None` if `lead`
/// cannot start one.
fn sequence_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Yields the characters of a byte reader, reading no further than the end
/// of the character being produced. No buffering is added.
pub(super) struct Utf8Chars<R> {
    bytes: Bytes<R>,
}

impl<R: Read> Utf8Chars<R> {
    pub(super) fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
        }
    }
}

impl<R: Read> Iterator for Utf8Chars<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        let lead = match self.bytes.next()? {
            Ok(b) => b,
            Err(e) => return Some(Err(e)),
        };
        let Some(width) = sequence_width(lead) else {
            return Some(Err(invalid("invalid UTF-8 lead byte")));
        };

        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            match self.bytes.next() {
                Some(Ok(b)) => *slot = b,
                Some(Err(e)) => return Some(Err(e)),
                None => return Some(Err(invalid("truncated UTF-8 sequence"))),
            }
        }

        let decoded = std::str::from_utf8(&buf[..width])
            .map_err(|_| invalid("invalid UTF-8 sequence"))
            .and_then(|s| s.chars().next().ok_or_else(|| invalid("empty UTF-8 sequence")));
        Some(decoded)
    }
}
