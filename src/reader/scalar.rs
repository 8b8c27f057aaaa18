//! Primitive values with a canonical textual form.
//!
//! A scalar is read the way formatted stream extraction reads it: leading
//! blanks are skipped, then the longest prefix that belongs to the type's
//! lexical class is taken and converted. `5:` therefore reads the integer `5`
//! and leaves `:` in the stream for the next field.

use std::fmt;

use crate::cursor::{is_blank, Cursor};

/// The lexical class that decides which characters belong to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    /// Optional sign followed by decimal digits.
    Integer,
    /// Optional sign, digits, optional fraction, optional exponent.
    Float,
    /// A run of non-blank characters.
    Word,
    /// Exactly one character.
    Char,
}

/// A primitive that can be read from a single token.
///
/// Implement this (together with [`Element`](crate::reader::Element) using
/// [`ScalarReader`](crate::reader::ScalarReader)) to read custom types.
pub trait Scalar: Sized + Clone + PartialEq + fmt::Debug {
    const LEXEME: Lexeme;

    /// Converts the scanned token, or `None` if it is not a valid value.
    fn from_lexeme(text: &str) -> Option<Self>;
}

macro_rules! from_str_scalars {
    ($lexeme:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                const LEXEME: Lexeme = $lexeme;

                fn from_lexeme(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )+
    };
}

from_str_scalars!(Lexeme::Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
from_str_scalars!(Lexeme::Float => f32, f64);
from_str_scalars!(Lexeme::Word => String, bool);

impl Scalar for char {
    const LEXEME: Lexeme = Lexeme::Char;

    fn from_lexeme(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

// ============================================================================
// SCANNING
// ============================================================================

fn take_if(cursor: &mut Cursor<'_>, text: &mut String, accept: impl Fn(char) -> bool) -> bool {
    match cursor.peek() {
        Some(c) if accept(c) => {
            cursor.read();
            text.push(c);
            true
        }
        _ => false,
    }
}

fn take_while(cursor: &mut Cursor<'_>, text: &mut String, accept: impl Fn(char) -> bool) -> usize {
    let mut taken = 0;
    while take_if(cursor, text, &accept) {
        taken += 1;
    }
    taken
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Consumes the longest prefix of the stream that belongs to `lexeme`. Never
/// skips blanks; callers do that first when they want token semantics.
pub(crate) fn scan(lexeme: Lexeme, cursor: &mut Cursor<'_>) -> String {
    let mut text = String::new();
    match lexeme {
        Lexeme::Integer => {
            take_if(cursor, &mut text, is_sign);
            take_while(cursor, &mut text, |c| c.is_ascii_digit());
        }
        Lexeme::Float => {
            take_if(cursor, &mut text, is_sign);
            let mut digits = take_while(cursor, &mut text, |c| c.is_ascii_digit());
            if take_if(cursor, &mut text, |c| c == '.') {
                digits += take_while(cursor, &mut text, |c| c.is_ascii_digit());
            }
            if digits > 0 && take_if(cursor, &mut text, |c| c == 'e' || c == 'E') {
                take_if(cursor, &mut text, is_sign);
                take_while(cursor, &mut text, |c| c.is_ascii_digit());
            }
        }
        Lexeme::Word => {
            take_while(cursor, &mut text, |c| !is_blank(c));
        }
        Lexeme::Char => {
            if let Some(c) = cursor.read() {
                text.push(c);
            }
        }
    }
    text
}
