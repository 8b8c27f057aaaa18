//! How one element of a field is read.
//!
//! Every element type names its reader through [`Element::Reader`], so the
//! choice between reading a scalar token and recursing into a nested record is
//! made by trait resolution, once per declared type. There are exactly two
//! readers and the trait is sealed.

use std::fmt;

use crate::cursor::Cursor;
use crate::errors::ParseError;
use crate::record::Record;

pub mod scalar;

pub use scalar::{Lexeme, Scalar};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ScalarReader {}
    impl Sealed for super::CompositeReader {}
}

/// Reads one value of type `T` from the shared cursor.
pub trait ValueReader<T>: sealed::Sealed {
    /// Reads with token semantics: leading blanks are not data.
    fn read(cursor: &mut Cursor<'_>) -> Result<T, ParseError>;

    /// Reads inside a delimiter-bounded field. Raw character types take the
    /// next character as is, blanks included; everything else reads exactly
    /// as [`ValueReader::read`].
    fn read_literal(cursor: &mut Cursor<'_>) -> Result<T, ParseError> {
        Self::read(cursor)
    }
}

/// Anything a field can hold.
pub trait Element: Clone + PartialEq + fmt::Debug {
    type Reader: ValueReader<Self>;

    /// Raw types see blanks as data: delimiter-bounded fields of a raw type
    /// never skip whitespace before checking for the delimiter.
    const RAW: bool = false;
}

/// Reads one element of `T` through its reader.
pub(crate) fn read_element<T: Element>(cursor: &mut Cursor<'_>) -> Result<T, ParseError> {
    <T::Reader as ValueReader<T>>::read(cursor)
}

pub(crate) fn read_element_literal<T: Element>(cursor: &mut Cursor<'_>) -> Result<T, ParseError> {
    <T::Reader as ValueReader<T>>::read_literal(cursor)
}

// ============================================================================
// SCALAR READER
// ============================================================================

/// Converts the next token into a [`Scalar`].
#[derive(Debug, Clone, Copy)]
pub struct ScalarReader;

impl ScalarReader {
    fn convert<T: Scalar>(text: &str, offset: usize) -> Result<T, ParseError> {
        if text.is_empty() {
            return Err(ParseError::token::<T>(offset));
        }
        T::from_lexeme(text).ok_or_else(|| ParseError::token::<T>(offset))
    }
}

impl<T: Scalar> ValueReader<T> for ScalarReader {
    fn read(cursor: &mut Cursor<'_>) -> Result<T, ParseError> {
        let offset = cursor.offset();
        cursor.skip_whitespace();
        let text = scalar::scan(T::LEXEME, cursor);
        Self::convert(&text, offset)
    }

    fn read_literal(cursor: &mut Cursor<'_>) -> Result<T, ParseError> {
        if T::LEXEME != Lexeme::Char {
            return Self::read(cursor);
        }
        let offset = cursor.offset();
        let text = scalar::scan(Lexeme::Char, cursor);
        Self::convert(&text, offset)
    }
}

macro_rules! scalar_elements {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Element for $ty {
                type Reader = ScalarReader;
            }
        )+
    };
}

scalar_elements!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
scalar_elements!(f32, f64, bool, String);

impl Element for char {
    type Reader = ScalarReader;
    const RAW: bool = true;
}

// ============================================================================
// COMPOSITE READER
// ============================================================================

/// Builds a whole nested [`Record`] from the same cursor.
#[derive(Debug, Clone, Copy)]
pub struct CompositeReader;

impl<R: Record> ValueReader<R> for CompositeReader {
    fn read(cursor: &mut Cursor<'_>) -> Result<R, ParseError> {
        R::read_from(cursor)
    }
}

impl<R: Record> Element for R {
    type Reader = CompositeReader;
}
