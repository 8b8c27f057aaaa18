//! fieldstream: declarative, field-by-field parsing of structured text streams.
//!
//! A record type lists its fields in order; each field names an element type
//! and a [`Quantifier`] saying how many tokens it reads and what stops it. All
//! fields of a parse, nested records included, read from one shared
//! [`Cursor`].

pub use crate::cursor::Cursor;
pub use crate::errors::{ErrorType, ParseError, ParseReport};
pub use crate::field::{Delimiter, Field, Quantifier};
pub use crate::reader::{CompositeReader, Element, Lexeme, Scalar, ScalarReader, ValueReader};
pub use crate::record::{Fields, Record};

pub mod cursor;
pub mod errors;
pub mod field;
pub mod reader;
pub mod record;

/// Everything needed to declare and parse records.
pub mod prelude {
    pub use crate::cursor::Cursor;
    pub use crate::errors::ParseError;
    pub use crate::field::{Field, Quantifier};
    pub use crate::record::{Fields, Record};
}
