//! Records: ordered lists of fields read from one shared cursor.
//!
//! A record type implements [`Record::parse_fields`], declaring its fields in
//! order through a [`Fields`] builder. Each call reads from wherever the
//! previous field left the cursor, and the struct itself is only assembled
//! once every field has succeeded, so a failed parse never yields a partially
//! populated record.
//!
//! ```rust
//! use fieldstream::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Counted {
//!     size: Field<i32>,
//!     items: Field<i32>,
//! }
//!
//! impl Record for Counted {
//!     fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
//!         let size: Field<i32> = fields.field("size", Quantifier::Single)?;
//!         fields.skip(Quantifier::expect(':'))?;
//!         let items = fields.field("items", Quantifier::count(size.count()?))?;
//!         Ok(Self { size, items })
//!     }
//! }
//!
//! let parsed = Counted::parse_str("3: 7 8 9").unwrap();
//! assert_eq!(parsed.items.as_slice(), &[7, 8, 9]);
//! ```

use std::fmt;
use std::io::Read;

use tracing::{debug, debug_span, trace};

use crate::cursor::Cursor;
use crate::errors::ParseError;
use crate::field::{Field, Quantifier};
use crate::reader::Element;

/// A structured unit parsed field by field.
///
/// Records are ordinary values once built: they own their data and can be
/// cloned, stored, or sent across threads without touching the stream again.
/// Any record can also be the element type of another record's field.
pub trait Record: Sized + Clone + PartialEq + fmt::Debug {
    /// Reads every field in declaration order and assembles the record.
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError>;

    /// Parses one record from the cursor's current position, leaving the
    /// cursor immediately after the last field.
    fn read_from(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let record = record_name::<Self>();
        let span = debug_span!("record", record, offset = cursor.offset());
        let _guard = span.enter();

        let mut fields = Fields::new(cursor, record);
        Self::parse_fields(&mut fields).map_err(|err| {
            debug!(record, error = %err, "record failed");
            err
        })
    }

    fn parse_str(input: &str) -> Result<Self, ParseError> {
        Self::read_from(&mut Cursor::new(input))
    }

    /// Parses one record from a byte reader holding UTF-8 text.
    ///
    /// If the reader fails or yields invalid UTF-8, that fault is reported
    /// instead of whatever the truncated parse produced.
    fn from_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        let mut cursor = Cursor::from_reader(reader);
        let parsed = Self::read_from(&mut cursor);
        match cursor.take_fault() {
            Some(fault) => Err(ParseError::Io(fault)),
            None => parsed,
        }
    }
}

fn record_name<R>() -> &'static str {
    let full = std::any::type_name::<R>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// The ordered field builder handed to [`Record::parse_fields`].
pub struct Fields<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    record: &'static str,
    declared: usize,
}

impl<'c, 'a> Fields<'c, 'a> {
    pub fn new(cursor: &'c mut Cursor<'a>, record: &'static str) -> Self {
        Self {
            cursor,
            record,
            declared: 0,
        }
    }

    /// Declares and reads the next visible field.
    pub fn field<T: Element>(
        &mut self,
        name: &str,
        quantifier: Quantifier<T>,
    ) -> Result<Field<T>, ParseError> {
        let index = self.declared;
        self.declared += 1;
        trace!(
            record = self.record,
            field = name,
            index,
            quantifier = %quantifier,
            offset = self.cursor.offset(),
            "reading field"
        );

        let field = Field::parse(&mut *self.cursor, quantifier)?;
        trace!(record = self.record, field = name, values = field.len(), "field read");
        Ok(field)
    }

    /// Declares and reads the next field, only to validate it and move past
    /// it. Its values are dropped.
    pub fn skip<T: Element>(&mut self, quantifier: Quantifier<T>) -> Result<(), ParseError> {
        self.field("_", quantifier).map(drop)
    }

    /// The shared cursor, positioned after the fields read so far.
    pub fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut *self.cursor
    }

    pub fn record_name(&self) -> &'static str {
        self.record
    }

    /// How many fields, visible or skipped, have been declared so far.
    pub fn declared(&self) -> usize {
        self.declared
    }
}

impl fmt::Debug for Fields<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fields")
            .field("record", &self.record)
            .field("declared", &self.declared)
            .field("offset", &self.cursor.offset())
            .finish()
    }
}
