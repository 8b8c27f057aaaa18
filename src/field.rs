//! Fields and the quantifiers that drive them.
//!
//! A [`Field`] is the ordered run of values one declared field produced. Its
//! [`Quantifier`] decides how many values that is and what ends the run:
//! exactly one, exactly one that must equal a literal, a count fixed before
//! the field starts reading, or everything up to a delimiter.

use std::fmt;
use std::ops::Index;

use serde::{Serialize, Serializer};

use crate::cursor::Cursor;
use crate::errors::ParseError;
use crate::reader::{read_element, read_element_literal, Element};

// ============================================================================
// QUANTIFIERS
// ============================================================================

/// What ends a delimiter-bounded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Char(char),
    /// Never matches; the field reads to the end of the input.
    EndOfInput,
}

impl Delimiter {
    pub fn as_char(self) -> Option<char> {
        match self {
            Delimiter::Char(c) => Some(c),
            Delimiter::EndOfInput => None,
        }
    }
}

/// How many values a field reads and when it stops.
#[derive(Debug, Clone, PartialEq)]
pub enum Quantifier<T> {
    /// Exactly one value.
    Single,
    /// Exactly one value, which must equal the given one exactly.
    Expect(T),
    /// Exactly `n` values. The count is already evaluated, usually from
    /// fields declared earlier in the same record.
    Count(usize),
    /// Values until the delimiter or the end of input, whichever comes first.
    /// With `consume`, a matched delimiter is consumed afterwards; otherwise it
    /// stays in the stream for the next field.
    Until { delimiter: Delimiter, consume: bool },
}

impl<T> Quantifier<T> {
    pub fn expect(value: T) -> Self {
        Quantifier::Expect(value)
    }

    pub fn count(n: usize) -> Self {
        Quantifier::Count(n)
    }

    /// Reads up to `delimiter` and leaves it in the stream.
    pub fn until(delimiter: char) -> Self {
        Quantifier::Until {
            delimiter: Delimiter::Char(delimiter),
            consume: false,
        }
    }

    /// Reads up to `delimiter` and consumes it.
    pub fn through(delimiter: char) -> Self {
        Quantifier::Until {
            delimiter: Delimiter::Char(delimiter),
            consume: true,
        }
    }

    pub fn through_line() -> Self {
        Self::through('\n')
    }

    pub fn to_end() -> Self {
        Quantifier::Until {
            delimiter: Delimiter::EndOfInput,
            consume: false,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Quantifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::Single => write!(f, "single"),
            Quantifier::Expect(value) => write!(f, "expect({value:?})"),
            Quantifier::Count(n) => write!(f, "count({n})"),
            Quantifier::Until {
                delimiter: Delimiter::EndOfInput,
                ..
            } => write!(f, "to end"),
            Quantifier::Until {
                delimiter: Delimiter::Char(c),
                consume,
            } => {
                let verb = if *consume { "through" } else { "until" };
                write!(f, "{verb}({c:?})")
            }
        }
    }
}

// ============================================================================
// FIELD
// ============================================================================

/// Most capacity a counted field reserves before it has read anything.
const MAX_RESERVE: usize = 1024;

/// The values one field produced, in stream order.
///
/// A parsed field owns its values and keeps no link to the cursor; cloning it
/// never touches the stream again.
#[derive(Debug, Clone)]
pub struct Field<T> {
    values: Vec<T>,
    offset: usize,
}

impl<T: Element> Field<T> {
    /// Drives `quantifier` against the cursor.
    pub fn parse(cursor: &mut Cursor<'_>, quantifier: Quantifier<T>) -> Result<Self, ParseError> {
        let offset = cursor.offset();
        let mut values = Vec::new();

        match quantifier {
            Quantifier::Single => values.push(read_element(cursor)?),
            Quantifier::Expect(expected) => {
                let actual: T = read_element(cursor)?;
                if actual != expected {
                    return Err(ParseError::UnexpectedValue {
                        expected: format!("{expected:?}"),
                        actual: format!("{actual:?}"),
                        offset,
                    });
                }
                values.push(actual);
            }
            Quantifier::Count(n) => {
                values.reserve(n.min(MAX_RESERVE));
                for _ in 0..n {
                    values.push(read_element(cursor)?);
                }
            }
            Quantifier::Until { delimiter, consume } => {
                let matched = read_until(cursor, delimiter.as_char(), &mut values)?;
                if consume && matched {
                    cursor.read();
                }
            }
        }

        Ok(Self { values, offset })
    }
}

/// Reads elements until `stop` is next in the stream (returns `true`) or the
/// input ends (returns `false`).
fn read_until<T: Element>(
    cursor: &mut Cursor<'_>,
    stop: Option<char>,
    values: &mut Vec<T>,
) -> Result<bool, ParseError> {
    loop {
        if !T::RAW {
            cursor.skip_whitespace_unless(stop);
        }
        match cursor.peek() {
            None => return Ok(false),
            Some(c) if Some(c) == stop => return Ok(true),
            Some(_) => {}
        }

        let before = cursor.offset();
        values.push(read_element_literal(cursor)?);
        // An element that reads nothing would repeat forever.
        if cursor.offset() == before {
            return Err(ParseError::token::<T>(before));
        }
    }
}

impl<T> Field<T> {
    /// The first value, if any.
    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    /// The value of a single-valued field.
    ///
    /// Meant for `Single` and `Expect` fields, which always hold exactly one
    /// value. Use [`Field::first`] for counted or delimiter-bounded fields.
    ///
    /// # Panics
    ///
    /// Panics if the field is empty, which only a zero count or an empty
    /// delimiter-bounded run can produce.
    pub fn value(&self) -> &T {
        &self.values[0]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Byte offset where this field started reading.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<T> Field<T>
where
    T: Copy + fmt::Debug,
    usize: TryFrom<T>,
{
    /// Interprets the first value as an element count for a later field.
    pub fn count(&self) -> Result<usize, ParseError> {
        let invalid = |value: String| ParseError::InvalidCount {
            value,
            offset: self.offset,
        };
        let value = *self.first().ok_or_else(|| invalid("an empty field".into()))?;
        usize::try_from(value).map_err(|_| invalid(format!("{value:?}")))
    }
}

// Equality looks at the values only: the same record read from two inputs
// compares equal even if it started at different offsets.
impl<T: PartialEq> PartialEq for Field<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T> Index<usize> for Field<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<'f, T> IntoIterator for &'f Field<T> {
    type Item = &'f T;
    type IntoIter = std::slice::Iter<'f, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> IntoIterator for Field<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.values)
    }
}
