//! Parse failures and their diagnostic presentation.
//!
//! Every failure is terminal: it is raised where the stream stopped making
//! sense, travels up unchanged through every field loop and nested record, and
//! ends the top-level parse. `ParseError` carries the byte offset of the
//! failure; `ParseReport` pairs it with the input's name and, when available,
//! its text so `miette` can render a labeled snippet.

use std::fmt;
use std::io;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use thiserror::Error;

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

/// Type-safe classification of a [`ParseError`], cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Raw text could not be converted to the target scalar type.
    TokenParse,
    /// A well-formed value did not equal the expected literal.
    UnexpectedValue,
    /// A count field held a value that is not a valid element count.
    InvalidCount,
    /// The underlying reader failed or produced invalid UTF-8.
    Io,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::TokenParse => "TokenParse",
            ErrorType::UnexpectedValue => "UnexpectedValue",
            ErrorType::InvalidCount => "InvalidCount",
            ErrorType::Io => "Io",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// PARSE ERROR
// ============================================================================

/// A terminal parse failure.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot parse `{type_name}` at offset {offset}")]
    TokenParse {
        type_name: &'static str,
        offset: usize,
    },

    #[error("expected {expected} but got {actual}")]
    UnexpectedValue {
        expected: String,
        actual: String,
        offset: usize,
    },

    #[error("{value} is not a valid element count")]
    InvalidCount { value: String, offset: usize },

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// Builds a `TokenParse` error for the element type `T`.
    pub fn token<T: ?Sized>(offset: usize) -> Self {
        ParseError::TokenParse {
            type_name: std::any::type_name::<T>(),
            offset,
        }
    }

    pub fn error_type(&self) -> ErrorType {
        match self {
            ParseError::TokenParse { .. } => ErrorType::TokenParse,
            ParseError::UnexpectedValue { .. } => ErrorType::UnexpectedValue,
            ParseError::InvalidCount { .. } => ErrorType::InvalidCount,
            ParseError::Io(_) => ErrorType::Io,
        }
    }

    /// Byte offset into the input where the failure was detected. I/O failures
    /// have no position.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::TokenParse { offset, .. }
            | ParseError::UnexpectedValue { offset, .. }
            | ParseError::InvalidCount { offset, .. } => Some(*offset),
            ParseError::Io(_) => None,
        }
    }

    /// Attaches the input text so the error renders with a source snippet.
    pub fn with_source(self, name: impl AsRef<str>, text: impl Into<String>) -> ParseReport {
        let name = name.as_ref().to_string();
        ParseReport {
            error: self,
            src: Some(Arc::new(NamedSource::new(&name, text.into()))),
            name: Some(name),
        }
    }

    /// Names the input without attaching any text.
    pub fn unsourced(self, name: Option<String>) -> ParseReport {
        ParseReport {
            error: self,
            name,
            src: None,
        }
    }

    fn code_str(&self) -> &'static str {
        match self {
            ParseError::TokenParse { .. } => "fieldstream::parse::token",
            ParseError::UnexpectedValue { .. } => "fieldstream::parse::unexpected_value",
            ParseError::InvalidCount { .. } => "fieldstream::parse::count",
            ParseError::Io(_) => "fieldstream::io",
        }
    }

    fn primary_label(&self) -> String {
        match self {
            ParseError::TokenParse { type_name, .. } => format!("expected a `{type_name}` here"),
            ParseError::UnexpectedValue { expected, .. } => format!("expected {expected}"),
            ParseError::InvalidCount { .. } => "count read here".into(),
            ParseError::Io(_) => "input ends here".into(),
        }
    }

    fn help_text(&self) -> Option<&'static str> {
        match self {
            ParseError::TokenParse { .. } => {
                Some("the text at this position does not start a value of the declared type")
            }
            ParseError::UnexpectedValue { .. } => {
                Some("expected values are compared exactly, without any coercion")
            }
            ParseError::InvalidCount { .. } => {
                Some("counts must be non-negative and fit in the platform's usize")
            }
            ParseError::Io(_) => None,
        }
    }

    fn span(&self) -> Option<SourceSpan> {
        self.offset().map(|offset| SourceSpan::from((offset, 0)))
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help_text()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span()?;
        let labels = vec![LabeledSpan::new_with_span(Some(self.primary_label()), span)];
        Some(Box::new(labels.into_iter()))
    }
}

// ============================================================================
// SOURCE-ATTACHED REPORT
// ============================================================================

/// A [`ParseError`] bundled with the name of its input and, when the text is
/// at hand, the text itself.
#[derive(Debug)]
pub struct ParseReport {
    error: ParseError,
    name: Option<String>,
    src: Option<Arc<NamedSource<String>>>,
}

impl ParseReport {
    pub fn error(&self) -> &ParseError {
        &self.error
    }

    pub fn into_error(self) -> ParseError {
        self.error
    }

    /// The input name, if the input was named.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// Without source text the graphical handler never shows the source name, so
// it goes into the message.
impl fmt::Display for ParseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.src, &self.name) {
            (None, Some(name)) => write!(f, "{name}: {}", self.error),
            _ => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for ParseReport {}

impl Diagnostic for ParseReport {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error.code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error.help()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.src.as_ref()?;
        self.error.labels()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.src.as_deref().map(|src| src as &dyn SourceCode)
    }
}
