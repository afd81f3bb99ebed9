/*!
Provides the crate's `Error` and `Result` types as well as helper constructor functions.
*/

use std::fmt::{Debug, Display};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The error type shared by every `rdf_*` crate that sits above `rdf_iri`.
///
#[derive(Debug)]
pub enum Error {
    /// A string could not be parsed as an absolute IRI.
    InvalidIri { value: String },
    /// The datatype registered for a literal rejected its lexical form.
    InvalidLiteral { lexical: String, datatype: String },
    /// A value supplied where a Term was required could not be coerced.
    InvalidTerm { value: String },
    /// BGP construction violated a structural constraint.
    InvalidQuery { reason: String },
    /// A parser encountered a syntax violation at a known position.
    InvalidFormat {
        line: usize,
        column: usize,
        reason: String,
    },
    /// An error parsing a BCP-47 language tag.
    LanguageTag(::language_tags::ParseError),
    /// An error parsing a Name string.
    Name(::rdf_iri::NameParseError),
    /// An error parsing or building an IRI.
    Iri(::rdf_iri::Error),
    /// An underlying I/O failure, surfaced verbatim from the OS.
    Io(::std::io::Error),
}

///
/// A Result type that specifically uses this crate's Error.
///
pub type Result<T> = std::result::Result<T, Error>;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Create an [`Error::InvalidIri`].
#[inline(always)]
pub fn invalid_iri_error<S: Into<String>>(value: S) -> Error {
    Error::InvalidIri { value: value.into() }
}

/// Create an [`Error::InvalidLiteral`].
#[inline(always)]
pub fn invalid_literal_error<S1, S2>(lexical: S1, datatype: S2) -> Error
where
    S1: Into<String>,
    S2: Into<String>,
{
    Error::InvalidLiteral {
        lexical: lexical.into(),
        datatype: datatype.into(),
    }
}

/// Create an [`Error::InvalidTerm`].
#[inline(always)]
pub fn invalid_term_error<S: Into<String>>(value: S) -> Error {
    Error::InvalidTerm { value: value.into() }
}

/// Create an [`Error::InvalidQuery`].
#[inline(always)]
pub fn invalid_query_error<S: Into<String>>(reason: S) -> Error {
    Error::InvalidQuery { reason: reason.into() }
}

/// Create an [`Error::InvalidFormat`].
#[inline(always)]
pub fn invalid_format_error<S: Into<String>>(line: usize, column: usize, reason: S) -> Error {
    Error::InvalidFormat {
        line,
        column,
        reason: reason.into(),
    }
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidIri { value } => {
                write!(f, "the string `{value}` is not a valid absolute IRI")
            }
            Error::InvalidLiteral { lexical, datatype } => write!(
                f,
                "the lexical form `{lexical}` is not valid for datatype `{datatype}`"
            ),
            Error::InvalidTerm { value } => {
                write!(f, "the value `{value}` cannot be coerced into a term")
            }
            Error::InvalidQuery { reason } => write!(f, "invalid query: {reason}"),
            Error::InvalidFormat { line, column, reason } => write!(
                f,
                "syntax error at line {line}, column {column}: {reason}"
            ),
            Error::LanguageTag(source) => {
                write!(f, "an error occurred parsing a language tag; source: {source}")
            }
            Error::Name(source) => write!(f, "an error occurred parsing a name; source: {source}"),
            Error::Iri(source) => write!(f, "an error occurred parsing an IRI; source: {source}"),
            Error::Io(source) => write!(f, "an I/O error occurred; source: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LanguageTag(source) => Some(source),
            Self::Name(source) => Some(source),
            Self::Iri(source) => Some(source),
            Self::Io(source) => Some(source),
            _ => None,
        }
    }
}

impl From<::language_tags::ParseError> for Error {
    fn from(source: ::language_tags::ParseError) -> Self {
        Self::LanguageTag(source)
    }
}

impl From<::rdf_iri::NameParseError> for Error {
    fn from(source: ::rdf_iri::NameParseError) -> Self {
        Self::Name(source)
    }
}

impl From<::rdf_iri::Error> for Error {
    fn from(source: ::rdf_iri::Error) -> Self {
        Self::Iri(source)
    }
}

impl From<::std::io::Error> for Error {
    fn from(source: ::std::io::Error) -> Self {
        Self::Io(source)
    }
}
