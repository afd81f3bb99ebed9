/*!
This crate re-uses [`rdf_core::error::Error`] rather than inventing a parallel taxonomy; the
`InvalidFormat { line, column, reason }` variant already carries everything a parser needs to
report a syntax violation. The one addition here is a constructor for the one failure mode that
is specific to I/O dispatch: a file extension that names no known serialization format.
*/

pub use rdf_core::error::{Error, Result};

/// The extension on a path did not map to a known [`crate::format::Format`], and no explicit
/// format override was supplied.
pub fn unsupported_format_error(extension: &str) -> Error {
    rdf_core::error::invalid_format_error(0, 0, format!("unrecognized format extension `{extension}`"))
}
