/*!
Shared helpers used by more than one format implementation.
*/

pub(crate) mod indenter;
pub(crate) mod literal;
pub(crate) mod term_parser;
