/*!
The coercion layer described in §9 "Coercion layer": every public constructor across
[`crate::description`], [`crate::graph`], and [`crate::dataset`] accepts a *coercible* input —
a raw string, an `Iri`, a blank node, a native bool/integer/float, or an already-built [`Term`] —
and converts it to a `Term` through the single function appropriate to its position (subject,
predicate, or object), per §4.1: "strings parse as IRIs; opaque vocabulary tokens resolve through
the registry; values of registered native types become literals; anything else fails with
`InvalidTerm`."
*/

use crate::error::{self, Error};
use crate::term::{BlankNode, Literal, Term};
use rdf_iri::Iri;
use rdf_vocab::Vocabulary;
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Any value a caller may pass where this crate expects a `Term`. Strings are tried as absolute
/// IRIs first, then as `_:label` blank nodes; anything else that does not already name a `Term`
/// becomes a plain or typed literal. A bare string that is neither a valid IRI nor a blank-node
/// label is rejected rather than silently treated as a literal, since §4.1 reserves that lenient
/// behavior for [`coerce_object`] alone (subjects and predicates are never literals).
///
#[derive(Clone, Debug)]
pub enum Coercible {
    Term(Term),
    Iri(Iri),
    BlankNode(BlankNode),
    Literal(Literal),
    Str(String),
    Bool(bool),
    I64(i64),
    F64(f64),
}

// ------------------------------------------------------------------------------------------------
// From impls
// ------------------------------------------------------------------------------------------------

impl From<Term> for Coercible {
    fn from(value: Term) -> Self {
        Coercible::Term(value)
    }
}
impl From<Iri> for Coercible {
    fn from(value: Iri) -> Self {
        Coercible::Iri(value)
    }
}
impl From<BlankNode> for Coercible {
    fn from(value: BlankNode) -> Self {
        Coercible::BlankNode(value)
    }
}
impl From<Literal> for Coercible {
    fn from(value: Literal) -> Self {
        Coercible::Literal(value)
    }
}
impl From<&str> for Coercible {
    fn from(value: &str) -> Self {
        Coercible::Str(value.to_string())
    }
}
impl From<String> for Coercible {
    fn from(value: String) -> Self {
        Coercible::Str(value)
    }
}
impl From<bool> for Coercible {
    fn from(value: bool) -> Self {
        Coercible::Bool(value)
    }
}
impl From<i64> for Coercible {
    fn from(value: i64) -> Self {
        Coercible::I64(value)
    }
}
impl From<f64> for Coercible {
    fn from(value: f64) -> Self {
        Coercible::F64(value)
    }
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Coerce a string that names a resource: try it as an absolute IRI first, then as a
/// `_:label`-prefixed blank node label.
fn resource_from_str(value: &str) -> Result<Term, Error> {
    if let Some(label) = value.strip_prefix("_:") {
        return Ok(Term::BlankNode(BlankNode::new(label)));
    }
    match Iri::from_str(value) {
        Ok(iri) => Ok(Term::Iri(iri)),
        Err(_) => Err(error::invalid_term_error(value)),
    }
}

/// Coerce `value` into a subject term: an IRI or a blank node (§3 "Subjects admit IRIs and blank
/// nodes").
pub fn coerce_subject(value: impl Into<Coercible>) -> Result<Term, Error> {
    match value.into() {
        Coercible::Term(term) if term.is_resource() => Ok(term),
        Coercible::Term(term) => Err(error::invalid_term_error(term.to_string())),
        Coercible::Iri(iri) => Ok(Term::Iri(iri)),
        Coercible::BlankNode(node) => Ok(Term::BlankNode(node)),
        Coercible::Str(s) => resource_from_str(&s),
        other => Err(error::invalid_term_error(format!("{other:?}"))),
    }
}

/// Coerce `value` into a predicate term: an IRI only (§3 "predicates admit only IRIs"). A bare
/// token is resolved against `vocabulary` when one is supplied, per §6's "Vocabulary namespace
/// ... used only by the coercion layer".
pub fn coerce_predicate(value: impl Into<Coercible>, vocabulary: Option<&dyn Vocabulary>) -> Result<Iri, Error> {
    match value.into() {
        Coercible::Term(Term::Iri(iri)) => Ok(iri),
        Coercible::Term(term) => Err(error::invalid_term_error(term.to_string())),
        Coercible::Iri(iri) => Ok(iri),
        Coercible::Str(s) => {
            if let Ok(iri) = Iri::from_str(&s) {
                return Ok(iri);
            }
            if let Some(vocabulary) = vocabulary {
                if let Some(iri) = vocabulary.resolve_term(&s) {
                    return Ok(iri);
                }
            }
            Err(error::invalid_term_error(s))
        }
        other => Err(error::invalid_term_error(format!("{other:?}"))),
    }
}

/// Coerce `value` into an object term: any `Term`, with native Rust values converted to typed
/// literals (§4.1's "values of registered native types become literals").
pub fn coerce_object(value: impl Into<Coercible>, vocabulary: Option<&dyn Vocabulary>) -> Result<Term, Error> {
    match value.into() {
        Coercible::Term(term) => Ok(term),
        Coercible::Iri(iri) => Ok(Term::Iri(iri)),
        Coercible::BlankNode(node) => Ok(Term::BlankNode(node)),
        Coercible::Literal(literal) => Ok(Term::Literal(literal)),
        Coercible::Bool(value) => Ok(Term::Literal(Literal::with_datatype(
            value.to_string(),
            rdf_vocab::xsd::boolean().clone(),
        ))),
        Coercible::I64(value) => Ok(Term::Literal(Literal::with_datatype(
            value.to_string(),
            rdf_vocab::xsd::integer().clone(),
        ))),
        Coercible::F64(value) => Ok(Term::Literal(Literal::with_datatype(
            value.to_string(),
            rdf_vocab::xsd::double().clone(),
        ))),
        Coercible::Str(s) => {
            if let Some(label) = s.strip_prefix("_:") {
                return Ok(Term::BlankNode(BlankNode::new(label)));
            }
            if let Ok(iri) = Iri::from_str(&s) {
                return Ok(Term::Iri(iri));
            }
            if let Some(vocabulary) = vocabulary {
                if let Some(iri) = vocabulary.resolve_term(&s) {
                    return Ok(Term::Iri(iri));
                }
            }
            Ok(Term::Literal(Literal::new(s)))
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_accepts_iri_and_blank_node_strings() {
        assert!(coerce_subject("http://example.org/s").unwrap().is_iri());
        assert!(coerce_subject("_:b0").unwrap().is_blank_node());
    }

    #[test]
    fn subject_rejects_bare_tokens_and_literals() {
        assert!(coerce_subject("not an iri").is_err());
        assert!(coerce_subject(Term::Literal(Literal::new("x"))).is_err());
    }

    #[test]
    fn predicate_rejects_blank_nodes() {
        assert!(coerce_predicate(BlankNode::new("b0"), None).is_err());
        assert!(coerce_predicate("http://example.org/p", None).unwrap() == Iri::from_str("http://example.org/p").unwrap());
    }

    #[test]
    fn object_falls_back_to_plain_literal_for_bare_strings() {
        let term = coerce_object("just text", None).unwrap();
        assert_eq!(term, Term::Literal(Literal::new("just text")));
    }

    #[test]
    fn object_coerces_native_values_to_typed_literals() {
        assert_eq!(coerce_object(true, None).unwrap().as_literal().unwrap().datatype(), rdf_vocab::xsd::boolean());
        assert_eq!(coerce_object(42i64, None).unwrap().as_literal().unwrap().lexical_form(), "42");
    }
}
