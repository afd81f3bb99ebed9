/*!
`PatternTerm` and `TriplePattern`, the tagged representation a basic graph pattern is built from
(§4.4, and §9 "Variable representation in BGP": "a tagged variant {concrete-term | variable-name}
... the builder normalizes first").
*/

use rdf_core::error::{self, Error};
use rdf_core::term::Term;
use rdf_iri::Iri;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// One position of a triple pattern: either a named variable or a concrete term.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PatternTerm {
    Variable(String),
    Concrete(Term),
}

impl PatternTerm {
    pub fn variable(name: impl Into<String>) -> Self {
        PatternTerm::Variable(name.into())
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, PatternTerm::Variable(_))
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self {
            PatternTerm::Variable(name) => Some(name),
            PatternTerm::Concrete(_) => None,
        }
    }

    pub fn as_concrete(&self) -> Option<&Term> {
        match self {
            PatternTerm::Concrete(term) => Some(term),
            PatternTerm::Variable(_) => None,
        }
    }
}

///
/// A triple whose subject, predicate, and/or object may be a variable or a concrete term.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: PatternTerm,
    pub predicate: PatternTerm,
    pub object: PatternTerm,
}

impl TriplePattern {
    /// Builds a pattern, enforcing §4.4's structural constraints: a literal in subject or
    /// predicate position is invalid (`InvalidQuery`), and a concrete predicate must be an IRI.
    pub fn new(subject: PatternTerm, predicate: PatternTerm, object: PatternTerm) -> Result<Self, Error> {
        if let Some(term) = subject.as_concrete() {
            if term.is_literal() {
                return Err(error::invalid_query_error("a literal may not appear in subject position"));
            }
        }
        match &predicate {
            PatternTerm::Concrete(Term::Iri(_)) | PatternTerm::Variable(_) => {}
            PatternTerm::Concrete(_) => {
                return Err(error::invalid_query_error(
                    "a concrete predicate position must be an IRI",
                ))
            }
        }
        Ok(Self { subject, predicate, object })
    }

    /// The set of distinct variable names occurring in this pattern, in first-occurrence order.
    pub fn variables(&self) -> Vec<&str> {
        let mut vars = Vec::new();
        for term in [&self.subject, &self.predicate, &self.object] {
            if let Some(name) = term.as_variable() {
                if !vars.contains(&name) {
                    vars.push(name);
                }
            }
        }
        vars
    }
}

/// The IRI `rdf:type`, to which the predicate-position atom `a` expands (§4.4 "Pattern-syntax
/// contract").
pub fn rdf_type_iri() -> Iri {
    rdf_vocab::rdf::a_type().clone()
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_core::term::Literal;
    use std::str::FromStr;

    #[test]
    fn rejects_literal_subject() {
        let subject = PatternTerm::Concrete(Term::Literal(Literal::new("x")));
        let predicate = PatternTerm::variable("p");
        let object = PatternTerm::variable("o");
        assert!(TriplePattern::new(subject, predicate, object).is_err());
    }

    #[test]
    fn rejects_non_iri_concrete_predicate() {
        let subject = PatternTerm::variable("s");
        let predicate = PatternTerm::Concrete(Term::BlankNode(rdf_core::term::BlankNode::new("b")));
        let object = PatternTerm::variable("o");
        assert!(TriplePattern::new(subject, predicate, object).is_err());
    }

    #[test]
    fn collects_distinct_variables_in_order() {
        let pattern = TriplePattern::new(
            PatternTerm::variable("x"),
            PatternTerm::Concrete(Term::Iri(Iri::from_str("http://ex/p").unwrap())),
            PatternTerm::variable("x"),
        )
        .unwrap();
        assert_eq!(pattern.variables(), vec!["x"]);
    }
}
