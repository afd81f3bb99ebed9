/*!
`BgpBuilder`, the DSL for assembling a basic graph pattern (§4.4 "Pattern-syntax contract"):
a `?name` token denotes a variable, the atom `a` in predicate position expands to `rdf:type`, a
path chain `[s, p1, p2, ..., pn, o]` fans out into a chain of triples joined by fresh internal
variables, and a quad `(s, p, o1, o2, ...)` fans out into one triple per object.
*/

use crate::pattern::{rdf_type_iri, PatternTerm, TriplePattern};
use rdf_core::coerce::{self, Coercible};
use rdf_core::error::{self, Error};
use rdf_core::term::Term;
use rdf_vocab::Vocabulary;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// Something that can occupy a pattern position before it is narrowed to subject, predicate, or
/// object: a `?name` variable, the `a` shorthand, or any value [`Coercible`] accepts.
#[derive(Clone, Debug)]
pub enum PatternAtom {
    Variable(String),
    RdfType,
    Value(Coercible),
}

impl From<&str> for PatternAtom {
    fn from(s: &str) -> Self {
        if let Some(name) = s.strip_prefix('?') {
            PatternAtom::Variable(name.to_string())
        } else if s == "a" {
            PatternAtom::RdfType
        } else {
            PatternAtom::Value(Coercible::from(s))
        }
    }
}

impl From<String> for PatternAtom {
    fn from(s: String) -> Self {
        PatternAtom::from(s.as_str())
    }
}

impl From<Term> for PatternAtom {
    fn from(term: Term) -> Self {
        PatternAtom::Value(Coercible::from(term))
    }
}

impl From<bool> for PatternAtom {
    fn from(value: bool) -> Self {
        PatternAtom::Value(Coercible::from(value))
    }
}

impl From<i64> for PatternAtom {
    fn from(value: i64) -> Self {
        PatternAtom::Value(Coercible::from(value))
    }
}

///
/// Assembles a list of [`TriplePattern`]s from a sequence of builder calls, expanding path chains
/// and quad fan-outs as it goes.
///
#[derive(Default)]
pub struct BgpBuilder {
    vocabulary: Option<Box<dyn Vocabulary>>,
    patterns: Vec<TriplePattern>,
    next_internal: usize,
}

impl BgpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary(vocabulary: Box<dyn Vocabulary>) -> Self {
        Self {
            vocabulary: Some(vocabulary),
            ..Self::default()
        }
    }

    fn fresh_variable(&mut self) -> String {
        let name = format!("__bgp{}", self.next_internal);
        self.next_internal += 1;
        name
    }

    fn subject_term(&self, atom: PatternAtom) -> Result<PatternTerm, Error> {
        match atom {
            PatternAtom::Variable(name) => Ok(PatternTerm::Variable(name)),
            PatternAtom::RdfType => Err(error::invalid_query_error(
                "the `a` shorthand is only valid in predicate position",
            )),
            PatternAtom::Value(value) => Ok(PatternTerm::Concrete(coerce::coerce_subject(value)?)),
        }
    }

    fn predicate_term(&self, atom: PatternAtom) -> Result<PatternTerm, Error> {
        match atom {
            PatternAtom::Variable(name) => Ok(PatternTerm::Variable(name)),
            PatternAtom::RdfType => Ok(PatternTerm::Concrete(Term::Iri(rdf_type_iri()))),
            PatternAtom::Value(value) => Ok(PatternTerm::Concrete(Term::Iri(coerce::coerce_predicate(
                value,
                self.vocabulary.as_deref(),
            )?))),
        }
    }

    fn object_term(&self, atom: PatternAtom) -> Result<PatternTerm, Error> {
        match atom {
            PatternAtom::Variable(name) => Ok(PatternTerm::Variable(name)),
            PatternAtom::RdfType => Err(error::invalid_query_error(
                "the `a` shorthand is only valid in predicate position",
            )),
            PatternAtom::Value(value) => Ok(PatternTerm::Concrete(coerce::coerce_object(
                value,
                self.vocabulary.as_deref(),
            )?)),
        }
    }

    /// Appends a single triple pattern.
    pub fn triple(
        mut self,
        subject: impl Into<PatternAtom>,
        predicate: impl Into<PatternAtom>,
        object: impl Into<PatternAtom>,
    ) -> Result<Self, Error> {
        let subject = self.subject_term(subject.into())?;
        let predicate = self.predicate_term(predicate.into())?;
        let object = self.object_term(object.into())?;
        self.patterns.push(TriplePattern::new(subject, predicate, object)?);
        Ok(self)
    }

    /// Expands `[subject, predicates.., object]` into a chain of triples joined by fresh internal
    /// variables: `(s,p1,v1), (v1,p2,v2), ..., (v(n-1),pn,o)`.
    pub fn path(
        mut self,
        subject: impl Into<PatternAtom>,
        predicates: impl IntoIterator<Item = impl Into<PatternAtom>>,
        object: impl Into<PatternAtom>,
    ) -> Result<Self, Error> {
        let predicates: Vec<PatternAtom> = predicates.into_iter().map(Into::into).collect();
        if predicates.is_empty() {
            return Err(error::invalid_query_error("a path requires at least one predicate"));
        }
        let final_object = self.object_term(object.into())?;
        let mut current = self.subject_term(subject.into())?;
        let last_index = predicates.len() - 1;
        for (index, predicate_atom) in predicates.into_iter().enumerate() {
            let predicate = self.predicate_term(predicate_atom)?;
            let next = if index == last_index {
                final_object.clone()
            } else {
                PatternTerm::Variable(self.fresh_variable())
            };
            self.patterns
                .push(TriplePattern::new(current, predicate, next.clone())?);
            current = next;
        }
        Ok(self)
    }

    /// Expands `(subject, predicate, objects..)` into one triple per object, all sharing
    /// `subject`/`predicate`.
    pub fn quad(
        mut self,
        subject: impl Into<PatternAtom>,
        predicate: impl Into<PatternAtom>,
        objects: impl IntoIterator<Item = impl Into<PatternAtom>>,
    ) -> Result<Self, Error> {
        let subject = self.subject_term(subject.into())?;
        let predicate = self.predicate_term(predicate.into())?;
        let mut any = false;
        for object_atom in objects {
            any = true;
            let object = self.object_term(object_atom.into())?;
            self.patterns
                .push(TriplePattern::new(subject.clone(), predicate.clone(), object)?);
        }
        if !any {
            return Err(error::invalid_query_error("a quad fan-out requires at least one object"));
        }
        Ok(self)
    }

    /// Consumes the builder, returning the assembled pattern list.
    pub fn build(self) -> Vec<TriplePattern> {
        self.patterns
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triple_expands_a_shorthand_to_rdf_type() {
        let patterns = BgpBuilder::new()
            .triple("?s", "a", "http://example.org/Person")
            .unwrap()
            .build();
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].predicate, PatternTerm::Concrete(Term::Iri(rdf_type_iri())));
    }

    #[test]
    fn path_fans_out_into_a_joined_chain() {
        let patterns = BgpBuilder::new()
            .path("?s", ["http://ex/knows", "http://ex/name"], "?name")
            .unwrap()
            .build();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].subject, PatternTerm::Variable("s".to_string()));
        assert_eq!(patterns[0].object, patterns[1].subject);
        assert_eq!(patterns[1].object, PatternTerm::Variable("name".to_string()));
    }

    #[test]
    fn quad_fans_out_one_triple_per_object() {
        let patterns = BgpBuilder::new()
            .quad("?s", "http://ex/tag", ["a", "b", "c"])
            .unwrap()
            .build();
        assert_eq!(patterns.len(), 3);
        assert!(patterns.iter().all(|p| p.subject == PatternTerm::Variable("s".to_string())));
    }

    #[test]
    fn rejects_a_shorthand_outside_predicate_position() {
        assert!(BgpBuilder::new().triple("a", "?p", "?o").is_err());
    }
}
