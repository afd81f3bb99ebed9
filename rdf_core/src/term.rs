/*!
`Term`, the tagged union at the bottom of the data model (§3 "Term"): an IRI, a blank node, or a
literal. Subjects admit IRIs and blank nodes; predicates admit only IRIs; objects admit any Term
— that narrowing is enforced by [`crate::coerce`], not by this module, which stores whichever
term a caller actually built.
*/

use crate::error::{self, Error};
use language_tags::LanguageTag;
use rdf_iri::Iri;
use std::fmt::{Display, Formatter};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// An opaque local identifier, scoped to its containing graph for serialization purposes but
/// globally equal by label within one process (§3 "BlankNode").
///
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlankNode(String);

impl BlankNode {
    /// Wrap `label` as a blank node identifier, without validating its syntax.
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self(label.into())
    }

    /// A fresh blank node with a randomly generated label.
    pub fn fresh() -> Self {
        Self(format!("b{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BlankNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

///
/// Whichever of the two mutually-exclusive annotations a [`Literal`] carries (§3 "Literal"): a
/// language tag (implying `rdf:langString`), or an explicit datatype. Plain literals with no
/// annotation are represented as `Datatype(xsd:string)` once constructed, since §3 says the
/// datatype "default[s] to `xsd:string` when absent" — there is no unannotated state to model.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Lang(LanguageTag),
    Datatype(Iri),
}

///
/// A lexical form plus exactly one of a language tag or a datatype IRI (§3 "Literal"). Two
/// literals are *term-equal* (`==`) iff lexical form, datatype, and language tag all match
/// exactly; *value-equal* is a separate comparison mediated by the datatype registry, see
/// [`Literal::value_eq`].
///
#[derive(Clone, Debug, Eq, Hash)]
pub struct Literal {
    lexical: String,
    kind: LiteralKind,
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.lexical == other.lexical && self.kind == other.kind
    }
}

impl Literal {
    /// A plain string literal, typed `xsd:string`.
    pub fn new<S: Into<String>>(lexical: S) -> Self {
        Self {
            lexical: lexical.into(),
            kind: LiteralKind::Datatype(rdf_vocab::xsd::string().clone()),
        }
    }

    /// A literal with an explicit datatype. Does not validate `lexical` against the datatype;
    /// use [`crate::coerce::coerce_literal`] when validation is required.
    pub fn with_datatype<S: Into<String>>(lexical: S, datatype: Iri) -> Self {
        Self {
            lexical: lexical.into(),
            kind: LiteralKind::Datatype(datatype),
        }
    }

    /// A language-tagged literal, implicitly typed `rdf:langString`.
    pub fn with_language<S: Into<String>>(lexical: S, language: LanguageTag) -> Self {
        Self {
            lexical: lexical.into(),
            kind: LiteralKind::Lang(language),
        }
    }

    /// Parses `language` as a BCP-47 tag and builds a language-tagged literal.
    pub fn with_language_str<S: Into<String>>(lexical: S, language: &str) -> Result<Self, Error> {
        let tag = language.parse::<LanguageTag>()?;
        Ok(Self::with_language(lexical, tag))
    }

    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }

    /// This literal's datatype IRI: the explicit datatype, or `rdf:langString` for a
    /// language-tagged literal.
    pub fn datatype(&self) -> &Iri {
        match &self.kind {
            LiteralKind::Datatype(iri) => iri,
            LiteralKind::Lang(_) => rdf_vocab::rdf::lang_string(),
        }
    }

    pub fn language(&self) -> Option<&LanguageTag> {
        match &self.kind {
            LiteralKind::Lang(tag) => Some(tag),
            LiteralKind::Datatype(_) => None,
        }
    }

    pub fn kind(&self) -> &LiteralKind {
        &self.kind
    }

    /// Value-equality mediated by the datatype registry (§3: "value-equal iff the registry's
    /// comparator agrees"). Two literals of different datatypes are never value-equal, and a
    /// datatype unknown to the registry falls back to lexical-form comparison.
    pub fn value_eq(&self, other: &Literal) -> bool {
        if self.datatype() != other.datatype() {
            return false;
        }
        crate::datatype::with_datatype(self.datatype(), |found| match found {
            Some(datatype) => datatype.equal_value(&self.lexical, &other.lexical),
            None => self.lexical == other.lexical,
        })
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.lexical)?;
        match &self.kind {
            LiteralKind::Lang(tag) => write!(f, "@{tag}"),
            LiteralKind::Datatype(iri) if iri == rdf_vocab::xsd::string() => Ok(()),
            LiteralKind::Datatype(iri) => write!(f, "^^<{iri}>"),
        }
    }
}

///
/// The tagged union described in §3: an IRI, a blank node, or a literal.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Iri(Iri),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::BlankNode(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(node) => write!(f, "{node}"),
            Term::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

impl Term {
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// `true` for a term that may legally appear in subject or predicate position — an IRI or a
    /// blank node, but never a literal.
    pub fn is_resource(&self) -> bool {
        !self.is_literal()
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Term::BlankNode(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

/// A term suitable for subject or predicate position: only [`Term::Iri`] or [`Term::BlankNode`].
/// Predicates further narrow this to IRI-only at the [`crate::coerce`] layer.
pub fn require_resource(term: Term) -> Result<Term, Error> {
    if term.is_resource() {
        Ok(term)
    } else {
        Err(error::invalid_term_error(term.to_string()))
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn plain_string_literal_defaults_to_xsd_string() {
        let lit = Literal::new("hello");
        assert_eq!(lit.datatype(), rdf_vocab::xsd::string());
        assert_eq!(lit.to_string(), "\"hello\"");
    }

    #[test]
    fn language_tagged_literal_types_as_lang_string() {
        let lit = Literal::with_language_str("hello", "en-US").unwrap();
        assert_eq!(lit.datatype(), rdf_vocab::rdf::lang_string());
        assert_eq!(lit.to_string(), "\"hello\"@en-US");
    }

    #[test]
    fn term_equality_requires_exact_match() {
        let a = Literal::with_datatype("42", rdf_vocab::xsd::integer().clone());
        let b = Literal::with_datatype("042", rdf_vocab::xsd::integer().clone());
        assert_ne!(a, b, "term-equality is lexical, not value");
        assert!(a.value_eq(&b), "but value-equality should agree via the datatype registry");
    }

    #[test]
    fn resource_rejects_literal() {
        let lit = Term::Literal(Literal::new("x"));
        assert!(require_resource(lit).is_err());
        let iri = Term::Iri(Iri::from_str("http://example.org/s").unwrap());
        assert!(require_resource(iri).is_ok());
    }
}
