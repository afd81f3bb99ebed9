/*!
`PrefixMap`, a bidirectional mapping between short prefix labels and IRI namespaces, used to
annotate a [`crate::graph::Graph`] for more readable serialization. Prefix/base metadata is
purely an annotation: [`crate::graph::Graph::eq`] ignores it (§3 "Graph" invariants), but it
survives most transformations (§9 "Prefix/base metadata").
*/

use crate::qname::QName;
use bimap::BiHashMap;
use rdf_iri::{Iri, IriExtra, Name};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A conflict policy used when merging two prefix maps, given the conflicting prefix, the
/// existing namespace and the incoming one; returns the namespace to keep.
///
pub type ConflictPolicy = fn(prefix: Option<&Name>, existing: &Iri, incoming: &Iri) -> Iri;

///
/// First-writer-wins: keep `existing`. Used for implicit merges (§4.2 `add`).
///
pub fn first_writer_wins(_prefix: Option<&Name>, existing: &Iri, _incoming: &Iri) -> Iri {
    existing.clone()
}

///
/// Last-writer-wins: keep `incoming`. Used for explicit calls (§4.2 `add_prefixes`) unless the
/// caller supplies their own policy.
///
pub fn last_writer_wins(_prefix: Option<&Name>, _existing: &Iri, incoming: &Iri) -> Iri {
    incoming.clone()
}

///
/// A bijective mapping between optional prefix labels (`None` is the default namespace) and
/// namespace `Iri`s.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixMap {
    map: BiHashMap<Option<Name>, Iri>,
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// A new prefix map seeded with the `rdf`, `rdfs`, `xsd`, and `owl` common mappings.
///
pub fn common_mappings() -> PrefixMap {
    PrefixMap::default().with_rdf().with_rdfs().with_xsd().with_owl()
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl PrefixMap {
    // --------------------------------------------------------------------------------------------
    // Constructors
    // --------------------------------------------------------------------------------------------

    pub fn with_default(mut self, iri: Iri) -> Self {
        self.set_default_namespace(iri);
        self
    }

    pub fn with_rdf(mut self) -> Self {
        self.insert_rdf();
        self
    }

    pub fn with_rdfs(mut self) -> Self {
        self.insert_rdfs();
        self
    }

    pub fn with_xsd(mut self) -> Self {
        self.insert_xsd();
        self
    }

    pub fn with_owl(mut self) -> Self {
        self.insert_owl();
        self
    }

    pub fn with_dcterms(mut self) -> Self {
        self.insert_dcterms();
        self
    }

    // --------------------------------------------------------------------------------------------
    // Collection methods
    // --------------------------------------------------------------------------------------------

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn get_default_namespace(&self) -> Option<&Iri> {
        self.map.get_by_left(&None)
    }

    pub fn set_default_namespace(&mut self, iri: Iri) {
        let _ = self.map.insert(None, iri);
    }

    pub fn remove_default_namespace(&mut self) {
        let _ = self.map.remove_by_left(&None);
    }

    pub fn get_namespace(&self, prefix: &Name) -> Option<&Iri> {
        self.map.get_by_left(&Some(prefix.clone()))
    }

    pub fn get_prefix(&self, namespace: &Iri) -> Option<&Option<Name>> {
        self.map.get_by_right(namespace)
    }

    pub fn mappings(&self) -> impl Iterator<Item = (&Option<Name>, &Iri)> {
        self.map.iter()
    }

    pub fn insert(&mut self, prefix: Name, iri: Iri) {
        let _ = self.map.insert(Some(prefix), iri);
    }

    pub fn insert_rdf(&mut self) {
        self.insert(rdf_vocab::rdf::default_prefix().clone(), rdf_vocab::rdf::namespace().clone());
    }

    pub fn insert_rdfs(&mut self) {
        self.insert(rdf_vocab::rdfs::default_prefix().clone(), rdf_vocab::rdfs::namespace().clone());
    }

    pub fn insert_xsd(&mut self) {
        self.insert(rdf_vocab::xsd::default_prefix().clone(), rdf_vocab::xsd::namespace().clone());
    }

    pub fn insert_owl(&mut self) {
        self.insert(rdf_vocab::owl::default_prefix().clone(), rdf_vocab::owl::namespace().clone());
    }

    pub fn insert_dcterms(&mut self) {
        self.insert(
            rdf_vocab::dc::terms::default_prefix().clone(),
            rdf_vocab::dc::terms::namespace().clone(),
        );
    }

    pub fn remove(&mut self, prefix: &Name) {
        let _ = self.map.remove_by_left(&Some(prefix.clone()));
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    ///
    /// Merge `other` into `self` using `policy` to resolve conflicting prefixes. Prefixes present
    /// only in `other` are simply added.
    ///
    pub fn merge(&mut self, other: &PrefixMap, policy: ConflictPolicy) {
        for (prefix, iri) in other.mappings() {
            match self.map.get_by_left(prefix) {
                Some(existing) => {
                    let winner = policy(prefix.as_ref(), existing, iri);
                    let _ = self.map.insert(prefix.clone(), winner);
                }
                None => {
                    let _ = self.map.insert(prefix.clone(), iri.clone());
                }
            }
        }
    }

    // --------------------------------------------------------------------------------------------
    // QName Mapping
    // --------------------------------------------------------------------------------------------

    /// Expand a qname into an `Iri`, if its prefix (or the default namespace) is mapped.
    pub fn expand(&self, qname: &QName) -> Option<Iri> {
        let namespace = match qname.prefix() {
            Some(prefix) => self.get_namespace(prefix),
            None => self.get_default_namespace(),
        }?;
        namespace.make_name(qname.name().clone())
    }

    /// Compress an `Iri` into a qname, if its namespace portion is mapped.
    pub fn compress(&self, iri: &Iri) -> Option<QName> {
        let (namespace, name) = iri.split()?;
        match self.get_prefix(&namespace)? {
            None => QName::new_unqualified(name).ok(),
            Some(prefix) => QName::new(prefix.clone(), name).ok(),
        }
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
    fn common_mappings_resolve_known_prefixes() {
        let map = common_mappings();
        assert_eq!(
            map.get_namespace(&Name::from_str("rdf").unwrap()),
            Some(&Iri::from_str("http://www.w3.org/1999/02/22-rdf-syntax-ns#").unwrap())
        );
    }

    #[test]
    fn merge_respects_first_writer_wins() {
        let mut a = PrefixMap::default();
        a.insert(Name::from_str("ex").unwrap(), Iri::from_str("http://a/").unwrap());
        let mut b = PrefixMap::default();
        b.insert(Name::from_str("ex").unwrap(), Iri::from_str("http://b/").unwrap());

        a.merge(&b, first_writer_wins);
        assert_eq!(
            a.get_namespace(&Name::from_str("ex").unwrap()),
            Some(&Iri::from_str("http://a/").unwrap())
        );
    }

    #[test]
    fn expand_and_compress_round_trip() {
        let mut map = PrefixMap::default();
        map.insert(Name::from_str("ex").unwrap(), Iri::from_str("http://example.org/").unwrap());
        let qname = QName::from_str("ex:Thing").unwrap();
        let iri = map.expand(&qname).unwrap();
        assert_eq!(iri.to_string(), "http://example.org/Thing");
        assert_eq!(map.compress(&iri).unwrap().to_string(), "ex:Thing");
    }
}
