/*!
`Graph`: an optionally named set of triples, indexed by subject to [`Description`] (§3 "Graph",
§4.2). Carries an optional [`PrefixMap`] and base `Iri` as metadata — both are ignored by
[`Graph::equal`] (§3: "set equality ... considers `descriptions` and `name` only").
*/

use crate::coerce::{self, Coercible};
use crate::description::Description;
use crate::diff::GraphDiff;
use crate::error::Error;
use crate::prefix::{self, ConflictPolicy, PrefixMap};
use crate::term::{BlankNode, Term};
use rdf_iri::Iri;
use rdf_vocab::Vocabulary;
use std::collections::HashMap;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// A (subject, predicate, object) statement (§3 "Triple").
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: Iri, object: Term) -> Self {
        Self { subject, predicate, object }
    }
}

///
/// Options accepted by [`Graph::new`] (§4.2): `name`, `prefixes`, `base_iri`.
///
#[derive(Clone, Debug, Default)]
pub struct GraphOptions {
    pub name: Option<Term>,
    pub prefixes: Option<PrefixMap>,
    pub base_iri: Option<Iri>,
}

///
/// An optionally named set of triples, indexed by subject.
///
#[derive(Clone, Debug, Default)]
pub struct Graph {
    name: Option<Term>,
    descriptions: HashMap<Term, Description>,
    prefixes: PrefixMap,
    base_iri: Option<Iri>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}
impl Eq for Graph {}

impl Graph {
    // --------------------------------------------------------------------------------------------
    // Constructors
    // --------------------------------------------------------------------------------------------

    /// An empty, unnamed graph with no prefixes or base IRI.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a graph from `triples` and `opts` (§4.2 `new`). When seeded from another `Graph`
    /// via [`Graph::add_graph`]-style construction, use [`Graph::from_graph`] instead, which
    /// inherits prefixes/base IRI and always drops the source's name.
    pub fn new(triples: impl IntoIterator<Item = Triple>, opts: GraphOptions) -> Self {
        let mut graph = Self {
            name: opts.name,
            descriptions: HashMap::new(),
            prefixes: opts.prefixes.unwrap_or_default(),
            base_iri: opts.base_iri,
        };
        for t in triples {
            graph.add_one(t);
        }
        graph
    }

    /// Seeds a new, unnamed graph from `other`: prefixes and base IRI are inherited unless
    /// overridden, the source's name is always dropped (§4.2 `new`).
    pub fn from_graph(other: &Graph, opts: GraphOptions) -> Self {
        Self::new(
            other.triples(),
            GraphOptions {
                name: opts.name,
                prefixes: Some(opts.prefixes.unwrap_or_else(|| other.prefixes.clone())),
                base_iri: opts.base_iri.or_else(|| other.base_iri.clone()),
            },
        )
    }

    // --------------------------------------------------------------------------------------------
    // Accessors
    // --------------------------------------------------------------------------------------------

    pub fn name(&self) -> Option<&Term> {
        self.name.as_ref()
    }

    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    pub fn base_iri(&self) -> Option<&Iri> {
        self.base_iri.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    pub fn subject_count(&self) -> usize {
        self.descriptions.len()
    }

    pub fn triple_count(&self) -> usize {
        self.descriptions.values().map(Description::count).sum()
    }

    pub fn subjects(&self) -> impl Iterator<Item = &Term> {
        self.descriptions.keys()
    }

    pub fn predicates(&self) -> Vec<&Iri> {
        let mut set: Vec<&Iri> = Vec::new();
        for description in self.descriptions.values() {
            for p in description.predicates() {
                if !set.contains(&p) {
                    set.push(p);
                }
            }
        }
        set
    }

    pub fn objects(&self) -> Vec<&Term> {
        self.descriptions.values().flat_map(Description::objects).collect()
    }

    pub fn resources(&self) -> Vec<&Term> {
        self.objects()
    }

    pub fn description(&self, subject: &Term) -> Option<&Description> {
        self.descriptions.get(subject)
    }

    pub fn triples(&self) -> impl Iterator<Item = Triple> + '_ {
        self.descriptions.values().flat_map(|d| {
            d.predicates().flat_map(move |p| {
                d.fetch(p)
                    .into_iter()
                    .flatten()
                    .map(move |o| Triple::new(d.subject().clone(), p.clone(), o.clone()))
            })
        })
    }

    pub fn include(&self, triple: &Triple) -> bool {
        self.descriptions
            .get(&triple.subject)
            .is_some_and(|d| d.include(&triple.predicate, &triple.object))
    }

    /// Names and triples must match; prefix map and base IRI are ignored (§4.2 `equal?`).
    pub fn equal(&self, other: &Graph) -> bool {
        self.name == other.name
            && self.descriptions.len() == other.descriptions.len()
            && self.descriptions.iter().all(|(s, d)| {
                other.descriptions.get(s).is_some_and(|other_d| d.equal(other_d))
            })
    }

    /// Restriction to the given subjects/predicates; `None` for either means "all" (§4.2 `take`).
    pub fn take(&self, subjects: Option<&[Term]>, predicates: Option<&[Iri]>) -> Graph {
        let mut result = Graph {
            name: self.name.clone(),
            descriptions: HashMap::new(),
            prefixes: self.prefixes.clone(),
            base_iri: self.base_iri.clone(),
        };
        for (subject, description) in &self.descriptions {
            if subjects.is_some_and(|list| !list.contains(subject)) {
                continue;
            }
            let restricted = match predicates {
                Some(list) => description.take(list),
                None => description.clone(),
            };
            if !restricted.is_empty() {
                let _ = result.descriptions.insert(subject.clone(), restricted);
            }
        }
        result
    }

    pub fn diff(&self, other: &Graph) -> GraphDiff {
        GraphDiff::between(self, other)
    }

    /// Replaces every blank node with a fresh well-known IRI under
    /// `{base}/.well-known/genid/{uuid}`, consistently across all occurrences.
    pub fn skolemize(&self, base: &Iri) -> Result<Graph, Error> {
        use rdf_iri::genid;
        let mut mapping: HashMap<BlankNode, Term> = HashMap::new();
        let mut skolemize_term = |term: &Term, mapping: &mut HashMap<BlankNode, Term>| -> Result<Term, Error> {
            match term {
                Term::BlankNode(node) => {
                    if let Some(existing) = mapping.get(node) {
                        Ok(existing.clone())
                    } else {
                        let iri = genid(base)?;
                        let replacement = Term::Iri(iri);
                        let _ = mapping.insert(node.clone(), replacement.clone());
                        Ok(replacement)
                    }
                }
                other => Ok(other.clone()),
            }
        };
        let mut triples = Vec::new();
        for triple in self.triples() {
            let subject = skolemize_term(&triple.subject, &mut mapping)?;
            let object = skolemize_term(&triple.object, &mut mapping)?;
            triples.push(Triple::new(subject, triple.predicate, object));
        }
        Ok(Graph::new(
            triples,
            GraphOptions {
                name: self.name.clone(),
                prefixes: Some(self.prefixes.clone()),
                base_iri: self.base_iri.clone(),
            },
        ))
    }

    // --------------------------------------------------------------------------------------------
    // Mutators
    // --------------------------------------------------------------------------------------------

    fn add_one(&mut self, triple: Triple) {
        let updated = match self.descriptions.remove(&triple.subject) {
            Some(existing) => existing.add(triple.predicate, [triple.object]),
            None => Description::with(triple.subject.clone(), triple.predicate, triple.object)
                .expect("subject already coerced"),
        };
        let _ = self.descriptions.insert(triple.subject, updated);
    }

    /// Merges `triples` into `self`; duplicate triples collapse (§4.2 `add`).
    pub fn add(mut self, triples: impl IntoIterator<Item = Triple>) -> Self {
        for t in triples {
            self.add_one(t);
        }
        self
    }

    /// Merges another graph's triples and prefix map (first-writer-wins on conflicting prefixes,
    /// per §4.2).
    pub fn add_graph(mut self, other: &Graph) -> Self {
        for t in other.triples() {
            self.add_one(t);
        }
        self.prefixes.merge(&other.prefixes, prefix::first_writer_wins);
        self
    }

    /// Coerces `subject`/`predicate`/`object` and appends the resulting triple, failing with
    /// `InvalidTerm` on any input that cannot be coerced.
    pub fn add_coerced(
        self,
        subject: impl Into<Coercible>,
        predicate: impl Into<Coercible>,
        object: impl Into<Coercible>,
        vocabulary: Option<&dyn Vocabulary>,
    ) -> Result<Self, Error> {
        let subject = coerce::coerce_subject(subject)?;
        let predicate = coerce::coerce_predicate(predicate, vocabulary)?;
        let object = coerce::coerce_object(object, vocabulary)?;
        Ok(self.add([Triple::new(subject, predicate, object)]))
    }

    /// For every (s,p) pair in `triples`, replaces the entire object set under (s,p); other
    /// (s,p') pairs for the same subject are preserved (§4.2 `put`).
    pub fn put(mut self, triples: impl IntoIterator<Item = Triple>) -> Self {
        let mut by_subject_predicate: HashMap<(Term, Iri), Vec<Term>> = HashMap::new();
        for t in triples {
            by_subject_predicate
                .entry((t.subject, t.predicate))
                .or_default()
                .push(t.object);
        }
        for ((subject, predicate), objects) in by_subject_predicate {
            let description = self
                .descriptions
                .remove(&subject)
                .unwrap_or_else(|| Description::new(subject.clone()).expect("subject already coerced"));
            let updated = description.put(predicate, objects);
            if !updated.is_empty() {
                let _ = self.descriptions.insert(subject, updated);
            }
        }
        self
    }

    /// Symmetric to `add`: emptied descriptions are removed (§4.2 `delete`).
    pub fn delete(mut self, triples: &[Triple]) -> Self {
        for t in triples {
            if let Some(description) = self.descriptions.remove(&t.subject) {
                let updated = description.delete(&t.predicate, std::slice::from_ref(&t.object));
                if !updated.is_empty() {
                    let _ = self.descriptions.insert(t.subject.clone(), updated);
                }
            }
        }
        self
    }

    /// Deletes `other`'s triples from `self`, regardless of the two graphs' names (§4.2
    /// `delete`, symmetric to `add_graph`).
    pub fn delete_graph(self, other: &Graph) -> Self {
        let triples: Vec<Triple> = other.triples().collect();
        self.delete(&triples)
    }

    /// Removes entire descriptions (§4.2 `delete_subjects`).
    pub fn delete_subjects(mut self, subjects: &[Term]) -> Self {
        for s in subjects {
            let _ = self.descriptions.remove(s);
        }
        self
    }

    /// Same semantics as [`Description::update`] at the subject level; `f` may return a
    /// `Description` whose subject differs from `subject`, and the returned subject is rewritten
    /// to `subject` (§4.2 `update`).
    pub fn update(
        mut self,
        subject: Term,
        init: Option<Description>,
        f: impl FnOnce(Option<&Description>) -> Option<Description>,
    ) -> Self {
        let current = self.descriptions.get(&subject);
        match f(current) {
            Some(mut updated) => {
                updated = rename_subject(updated, subject.clone());
                if updated.is_empty() {
                    let _ = self.descriptions.remove(&subject);
                } else {
                    let _ = self.descriptions.insert(subject, updated);
                }
            }
            None => {
                if current.is_none() {
                    if let Some(init) = init {
                        let _ = self.descriptions.insert(subject, init);
                    }
                } else {
                    let _ = self.descriptions.remove(&subject);
                }
            }
        }
        self
    }

    pub fn fetch(&self, subject: &Term) -> Option<&Description> {
        self.descriptions.get(subject)
    }

    pub fn get(&self, subject: &Term) -> Option<&Description> {
        self.fetch(subject)
    }

    pub fn pop(mut self, subject: &Term) -> (Self, Option<Description>) {
        let removed = self.descriptions.remove(subject);
        (self, removed)
    }

    /// Empties triples but retains name, prefixes, and base IRI (§4.2 `clear`).
    pub fn clear(mut self) -> Self {
        self.descriptions.clear();
        self
    }

    pub fn clear_metadata(mut self) -> Self {
        self.prefixes.clear();
        self.base_iri = None;
        self
    }

    pub fn add_prefixes(mut self, other: &PrefixMap, policy: Option<ConflictPolicy>) -> Self {
        self.prefixes.merge(other, policy.unwrap_or(prefix::last_writer_wins));
        self
    }

    pub fn delete_prefixes(mut self, names: &[rdf_iri::Name]) -> Self {
        for name in names {
            self.prefixes.remove(name);
        }
        self
    }

    pub fn clear_prefixes(mut self) -> Self {
        self.prefixes.clear();
        self
    }

    pub fn set_base_iri(mut self, iri: Iri) -> Self {
        self.base_iri = Some(iri);
        self
    }

    pub fn clear_base_iri(mut self) -> Self {
        self.base_iri = None;
        self
    }
}

fn rename_subject(description: Description, subject: Term) -> Description {
    if description.subject() == &subject {
        return description;
    }
    let mut result = Description::new(subject).expect("subject already coerced");
    for predicate in description.predicates() {
        if let Some(objects) = description.fetch(predicate) {
            result = result.add(predicate.clone(), objects.iter().cloned());
        }
    }
    result
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Literal;
    use std::str::FromStr;

    fn iri(s: &str) -> Term {
        Term::Iri(Iri::from_str(s).unwrap())
    }

    fn p(s: &str) -> Iri {
        Iri::from_str(s).unwrap()
    }

    fn lit(s: &str) -> Term {
        Term::Literal(Literal::new(s))
    }

    #[test]
    fn add_is_idempotent() {
        let t = Triple::new(iri("http://ex/s"), p("http://ex/p"), lit("o"));
        let g1 = Graph::empty().add([t.clone()]);
        let g2 = g1.clone().add([t]);
        assert!(g1.equal(&g2));
    }

    #[test]
    fn put_replaces_only_named_predicate_objects() {
        let g = Graph::empty().add([
            Triple::new(iri("http://ex/s"), p("http://ex/p"), lit("o1")),
        ]);
        let g = g.put([Triple::new(iri("http://ex/s"), p("http://ex/p"), lit("o2"))]);
        let triples: Vec<_> = g.triples().collect();
        assert_eq!(triples, vec![Triple::new(iri("http://ex/s"), p("http://ex/p"), lit("o2"))]);
    }

    #[test]
    fn equal_ignores_prefixes_and_base_iri() {
        let t = Triple::new(iri("http://ex/s"), p("http://ex/p"), lit("o"));
        let g1 = Graph::new([t.clone()], GraphOptions::default());
        let g2 = Graph::new(
            [t],
            GraphOptions {
                base_iri: Some(Iri::from_str("http://ex/").unwrap()),
                ..Default::default()
            },
        );
        assert_eq!(g1, g2);
    }

    #[test]
    fn merge_prefix_conflict_is_first_writer_wins() {
        let mut prefixes_a = PrefixMap::default();
        prefixes_a.insert(rdf_iri::Name::from_str("ex").unwrap(), Iri::from_str("http://a/").unwrap());
        let mut prefixes_b = PrefixMap::default();
        prefixes_b.insert(rdf_iri::Name::from_str("ex").unwrap(), Iri::from_str("http://b/").unwrap());

        let g1 = Graph::new([], GraphOptions { prefixes: Some(prefixes_a), ..Default::default() });
        let g2 = Graph::new([], GraphOptions { prefixes: Some(prefixes_b), ..Default::default() });
        let merged = g1.add_graph(&g2);
        assert_eq!(
            merged.prefixes().get_namespace(&rdf_iri::Name::from_str("ex").unwrap()),
            Some(&Iri::from_str("http://a/").unwrap())
        );
    }
}
