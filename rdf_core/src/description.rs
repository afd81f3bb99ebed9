/*!
`Description`: all statements sharing one subject (§3 "Description", §4.1). A pair (subject,
predications) where `predications` maps predicate `Iri` to the *set* of its objects. Predications
are stored in a `BTreeMap` keyed on `Iri`'s `Ord` impl, which gives the Turtle writer's "rest of
the predicates in unspecified order" tail (§4.5 step 4) a free, reproducible tie-break with no
extra bookkeeping — the resolution recorded for spec §9 open question (b).
*/

use crate::coerce::{self, Coercible};
use crate::error::Error;
use crate::term::Term;
use rdf_iri::Iri;
use rdf_vocab::Vocabulary;
use std::collections::BTreeMap;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Everything known about one subject: its `Term` (an IRI or blank node, enforced at
/// construction by [`crate::coerce::coerce_subject`]) plus a predicate-to-objects mapping.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description {
    subject: Term,
    predications: BTreeMap<Iri, Vec<Term>>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Description {
    // --------------------------------------------------------------------------------------------
    // Constructors
    // --------------------------------------------------------------------------------------------

    /// An empty description for `subject`.
    pub fn new(subject: impl Into<Coercible>) -> Result<Self, Error> {
        Ok(Self {
            subject: coerce::coerce_subject(subject)?,
            predications: BTreeMap::new(),
        })
    }

    /// An empty description for `subject`, seeded with `(predicate, object)`.
    pub fn with(subject: impl Into<Coercible>, predicate: Iri, object: Term) -> Result<Self, Error> {
        let mut description = Self::new(subject)?;
        description.add_one(predicate, object);
        Ok(description)
    }

    // --------------------------------------------------------------------------------------------
    // Accessors
    // --------------------------------------------------------------------------------------------

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn is_empty(&self) -> bool {
        self.predications.is_empty()
    }

    /// The number of distinct (predicate, object) pairs.
    pub fn count(&self) -> usize {
        self.predications.values().map(|objects| objects.len()).sum()
    }

    pub fn describes(&self, subject: &Term) -> bool {
        &self.subject == subject
    }

    /// `true` iff `self` and `other` have the same subject and the same (predicate, object)
    /// pairs, order irrelevant.
    pub fn equal(&self, other: &Description) -> bool {
        self.subject == other.subject
            && self.predications.len() == other.predications.len()
            && self.predications.iter().all(|(p, objs)| {
                other
                    .predications
                    .get(p)
                    .is_some_and(|other_objs| same_elements(objs, other_objs))
            })
    }

    pub fn predicates(&self) -> impl Iterator<Item = &Iri> {
        self.predications.keys()
    }

    /// All objects across all predicates. Resources only (IRIs and blank nodes), per §4.1's
    /// "`objects` returns only resources by default — not literals — unless a filter predicate is
    /// provided."
    pub fn objects(&self) -> Vec<&Term> {
        self.objects_filtered(|t| t.is_resource())
    }

    pub fn objects_filtered(&self, filter: impl Fn(&Term) -> bool) -> Vec<&Term> {
        self.predications
            .values()
            .flatten()
            .filter(|t| filter(t))
            .collect()
    }

    /// Resource objects treated as subjects of further descriptions elsewhere in the graph.
    pub fn resources(&self) -> Vec<&Term> {
        self.objects_filtered(|t| t.is_resource())
    }

    pub fn fetch(&self, predicate: &Iri) -> Option<&[Term]> {
        self.predications.get(predicate).map(|v| v.as_slice())
    }

    pub fn get(&self, predicate: &Iri) -> Option<&[Term]> {
        self.fetch(predicate)
    }

    pub fn first(&self, predicate: &Iri) -> Option<&Term> {
        self.fetch(predicate).and_then(|objects| objects.first())
    }

    pub fn include(&self, predicate: &Iri, object: &Term) -> bool {
        self.predications
            .get(predicate)
            .is_some_and(|objects| objects.contains(object))
    }

    /// Native-value projection: maps each predicate to the `mapper`-applied objects. When
    /// `mapper` is omitted, objects are projected via their `Display` form (§4.1 `values`).
    pub fn values(&self, mapper: Option<&dyn Fn(&Iri, &Term) -> String>) -> BTreeMap<Iri, Vec<String>> {
        self.predications
            .iter()
            .map(|(p, objects)| {
                let values = objects
                    .iter()
                    .map(|o| match mapper {
                        Some(f) => f(p, o),
                        None => o.to_string(),
                    })
                    .collect();
                (p.clone(), values)
            })
            .collect()
    }

    /// Restriction to the listed predicates only.
    pub fn take(&self, predicates: &[Iri]) -> Description {
        let mut result = Description {
            subject: self.subject.clone(),
            predications: BTreeMap::new(),
        };
        for p in predicates {
            if let Some(objects) = self.predications.get(p) {
                let _ = result.predications.insert(p.clone(), objects.clone());
            }
        }
        result
    }

    // --------------------------------------------------------------------------------------------
    // Mutators (all consume and return `Self`, per §3's "Lifecycle: immutable values")
    // --------------------------------------------------------------------------------------------

    fn add_one(&mut self, predicate: Iri, object: Term) {
        let objects = self.predications.entry(predicate).or_default();
        if !objects.contains(&object) {
            objects.push(object);
        }
    }

    /// Inserts every `(predicate, object)` pair; duplicates collapse (§4.1 `add`).
    pub fn add(mut self, predicate: Iri, objects: impl IntoIterator<Item = Term>) -> Self {
        for object in objects {
            self.add_one(predicate.clone(), object);
        }
        self
    }

    /// Merge `other`'s predications into `self`. A no-op if `other` names a different subject
    /// (§4.1 "Adding a Description with another subject is a no-op").
    pub fn add_description(mut self, other: &Description) -> Self {
        if self.subject != other.subject {
            return self;
        }
        for (predicate, objects) in &other.predications {
            for object in objects {
                self.add_one(predicate.clone(), object.clone());
            }
        }
        self
    }

    /// Replaces all objects currently under `predicate` with `objects`; other predicates are
    /// untouched (§4.1 `put`, tested as scenario S5).
    pub fn put(mut self, predicate: Iri, objects: impl IntoIterator<Item = Term>) -> Self {
        let mut deduped = Vec::new();
        for object in objects {
            if !deduped.contains(&object) {
                deduped.push(object);
            }
        }
        if deduped.is_empty() {
            let _ = self.predications.remove(&predicate);
        } else {
            let _ = self.predications.insert(predicate, deduped);
        }
        self
    }

    /// Removes the listed `(predicate, object)` pairs; a predicate whose object set becomes
    /// empty is removed entirely (§4.1 `delete`).
    pub fn delete(mut self, predicate: &Iri, objects: &[Term]) -> Self {
        if let Some(existing) = self.predications.get_mut(predicate) {
            existing.retain(|o| !objects.contains(o));
            if existing.is_empty() {
                let _ = self.predications.remove(predicate);
            }
        }
        self
    }

    /// Removes all statements for the given predicates (§4.1 `delete_predicates`).
    pub fn delete_predicates(mut self, predicates: &[Iri]) -> Self {
        for p in predicates {
            let _ = self.predications.remove(p);
        }
        self
    }

    /// If `predicate` is present, replaces its objects with `f(current)`; `f` returning an empty
    /// vector removes the predicate. If absent and `init` is supplied, inserts it; `f` is never
    /// called on the initial value (§4.1 `update`).
    pub fn update(
        mut self,
        predicate: Iri,
        init: Option<Vec<Term>>,
        f: impl FnOnce(&[Term]) -> Vec<Term>,
    ) -> Self {
        match self.predications.get(&predicate) {
            Some(current) => {
                let updated = f(current);
                if updated.is_empty() {
                    let _ = self.predications.remove(&predicate);
                } else {
                    let _ = self.predications.insert(predicate, updated);
                }
            }
            None => {
                if let Some(init) = init {
                    if !init.is_empty() {
                        let _ = self.predications.insert(predicate, init);
                    }
                }
            }
        }
        self
    }

    /// Removes and returns one `(predicate, object)` pair; unspecified which (§4.1 `pop`).
    pub fn pop(mut self) -> (Self, Option<(Iri, Term)>) {
        let Some(predicate) = self.predications.keys().next().cloned() else {
            return (self, None);
        };
        let objects = self.predications.get_mut(&predicate).expect("key just read");
        let object = objects.remove(0);
        if objects.is_empty() {
            let _ = self.predications.remove(&predicate);
        }
        (self, Some((predicate, object)))
    }
}

fn same_elements(a: &[Term], b: &[Term]) -> bool {
    a.len() == b.len() && a.iter().all(|t| b.contains(t))
}

/// Coerces a caller-supplied predicate/object and appends it, failing with `InvalidTerm` on any
/// uncoercible input — the narrow entry point most `rdf_io` readers use to build a description
/// one triple at a time.
pub fn coerce_and_add(
    description: Description,
    predicate: impl Into<Coercible>,
    object: impl Into<Coercible>,
    vocabulary: Option<&dyn Vocabulary>,
) -> Result<Description, Error> {
    let predicate = coerce::coerce_predicate(predicate, vocabulary)?;
    let object = coerce::coerce_object(object, vocabulary)?;
    Ok(description.add(predicate, [object]))
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Literal;
    use std::str::FromStr;

    fn p(s: &str) -> Iri {
        Iri::from_str(s).unwrap()
    }

    fn lit(s: &str) -> Term {
        Term::Literal(Literal::new(s))
    }

    #[test]
    fn add_is_idempotent() {
        let d = Description::new("http://example.org/s")
            .unwrap()
            .add(p("http://example.org/p"), [lit("o")]);
        let d2 = d.clone().add(p("http://example.org/p"), [lit("o")]);
        assert!(d.equal(&d2));
        assert_eq!(d2.count(), 1);
    }

    #[test]
    fn put_replaces_only_the_named_predicate() {
        let d = Description::new("http://example.org/s")
            .unwrap()
            .add(p("http://example.org/p1"), [lit("o1")])
            .add(p("http://example.org/p2"), [lit("o2")]);
        let d = d.put(p("http://example.org/p1"), [lit("o3")]);
        assert_eq!(d.fetch(&p("http://example.org/p1")), Some(&[lit("o3")][..]));
        assert_eq!(d.fetch(&p("http://example.org/p2")), Some(&[lit("o2")][..]));
    }

    #[test]
    fn delete_removes_empty_predicate_entirely() {
        let d = Description::new("http://example.org/s")
            .unwrap()
            .add(p("http://example.org/p"), [lit("o")]);
        let d = d.delete(&p("http://example.org/p"), &[lit("o")]);
        assert!(d.fetch(&p("http://example.org/p")).is_none());
        assert!(d.is_empty());
    }

    #[test]
    fn add_description_with_mismatched_subject_is_a_no_op() {
        let d1 = Description::new("http://example.org/a").unwrap();
        let d2 = Description::new("http://example.org/b")
            .unwrap()
            .add(p("http://example.org/p"), [lit("o")]);
        let merged = d1.add_description(&d2);
        assert!(merged.is_empty());
    }

    #[test]
    fn objects_excludes_literals_by_default() {
        let d = Description::new("http://example.org/s")
            .unwrap()
            .add(p("http://example.org/p1"), [lit("o")])
            .add(p("http://example.org/p2"), [Term::Iri(p("http://example.org/r"))]);
        assert_eq!(d.objects(), vec![&Term::Iri(p("http://example.org/r"))]);
    }
}
