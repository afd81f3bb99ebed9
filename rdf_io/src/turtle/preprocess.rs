/*!
Phase 1 of Turtle serialization (§4.5 "preprocess"): classify every blank node by how many times
it occurs as an object (`root` / `inlinable` / `named`), and separately detect well-formed RDF
lists so they can be rendered with `( ... )` sugar instead of as nested `rdf:first`/`rdf:rest`
property lists.
*/

use rdf_core::graph::Graph;
use rdf_core::term::{BlankNode, Term};
use std::collections::{HashMap, HashSet};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BlankNodeRole {
    /// Never appears as an object anywhere in the graph: must be written as a normal top-level
    /// subject, `_:label`.
    Root,
    /// Appears as an object exactly once and is not the head of a well-formed list: inlined as
    /// `[ ... ]` at its single point of use.
    Inlinable,
    /// Appears as an object two or more times: written as a normal top-level subject and
    /// referenced elsewhere by `_:label`.
    Named,
}

pub(crate) struct Preprocessed {
    reference_counts: HashMap<BlankNode, usize>,
    list_elements: HashMap<BlankNode, Vec<Term>>,
    list_members: HashSet<BlankNode>,
}

impl Preprocessed {
    pub(crate) fn build(graph: &Graph) -> Self {
        let mut reference_counts: HashMap<BlankNode, usize> = HashMap::new();
        for triple in graph.triples() {
            if let Term::BlankNode(node) = &triple.object {
                *reference_counts.entry(node.clone()).or_insert(0) += 1;
            }
        }
        let (list_elements, list_members) = detect_lists(graph, &reference_counts);
        Self {
            reference_counts,
            list_elements,
            list_members,
        }
    }

    pub(crate) fn role(&self, node: &BlankNode) -> BlankNodeRole {
        match self.reference_counts.get(node).copied().unwrap_or(0) {
            0 => BlankNodeRole::Root,
            1 => BlankNodeRole::Inlinable,
            _ => BlankNodeRole::Named,
        }
    }

    /// The ordered element list for `node`, if it heads a well-formed RDF list referenced exactly
    /// once (referenced more than once, a list cannot be inlined at a single point of use and is
    /// rendered as an ordinary blank-node property list instead).
    pub(crate) fn list_elements(&self, node: &BlankNode) -> Option<&[Term]> {
        if self.reference_counts.get(node).copied().unwrap_or(0) != 1 {
            return None;
        }
        self.list_elements.get(node).map(Vec::as_slice)
    }

    /// `true` for any blank node that is part of a list's internal chain (the head or a `rest`
    /// link) and therefore never rendered as its own top-level subject or `[ ... ]` block.
    pub(crate) fn is_list_internal(&self, node: &BlankNode) -> bool {
        self.list_members.contains(node)
    }
}

/// Finds every blank node that heads a chain of `rdf:first`/`rdf:rest` links terminating at
/// `rdf:nil`, where every intermediate node (other than possibly the head) is referenced exactly
/// once. Returns a map from list head to its ordered elements, plus the set of every node that
/// took part in some detected list's chain.
fn detect_lists(
    graph: &Graph,
    reference_counts: &HashMap<BlankNode, usize>,
) -> (HashMap<BlankNode, Vec<Term>>, HashSet<BlankNode>) {
    let first = rdf_vocab::rdf::first();
    let rest = rdf_vocab::rdf::rest();
    let nil = Term::Iri(rdf_vocab::rdf::nil().clone());

    let mut heads = HashMap::new();
    let mut members = HashSet::new();
    let mut candidates: Vec<&BlankNode> = Vec::new();
    for term in graph.subjects() {
        if let Term::BlankNode(node) = term {
            candidates.push(node);
        }
    }

    'outer: for head in candidates {
        let mut elements = Vec::new();
        let mut chain = vec![head.clone()];
        let mut current = Term::BlankNode(head.clone());
        let mut visited = 0usize;
        loop {
            let Term::BlankNode(node) = &current else {
                continue 'outer;
            };
            let Some(description) = graph.description(&current) else {
                continue 'outer;
            };
            let Some([first_object]) = description.fetch(first) else {
                continue 'outer;
            };
            let Some([rest_object]) = description.fetch(rest) else {
                continue 'outer;
            };
            if description.predicates().count() != 2 {
                continue 'outer;
            }
            // every intermediate node past the head must be referenced exactly once, since a
            // shared tail cannot be exclusively owned by this list's rendering.
            if node != head && reference_counts.get(node).copied().unwrap_or(0) != 1 {
                continue 'outer;
            }
            elements.push(first_object.clone());
            visited += 1;
            if visited > graph.triple_count() {
                // malformed cyclic chain; bail out rather than loop forever.
                continue 'outer;
            }
            if *rest_object == nil {
                // a head never referenced as anyone's object is a root subject in its own right
                // (§4.5 step 5's "( ... )" sugar only applies at a list's point of use as an
                // object); excluding it here lets `should_emit_top_level` place it in the normal
                // subject block rotation instead of dropping it.
                let head_is_root = reference_counts.get(head).copied().unwrap_or(0) == 0;
                for member in chain {
                    if head_is_root && member == *head {
                        continue;
                    }
                    let _ = members.insert(member);
                }
                let _ = heads.insert(head.clone(), elements);
                continue 'outer;
            }
            if let Term::BlankNode(next) = rest_object {
                chain.push(next.clone());
            }
            current = rest_object.clone();
        }
    }
    (heads, members)
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_core::graph::Triple;
    use rdf_iri::Iri;
    use std::str::FromStr;

    fn iri(s: &str) -> Term {
        Term::Iri(Iri::from_str(s).unwrap())
    }

    #[test]
    fn a_root_blank_node_is_never_referenced() {
        let graph = Graph::empty().add([Triple::new(
            Term::BlankNode(BlankNode::new("b0")),
            Iri::from_str("http://ex/p").unwrap(),
            iri("http://ex/o"),
        )]);
        let pre = Preprocessed::build(&graph);
        assert_eq!(pre.role(&BlankNode::new("b0")), BlankNodeRole::Root);
    }

    #[test]
    fn detects_a_well_formed_two_element_list() {
        let head = BlankNode::new("head");
        let tail = BlankNode::new("tail");
        let graph = Graph::empty().add([
            Triple::new(iri("http://ex/s"), Iri::from_str("http://ex/items").unwrap(), Term::BlankNode(head.clone())),
            Triple::new(Term::BlankNode(head.clone()), rdf_vocab::rdf::first().clone(), iri("http://ex/a")),
            Triple::new(Term::BlankNode(head.clone()), rdf_vocab::rdf::rest().clone(), Term::BlankNode(tail.clone())),
            Triple::new(Term::BlankNode(tail.clone()), rdf_vocab::rdf::first().clone(), iri("http://ex/b")),
            Triple::new(Term::BlankNode(tail.clone()), rdf_vocab::rdf::rest().clone(), Term::Iri(rdf_vocab::rdf::nil().clone())),
        ]);
        let pre = Preprocessed::build(&graph);
        let elements = pre.list_elements(&head).expect("should detect the list");
        assert_eq!(elements, &[iri("http://ex/a"), iri("http://ex/b")]);
        assert!(pre.is_list_internal(&tail));
    }

    #[test]
    fn a_root_list_head_is_not_swallowed_as_list_internal() {
        let head = BlankNode::new("h");
        let graph = Graph::empty().add([
            Triple::new(Term::BlankNode(head.clone()), rdf_vocab::rdf::first().clone(), iri("http://ex/a")),
            Triple::new(Term::BlankNode(head.clone()), rdf_vocab::rdf::rest().clone(), Term::Iri(rdf_vocab::rdf::nil().clone())),
        ]);
        let pre = Preprocessed::build(&graph);
        assert_eq!(pre.role(&head), BlankNodeRole::Root);
        assert!(!pre.is_list_internal(&head), "a head nobody references must still surface as a top-level subject");
    }

    #[test]
    fn a_shared_tail_is_not_treated_as_a_list() {
        let head_a = BlankNode::new("ha");
        let head_b = BlankNode::new("hb");
        let shared_tail = BlankNode::new("shared");
        let graph = Graph::empty().add([
            Triple::new(Term::BlankNode(head_a.clone()), rdf_vocab::rdf::first().clone(), iri("http://ex/a")),
            Triple::new(Term::BlankNode(head_a.clone()), rdf_vocab::rdf::rest().clone(), Term::BlankNode(shared_tail.clone())),
            Triple::new(Term::BlankNode(head_b.clone()), rdf_vocab::rdf::first().clone(), iri("http://ex/b")),
            Triple::new(Term::BlankNode(head_b.clone()), rdf_vocab::rdf::rest().clone(), Term::BlankNode(shared_tail.clone())),
            Triple::new(Term::BlankNode(shared_tail.clone()), rdf_vocab::rdf::first().clone(), iri("http://ex/c")),
            Triple::new(Term::BlankNode(shared_tail.clone()), rdf_vocab::rdf::rest().clone(), Term::Iri(rdf_vocab::rdf::nil().clone())),
        ]);
        let pre = Preprocessed::build(&graph);
        assert!(pre.list_elements(&head_a).is_none());
        assert!(pre.list_elements(&head_b).is_none());
    }
}
