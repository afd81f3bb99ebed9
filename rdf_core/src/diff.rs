/*!
Structural diff between two graphs (§2 component 10, "Dataset and Diff"): the set difference of
their triples in both directions.
*/

use crate::graph::{Graph, Triple};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The triples present in one graph but not the other, in both directions.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphDiff {
    /// Triples present in the right-hand graph but not the left.
    pub added: Vec<Triple>,
    /// Triples present in the left-hand graph but not the right.
    pub removed: Vec<Triple>,
}

impl GraphDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub(crate) fn between(left: &Graph, right: &Graph) -> Self {
        let removed = left.triples().filter(|t| !right.include(t)).collect();
        let added = right.triples().filter(|t| !left.include(t)).collect();
        Self { added, removed }
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphOptions;
    use crate::term::{Literal, Term};
    use rdf_iri::Iri;
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
    fn diff_reports_added_and_removed() {
        let shared = Triple::new(iri("http://ex/s"), p("http://ex/p"), lit("shared"));
        let only_left = Triple::new(iri("http://ex/s"), p("http://ex/p"), lit("left"));
        let only_right = Triple::new(iri("http://ex/s"), p("http://ex/p"), lit("right"));

        let left = Graph::new([shared.clone(), only_left.clone()], GraphOptions::default());
        let right = Graph::new([shared, only_right.clone()], GraphOptions::default());

        let diff = left.diff(&right);
        assert_eq!(diff.removed, vec![only_left]);
        assert_eq!(diff.added, vec![only_right]);
    }

    #[test]
    fn identical_graphs_have_empty_diff() {
        let t = Triple::new(iri("http://ex/s"), p("http://ex/p"), lit("o"));
        let g = Graph::new([t], GraphOptions::default());
        assert!(g.diff(&g).is_empty());
    }
}
