/*!
`Dataset`: an optionally named collection of named graphs plus one distinguished default graph
(§3 "Dataset", §4.3). A fourth element on each statement (the graph name; absent means the
default graph) routes it to the correct inner [`Graph`].
*/

use crate::graph::{Graph, GraphOptions, Triple};
use crate::term::Term;
use std::collections::HashMap;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// A [`Triple`] plus an optional graph name; `None` routes to the default graph (§3 "Quad").
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Quad {
    pub subject: Term,
    pub predicate: rdf_iri::Iri,
    pub object: Term,
    pub graph_name: Option<Term>,
}

impl Quad {
    pub fn new(subject: Term, predicate: rdf_iri::Iri, object: Term, graph_name: Option<Term>) -> Self {
        Self { subject, predicate, object, graph_name }
    }

    pub fn into_triple(self) -> Triple {
        Triple::new(self.subject, self.predicate, self.object)
    }
}

///
/// A default graph plus a mapping from graph-name to named graph.
///
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    name: Option<Term>,
    default_graph: Graph,
    graphs: HashMap<Term, Graph>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.default_graph == other.default_graph
            && self.graphs.len() == other.graphs.len()
            && self
                .graphs
                .iter()
                .all(|(name, graph)| other.graphs.get(name).is_some_and(|g| g == graph))
    }
}
impl Eq for Dataset {}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(quads: impl IntoIterator<Item = Quad>, name: Option<Term>) -> Self {
        let mut dataset = Self {
            name,
            default_graph: Graph::empty(),
            graphs: HashMap::new(),
        };
        for q in quads {
            dataset.add_one(q);
        }
        dataset
    }

    pub fn name(&self) -> Option<&Term> {
        self.name.as_ref()
    }

    pub fn default_graph(&self) -> &Graph {
        &self.default_graph
    }

    pub fn named_graph(&self, name: &Term) -> Option<&Graph> {
        self.graphs.get(name)
    }

    pub fn graph_names(&self) -> impl Iterator<Item = &Term> {
        self.graphs.keys()
    }

    pub fn graph_count(&self) -> usize {
        self.graphs.len() + 1
    }

    pub fn quads(&self) -> impl Iterator<Item = Quad> + '_ {
        let default_quads = self
            .default_graph
            .triples()
            .map(|t| Quad::new(t.subject, t.predicate, t.object, None));
        let named_quads = self.graphs.iter().flat_map(|(name, graph)| {
            graph
                .triples()
                .map(move |t| Quad::new(t.subject, t.predicate, t.object, Some(name.clone())))
        });
        default_quads.chain(named_quads)
    }

    fn graph_for(&mut self, graph_name: &Option<Term>) -> &mut Graph {
        match graph_name {
            None => &mut self.default_graph,
            Some(name) => self.graphs.entry(name.clone()).or_insert_with(|| {
                Graph::new(
                    [],
                    GraphOptions {
                        name: Some(name.clone()),
                        ..Default::default()
                    },
                )
            }),
        }
    }

    fn add_one(&mut self, quad: Quad) {
        let graph_name = quad.graph_name.clone();
        let triple = Triple::new(quad.subject, quad.predicate, quad.object);
        let graph = std::mem::take(self.graph_for(&graph_name));
        let updated = graph.add([triple]);
        match graph_name {
            None => self.default_graph = updated,
            Some(name) => {
                let _ = self.graphs.insert(name, updated);
            }
        }
    }

    pub fn add(mut self, quads: impl IntoIterator<Item = Quad>) -> Self {
        for q in quads {
            self.add_one(q);
        }
        self
    }

    /// Deletes `triples` (with no graph name) from the default graph only, per §4.3: "Deleting /
    /// querying a statement without a graph-name operates on the default graph only."
    pub fn delete(mut self, triples: &[Triple]) -> Self {
        self.default_graph = self.default_graph.delete(triples);
        self
    }

    pub fn delete_from_graph(mut self, graph_name: &Term, triples: &[Triple]) -> Self {
        if let Some(graph) = self.graphs.remove(graph_name) {
            let updated = graph.delete(triples);
            if !updated.is_empty() {
                let _ = self.graphs.insert(graph_name.clone(), updated);
            }
        }
        self
    }

    pub fn delete_named_graph(mut self, graph_name: &Term) -> Self {
        let _ = self.graphs.remove(graph_name);
        self
    }

    pub fn include(&self, quad: &Quad) -> bool {
        let triple = Triple::new(quad.subject.clone(), quad.predicate.clone(), quad.object.clone());
        match &quad.graph_name {
            None => self.default_graph.include(&triple),
            Some(name) => self.graphs.get(name).is_some_and(|g| g.include(&triple)),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Literal;
    use rdf_iri::Iri;
    use std::str::FromStr;

    fn iri(s: &str) -> Term {
        Term::Iri(Iri::from_str(s).unwrap())
    }

    fn p(s: &str) -> rdf_iri::Iri {
        Iri::from_str(s).unwrap()
    }

    fn lit(s: &str) -> Term {
        Term::Literal(Literal::new(s))
    }

    #[test]
    fn quad_without_graph_name_lands_in_default_graph() {
        let dataset = Dataset::empty().add([Quad::new(iri("http://ex/s"), p("http://ex/p"), lit("o"), None)]);
        assert_eq!(dataset.default_graph().triple_count(), 1);
        assert_eq!(dataset.graph_count(), 1);
    }

    #[test]
    fn quad_with_graph_name_routes_to_named_graph() {
        let g = iri("http://ex/g");
        let dataset = Dataset::empty().add([Quad::new(
            iri("http://ex/s"),
            p("http://ex/p"),
            lit("o"),
            Some(g.clone()),
        )]);
        assert!(dataset.default_graph().is_empty());
        assert_eq!(dataset.named_graph(&g).unwrap().triple_count(), 1);
    }

    #[test]
    fn delete_without_graph_name_only_touches_default_graph() {
        let g = iri("http://ex/g");
        let t = Triple::new(iri("http://ex/s"), p("http://ex/p"), lit("o"));
        let dataset = Dataset::empty()
            .add([
                Quad::new(t.subject.clone(), t.predicate.clone(), t.object.clone(), None),
                Quad::new(t.subject.clone(), t.predicate.clone(), t.object.clone(), Some(g.clone())),
            ])
            .delete(&[t]);
        assert!(dataset.default_graph().is_empty());
        assert_eq!(dataset.named_graph(&g).unwrap().triple_count(), 1);
    }
}
