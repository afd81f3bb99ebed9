/*!
`Bgp`, and the two matching strategies over it (§4.4 "Execution contract"): [`MaterializingMatcher`]
eagerly produces the full solution multiset, and [`StreamingMatcher`] produces the same multiset
lazily, one solution per `next()` call, doing work bounded by the pattern count rather than the
size of the dataset already consumed. Both are built on the same per-triple extend step, so they
can never disagree on which solutions exist — only on when each is computed.
*/

use crate::pattern::{PatternTerm, TriplePattern};
use crate::planner;
use crate::solution::Solution;
use rdf_core::error::{self, Error};
use rdf_core::graph::{Graph, Triple};
use rdf_core::term::Term;
use rdf_iri::Iri;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A basic graph pattern: a non-empty list of triple patterns, ordered by the planner for
/// selectivity before any matching begins.
///
#[derive(Clone, Debug)]
pub struct Bgp {
    patterns: Vec<TriplePattern>,
}

impl Bgp {
    pub fn new(patterns: Vec<TriplePattern>) -> Result<Self, Error> {
        if patterns.is_empty() {
            return Err(error::invalid_query_error(
                "a basic graph pattern requires at least one triple pattern",
            ));
        }
        Ok(Self {
            patterns: planner::plan(patterns),
        })
    }

    pub fn patterns(&self) -> &[TriplePattern] {
        &self.patterns
    }
}

///
/// Solves a [`Bgp`] against a [`Graph`] eagerly, returning the complete solution multiset.
///
#[derive(Debug, Default)]
pub struct MaterializingMatcher;

impl MaterializingMatcher {
    pub fn solve(bgp: &Bgp, graph: &Graph) -> Vec<Solution> {
        let mut solutions = vec![Solution::empty()];
        for pattern in bgp.patterns() {
            let mut next = Vec::new();
            for solution in &solutions {
                next.extend(step(graph, pattern, solution));
            }
            solutions = next;
            if solutions.is_empty() {
                break;
            }
        }
        solutions
    }
}

///
/// Solves a [`Bgp`] against a [`Graph`] lazily via depth-first backtracking over an explicit
/// stack of frames, one per pattern depth. Each call to `next()` does work proportional to the
/// number of patterns in the BGP, not to the size of the graph or to solutions already produced.
///
pub struct StreamingMatcher<'g> {
    graph: &'g Graph,
    patterns: &'g [TriplePattern],
    stack: Vec<Frame<'g>>,
}

struct Frame<'g> {
    candidates: Box<dyn Iterator<Item = Triple> + 'g>,
    solution: Solution,
}

impl<'g> StreamingMatcher<'g> {
    pub fn new(bgp: &'g Bgp, graph: &'g Graph) -> Self {
        let patterns = bgp.patterns();
        let mut matcher = Self {
            graph,
            patterns,
            stack: Vec::with_capacity(patterns.len()),
        };
        if !patterns.is_empty() {
            matcher.push_frame(Solution::empty());
        }
        matcher
    }

    fn push_frame(&mut self, solution: Solution) {
        let depth = self.stack.len();
        let candidates = candidates_for(self.graph, &self.patterns[depth]);
        self.stack.push(Frame { candidates, solution });
    }
}

impl<'g> Iterator for StreamingMatcher<'g> {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let frame = self.stack.last_mut().expect("depth checked above");
            let Some(triple) = frame.candidates.next() else {
                let _ = self.stack.pop();
                continue;
            };
            let base_solution = frame.solution.clone();
            let pattern = &self.patterns[depth];

            match extend(pattern, &triple, &base_solution) {
                Some(extended) => {
                    if depth + 1 == self.patterns.len() {
                        return Some(extended);
                    }
                    self.push_frame(extended);
                }
                None => continue,
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn step(graph: &Graph, pattern: &TriplePattern, solution: &Solution) -> Vec<Solution> {
    candidates_for(graph, pattern).filter_map(|t| extend(pattern, &t, solution)).collect()
}

/// Candidate triples a pattern could match, narrowed by whichever of subject/predicate is
/// concrete (§4.4 step 2): a concrete subject goes straight to its [`Description`](rdf_core::description::Description),
/// a concrete predicate within that description goes straight to its object list. Only a pattern
/// with both subject and predicate unbound falls back to a full scan.
fn candidates_for<'g>(graph: &'g Graph, pattern: &TriplePattern) -> Box<dyn Iterator<Item = Triple> + 'g> {
    match (pattern.subject.as_concrete(), pattern.predicate.as_concrete()) {
        (Some(subject), Some(predicate)) => {
            let subject = subject.clone();
            let predicate = predicate.as_iri().expect("a concrete predicate position is always an IRI").clone();
            let objects: &'g [Term] = graph
                .description(&subject)
                .and_then(|description| description.fetch(&predicate))
                .unwrap_or(&[]);
            Box::new(objects.iter().cloned().map(move |object| Triple::new(subject.clone(), predicate.clone(), object)))
        }
        (Some(subject), None) => {
            let subject = subject.clone();
            match graph.description(&subject) {
                Some(description) => Box::new(description.predicates().flat_map(move |predicate| {
                    let subject = subject.clone();
                    let predicate = predicate.clone();
                    description
                        .fetch(&predicate)
                        .expect("predicate came from this description's own key set")
                        .iter()
                        .cloned()
                        .map(move |object| Triple::new(subject.clone(), predicate.clone(), object))
                })),
                None => Box::new(std::iter::empty()),
            }
        }
        (None, Some(predicate)) => {
            let predicate = predicate.as_iri().expect("a concrete predicate position is always an IRI").clone();
            Box::new(graph.subjects().flat_map(move |subject| {
                let predicate = predicate.clone();
                let subject = subject.clone();
                graph
                    .description(&subject)
                    .and_then(|description| description.fetch(&predicate))
                    .into_iter()
                    .flatten()
                    .cloned()
                    .map(move |object| Triple::new(subject.clone(), predicate.clone(), object))
            }))
        }
        (None, None) => Box::new(graph.triples()),
    }
}

/// Attempts to extend `solution` with the bindings implied by matching `pattern` against
/// `triple`; `None` if a variable already bound in `solution` or earlier in this same pattern
/// would have to take on two different values (§4.4's join consistency requirement).
fn extend(pattern: &TriplePattern, triple: &Triple, solution: &Solution) -> Option<Solution> {
    let solution = bind(&pattern.subject, triple.subject.clone(), solution.clone())?;
    let solution = bind_iri(&pattern.predicate, triple.predicate.clone(), solution)?;
    bind(&pattern.object, triple.object.clone(), solution)
}

fn bind(pattern_term: &PatternTerm, value: Term, solution: Solution) -> Option<Solution> {
    match pattern_term {
        PatternTerm::Concrete(expected) => (*expected == value).then_some(solution),
        PatternTerm::Variable(name) => match solution.get(name) {
            Some(existing) => (*existing == value).then_some(solution),
            None => Some(solution.extended(name, value)),
        },
    }
}

fn bind_iri(pattern_term: &PatternTerm, value: Iri, solution: Solution) -> Option<Solution> {
    bind(pattern_term, Term::Iri(value), solution)
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternTerm;
    use rdf_core::graph::GraphOptions;
    use rdf_core::term::Literal;
    use std::str::FromStr;

    fn iri(s: &str) -> Term {
        Term::Iri(Iri::from_str(s).unwrap())
    }

    fn p(s: &str) -> Iri {
        Iri::from_str(s).unwrap()
    }

    fn sample_graph() -> Graph {
        Graph::new(
            [
                Triple::new(iri("http://ex/alice"), p("http://ex/knows"), iri("http://ex/bob")),
                Triple::new(iri("http://ex/alice"), p("http://ex/knows"), iri("http://ex/carol")),
                Triple::new(iri("http://ex/bob"), p("http://ex/name"), Term::Literal(Literal::new("Bob"))),
                Triple::new(iri("http://ex/carol"), p("http://ex/name"), Term::Literal(Literal::new("Carol"))),
            ],
            GraphOptions::default(),
        )
    }

    fn friend_name_bgp() -> Bgp {
        Bgp::new(vec![
            TriplePattern::new(
                PatternTerm::Concrete(iri("http://ex/alice")),
                PatternTerm::Concrete(Term::Iri(p("http://ex/knows"))),
                PatternTerm::variable("friend"),
            )
            .unwrap(),
            TriplePattern::new(
                PatternTerm::variable("friend"),
                PatternTerm::Concrete(Term::Iri(p("http://ex/name"))),
                PatternTerm::variable("name"),
            )
            .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn materializing_and_streaming_agree_on_the_solution_multiset() {
        let graph = sample_graph();
        let bgp = friend_name_bgp();

        let mut eager: Vec<Solution> = MaterializingMatcher::solve(&bgp, &graph);
        let mut lazy: Vec<Solution> = StreamingMatcher::new(&bgp, &graph).collect();

        eager.sort_by_key(|s| s.get("name").unwrap().to_string());
        lazy.sort_by_key(|s| s.get("name").unwrap().to_string());
        assert_eq!(eager, lazy);
        assert_eq!(eager.len(), 2);
    }

    #[test]
    fn join_variable_must_agree_across_patterns() {
        let graph = sample_graph();
        let bgp = Bgp::new(vec![
            TriplePattern::new(
                PatternTerm::variable("person"),
                PatternTerm::Concrete(Term::Iri(p("http://ex/knows"))),
                PatternTerm::variable("friend"),
            )
            .unwrap(),
            TriplePattern::new(
                PatternTerm::variable("person"),
                PatternTerm::Concrete(Term::Iri(p("http://ex/name"))),
                PatternTerm::variable("name"),
            )
            .unwrap(),
        ])
        .unwrap();
        let solutions = MaterializingMatcher::solve(&bgp, &graph);
        assert!(solutions.is_empty(), "alice never has a name triple in this graph");
    }

    #[test]
    fn streaming_matcher_yields_no_solutions_for_an_unsatisfiable_pattern() {
        let graph = sample_graph();
        let bgp = Bgp::new(vec![TriplePattern::new(
            PatternTerm::Concrete(iri("http://ex/nobody")),
            PatternTerm::variable("p"),
            PatternTerm::variable("o"),
        )
        .unwrap()])
        .unwrap();
        assert_eq!(StreamingMatcher::new(&bgp, &graph).count(), 0);
    }

    #[test]
    fn a_concrete_subject_and_predicate_only_considers_that_description() {
        let graph = sample_graph();
        let bgp = Bgp::new(vec![TriplePattern::new(
            PatternTerm::Concrete(iri("http://ex/alice")),
            PatternTerm::Concrete(Term::Iri(p("http://ex/knows"))),
            PatternTerm::variable("friend"),
        )
        .unwrap()])
        .unwrap();
        let mut solutions: Vec<Solution> = StreamingMatcher::new(&bgp, &graph).collect();
        solutions.sort_by_key(|s| s.get("friend").unwrap().to_string());
        assert_eq!(solutions.len(), 2);
    }

    #[test]
    fn a_concrete_predicate_with_a_variable_subject_still_finds_every_match() {
        let graph = sample_graph();
        let bgp = Bgp::new(vec![TriplePattern::new(
            PatternTerm::variable("person"),
            PatternTerm::Concrete(Term::Iri(p("http://ex/name"))),
            PatternTerm::variable("name"),
        )
        .unwrap()])
        .unwrap();
        let solutions: Vec<Solution> = StreamingMatcher::new(&bgp, &graph).collect();
        assert_eq!(solutions.len(), 2);
    }
}
