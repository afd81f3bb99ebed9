/*!
This crate provides a basic-graph-pattern (BGP) matcher over [`rdf_core::graph::Graph`]: a
variable/concrete pattern representation, a builder DSL for assembling patterns without
hand-rolling the tagged variants, a selectivity planner, and two matching strategies —
materializing and streaming — guaranteed to agree on the solution multiset they produce.

# Example

```rust
use rdf_query::builder::BgpBuilder;
use rdf_query::engine::{Bgp, MaterializingMatcher};
use rdf_core::graph::{Graph, GraphOptions, Triple};
use rdf_core::term::Term;
use rdf_iri::Iri;
use std::str::FromStr;

let graph = Graph::new(
    [Triple::new(
        Term::Iri(Iri::from_str("http://example.org/alice").unwrap()),
        Iri::from_str("http://example.org/knows").unwrap(),
        Term::Iri(Iri::from_str("http://example.org/bob").unwrap()),
    )],
    GraphOptions::default(),
);

let patterns = BgpBuilder::new()
    .triple("http://example.org/alice", "http://example.org/knows", "?friend")
    .unwrap()
    .build();
let bgp = Bgp::new(patterns).unwrap();
let solutions = MaterializingMatcher::solve(&bgp, &graph);
assert_eq!(solutions.len(), 1);
```
*/

#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_debug_implementations,
    unreachable_pub
)]

pub mod builder;
pub mod engine;
pub mod pattern;
pub mod planner;
pub mod solution;

pub use builder::BgpBuilder;
pub use engine::{Bgp, MaterializingMatcher, StreamingMatcher};
pub use pattern::{PatternTerm, TriplePattern};
pub use solution::Solution;
