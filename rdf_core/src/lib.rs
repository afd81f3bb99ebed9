/*!
This crate provides the core RDF 1.1 data model: concrete, immutable value types for Terms,
Triples/Quads, Descriptions, Graphs, and Datasets, along with the datatype registry, the prefix
map, and the coercion layer every public constructor in this crate routes through.

# Example

```rust
use rdf_core::graph::{Graph, GraphOptions, Triple};
use rdf_core::term::{Literal, Term};
use rdf_iri::Iri;
use std::str::FromStr;

let s = Term::Iri(Iri::from_str("http://example.org/s").unwrap());
let p = Iri::from_str("http://example.org/p").unwrap();
let o = Term::Literal(Literal::new("hello"));

let graph = Graph::new([Triple::new(s, p, o)], GraphOptions::default());
assert_eq!(graph.triple_count(), 1);
```
*/

#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_debug_implementations,
    unreachable_pub
)]

pub mod coerce;
pub mod datatype;
pub mod dataset;
pub mod description;
pub mod diff;
pub mod error;
pub mod graph;
pub mod prefix;
pub mod qname;
pub mod term;

pub use dataset::{Dataset, Quad};
pub use description::Description;
pub use diff::GraphDiff;
pub use error::{Error, Result};
pub use graph::{Graph, GraphOptions, Triple};
pub use prefix::PrefixMap;
pub use qname::QName;
pub use term::{BlankNode, Literal, Term};
