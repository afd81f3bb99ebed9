/*!
N-Triples, N-Quads, and Turtle readers/writers for [`rdf_core`] graphs and datasets, plus format
dispatch by file extension.

| Format     | Produces/consumes        | Module          |
|------------|--------------------------|-----------------|
| N-Triples  | `Graph`                  | [`ntriples`]    |
| N-Quads    | `Dataset` (or `Graph`)   | [`nquads`]      |
| Turtle     | `Graph`                  | [`turtle`]      |

Each format module is a flat pair of free functions, `read_graph`/`write_graph` (or
`read_dataset`/`write_dataset` for N-Quads), rather than a trait hierarchy — a reader or writer
needs no more state than the format options it is given, and a free function composes more simply
than an object a caller has to construct and hold onto for one call.

# Example

```rust
use rdf_io::turtle;

let graph = turtle::read_graph("@prefix ex: <http://example.org/> .\nex:s ex:p \"hello\" .").unwrap();
assert_eq!(graph.triple_count(), 1);

let mut buffer = Vec::new();
turtle::write_graph(&graph, &turtle::TurtleWriterOptions::default(), &mut buffer).unwrap();
assert!(String::from_utf8(buffer).unwrap().contains("ex:s"));
```
*/

#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_debug_implementations,
    unreachable_pub
)]

mod common;

pub mod dispatch;
pub mod error;
pub mod format;
pub mod nquads;
pub mod ntriples;
pub mod turtle;

pub use dispatch::{read_file, write_file, FileOptions};
pub use format::Format;
