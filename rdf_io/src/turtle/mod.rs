/*!
Turtle reading and writing (§4.5, §6). The reader is a single hand-written recursive-descent
parser; the writer is split into preprocessing (blank-node classification and list detection),
literal shorthand rendering, and the block-by-block emission itself, since each has its own
reasonably self-contained set of rules.
*/

mod literal;
mod preprocess;
mod reader;
pub mod options;
mod writer;

pub use options::TurtleWriterOptions;
pub use reader::read_graph;
pub use writer::write_graph;
