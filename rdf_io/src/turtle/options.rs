/*!
`TurtleWriterOptions`: the knobs a caller has over Turtle serialization (§10.3). Indent width
matches [`crate::common::indenter::Indenter`]'s default; `top_classes` controls which subjects
are grouped and emitted first (§4.5 step 4), defaulting to `rdfs:Class` alone, the one class most
RDF vocabularies define before anything that uses it.
*/

use rdf_iri::Iri;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct TurtleWriterOptions {
    pub indent_width: u16,
    pub top_classes: Vec<Iri>,
    pub use_base_directive: bool,
    pub use_prefix_directives: bool,
}

impl Default for TurtleWriterOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            top_classes: vec![rdf_vocab::rdfs::class().clone()],
            use_base_directive: true,
            use_prefix_directives: true,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_top_classes_is_rdfs_class() {
        let options = TurtleWriterOptions::default();
        assert_eq!(options.top_classes, vec![rdf_vocab::rdfs::class().clone()]);
    }
}
