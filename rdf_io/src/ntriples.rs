/*!
N-Triples (§6 "External Interfaces"): one triple per line, `<IRI> <IRI> (<IRI> | _:label |
literal) .`, comments starting with `#`, blank lines ignored. This is N-Quads (see
[`crate::nquads`]) without the optional fourth term, so the reader and writer here are both thin
wrappers: read borrows the same [`crate::common::term_parser::LineParser`], write reuses
[`crate::common::literal`]'s escaping.
*/

use crate::common::literal::quote_basic;
use crate::common::term_parser::LineParser;
use rdf_core::error::{self, Error, Result};
use rdf_core::graph::{Graph, Triple};
use std::io::Write;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Parses an entire N-Triples document into a fresh, unnamed [`Graph`].
pub fn read_graph(input: &str) -> Result<Graph> {
    let mut graph = Graph::empty();
    for (index, raw_line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let triple = parse_line(line, line_number)?;
        graph = graph.add([triple]);
    }
    Ok(graph)
}

/// Serializes every triple in `graph` as N-Triples, one statement per line, subjects in the
/// graph's own iteration order (N-Triples carries no structural hints worth reordering for).
pub fn write_graph<W: Write>(graph: &Graph, writer: &mut W) -> Result<()> {
    for triple in graph.triples() {
        write_triple_line(writer, &triple)?;
    }
    Ok(())
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

pub(crate) fn parse_line(line: &str, line_number: usize) -> Result<Triple> {
    let mut parser = LineParser::new(line, line_number);
    let subject = parser.parse_subject()?;
    let predicate = parser.parse_predicate()?;
    let object = parser.parse_object()?;
    parser.expect_statement_end()?;
    let subject = rdf_core::term::require_resource(subject).map_err(|_| {
        error::invalid_format_error(line_number, 1, "subject must be an IRI or blank node")
    })?;
    Ok(Triple::new(subject, predicate, object))
}

pub(crate) fn write_triple_line<W: Write>(writer: &mut W, triple: &Triple) -> Result<()> {
    writeln!(
        writer,
        "{} <{}> {} .",
        triple.subject,
        triple.predicate,
        render_object(&triple.object)
    )?;
    Ok(())
}

pub(crate) fn render_object(term: &rdf_core::term::Term) -> String {
    use rdf_core::term::Term;
    match term {
        Term::Iri(iri) => format!("<{iri}>"),
        Term::BlankNode(node) => node.to_string(),
        Term::Literal(literal) => match literal.language() {
            Some(tag) => format!("{}@{tag}", quote_basic(literal.lexical_form())),
            None if literal.datatype() == rdf_vocab::xsd::string() => quote_basic(literal.lexical_form()),
            None => format!("{}^^<{}>", quote_basic(literal.lexical_form()), literal.datatype()),
        },
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
