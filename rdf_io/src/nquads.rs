/*!
N-Quads (§6 "External Interfaces"): N-Triples plus an optional fourth term naming the graph a
statement belongs to. This is also where the "N-Quads reader produces a [`Dataset`], not just a
[`Graph`]" supplement lives — a statement with no fourth term lands in the dataset's default
graph, one with a fourth term lands in the named graph it identifies.
*/

use crate::common::term_parser::LineParser;
use crate::ntriples::render_object;
use rdf_core::dataset::{Dataset, Quad};
use rdf_core::error::{self, Result};
use rdf_core::graph::Triple;
use rdf_core::term::{require_resource, Term};
use std::io::Write;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Parses an entire N-Quads document into a fresh, unnamed [`Dataset`].
pub fn read_dataset(input: &str) -> Result<Dataset> {
    let mut dataset = Dataset::empty();
    for (index, raw_line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let quad = parse_line(line, line_number)?;
        dataset = dataset.add([quad]);
    }
    Ok(dataset)
}

/// Serializes `dataset` as N-Quads: the default graph's triples first (no fourth term), then
/// each named graph's triples in turn (fourth term set to that graph's name).
pub fn write_dataset<W: Write>(dataset: &Dataset, writer: &mut W) -> Result<()> {
    for triple in dataset.default_graph().triples() {
        write_quad_line(writer, &triple, None)?;
    }
    for name in dataset.graph_names() {
        let graph = dataset.named_graph(name).expect("name came from graph_names");
        for triple in graph.triples() {
            write_quad_line(writer, &triple, Some(name))?;
        }
    }
    Ok(())
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn parse_line(line: &str, line_number: usize) -> Result<Quad> {
    let mut parser = LineParser::new(line, line_number);
    let subject = parser.parse_subject()?;
    let predicate = parser.parse_predicate()?;
    let object = parser.parse_object()?;
    let graph_name = parser.parse_optional_graph_name()?;
    parser.expect_statement_end()?;
    let subject = require_resource(subject).map_err(|_| {
        error::invalid_format_error(line_number, 1, "subject must be an IRI or blank node")
    })?;
    let graph_name = graph_name
        .map(require_resource)
        .transpose()
        .map_err(|_| error::invalid_format_error(line_number, 1, "graph name must be an IRI or blank node"))?;
    Ok(Quad::new(subject, predicate, object, graph_name))
}

fn write_quad_line<W: Write>(writer: &mut W, triple: &Triple, graph_name: Option<&Term>) -> Result<()> {
    match graph_name {
        Some(name) => writeln!(
            writer,
            "{} <{}> {} {} .",
            triple.subject,
            triple.predicate,
            render_object(&triple.object),
            name
        )?,
        None => writeln!(
            writer,
            "{} <{}> {} .",
            triple.subject,
            triple.predicate,
            render_object(&triple.object)
        )?,
    }
    Ok(())
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_without_a_fourth_term_land_in_the_default_graph() {
        let document = "<http://ex/s> <http://ex/p> <http://ex/o> .\n";
        let dataset = read_dataset(document).unwrap();
        assert_eq!(dataset.default_graph().triple_count(), 1);
        assert_eq!(dataset.graph_count(), 1);
    }

    #[test]
    fn statements_with_a_fourth_term_land_in_that_named_graph() {
        let document = "<http://ex/s> <http://ex/p> <http://ex/o> <http://ex/g> .\n";
        let dataset = read_dataset(document).unwrap();
        assert_eq!(dataset.default_graph().triple_count(), 0);
        assert_eq!(dataset.graph_count(), 2);
        let names: Vec<_> = dataset.graph_names().collect();
        let graph = dataset.named_graph(names[0]).unwrap();
        assert_eq!(graph.triple_count(), 1);
    }

    #[test]
    fn round_trips_a_mixed_document() {
        let document = concat!(
            "<http://ex/s1> <http://ex/p> <http://ex/o1> .\n",
            "<http://ex/s2> <http://ex/p> <http://ex/o2> <http://ex/g> .\n",
        );
        let dataset = read_dataset(document).unwrap();
        let mut buffer = Vec::new();
        write_dataset(&dataset, &mut buffer).unwrap();
        let written = String::from_utf8(buffer).unwrap();
        assert!(written.contains("<http://ex/s1> <http://ex/p> <http://ex/o1> .\n"));
        assert!(written.contains("<http://ex/g> .\n"));
    }
}
