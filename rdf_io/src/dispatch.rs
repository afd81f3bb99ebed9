/*!
File-level dispatch (§6 "File I/O"): pick a [`Format`] from a path's extension or an explicit
override, read or write a [`Graph`] through it. N-Quads' own `read_file`/`write_file` counterparts
live alongside it in [`crate::nquads`] since they produce/consume a [`Dataset`] rather than a
`Graph`; this module only covers the common `Graph` case.
*/

use crate::error::{unsupported_format_error, Result};
use crate::format::Format;
use crate::{nquads, ntriples, turtle};
use rdf_core::graph::{Graph, GraphOptions};
use rdf_core::prefix::PrefixMap;
use rdf_core::term::Term;
use rdf_iri::Iri;
use std::fs;
use std::path::Path;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// Options accepted by [`read_file`]/[`write_file`] (§10.3): the graph metadata to seed a read
/// with or expect from a write, plus an explicit format override for paths whose extension does
/// not name one of [`Format`]'s variants.
#[derive(Clone, Debug, Default)]
pub struct FileOptions {
    pub base_iri: Option<Iri>,
    pub prefixes: Option<PrefixMap>,
    pub name: Option<Term>,
    pub format: Option<Format>,
}

impl FileOptions {
    fn resolve_format(&self, path: &Path) -> Result<Format> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        Format::from_path(path).ok_or_else(|| {
            let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
            unsupported_format_error(extension)
        })
    }
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Reads `path` as a [`Graph`], choosing N-Triples/Turtle by `options.format` or the path's
/// extension. A `.nq` path is also accepted and flattened into a single `Graph` by dropping named
/// graph names; use [`crate::nquads::read_dataset`] directly to keep them.
pub fn read_file(path: &Path, options: &FileOptions) -> Result<Graph> {
    let format = options.resolve_format(path)?;
    let content = fs::read_to_string(path)?;
    let mut graph = match format {
        Format::NTriples => ntriples::read_graph(&content)?,
        Format::Turtle => turtle::read_graph(&content)?,
        Format::NQuads => {
            let dataset = nquads::read_dataset(&content)?;
            dataset.default_graph().clone()
        }
    };
    graph = apply_options(graph, options);
    Ok(graph)
}

/// Writes `graph` to `path`, choosing N-Triples/Turtle by `options.format` or the path's
/// extension.
pub fn write_file(graph: &Graph, path: &Path, options: &FileOptions) -> Result<()> {
    let format = options.resolve_format(path)?;
    let mut buffer = Vec::new();
    match format {
        Format::NTriples => ntriples::write_graph(graph, &mut buffer)?,
        Format::Turtle => turtle::write_graph(graph, &turtle::TurtleWriterOptions::default(), &mut buffer)?,
        Format::NQuads => {
            let quads = graph.triples().map(|t| rdf_core::dataset::Quad::new(t.subject, t.predicate, t.object, None));
            let dataset = rdf_core::dataset::Dataset::new(quads, None);
            nquads::write_dataset(&dataset, &mut buffer)?
        }
    }
    fs::write(path, buffer)?;
    Ok(())
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn apply_options(graph: Graph, options: &FileOptions) -> Graph {
    if options.base_iri.is_none() && options.prefixes.is_none() && options.name.is_none() {
        return graph;
    }
    Graph::from_graph(
        &graph,
        GraphOptions {
            name: options.name.clone(),
            prefixes: options.prefixes.clone(),
            base_iri: options.base_iri.clone(),
        },
    )
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn resolves_format_from_extension_when_no_override_is_given() {
        let options = FileOptions::default();
        assert_eq!(options.resolve_format(Path::new("data.ttl")).unwrap(), Format::Turtle);
    }

    #[test]
    fn an_explicit_override_wins_over_the_extension() {
        let options = FileOptions {
            format: Some(Format::NTriples),
            ..Default::default()
        };
        assert_eq!(options.resolve_format(Path::new("data.ttl")).unwrap(), Format::NTriples);
    }

    #[test]
    fn an_unknown_extension_with_no_override_is_an_error() {
        let options = FileOptions::default();
        assert!(options.resolve_format(Path::new("data.unknown")).is_err());
    }

    #[test]
    fn round_trips_a_small_graph_through_a_temp_ntriples_file() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("rdf_io_dispatch_test_{}.nt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "<http://ex/s> <http://ex/p> <http://ex/o> .").unwrap();
        drop(file);

        let graph = read_file(&path, &FileOptions::default()).unwrap();
        assert_eq!(graph.triple_count(), 1);

        write_file(&graph, &path, &FileOptions::default()).unwrap();
        let graph_again = read_file(&path, &FileOptions::default()).unwrap();
        assert_eq!(graph_again.triple_count(), 1);

        let _ = fs::remove_file(&path);
    }
}
