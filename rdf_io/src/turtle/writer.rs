/*!
The Turtle writer (§4.5): preprocess for blank-node classification and list detection, then emit
`@base`/`@prefix` directives followed by one block per top-level subject, in the order base-IRI
subject first, then subjects grouped by [`TurtleWriterOptions::top_classes`] membership, then the
remainder. Blank-node-property-list and RDF-list sugar are applied wherever the preprocessing
pass allows it.
*/

use crate::common::indenter::Indenter;
use crate::turtle::literal as turtle_literal;
use crate::turtle::options::TurtleWriterOptions;
use crate::turtle::preprocess::{BlankNodeRole, Preprocessed};
use rdf_core::description::Description;
use rdf_core::error::Result;
use rdf_core::graph::Graph;
use rdf_core::term::Term;
use rdf_iri::Iri;
use std::io::Write;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

pub fn write_graph<W: Write>(graph: &Graph, options: &TurtleWriterOptions, writer: &mut W) -> Result<()> {
    TurtleWriter::new(graph, options).write(writer)
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

struct TurtleWriter<'g> {
    graph: &'g Graph,
    options: &'g TurtleWriterOptions,
    pre: Preprocessed,
}

impl<'g> TurtleWriter<'g> {
    fn new(graph: &'g Graph, options: &'g TurtleWriterOptions) -> Self {
        Self {
            graph,
            options,
            pre: Preprocessed::build(graph),
        }
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let wrote_base = self.write_base(writer)?;
        let wrote_prefixes = self.write_prefixes(writer)?;
        if wrote_base || wrote_prefixes {
            writeln!(writer)?;
        }
        let subjects = self.ordered_subjects();
        for subject in &subjects {
            self.write_subject_block(writer, subject)?;
        }
        Ok(())
    }

    // ----------------------------------------------------------------------------------------------
    // Directives
    // ----------------------------------------------------------------------------------------------

    fn write_base<W: Write>(&self, writer: &mut W) -> Result<bool> {
        if !self.options.use_base_directive {
            return Ok(false);
        }
        let Some(base) = self.graph.base_iri() else {
            return Ok(false);
        };
        if !base.as_str().ends_with('/') && !base.as_str().ends_with('#') {
            log::warn!("base IRI `{base}` does not end in `/` or `#`; serializing it as-is");
        }
        writeln!(writer, "@base <{base}> .")?;
        Ok(true)
    }

    fn write_prefixes<W: Write>(&self, writer: &mut W) -> Result<bool> {
        if !self.options.use_prefix_directives {
            return Ok(false);
        }
        let mut mappings: Vec<_> = self
            .graph
            .prefixes()
            .mappings()
            .map(|(prefix, iri)| (prefix.clone(), iri.clone()))
            .collect();
        mappings.sort();
        for (prefix, iri) in &mappings {
            match prefix {
                Some(name) => writeln!(writer, "@prefix {name}: <{iri}> .")?,
                None => writeln!(writer, "@prefix : <{iri}> .")?,
            }
        }
        Ok(!mappings.is_empty())
    }

    // ----------------------------------------------------------------------------------------------
    // Subject ordering
    // ----------------------------------------------------------------------------------------------

    fn should_emit_top_level(&self, subject: &Term) -> bool {
        match subject {
            Term::BlankNode(node) => {
                !self.pre.is_list_internal(node) && !matches!(self.pre.role(node), BlankNodeRole::Inlinable)
            }
            _ => true,
        }
    }

    fn ordered_subjects(&self) -> Vec<Term> {
        let mut remaining: Vec<Term> = self
            .graph
            .subjects()
            .filter(|s| self.should_emit_top_level(s))
            .cloned()
            .collect();
        let mut ordered = Vec::new();

        if let Some(base) = self.graph.base_iri() {
            let base_term = Term::Iri(base.clone());
            if let Some(position) = remaining.iter().position(|s| s == &base_term) {
                ordered.push(remaining.remove(position));
            }
        }

        for class in &self.options.top_classes {
            let class_term = Term::Iri(class.clone());
            let mut group: Vec<Term> = Vec::new();
            remaining.retain(|subject| {
                let is_member = self
                    .graph
                    .description(subject)
                    .and_then(|d| d.fetch(rdf_vocab::rdf::a_type()))
                    .is_some_and(|objects| objects.contains(&class_term));
                if is_member {
                    group.push(subject.clone());
                    false
                } else {
                    true
                }
            });
            group.sort_by_key(|s| self.render_resource(s));
            ordered.extend(group);
        }

        remaining.sort_by_key(|s| self.render_resource(s));
        ordered.extend(remaining);
        ordered
    }

    // ----------------------------------------------------------------------------------------------
    // Rendering
    // ----------------------------------------------------------------------------------------------

    fn render_resource(&self, term: &Term) -> String {
        match term {
            Term::Iri(iri) => self.render_iri(iri),
            Term::BlankNode(_) => term.to_string(),
            Term::Literal(_) => unreachable!("a literal never occupies subject or predicate position"),
        }
    }

    fn render_iri(&self, iri: &Iri) -> String {
        if self.options.use_prefix_directives {
            if let Some(qname) = self.graph.prefixes().compress(iri) {
                return match qname.prefix() {
                    Some(_) => qname.to_string(),
                    None => format!(":{}", qname.name()),
                };
            }
        }
        if self.options.use_base_directive {
            if let Some(base) = self.graph.base_iri() {
                if let Some(relative) = base.make_relative(iri) {
                    if !relative.is_empty() && !relative.starts_with("//") {
                        return format!("<{relative}>");
                    }
                }
            }
        }
        format!("<{iri}>")
    }

    fn render_predicate(&self, predicate: &Iri) -> String {
        if predicate == rdf_vocab::rdf::a_type() {
            "a".to_string()
        } else {
            self.render_iri(predicate)
        }
    }

    fn ordered_predicates(&self, description: &Description) -> Vec<Iri> {
        let priority = [
            rdf_vocab::rdf::a_type().clone(),
            rdf_vocab::rdfs::label().clone(),
            rdf_vocab::dc::elements::title().clone(),
        ];
        let mut ordered = Vec::new();
        for candidate in &priority {
            if description.fetch(candidate).is_some() {
                ordered.push(candidate.clone());
            }
        }
        for predicate in description.predicates() {
            if !priority.contains(predicate) {
                ordered.push(predicate.clone());
            }
        }
        ordered
    }

    fn write_subject_block<W: Write>(&self, writer: &mut W, subject: &Term) -> Result<()> {
        let Some(description) = self.graph.description(subject) else {
            return Ok(());
        };
        write!(writer, "{}", self.render_resource(subject))?;
        self.write_predicate_object_list(writer, description, Indenter::with_width(self.options.indent_width))?;
        writeln!(writer, " .\n")?;
        Ok(())
    }

    fn write_predicate_object_list<W: Write>(
        &self,
        writer: &mut W,
        description: &Description,
        indent: Indenter,
    ) -> Result<()> {
        let predicates = self.ordered_predicates(description);
        let inner = indent.indent();
        for (index, predicate) in predicates.iter().enumerate() {
            let objects = description.fetch(predicate).unwrap_or(&[]);
            write!(writer, "\n{inner}{} ", self.render_predicate(predicate))?;
            for (object_index, object) in objects.iter().enumerate() {
                if object_index > 0 {
                    write!(writer, ", ")?;
                }
                self.write_object(writer, object, inner)?;
            }
            if index + 1 < predicates.len() {
                write!(writer, " ;")?;
            }
        }
        Ok(())
    }

    fn write_object<W: Write>(&self, writer: &mut W, object: &Term, indent: Indenter) -> Result<()> {
        match object {
            Term::Iri(_) => write!(writer, "{}", self.render_resource(object))?,
            Term::Literal(literal) => {
                write!(writer, "{}", turtle_literal::render(literal, |dt| self.render_iri(dt)))?
            }
            Term::BlankNode(node) => {
                if let Some(elements) = self.pre.list_elements(node) {
                    write!(writer, "(")?;
                    for element in elements {
                        write!(writer, " ")?;
                        self.write_object(writer, element, indent)?;
                    }
                    write!(writer, " )")?;
                } else if matches!(self.pre.role(node), BlankNodeRole::Inlinable) {
                    match self.graph.description(object) {
                        Some(description) if !description.is_empty() => {
                            write!(writer, "[")?;
                            self.write_predicate_object_list(writer, description, indent)?;
                            write!(writer, "\n{indent}]")?;
                        }
                        _ => write!(writer, "[]")?,
                    }
                } else {
                    write!(writer, "{object}")?;
                }
            }
        }
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_core::graph::{GraphOptions, Triple};
    use rdf_core::prefix::PrefixMap;
    use rdf_core::term::{BlankNode, Literal};
    use std::str::FromStr;

    fn iri(s: &str) -> Term {
        Term::Iri(Iri::from_str(s).unwrap())
    }

    fn p(s: &str) -> Iri {
        Iri::from_str(s).unwrap()
    }

    fn write_to_string(graph: &Graph, options: &TurtleWriterOptions) -> String {
        let mut buffer = Vec::new();
        write_graph(graph, options, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn renders_a_prefixed_predicate_and_type_shorthand() {
        let mut prefixes = PrefixMap::default();
        prefixes.insert(rdf_iri::Name::from_str("ex").unwrap(), Iri::from_str("http://ex/").unwrap());
        let graph = Graph::new(
            [
                Triple::new(iri("http://ex/alice"), rdf_vocab::rdf::a_type().clone(), iri("http://ex/Person")),
                Triple::new(iri("http://ex/alice"), p("http://ex/name"), Term::Literal(Literal::new("Alice"))),
            ],
            GraphOptions {
                prefixes: Some(prefixes),
                ..Default::default()
            },
        );
        let output = write_to_string(&graph, &TurtleWriterOptions::default());
        assert!(output.contains("ex:alice"));
        assert!(output.contains(" a ex:Person"));
        assert!(output.contains("\"Alice\""));
    }

    #[test]
    fn an_inlinable_blank_node_is_rendered_as_a_nested_property_list() {
        let address = BlankNode::new("addr0");
        let graph = Graph::empty().add([
            Triple::new(iri("http://ex/alice"), p("http://ex/address"), Term::BlankNode(address.clone())),
            Triple::new(Term::BlankNode(address.clone()), p("http://ex/city"), Term::Literal(Literal::new("Springfield"))),
        ]);
        let output = write_to_string(&graph, &TurtleWriterOptions::default());
        assert!(output.contains("[\n"));
        assert!(output.contains("\"Springfield\""));
        assert!(!output.contains("_:addr0"), "an inlinable bnode must not also get a top-level block");
    }

    #[test]
    fn a_well_formed_list_is_rendered_with_parenthesis_sugar() {
        let head = BlankNode::new("h");
        let tail = BlankNode::new("t");
        let graph = Graph::empty().add([
            Triple::new(iri("http://ex/s"), p("http://ex/items"), Term::BlankNode(head.clone())),
            Triple::new(Term::BlankNode(head.clone()), rdf_vocab::rdf::first().clone(), Term::Literal(Literal::new("a"))),
            Triple::new(Term::BlankNode(head.clone()), rdf_vocab::rdf::rest().clone(), Term::BlankNode(tail.clone())),
            Triple::new(Term::BlankNode(tail.clone()), rdf_vocab::rdf::first().clone(), Term::Literal(Literal::new("b"))),
            Triple::new(Term::BlankNode(tail.clone()), rdf_vocab::rdf::rest().clone(), Term::Iri(rdf_vocab::rdf::nil().clone())),
        ]);
        let output = write_to_string(&graph, &TurtleWriterOptions::default());
        assert!(output.contains("( \"a\" \"b\" )"));
    }

    #[test]
    fn a_root_list_head_still_appears_in_the_output() {
        let head = BlankNode::new("h");
        let graph = Graph::empty().add([
            Triple::new(Term::BlankNode(head.clone()), rdf_vocab::rdf::first().clone(), Term::Literal(Literal::new("a"))),
            Triple::new(Term::BlankNode(head), rdf_vocab::rdf::rest().clone(), Term::Iri(rdf_vocab::rdf::nil().clone())),
        ]);
        let output = write_to_string(&graph, &TurtleWriterOptions::default());
        assert!(output.contains("\"a\""), "the list's only element must not be dropped from the output: {output}");
    }

    #[test]
    fn a_named_blank_node_referenced_twice_gets_its_own_block_and_a_label() {
        let shared = BlankNode::new("shared");
        let graph = Graph::empty().add([
            Triple::new(iri("http://ex/a"), p("http://ex/knows"), Term::BlankNode(shared.clone())),
            Triple::new(iri("http://ex/b"), p("http://ex/knows"), Term::BlankNode(shared.clone())),
            Triple::new(Term::BlankNode(shared.clone()), p("http://ex/name"), Term::Literal(Literal::new("Carol"))),
        ]);
        let output = write_to_string(&graph, &TurtleWriterOptions::default());
        assert!(output.contains("_:shared"));
    }

    #[test]
    fn an_integer_literal_is_rendered_bare() {
        let graph = Graph::empty().add([Triple::new(
            iri("http://ex/s"),
            p("http://ex/age"),
            Term::Literal(Literal::with_datatype("42", rdf_vocab::xsd::integer().clone())),
        )]);
        let output = write_to_string(&graph, &TurtleWriterOptions::default());
        assert!(output.contains("ex:age 42") || output.contains("age> 42") || output.contains(" 42 ."));
    }
}
