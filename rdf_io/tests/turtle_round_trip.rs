use rdf_core::graph::{Graph, GraphOptions, Triple};
use rdf_core::prefix::PrefixMap;
use rdf_core::term::{BlankNode, Literal, Term};
use rdf_iri::{Iri, Name};
use rdf_io::turtle::{self, TurtleWriterOptions};
use std::str::FromStr;

fn iri(s: &str) -> Term {
    Term::Iri(Iri::from_str(s).unwrap())
}

fn p(s: &str) -> Iri {
    Iri::from_str(s).unwrap()
}

#[test]
fn parses_the_turtle_primer_style_example() {
    let document = r###"@base <http://example.org/> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix rel: <http://www.perceive.net/schemas/relationship/> .

<#green-goblin>
    rel:enemyOf <#spiderman> ;
    a foaf:Person ;
    foaf:name "Green Goblin" .

<#spiderman>
    rel:enemyOf <#green-goblin> ;
    a foaf:Person ;
    foaf:name "Spiderman", "Человек-паук"@ru .
"###;

    let graph = turtle::read_graph(document).unwrap();
    assert_eq!(graph.triple_count(), 7);
}

#[test]
fn writer_output_is_accepted_back_by_the_reader() {
    let mut prefixes = PrefixMap::default();
    prefixes.insert(Name::from_str("ex").unwrap(), Iri::from_str("http://ex/").unwrap());

    let address = BlankNode::new("addr0");
    let graph = Graph::new(
        [
            Triple::new(iri("http://ex/alice"), rdf_vocab::rdf::a_type().clone(), iri("http://ex/Person")),
            Triple::new(iri("http://ex/alice"), p("http://ex/name"), Term::Literal(Literal::new("Alice"))),
            Triple::new(iri("http://ex/alice"), p("http://ex/address"), Term::BlankNode(address.clone())),
            Triple::new(Term::BlankNode(address), p("http://ex/city"), Term::Literal(Literal::new("Springfield"))),
        ],
        GraphOptions {
            prefixes: Some(prefixes),
            ..Default::default()
        },
    );

    let mut buffer = Vec::new();
    turtle::write_graph(&graph, &TurtleWriterOptions::default(), &mut buffer).unwrap();
    let written = String::from_utf8(buffer).unwrap();

    let reparsed = turtle::read_graph(&written).unwrap();
    assert_eq!(reparsed.triple_count(), graph.triple_count());
}

#[test]
fn a_root_list_with_no_referrer_survives_a_write_then_read_round_trip() {
    let head = BlankNode::new("h");
    let graph = Graph::new(
        [
            Triple::new(Term::BlankNode(head.clone()), rdf_vocab::rdf::first().clone(), Term::Literal(Literal::new("a"))),
            Triple::new(Term::BlankNode(head), rdf_vocab::rdf::rest().clone(), iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#nil")),
        ],
        GraphOptions::default(),
    );

    let mut buffer = Vec::new();
    turtle::write_graph(&graph, &TurtleWriterOptions::default(), &mut buffer).unwrap();
    let written = String::from_utf8(buffer).unwrap();

    let reparsed = turtle::read_graph(&written).unwrap();
    assert_eq!(reparsed.triple_count(), graph.triple_count(), "output was: {written}");
}

#[test]
fn a_collection_literal_expands_to_the_expected_number_of_triples() {
    let document = "@prefix ex: <http://ex/> .\nex:s ex:items ( \"a\" \"b\" \"c\" ) .\n";
    let graph = turtle::read_graph(document).unwrap();
    // one ex:items triple, plus an rdf:first/rdf:rest pair per list cell.
    assert_eq!(graph.triple_count(), 1 + 3 * 2);
}
