use rdf_io::ntriples;

#[test]
fn reads_and_rewrites_a_small_document() {
    let document = concat!(
        "<http://en.wikipedia.org/wiki/Tony_Benn> ",
        "<http://purl.org/dc/elements/1.1/title> \"Tony Benn\" .\n",
        "<http://en.wikipedia.org/wiki/Tony_Benn> ",
        "<http://purl.org/dc/elements/1.1/publisher> \"Wikipedia\" .\n",
        "_:b1 <http://xmlns.com/foaf/0.1/name> \"Tony Benn\" .\n",
    );

    let graph = ntriples::read_graph(document).unwrap();
    assert_eq!(graph.triple_count(), 3);

    let mut buffer = Vec::new();
    ntriples::write_graph(&graph, &mut buffer).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    assert!(output.contains("<http://en.wikipedia.org/wiki/Tony_Benn> <http://purl.org/dc/elements/1.1/title> \"Tony Benn\" .\n"));
    assert!(output.contains("_:b1 <http://xmlns.com/foaf/0.1/name> \"Tony Benn\" .\n"));
}

#[test]
fn a_malformed_line_reports_its_own_line_number() {
    let document = "<http://ex/s> <http://ex/p> <http://ex/o> .\n<http://ex/s> missing-angle-brackets <http://ex/o> .\n";
    let err = ntriples::read_graph(document).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line 2"), "expected the second line to be blamed, got: {message}");
}

#[test]
fn a_fragment_iri_is_not_mistaken_for_a_trailing_comment() {
    let document = "<http://ex/page#section> <http://ex/p> <http://ex/o> .\n";
    let graph = ntriples::read_graph(document).unwrap();
    assert_eq!(graph.triple_count(), 1);
    let subject = graph.subjects().next().unwrap();
    assert_eq!(subject.to_string(), "<http://ex/page#section>");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let document = "# header comment\n\n<http://ex/s> <http://ex/p> <http://ex/o> . # trailing comment\n\n";
    let graph = ntriples::read_graph(document).unwrap();
    assert_eq!(graph.triple_count(), 1);
}
