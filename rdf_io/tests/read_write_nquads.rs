use rdf_io::nquads;

#[test]
fn routes_quads_to_the_default_and_named_graphs() {
    let document = concat!(
        "<http://ex/alice> <http://ex/knows> <http://ex/bob> .\n",
        "<http://ex/alice> <http://ex/name> \"Alice\" <http://ex/provenance> .\n",
    );

    let dataset = nquads::read_dataset(document).unwrap();
    assert_eq!(dataset.default_graph().triple_count(), 1);
    assert_eq!(dataset.graph_count(), 2);

    let mut buffer = Vec::new();
    nquads::write_dataset(&dataset, &mut buffer).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    assert!(output.contains("<http://ex/alice> <http://ex/knows> <http://ex/bob> .\n"));
    assert!(output.contains("<http://ex/provenance> .\n"));
}

#[test]
fn an_empty_document_produces_an_empty_dataset() {
    let dataset = nquads::read_dataset("").unwrap();
    assert!(dataset.default_graph().is_empty());
    assert_eq!(dataset.graph_count(), 1);
}
