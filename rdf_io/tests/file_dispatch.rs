use rdf_io::{FileOptions, Format};
use std::fs;
use std::io::Write as _;

fn temp_path(name: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("rdf_io_integration_{}_{}", std::process::id(), name));
    path
}

#[test]
fn converts_an_ntriples_file_to_turtle_by_extension() {
    let nt_path = temp_path("source.nt");
    let ttl_path = temp_path("target.ttl");

    let mut file = fs::File::create(&nt_path).unwrap();
    writeln!(file, "<http://ex/s> <http://ex/p> \"hello\" .").unwrap();
    drop(file);

    let graph = rdf_io::read_file(&nt_path, &FileOptions::default()).unwrap();
    rdf_io::write_file(&graph, &ttl_path, &FileOptions::default()).unwrap();

    let round_tripped = rdf_io::read_file(&ttl_path, &FileOptions::default()).unwrap();
    assert_eq!(round_tripped.triple_count(), 1);

    let _ = fs::remove_file(&nt_path);
    let _ = fs::remove_file(&ttl_path);
}

#[test]
fn an_explicit_format_override_bypasses_the_extension() {
    let path = temp_path("data.txt");
    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "<http://ex/s> <http://ex/p> <http://ex/o> .").unwrap();
    drop(file);

    let options = FileOptions {
        format: Some(Format::NTriples),
        ..Default::default()
    };
    let graph = rdf_io::read_file(&path, &options).unwrap();
    assert_eq!(graph.triple_count(), 1);

    let _ = fs::remove_file(&path);
}
