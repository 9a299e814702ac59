use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const SAMPLE: &str = "CONTRAT DE RESERVATION VEFA\n\nLe prix de vente est fixé à 245 000 euros TTC. Livraison prévue le 31 décembre 2013. Article 1 - Objet de la réservation. La présente réservation a pour objet un appartement de type T3 d'une superficie de 65,50 m².\n\nFait à Paris le 15 septembre 2012\n";

#[test]
fn chunks_a_file_to_json() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(SAMPLE.as_bytes()).expect("write sample");

    let mut cmd = Command::cargo_bin("lexchunk").expect("binary");
    let assert = cmd.arg(file.path()).assert().success();

    let output = assert.get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let chunks = parsed["chunks"].as_array().expect("chunks array");
    assert!(!chunks.is_empty());
    assert_eq!(chunks[0]["chunk_id"], "chunk_001");
    assert_eq!(
        parsed["document_metadata"]["type"],
        "contrat_reservation_vefa"
    );
}

#[test]
fn reads_stdin_when_no_file_is_given() {
    let mut cmd = Command::cargo_bin("lexchunk").expect("binary");
    cmd.write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("chunk_001"));
}

#[test]
fn rejects_short_input() {
    let mut cmd = Command::cargo_bin("lexchunk").expect("binary");
    cmd.write_stdin("trop court")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 100 characters"));
}

#[test]
fn rejects_out_of_range_target_size() {
    let mut cmd = Command::cargo_bin("lexchunk").expect("binary");
    cmd.arg("--target-size")
        .arg("500")
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("target_size"));
}
