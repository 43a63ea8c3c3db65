use assert_cmd::Command;
use foldview_test_data::TestFile;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Answer a single request with the given status and body.
fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/foldSequence/v1/pdb/", listener.local_addr().unwrap());
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut chunk = [0u8; 8192];
        let mut request = Vec::new();
        // read headers plus the declared body so the socket closes cleanly
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&request).to_string();
            if let Some(split) = text.find("\r\n\r\n") {
                let content_length = text[..split]
                    .lines()
                    .find_map(|line| {
                        line.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap())
                    })
                    .unwrap_or(0);
                if request.len() >= split + 4 + content_length {
                    break;
                }
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    url
}

fn unused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    format!("http://{}/", listener.local_addr().unwrap())
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_examples_command() {
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    let stdout = stdout_of(cmd.arg("examples"));
    assert!(stdout.contains("bradykinin"));
    assert!(stdout.contains("insulin-b"));
    assert!(stdout.contains("lysozyme-fragment"));
    assert!(stdout.contains("129 aa"));
}

#[test]
fn test_about_and_guide() {
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    assert!(stdout_of(cmd.arg("about")).contains("About ESMFold"));
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    assert!(stdout_of(cmd.arg("guide")).contains("Tips for best results"));
}

#[test]
fn test_analyze_example() {
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    let stdout = stdout_of(cmd.args(["analyze", "--example", "bradykinin"]));
    assert!(stdout.contains("Sequence Length: 9 amino acids"));
    assert!(stdout.contains("Estimated Isoelectric Point: 7.20"));
    assert!(stdout.contains("  P PRO     3"));
}

#[test]
fn test_unknown_choices_rejected_by_parser() {
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    let output = cmd.args(["analyze", "--example", "hemoglobin"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value 'hemoglobin'"));
    assert!(stderr.contains("lysozyme-fragment"));

    let (pdb_file, _temp) = TestFile::predicted_01().create_temp().unwrap();
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    cmd.args(["render", "--input", &pdb_file, "--output", "unused.html", "--representation", "ribbon"])
        .assert()
        .failure();
}

#[test]
fn test_help_lists_view_choices() {
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    let stdout = stdout_of(cmd.args(["render", "--help"]));
    assert!(stdout.contains("cartoon"));
    assert!(stdout.contains("sphere"));
    assert!(stdout.contains("chain"));
}

#[test]
fn test_analyze_json() {
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    let stdout = stdout_of(cmd.args(["analyze", "--sequence", "rppg fspfr", "--json"]));
    let profile: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(profile["length"], 9);
    assert_eq!(profile["counts"]["R"], 2);
    assert_eq!(profile["percentages"][0]["residue"], "P");
}

#[test]
fn test_analyze_fasta_file() {
    let (fasta, _temp) = TestFile::fasta_insulin_b().create_temp().unwrap();
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    let stdout = stdout_of(cmd.args(["analyze", "--fasta", &fasta]));
    assert!(stdout.contains("Sequence Length: 30 amino acids"));
}

#[test]
fn test_analyze_rejects_invalid_sequence() {
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    let output = cmd.args(["analyze", "--sequence", "XYZ123"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid sequence!"));
}

#[test]
fn test_input_methods_are_exclusive() {
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    cmd.args(["analyze", "--sequence", "MKV", "--example", "bradykinin"])
        .assert()
        .failure();
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    cmd.arg("analyze").assert().failure();
}

#[test]
fn test_render_local_file() {
    let (pdb_file, _temp) = TestFile::predicted_01().create_temp().unwrap();
    let outdir = tempfile::tempdir().unwrap();
    let html = outdir.path().join("view.html");
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    cmd.args(["render", "--input", &pdb_file, "--spin", "--output"])
        .arg(&html)
        .assert()
        .success();
    let page = std::fs::read_to_string(html).unwrap();
    assert!(page.contains("viewer.addModel("));
    assert!(page.contains("viewer.spin(true);"));
    assert!(page.contains(r#"{"cartoon":{"color":"spectrum"}}"#));
}

#[test]
fn test_predict_success_writes_exact_structure() {
    let body = "MODEL        1\nATOM      1  CA  ARG A   1       0.000   0.000   0.000  1.00 62.50           C\nENDMDL\nEND\n";
    let endpoint = one_shot_server("200 OK", body);
    let outdir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    let stdout = stdout_of(
        cmd.args(["predict", "--example", "bradykinin", "--endpoint", &endpoint, "--output-dir"])
            .arg(outdir.path()),
    );
    assert!(stdout.contains("Structure prediction successful!"));

    let structure = std::fs::read(outdir.path().join("predicted_structure.pdb")).unwrap();
    assert_eq!(structure, body.as_bytes());
    let report = std::fs::read_to_string(outdir.path().join("report.html")).unwrap();
    assert!(report.contains("Download PDB File"));
    assert!(report.contains("Amino Acid Composition"));
    assert!(outdir.path().join("viewer.html").exists());
}

#[test]
fn test_predict_service_error() {
    let endpoint = one_shot_server("500 Internal Server Error", "service unavailable");
    let outdir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    let output = cmd
        .args(["predict", "--sequence", "RPPGFSPFR", "--endpoint", &endpoint, "--output-dir"])
        .arg(outdir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: 500 - service unavailable"));

    let report = std::fs::read_to_string(outdir.path().join("report.html")).unwrap();
    assert!(report.contains("error-box"));
    assert!(!report.contains("Download PDB File"));
    assert!(!outdir.path().join("predicted_structure.pdb").exists());
}

#[test]
fn test_predict_too_long_skips_network() {
    let outdir = tempfile::tempdir().unwrap();
    let long_sequence = "A".repeat(1001);
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    let output = cmd
        .args(["predict", "--sequence", &long_sequence, "--endpoint", &unused_endpoint(), "--output-dir"])
        .arg(outdir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Sequence is too long"));
    assert!(!stderr.contains("Request failed"));
    assert!(!outdir.path().join("report.html").exists());
}

#[test]
fn test_failed_rerun_clears_previous_structure() {
    let outdir = tempfile::tempdir().unwrap();
    let first = one_shot_server("200 OK", "MODEL        1\nENDMDL\nEND\n");
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    stdout_of(
        cmd.args(["predict", "--example", "bradykinin", "--endpoint", &first, "--output-dir"])
            .arg(outdir.path()),
    );
    assert!(outdir.path().join("predicted_structure.pdb").exists());
    assert!(outdir.path().join("viewer.html").exists());

    let second = one_shot_server("500 Internal Server Error", "service unavailable");
    let mut cmd = Command::cargo_bin("foldview").unwrap();
    cmd.args(["predict", "--example", "insulin-b", "--endpoint", &second, "--output-dir"])
        .arg(outdir.path())
        .assert()
        .failure();

    let report = std::fs::read_to_string(outdir.path().join("report.html")).unwrap();
    assert!(report.contains("Small protein (Insulin B chain)"));
    assert!(report.contains("error-box"));
    assert!(!outdir.path().join("predicted_structure.pdb").exists());
    assert!(!outdir.path().join("viewer.html").exists());
}
