//! Integration tests for tablefu CLI

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

const BOOKS: &str = "\
Author,Best Book,Number of Pages,Style
Samuel Beckett,Malone Muert,120,Modernism
James Joyce,Ulysses,644,Modernism
Nicholson Baker,Mezannine,150,Minimalism
Vladimir Sorokin,The Queue,263,Satire
";

fn fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create fixture");
    file.write_all(contents.as_bytes())
        .expect("Failed to write fixture");
    file
}

fn run_tablefu(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_tablefu"))
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn run_on_books(args: &[&str]) -> (String, String, bool) {
    let file = fixture(BOOKS);
    let path = file.path().to_str().expect("Non UTF-8 temp path");
    let mut all = vec![path];
    all.extend(args);
    run_tablefu(&all)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_tablefu(&["--help"]);

    assert!(success);
    assert!(stdout.contains("tablefu"));
    assert!(stdout.contains("--columns"));
    assert!(stdout.contains("--filter"));
    assert!(stdout.contains("--facet"));
    assert!(stdout.contains("--format"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_tablefu(&["--version"]);

    assert!(success);
    assert!(stdout.contains("tablefu"));
}

#[test]
fn test_csv_output_round_trips() {
    let (stdout, _, success) = run_on_books(&[]);

    assert!(success);
    assert_eq!(stdout, BOOKS);
}

#[test]
fn test_columns_and_sort() {
    let (stdout, _, success) =
        run_on_books(&["--columns", "Author,Style", "--sort", "Author", "--reverse"]);

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Author,Style");
    assert_eq!(lines[1], "Vladimir Sorokin,Satire");
    assert_eq!(lines[4], "James Joyce,Modernism");
}

#[test]
fn test_sort_is_lexicographic() {
    let (stdout, _, success) = run_on_books(&[
        "--columns",
        "Number of Pages",
        "--sort",
        "Number of Pages",
    ]);

    assert!(success);
    assert_eq!(stdout, "Number of Pages\n120\n150\n263\n644\n");
}

#[test]
fn test_filters_are_conjunctive() {
    let (stdout, _, success) = run_on_books(&[
        "--filter",
        "Style=Modernism",
        "--filter",
        "Number of Pages=644",
        "--columns",
        "Author",
    ]);

    assert!(success);
    assert_eq!(stdout, "Author\nJames Joyce\n");
}

#[test]
fn test_total() {
    let (stdout, _, success) = run_on_books(&["--total", "Number of Pages"]);

    assert!(success);
    assert_eq!(stdout, "Number of Pages: 1177\n");
}

#[test]
fn test_total_non_numeric() {
    let (_, stderr, success) = run_on_books(&["--total", "Author"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("Author"));
}

#[test]
fn test_facet_output() {
    let (stdout, _, success) = run_on_books(&["--facet", "Style", "--columns", "Author"]);

    assert!(success);
    assert_eq!(
        stdout,
        "# Minimalism\nAuthor\nNicholson Baker\n\
         # Modernism\nAuthor\nSamuel Beckett\nJames Joyce\n\
         # Satire\nAuthor\nVladimir Sorokin\n"
    );
}

#[test]
fn test_facet_json_output() {
    let (stdout, _, success) = run_on_books(&["--facet", "Style", "--format", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["Modernism"].as_array().map(Vec::len), Some(2));
    assert_eq!(parsed["Satire"][0]["Best Book"], "The Queue");
}

#[test]
fn test_json_output() {
    let (stdout, _, success) = run_on_books(&["--format", "json", "--columns", "Author,Style"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let rows = parsed.as_array().expect("Expected a JSON array");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["Author"], "Samuel Beckett");
    assert!(rows[0].get("Best Book").is_none());
}

#[test]
fn test_html_output() {
    let (stdout, _, success) = run_on_books(&["--format", "html", "--columns", "Author"]);

    assert!(success);
    assert!(stdout.starts_with("<table>\n<thead>\n"));
    assert!(stdout.contains(r#"<th style="" class="header">Author</th>"#));
    assert!(stdout.contains(r#"<tr id="row3" class="row odd">"#));
    assert!(stdout.ends_with("</table>\n"));
}

#[test]
fn test_config_file() {
    let config = fixture(
        r#"{
            "columns": ["Author", "Number of Pages"],
            "formatting": {"Author": {"filter": "title"}, "Number of Pages": {"filter": "dollars"}},
            "style": {"Author": "text-align:left;"},
            "sorted_by": {"Author": {"reverse": true}}
        }"#,
    );
    let (stdout, _, success) = run_on_books(&[
        "--config",
        config.path().to_str().expect("Non UTF-8 temp path"),
        "--format",
        "html",
    ]);

    assert!(success);
    assert!(stdout.contains(r#"<th style="text-align:left;" class="header">Author</th>"#));
    assert!(stdout.contains(
        r#"<tr id="row0" class="row even"><td style="text-align:left;" class="datum">Vladimir Sorokin</td><td style="" class="datum">$263</td></tr>"#
    ));
}

#[test]
fn test_reverse_reuses_config_sort() {
    let config = fixture(r#"{"sorted_by": {"Author": {}}, "columns": ["Author"]}"#);
    let (stdout, _, success) = run_on_books(&[
        "--config",
        config.path().to_str().expect("Non UTF-8 temp path"),
        "--reverse",
    ]);

    assert!(success);
    assert_eq!(stdout.lines().nth(1), Some("Vladimir Sorokin"));
}

#[test]
fn test_delimiter() {
    let file = fixture("Name;Share\nSite, Inc;0.02\n");
    let path = file.path().to_str().expect("Non UTF-8 temp path");
    let (stdout, _, success) = run_tablefu(&[path, "--delimiter", ";"]);

    assert!(success);
    assert_eq!(stdout, "Name;Share\nSite, Inc;0.02\n");
}

#[test]
fn test_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tablefu"))
        .args(["-", "--columns", "Style"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");
    child
        .stdin
        .take()
        .expect("Missing stdin")
        .write_all(BOOKS.as_bytes())
        .expect("Failed to write stdin");
    let output = child.wait_with_output().expect("Failed to wait on command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.starts_with("Style\nModernism\n"));
}

#[test]
fn test_unknown_column() {
    let (_, stderr, success) = run_on_books(&["--sort", "Publisher"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("Publisher isn't a column in this table"));
}

#[test]
fn test_bad_filter_syntax() {
    let (_, stderr, success) = run_on_books(&["--filter", "Style"]);

    assert!(!success);
    assert!(stderr.contains("COLUMN=VALUE"));
}

#[test]
fn test_invalid_path() {
    let (_, stderr, success) = run_tablefu(&["/nonexistent/path.csv"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}
