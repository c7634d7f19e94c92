use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_txt2pdf(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_txt2pdf"))
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "info")
        .output()
        .expect("run txt2pdf")
}

#[test]
fn reports_capacity_warnings_and_page_count() {
    let dir = tempfile::tempdir().unwrap();
    let text = format!("short\n{}\n", "z".repeat(130));
    fs::write(dir.path().join("notes.txt"), text).unwrap();

    let output = run_txt2pdf(&["notes.txt", "-o", "notes.pdf"], dir.path());
    assert!(output.status.success(), "process failed: {output:?}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("80 characters per line and 60 lines per page"),
        "missing capacity line in: {stderr}"
    );
    assert!(
        stderr.contains("wrapping line 2 in notes.txt"),
        "missing wrap warning in: {stderr}"
    );
    assert!(
        stderr.contains("PDF document: 1 pages"),
        "missing summary in: {stderr}"
    );

    let pdf = fs::read(dir.path().join("notes.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn landscape_letter_with_custom_margins() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.txt"), "hello\n").unwrap();

    let output = run_txt2pdf(
        &[
            "in.txt", "-m", "letter", "-L", "-l", "1", "-r", "1", "-s", "12", "-v", "0.3",
            "--title", "Memo",
        ],
        dir.path(),
    );
    assert!(output.status.success(), "process failed: {output:?}");
    assert!(dir.path().join("output.pdf").exists());
}

#[test]
fn unknown_paper_size_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.txt"), "hello\n").unwrap();

    let output = run_txt2pdf(&["in.txt", "-m", "A11"], dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown page size 'A11'"), "got: {stderr}");
    assert!(!dir.path().join("output.pdf").exists());
}

#[test]
fn margins_larger_than_the_page_fail_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.txt"), "hello\n").unwrap();

    let output = run_txt2pdf(&["in.txt", "-l", "15", "-r", "15"], dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid page geometry"), "got: {stderr}");
    assert!(!dir.path().join("output.pdf").exists());
}
