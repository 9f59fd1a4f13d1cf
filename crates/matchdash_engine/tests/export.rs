use std::fs;

use matchdash_core::Job;
use matchdash_engine::{build_jobs_csv, write_jobs_export, EXPORT_FILENAME};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample_job() -> Job {
    Job {
        position: "Rust Engineer".to_string(),
        company: "Acme".to_string(),
        salary: "$150,000".to_string(),
        location: "Remote".to_string(),
        tags: vec!["rust".to_string(), "backend".to_string()],
        apply_url: "https://example.com/1".to_string(),
        date_posted: "2026-08-01".to_string(),
        description: "ignored by the export".to_string(),
        relevance_score: 0.9,
        matched_keywords: vec!["rust".to_string()],
    }
}

#[test]
fn empty_list_produces_no_csv() {
    assert_eq!(build_jobs_csv(&[]), None);
}

#[test]
fn csv_has_header_and_one_line_per_job() {
    let csv = build_jobs_csv(&[sample_job(), sample_job()]).expect("csv");
    let lines: Vec<&str> = csv.trim_end().lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "\"Position\",\"Company\",\"Salary\",\"Location\",\"Date Posted\",\"Relevance Score\",\"Tags\",\"Matched Keywords\""
    );
    assert!(csv.ends_with('\n'));
}

#[test]
fn every_field_is_quoted_and_lists_join_with_semicolons() {
    let csv = build_jobs_csv(&[sample_job()]).expect("csv");
    let row = csv.trim_end().lines().nth(1).unwrap();
    assert_eq!(
        row,
        "\"Rust Engineer\",\"Acme\",\"$150,000\",\"Remote\",\"2026-08-01\",\"90%\",\"rust; backend\",\"rust\""
    );
}

#[test]
fn embedded_quotes_are_doubled() {
    let mut job = sample_job();
    job.position = "Senior \"Staff\" Engineer".to_string();
    let csv = build_jobs_csv(&[job]).expect("csv");
    assert!(csv.contains("\"Senior \"\"Staff\"\" Engineer\""));
}

#[test]
fn relevance_rounds_to_whole_percent() {
    let mut job = sample_job();
    job.relevance_score = 0.876;
    let csv = build_jobs_csv(&[job]).expect("csv");
    assert!(csv.contains("\"88%\""));
}

#[test]
fn write_skips_empty_list() {
    let temp = TempDir::new().unwrap();
    let written = write_jobs_export(temp.path(), &[]).unwrap();
    assert_eq!(written, None);
    assert!(!temp.path().join(EXPORT_FILENAME).exists());
}

#[test]
fn write_replaces_a_previous_export() {
    let temp = TempDir::new().unwrap();

    let first = write_jobs_export(temp.path(), &[sample_job()])
        .unwrap()
        .expect("path");
    assert_eq!(first.file_name().unwrap(), EXPORT_FILENAME);

    let mut other = sample_job();
    other.position = "Platform Engineer".to_string();
    let second = write_jobs_export(temp.path(), &[other])
        .unwrap()
        .expect("path");
    assert_eq!(first, second);

    let content = fs::read_to_string(&second).unwrap();
    assert!(content.contains("Platform Engineer"));
    assert!(!content.contains("Rust Engineer"));
}

#[test]
fn write_creates_the_state_dir() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("state");
    assert!(!nested.exists());

    let path = write_jobs_export(&nested, &[sample_job()])
        .unwrap()
        .expect("path");
    assert!(path.exists());
}
