use std::path::{Path, PathBuf};

use matchdash_core::Job;

use crate::persist::{AtomicFileWriter, PersistError};

pub const EXPORT_FILENAME: &str = "jobs.csv";

const HEADER: [&str; 8] = [
    "Position",
    "Company",
    "Salary",
    "Location",
    "Date Posted",
    "Relevance Score",
    "Tags",
    "Matched Keywords",
];

const LIST_SEPARATOR: &str = "; ";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Renders the job list as CSV. Every field is double-quoted, embedded
/// quotes are doubled, list fields join with "; ". Returns `None` for an
/// empty list so callers skip writing a header-only file.
pub fn build_jobs_csv(jobs: &[Job]) -> Option<String> {
    if jobs.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(jobs.len() + 1);
    lines.push(csv_line(HEADER.iter().map(|s| s.to_string())));
    for job in jobs {
        lines.push(csv_line(
            [
                job.position.clone(),
                job.company.clone(),
                job.salary.clone(),
                job.location.clone(),
                job.date_posted.clone(),
                format!("{}%", (job.relevance_score * 100.0).round() as i64),
                job.tags.join(LIST_SEPARATOR),
                job.matched_keywords.join(LIST_SEPARATOR),
            ]
            .into_iter(),
        ));
    }

    let mut csv = lines.join("\n");
    csv.push('\n');
    Some(csv)
}

/// Writes the CSV into `state_dir/jobs.csv`, replacing any previous export
/// atomically. `Ok(None)` means the list was empty and nothing was written.
pub fn write_jobs_export(state_dir: &Path, jobs: &[Job]) -> Result<Option<PathBuf>, ExportError> {
    let Some(csv) = build_jobs_csv(jobs) else {
        return Ok(None);
    };
    let writer = AtomicFileWriter::new(state_dir.to_path_buf());
    let path = writer.write(EXPORT_FILENAME, &csv)?;
    Ok(Some(path))
}

fn csv_line(fields: impl Iterator<Item = String>) -> String {
    fields
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}
