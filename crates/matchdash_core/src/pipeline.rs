use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::Job;

/// Sort key chosen by the user for the results view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    DatePosted,
    Salary,
}

/// Pure sort-then-filter pipeline from the raw job list to the displayed
/// view. Never mutates the source list; re-derived on every input change.
///
/// Filtering only removes elements, so the final order equals the sort order
/// restricted to the surviving subset.
pub fn rank_and_filter(jobs: &[Job], key: SortKey, filter_tags: &[String]) -> Vec<Job> {
    let mut ranked = jobs.to_vec();
    sort_jobs(&mut ranked, key);
    if filter_tags.is_empty() {
        return ranked;
    }
    let needles: Vec<String> = filter_tags.iter().map(|tag| tag.to_lowercase()).collect();
    ranked.retain(|job| matches_any_tag(job, &needles));
    ranked
}

fn sort_jobs(jobs: &mut [Job], key: SortKey) {
    // All three sorts are stable: equal keys keep their input order.
    match key {
        SortKey::Relevance => {
            jobs.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        }
        SortKey::DatePosted => {
            // Unparseable dates sort after every parseable one.
            jobs.sort_by_cached_key(|job| {
                let posted = parse_posted_date(&job.date_posted);
                (posted.is_none(), Reverse(posted.unwrap_or(0)))
            });
        }
        SortKey::Salary => {
            jobs.sort_by_cached_key(|job| Reverse(salary_value(&job.salary)));
        }
    }
}

/// A job survives when any filter tag is a case-insensitive substring of any
/// of its tags or matched keywords.
fn matches_any_tag(job: &Job, needles: &[String]) -> bool {
    needles.iter().any(|needle| {
        job.tags
            .iter()
            .chain(job.matched_keywords.iter())
            .any(|hay| hay.to_lowercase().contains(needle))
    })
}

/// Accepts RFC 3339 ("2024-05-01T12:00:00+00:00"), a bare datetime, or a
/// bare date. Anything else is unparseable and ranks last.
fn parse_posted_date(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc().timestamp());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
    }
    None
}

/// Integer formed from the digits of the salary string; no digits sorts as 0.
fn salary_value(salary: &str) -> u64 {
    salary
        .chars()
        .filter(char::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(digit as u8 - b'0'))
        })
}
