use std::collections::{HashMap, HashSet};

use serde::Serialize;

pub const DEFAULT_TOP_N: usize = 10;

/// Outcome of comparing extracted resume skills against a job's required set.
///
/// `required` is ranked by mention frequency; `matched` and `missing` are its
/// exact partition, sorted for stable presentation. `readiness` lies in
/// [0, 100] by construction and is defined as 0 for an empty required set.
#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    pub required: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub readiness: f64,
}

/// Computes the skill gap between a job's raw required-skills listings and the
/// skills extracted from a resume.
///
/// Each raw listing (one per posting row) is split on commas, tokens trimmed
/// and lower-cased, empties discarded. Tokens are pooled across rows and
/// frequency-counted; the `top_n` most frequent distinct tokens form the
/// required set, ties broken by first-encountered order. A `None` row is a
/// malformed source cell and contributes no tokens rather than failing the
/// analysis.
///
/// Pure function: never mutates its inputs, never errors on any input shape.
pub fn score(
    required_raw: &[Option<String>],
    extracted: &HashSet<String>,
    top_n: usize,
) -> GapReport {
    let required = required_set(required_raw, top_n);

    let (mut matched, mut missing): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|skill| extracted.contains(skill));

    let readiness = if required.is_empty() {
        0.0
    } else {
        matched.len() as f64 / required.len() as f64 * 100.0
    };

    matched.sort();
    missing.sort();

    GapReport {
        required,
        matched,
        missing,
        readiness,
    }
}

/// The top-N most frequent normalized tokens, in rank order. The stable sort
/// keeps first-encountered order among equal counts.
fn required_set(required_raw: &[Option<String>], top_n: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut ranked: Vec<String> = Vec::new();

    for raw in required_raw.iter().flatten() {
        for piece in raw.split(',') {
            let token = piece.trim().to_lowercase();
            if token.is_empty() {
                continue;
            }
            counts
                .entry(token.clone())
                .and_modify(|c| *c += 1)
                .or_insert_with(|| {
                    ranked.push(token);
                    1
                });
        }
    }

    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
    ranked.truncate(top_n);
    ranked
}

/// Builds a human-readable readiness line from the score and missing skills.
pub fn build_recommendation(readiness: f64, missing: &[String]) -> String {
    let top_missing: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();

    if missing.is_empty() {
        "You already cover every required skill for this role.".to_string()
    } else if readiness >= 80.0 {
        format!(
            "Strong readiness ({readiness:.1}%). Round out your profile with: {}.",
            top_missing.join(", ")
        )
    } else if readiness >= 50.0 {
        format!(
            "Moderate readiness ({readiness:.1}%). Prioritize learning: {}.",
            top_missing.join(", ")
        )
    } else {
        format!(
            "Low readiness ({readiness:.1}%). Significant gaps to close: {}.",
            top_missing.join(", ")
        )
    }
}
