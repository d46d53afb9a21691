//! Batch add with dedup, and the `front = back` bulk text format.

use crate::models::pair::{Pair, PairDraft};
use std::collections::HashSet;

/// Accept the candidates that are non-empty after trimming and whose
/// `(front, back)` key is not already present, either in `existing` or earlier
/// in the same batch. Accepted pairs get fresh ids and default scheduling.
///
/// Returns the accepted pairs (in candidate order) and their count.
pub fn add_batch(existing: &[Pair], candidates: &[PairDraft], now: i64) -> (Vec<Pair>, usize) {
    let mut seen: HashSet<(String, String)> = existing
        .iter()
        .map(|p| {
            let (front, back) = p.key();
            (front.trim().to_string(), back.trim().to_string())
        })
        .collect();

    let accepted: Vec<Pair> = candidates
        .iter()
        .filter_map(PairDraft::sanitized)
        .filter(|d| seen.insert((d.front.clone(), d.back.clone())))
        .map(|d| Pair::new(d.front, d.back, now))
        .collect();

    let count = accepted.len();
    (accepted, count)
}

/// Parse newline-delimited `front = back` records. Lines that do not split
/// into exactly two non-empty parts are skipped.
pub fn parse_bulk_text(text: &str) -> Vec<PairDraft> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter_map(parse_bulk_line)
        .collect()
}

fn parse_bulk_line(line: &str) -> Option<PairDraft> {
    let parts: Vec<&str> = line.split('=').map(str::trim).collect();
    match parts.as_slice() {
        [front, back] if !front.is_empty() && !back.is_empty() => {
            Some(PairDraft::new(*front, *back))
        }
        _ => None,
    }
}
