//! Fuzzy matching over emoji names
//!
//! Heuristic tiered scoring, case-insensitive: exact match beats prefix
//! beats substring beats in-order subsequence. Scores are internal ranking
//! values only and are never returned to callers; the contract is the tier
//! ordering and stability within a tier.

use std::cmp::Ordering;

/// Score a candidate name against a query.
///
/// Returns `None` when the candidate does not match at all. An empty query
/// matches every candidate through the substring tier (the empty string is
/// contained in everything), which defines the output for `query = ""`.
pub fn score(query: &str, candidate: &str) -> Option<f64> {
    let q = query.to_lowercase();
    let c = candidate.to_lowercase();

    let q_len = q.chars().count() as f64;
    let c_len = c.chars().count() as f64;

    if c == q {
        return Some(1000.0);
    }
    if c.starts_with(&q) {
        return Some(500.0 + q_len / c_len * 100.0);
    }
    if c.contains(&q) {
        return Some(100.0 + q_len / c_len * 50.0);
    }

    // Greedy subsequence scan: each query char is matched at its next
    // occurrence at or after the previous match position. A char with no
    // remaining occurrence is skipped without moving the pointer.
    let c_chars: Vec<char> = c.chars().collect();
    let mut pos = 0;
    let mut matched = 0usize;
    for qc in q.chars() {
        if let Some(offset) = c_chars[pos..].iter().position(|&cc| cc == qc) {
            matched += 1;
            pos += offset + 1;
        }
    }

    if matched > 0 {
        Some(matched as f64 / q_len * 20.0)
    } else {
        None
    }
}

/// Rank candidates against a query and return the top `limit` names.
///
/// Sort is stable: candidates with equal scores keep their input order.
/// A non-positive `limit` yields an empty result.
pub fn search<'a, I>(query: &str, candidates: I, limit: i64) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    if limit <= 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .filter_map(|name| score(query, name).map(|s| (s, name)))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.truncate(limit as usize);

    scored.into_iter().map(|(_, name)| name.to_string()).collect()
}
