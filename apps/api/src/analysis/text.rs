//! Small text primitives shared by the category scorers.
//!
//! Everything here operates on a guaranteed `&str` (callers normalize
//! missing input to `""` before the engine runs) and never panics.

use std::collections::HashSet;

use regex::{Regex, RegexSet};

use super::vocab::JOB_STOP_WORDS;

/// Number of whitespace-separated tokens. Empty input counts zero words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// How many distinct vocabulary terms appear in the text.
pub fn distinct_hits(set: &RegexSet, text: &str) -> usize {
    set.matches(text).iter().count()
}

/// Which vocabulary terms appear in the text, in vocabulary order.
/// `set` and `vocab` must be index-aligned (built by `vocab::term_set`).
pub fn matched_terms<'a>(set: &RegexSet, vocab: &[&'a str], text: &str) -> Vec<&'a str> {
    set.matches(text).iter().map(|i| vocab[i]).collect()
}

/// Total occurrences across a pattern list, counting multiplicity.
pub fn total_occurrences(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}

/// Distinct 4-digit years found by `year_re` (1900–2099 band).
pub fn distinct_years(year_re: &Regex, text: &str) -> usize {
    year_re
        .find_iter(text)
        .map(|m| m.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Significant words of a job description: lowercased, longer than 4
/// characters, stop-words removed, deduplicated in first-seen order,
/// capped to `cap`. Character length counts chars, not bytes, so accented
/// French words are measured fairly.
pub fn significant_job_tokens(job_description: &str, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for raw in job_description.to_lowercase().split_whitespace() {
        let word: String = raw
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '/')
            .collect();
        if word.chars().count() <= 4 || JOB_STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        if seen.insert(word.clone()) {
            tokens.push(word);
            if tokens.len() == cap {
                break;
            }
        }
    }
    tokens
}
