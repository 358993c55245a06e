//! Keyword match report — partitions the fixed report vocabulary into
//! matched and missing terms, capped for display.

use super::report::KeywordAnalysis;
use super::vocab::{REPORT_VOCABULARY, REPORT_VOCABULARY_SET};

const MATCHED_CAP: usize = 10;
const MISSING_CAP: usize = 8;
const DENSITY_THRESHOLD: usize = 5;

pub fn build(cv_text: &str, job_description: &str) -> KeywordAnalysis {
    let hits = REPORT_VOCABULARY_SET.matches(cv_text);

    // Uncapped partition first: the caps are display trimming, the partition
    // itself covers the whole vocabulary with no overlap.
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for (i, term) in REPORT_VOCABULARY.iter().enumerate() {
        if hits.matched(i) {
            matched.push(term.to_string());
        } else {
            missing.push(term.to_string());
        }
    }
    let matched_count = matched.len();
    matched.truncate(MATCHED_CAP);
    missing.truncate(MISSING_CAP);

    let mut suggestions = Vec::new();
    if job_description.trim().is_empty() {
        suggestions.push("Utilisez des mots-clés spécifiques à votre secteur".to_string());
        suggestions.push("Intégrez des termes techniques pertinents".to_string());
    } else {
        suggestions
            .push("Adaptez votre vocabulaire aux termes exacts de l'offre d'emploi".to_string());
        suggestions
            .push("Répétez les mots-clés importants dans différentes sections".to_string());
    }
    if matched_count < DENSITY_THRESHOLD {
        suggestions.push("Augmentez la densité de mots-clés professionnels".to_string());
    }

    KeywordAnalysis {
        matched_keywords: matched,
        missing_keywords: missing,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_partition_is_disjoint() {
        let cv = "Expérience en gestion de projet, compétences javascript et sql";
        let report = build(cv, "");
        let matched: HashSet<_> = report.matched_keywords.iter().collect();
        let missing: HashSet<_> = report.missing_keywords.iter().collect();
        assert!(matched.is_disjoint(&missing));
        assert!(!report.matched_keywords.is_empty());
    }

    #[test]
    fn test_empty_input_misses_everything() {
        let report = build("", "");
        assert!(report.matched_keywords.is_empty());
        assert_eq!(report.missing_keywords.len(), MISSING_CAP);
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("densité de mots-clés")));
    }

    #[test]
    fn test_caps_bound_both_lists() {
        let everything = REPORT_VOCABULARY.join(" ");
        let report = build(&everything, "");
        assert_eq!(report.matched_keywords.len(), MATCHED_CAP);
        assert!(report.missing_keywords.is_empty());
        // With every term matched, the density suggestion stays silent.
        assert!(!report
            .suggestions
            .iter()
            .any(|s| s.contains("densité")));
    }

    #[test]
    fn test_suggestions_branch_on_job_description() {
        let with_jd = build("texte", "offre de poste développeur senior");
        assert!(with_jd
            .suggestions
            .iter()
            .any(|s| s.contains("l'offre d'emploi")));

        let without_jd = build("texte", "");
        assert!(without_jd
            .suggestions
            .iter()
            .any(|s| s.contains("votre secteur")));
    }

    #[test]
    fn test_matched_keywords_keep_vocabulary_order() {
        let report = build("javascript puis gestion", "");
        assert_eq!(report.matched_keywords, vec!["gestion", "javascript"]);
    }
}
