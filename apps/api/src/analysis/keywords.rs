//! Mots-clés et Optimisation ATS — vocabulary density plus job-description match.

use super::report::{Category, CategoryResult};
use super::text::{distinct_hits, significant_job_tokens};
use super::vocab::{PROFESSIONAL_SET, TECHNICAL_SET};

const BASE_SCORE: i32 = 40;

// Distinct professional-term hits → band bonus.
const PROFESSIONAL_EXCELLENT: usize = 8;
const PROFESSIONAL_GOOD: usize = 5;

// Distinct technical-term hits → band bonus.
const TECHNICAL_GOOD: usize = 5;
const TECHNICAL_SOME: usize = 2;

// Fraction of significant job-description tokens found in the résumé.
const MATCH_EXCELLENT_PCT: u32 = 60;
const MATCH_GOOD_PCT: u32 = 40;

/// At most this many job-description tokens are compared; beyond that the
/// percentage would dilute into noise for long postings.
const JOB_TOKEN_CAP: usize = 15;

pub fn score(cv_text: &str, job_description: &str) -> CategoryResult {
    let mut score = BASE_SCORE;
    let mut issues = Vec::new();
    let mut strengths = Vec::new();

    let professional = distinct_hits(&PROFESSIONAL_SET, cv_text);
    if professional >= PROFESSIONAL_EXCELLENT {
        score += 20;
        strengths.push(format!(
            "Excellent usage de mots-clés professionnels ({professional} identifiés)"
        ));
    } else if professional >= PROFESSIONAL_GOOD {
        score += 15;
        strengths.push(format!(
            "Bon usage de mots-clés professionnels ({professional} identifiés)"
        ));
    } else {
        issues.push(format!(
            "Mots-clés professionnels insuffisants ({professional} identifiés)"
        ));
    }

    let technical = distinct_hits(&TECHNICAL_SET, cv_text);
    if technical >= TECHNICAL_GOOD {
        score += 15;
        strengths.push(format!(
            "Bonnes compétences techniques mentionnées ({technical} identifiées)"
        ));
    } else if technical >= TECHNICAL_SOME {
        score += 10;
        strengths.push(format!(
            "Quelques compétences techniques mentionnées ({technical} identifiées)"
        ));
    } else {
        issues.push("Compétences techniques insuffisamment détaillées".to_string());
    }

    match job_match_percentage(cv_text, job_description) {
        Some(pct) if pct >= MATCH_EXCELLENT_PCT => {
            score += 15;
            strengths.push(format!(
                "Excellente adéquation avec l'offre d'emploi ({pct}% de correspondance)"
            ));
        }
        Some(pct) if pct >= MATCH_GOOD_PCT => {
            score += 10;
            strengths.push(format!(
                "Bonne adéquation avec l'offre d'emploi ({pct}% de correspondance)"
            ));
        }
        Some(pct) => {
            issues.push(format!(
                "Faible correspondance avec l'offre d'emploi ({pct}% seulement)"
            ));
        }
        None => {
            issues.push("Aucune description de poste fournie pour comparaison".to_string());
        }
    }

    CategoryResult {
        category: Category::Keywords,
        score: score.clamp(0, 100) as u32,
        description: Category::Keywords.description().to_string(),
        issues,
        strengths,
    }
}

/// Rounded percentage of significant job-description tokens that also occur
/// in the résumé, or `None` when there is nothing meaningful to compare
/// (empty posting, or one made of stop-words only). The one cross-document
/// comparison in the engine.
fn job_match_percentage(cv_text: &str, job_description: &str) -> Option<u32> {
    if job_description.trim().is_empty() {
        return None;
    }
    let tokens = significant_job_tokens(job_description, JOB_TOKEN_CAP);
    if tokens.is_empty() {
        return None;
    }
    let cv_lower = cv_text.to_lowercase();
    let matched = tokens.iter().filter(|t| cv_lower.contains(t.as_str())).count();
    Some((matched as f64 / tokens.len() as f64 * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_technical_keywords_cite_the_count() {
        let cv = "Stack: javascript, react, node, sql, docker, git";
        let result = score(cv, "");
        assert!(result
            .strengths
            .iter()
            .any(|s| s.contains("techniques") && s.contains("(6 identifiées)")));
        // Top technical band applied on top of the base score.
        assert!(result.score >= (BASE_SCORE + 15) as u32);
    }

    #[test]
    fn test_professional_band_thresholds() {
        let five = "gestion projet analyse communication leadership";
        let result = score(five, "");
        assert!(result
            .strengths
            .iter()
            .any(|s| s.starts_with("Bon usage") && s.contains("(5 identifiés)")));

        let eight = "gestion projet analyse communication leadership innovation stratégie équipe";
        let result = score(eight, "");
        assert!(result
            .strengths
            .iter()
            .any(|s| s.starts_with("Excellent usage") && s.contains("(8 identifiés)")));
    }

    #[test]
    fn test_sparse_text_reports_both_vocabulary_issues() {
        let result = score("bonjour", "");
        assert!(result
            .issues
            .iter()
            .any(|i| i.contains("professionnels insuffisants")));
        assert!(result
            .issues
            .iter()
            .any(|i| i.contains("techniques insuffisamment")));
        assert_eq!(result.score, BASE_SCORE as u32);
    }

    #[test]
    fn test_full_job_overlap_scores_excellent() {
        let jd = "Recherche développeur javascript maîtrisant docker kubernetes";
        let cv = "Développeur javascript, expert docker et kubernetes, maîtrisant la recherche";
        let result = score(cv, jd);
        let strength = result
            .strengths
            .iter()
            .find(|s| s.contains("adéquation"))
            .expect("match strength present");
        assert!(strength.contains("Excellente"));
        assert!(strength.contains("100%"));
    }

    #[test]
    fn test_disjoint_job_description_reports_low_percentage() {
        let jd = "pilotage budgétaire comptabilité fiscalité trésorerie";
        let result = score("javascript react node", jd);
        assert!(result
            .issues
            .iter()
            .any(|i| i.contains("Faible correspondance") && i.contains("0%")));
    }

    #[test]
    fn test_missing_job_description_is_an_issue_not_an_error() {
        let result = score("javascript react", "");
        assert!(result
            .issues
            .iter()
            .any(|i| i.contains("Aucune description de poste")));
    }

    #[test]
    fn test_stop_word_only_job_description_treated_as_missing() {
        // Every token is short or a stop-word: nothing to compare.
        let result = score("javascript react", "le la les et ou de");
        assert!(result
            .issues
            .iter()
            .any(|i| i.contains("Aucune description de poste")));
    }

    #[test]
    fn test_job_match_percentage_rounds() {
        // 2 of 3 tokens → 66.67 → 67.
        let jd = "kubernetes terraform ansible";
        let cv = "kubernetes et terraform en production";
        assert_eq!(job_match_percentage(cv, jd), Some(67));
    }
}
