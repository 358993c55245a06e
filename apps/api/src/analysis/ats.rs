//! ATS compatibility sub-score, computed from direct signals rather than
//! derived from the Structure category.

use super::report::AtsCompatibility;
use super::text::word_count;
use super::vocab::{ESSENTIAL_ATS_KEYWORDS, ESSENTIAL_PATTERNS, TABLE_RE, VISUAL_RE};

const BASE_SCORE: i32 = 75;
const TABLE_PENALTY: i32 = 15;
const VISUAL_PENALTY: i32 = 10;
const SHORT_TEXT_PENALTY: i32 = 20;
const MISSING_KEYWORD_PENALTY: i32 = 5;
const SHORT_TEXT_WORDS: usize = 200;

/// The sub-score never drops below this floor: the product never shows a
/// zero ATS score, even for pathological input.
const FLOOR: i32 = 30;

pub fn score(cv_text: &str) -> AtsCompatibility {
    let mut score = BASE_SCORE;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    if TABLE_RE.is_match(cv_text) {
        score -= TABLE_PENALTY;
        issues.push("Présence possible de tableaux complexes".to_string());
        recommendations.push("Évitez les tableaux, utilisez des listes à puces".to_string());
    }

    if VISUAL_RE.is_match(cv_text) {
        score -= VISUAL_PENALTY;
        issues.push("Références à des éléments visuels détectées".to_string());
        recommendations.push("Limitez les éléments graphiques, privilégiez le texte".to_string());
    }

    if word_count(cv_text) < SHORT_TEXT_WORDS {
        score -= SHORT_TEXT_PENALTY;
        issues.push("CV trop court pour une analyse ATS optimale".to_string());
        recommendations.push("Enrichissez le contenu avec plus de détails".to_string());
    }

    let missing: Vec<&str> = ESSENTIAL_PATTERNS
        .iter()
        .zip(ESSENTIAL_ATS_KEYWORDS)
        .filter(|(re, _)| !re.is_match(cv_text))
        .map(|(_, kw)| *kw)
        .collect();
    if !missing.is_empty() {
        score -= missing.len() as i32 * MISSING_KEYWORD_PENALTY;
        issues.push(format!(
            "Mots-clés essentiels manquants: {}",
            missing.join(", ")
        ));
        recommendations.push("Ajoutez des sections clairement identifiées".to_string());
    }

    if issues.is_empty() {
        recommendations.push("Excellent! Votre CV est bien optimisé pour les ATS".to_string());
    }

    AtsCompatibility {
        score: score.clamp(FLOOR, 100) as u32,
        issues,
        recommendations,
    }
}
