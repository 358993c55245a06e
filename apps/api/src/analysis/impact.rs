//! Impact et Résultats — measurable outcomes, achievements, responsibility level.

use super::report::{Category, CategoryResult};
use super::text::{distinct_hits, total_occurrences};
use super::vocab::{ACHIEVEMENT_SET, IMPACT_PATTERNS, RESPONSIBILITY_SET};

const BASE_SCORE: i32 = 30;

// Impact evidence counts occurrences, not distinct patterns: three separate
// percentages are three pieces of evidence.
const IMPACT_EXCELLENT: usize = 5;
const IMPACT_GOOD: usize = 2;

const ACHIEVEMENTS_EXCELLENT: usize = 5;
const ACHIEVEMENTS_SOME: usize = 2;

const RESPONSIBILITY_CLEAR: usize = 3;

pub fn score(cv_text: &str) -> CategoryResult {
    let mut score = BASE_SCORE;
    let mut issues = Vec::new();
    let mut strengths = Vec::new();

    let impact = total_occurrences(&IMPACT_PATTERNS, cv_text);
    if impact >= IMPACT_EXCELLENT {
        score += 25;
        strengths.push(format!(
            "Excellent impact quantifié ({impact} éléments mesurables)"
        ));
    } else if impact >= IMPACT_GOOD {
        score += 15;
        strengths.push(format!("Bon impact quantifié ({impact} éléments mesurables)"));
    } else {
        issues.push("Manque de quantification de l'impact professionnel".to_string());
    }

    let achievements = distinct_hits(&ACHIEVEMENT_SET, cv_text);
    if achievements >= ACHIEVEMENTS_EXCELLENT {
        score += 20;
        strengths.push("Réalisations concrètes bien mises en avant".to_string());
    } else if achievements >= ACHIEVEMENTS_SOME {
        score += 10;
        strengths.push("Quelques réalisations mentionnées".to_string());
    } else {
        issues.push("Réalisations et succès peu mis en valeur".to_string());
    }

    let responsibilities = distinct_hits(&RESPONSIBILITY_SET, cv_text);
    if responsibilities >= RESPONSIBILITY_CLEAR {
        score += 15;
        strengths.push("Responsabilités importantes clairement identifiées".to_string());
    } else if responsibilities >= 1 {
        score += 10;
        strengths.push("Quelques responsabilités mentionnées".to_string());
    } else {
        issues.push("Niveau de responsabilité peu clair".to_string());
    }

    CategoryResult {
        category: Category::Impact,
        score: score.clamp(0, 100) as u32,
        description: Category::Impact.description().to_string(),
        issues,
        strengths,
    }
}
