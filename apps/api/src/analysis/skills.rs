//! Compétences et Qualifications — skill families, soft skills, credentials, languages.

use super::report::{Category, CategoryResult};
use super::text::distinct_hits;
use super::vocab::{
    CERTIFICATION_RE, LANGUAGES_RE, SECTION_COMPETENCES_RE, SOFT_SKILL_SET, TECH_DOMAIN_PATTERNS,
};

const BASE_SCORE: i32 = 40;
const SECTION_BONUS: i32 = 5;
const CERTIFICATION_BONUS: i32 = 10;
const LANGUAGES_BONUS: i32 = 10;

const TECH_DOMAINS_DIVERSE: usize = 3;
const SOFT_SKILLS_EXCELLENT: usize = 5;
const SOFT_SKILLS_GOOD: usize = 3;

pub fn score(cv_text: &str) -> CategoryResult {
    let mut score = BASE_SCORE;
    let mut issues = Vec::new();
    let mut strengths = Vec::new();

    if SECTION_COMPETENCES_RE.is_match(cv_text) {
        score += SECTION_BONUS;
        strengths.push("Section compétences clairement identifiée".to_string());
    } else {
        issues.push("Aucune section compétences repérée".to_string());
    }

    // One hit per skill family, not per keyword: five diverse domains beat
    // fifteen synonyms of the same one.
    let domains = TECH_DOMAIN_PATTERNS
        .iter()
        .filter(|re| re.is_match(cv_text))
        .count();
    if domains >= TECH_DOMAINS_DIVERSE {
        score += 15;
        strengths.push("Bonnes compétences techniques diversifiées".to_string());
    } else if domains >= 1 {
        score += 10;
        strengths.push("Quelques compétences techniques mentionnées".to_string());
    } else {
        issues.push("Compétences techniques insuffisamment détaillées".to_string());
    }

    let soft = distinct_hits(&SOFT_SKILL_SET, cv_text);
    if soft >= SOFT_SKILLS_EXCELLENT {
        score += 15;
        strengths.push(format!(
            "Excellentes compétences interpersonnelles ({soft} identifiées)"
        ));
    } else if soft >= SOFT_SKILLS_GOOD {
        score += 10;
        strengths.push(format!(
            "Bonnes compétences interpersonnelles ({soft} identifiées)"
        ));
    } else {
        issues.push("Compétences interpersonnelles peu mises en avant".to_string());
    }

    if CERTIFICATION_RE.is_match(cv_text) {
        score += CERTIFICATION_BONUS;
        strengths.push("Formations et certifications mentionnées".to_string());
    } else {
        issues.push("Formations et certifications peu détaillées".to_string());
    }

    if LANGUAGES_RE.is_match(cv_text) {
        score += LANGUAGES_BONUS;
        strengths.push("Compétences linguistiques mentionnées".to_string());
    } else {
        issues.push("Compétences linguistiques non précisées".to_string());
    }

    CategoryResult {
        category: Category::Skills,
        score: score.clamp(0, 100) as u32,
        description: Category::Skills.description().to_string(),
        issues,
        strengths,
    }
}
