//! Structure et Format — contact details, expected sections, document length.

use super::report::{Category, CategoryResult};
use super::text::word_count;
use super::vocab::{
    ADDRESS_RE, EMAIL_RE, PHONE_RE, SECTION_COMPETENCES_RE, SECTION_EXPERIENCE_RE,
    SECTION_FORMATION_RE, SECTION_PROFIL_RE,
};

const BASE_SCORE: i32 = 30;
const EMAIL_BONUS: i32 = 15;
const PHONE_BONUS: i32 = 15;
const ADDRESS_BONUS: i32 = 10;
const SECTION_BONUS: i32 = 7;
const LENGTH_BONUS: i32 = 8;

// Ideal word-count band for this category. Content uses its own, stricter bands.
const MIN_WORDS: usize = 300;
const MAX_WORDS: usize = 800;

pub fn score(cv_text: &str) -> CategoryResult {
    let mut score = BASE_SCORE;
    let mut issues = Vec::new();
    let mut strengths = Vec::new();

    if EMAIL_RE.is_match(cv_text) {
        score += EMAIL_BONUS;
        strengths.push("Adresse email présente et valide".to_string());
    } else {
        issues.push("Adresse email manquante ou invalide".to_string());
    }

    if PHONE_RE.is_match(cv_text) {
        score += PHONE_BONUS;
        strengths.push("Numéro de téléphone français valide".to_string());
    } else {
        issues.push("Numéro de téléphone manquant ou format incorrect".to_string());
    }

    if ADDRESS_RE.is_match(cv_text) {
        score += ADDRESS_BONUS;
        strengths.push("Informations de localisation présentes".to_string());
    } else {
        issues.push("Adresse ou ville non mentionnée".to_string());
    }

    // Each section reports its own issue when missing: the UI lists them
    // individually, never as one aggregate message.
    let sections = [
        ("expérience", &*SECTION_EXPERIENCE_RE),
        ("formation", &*SECTION_FORMATION_RE),
        ("compétences", &*SECTION_COMPETENCES_RE),
        ("profil", &*SECTION_PROFIL_RE),
    ];
    for (name, re) in sections {
        if re.is_match(cv_text) {
            score += SECTION_BONUS;
            strengths.push(format!("Section {name} identifiée"));
        } else {
            issues.push(format!("Section {name} manquante ou peu claire"));
        }
    }

    let words = word_count(cv_text);
    if (MIN_WORDS..=MAX_WORDS).contains(&words) {
        score += LENGTH_BONUS;
        strengths.push("Longueur de CV appropriée".to_string());
    } else if words < MIN_WORDS {
        issues.push("CV trop court, manque de détails".to_string());
    } else {
        issues.push("CV trop long, risque de perdre l'attention".to_string());
    }

    CategoryResult {
        category: Category::Structure,
        score: score.clamp(0, 100) as u32,
        description: Category::Structure.description().to_string(),
        issues,
        strengths,
    }
}
