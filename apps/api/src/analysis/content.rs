//! Contenu et Expérience — richness, quantified results, action verbs, career dates.

use super::report::{Category, CategoryResult};
use super::text::{distinct_hits, distinct_years, word_count};
use super::vocab::{ACTION_VERB_SET, QUANTIFIED_RE, YEAR_RE};

const BASE_SCORE: i32 = 35;

// Content rewards longer documents than Structure does: detail is the point here.
const WORDS_RICH: usize = 400;
const WORDS_ADEQUATE: usize = 250;

const QUANTIFIED_EXCELLENT: usize = 5;
const QUANTIFIED_GOOD: usize = 2;

const VERBS_EXCELLENT: usize = 8;
const VERBS_GOOD: usize = 4;

const YEARS_DOCUMENTED: usize = 3;
const YEARS_PRESENT: usize = 2;

pub fn score(cv_text: &str) -> CategoryResult {
    let mut score = BASE_SCORE;
    let mut issues = Vec::new();
    let mut strengths = Vec::new();

    let words = word_count(cv_text);
    if words >= WORDS_RICH {
        score += 15;
        strengths.push("Contenu suffisamment détaillé".to_string());
    } else if words >= WORDS_ADEQUATE {
        score += 10;
        strengths.push("Contenu correct".to_string());
    } else {
        issues.push("Contenu trop succinct, manque de détails".to_string());
    }

    let quantified = QUANTIFIED_RE.find_iter(cv_text).count();
    if quantified >= QUANTIFIED_EXCELLENT {
        score += 20;
        strengths.push(format!(
            "Excellente quantification des résultats ({quantified} éléments chiffrés)"
        ));
    } else if quantified >= QUANTIFIED_GOOD {
        score += 15;
        strengths.push(format!(
            "Bonne quantification des résultats ({quantified} éléments chiffrés)"
        ));
    } else {
        issues.push("Manque de quantification des résultats et réalisations".to_string());
    }

    let verbs = distinct_hits(&ACTION_VERB_SET, cv_text);
    if verbs >= VERBS_EXCELLENT {
        score += 15;
        strengths.push(format!(
            "Excellent usage de verbes d'action ({verbs} identifiés)"
        ));
    } else if verbs >= VERBS_GOOD {
        score += 10;
        strengths.push(format!("Bon usage de verbes d'action ({verbs} identifiés)"));
    } else {
        issues.push("Peu de verbes d'action utilisés, descriptions trop passives".to_string());
    }

    let years = distinct_years(&YEAR_RE, cv_text);
    if years >= YEARS_DOCUMENTED {
        score += 10;
        strengths.push("Progression de carrière bien documentée".to_string());
    } else if years >= YEARS_PRESENT {
        score += 5;
        strengths.push("Historique professionnel présent".to_string());
    } else {
        issues.push("Dates et progression de carrière peu claires".to_string());
    }

    CategoryResult {
        category: Category::Content,
        score: score.clamp(0, 100) as u32,
        description: Category::Content.description().to_string(),
        issues,
        strengths,
    }
}
