//! Fixed vocabularies and compiled pattern tables for the French résumé market.
//!
//! The term lists and the point bands built on them encode product tuning,
//! not derivable constants — change them only as a product decision.

use std::sync::LazyLock;

use regex::{Regex, RegexSet};

/// General business vocabulary counted by the Keywords category.
pub const PROFESSIONAL_KEYWORDS: &[&str] = &[
    "gestion",
    "management",
    "équipe",
    "projet",
    "développement",
    "amélioration",
    "optimisation",
    "analyse",
    "stratégie",
    "innovation",
    "collaboration",
    "leadership",
    "communication",
    "organisation",
    "planification",
];

/// Technology and tooling vocabulary counted by the Keywords category.
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "node",
    "sql",
    "mongodb",
    "mysql",
    "postgresql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "devops",
    "ci/cd",
    "api",
    "rest",
    "graphql",
    "html",
    "css",
    "typescript",
    "php",
    "laravel",
];

/// Past-participle action verbs rewarded by the Content category.
pub const ACTION_VERBS: &[&str] = &[
    "géré",
    "dirigé",
    "développé",
    "créé",
    "organisé",
    "coordonné",
    "supervisé",
    "amélioré",
    "optimisé",
    "réalisé",
    "mis en place",
    "lancé",
    "piloté",
    "animé",
    "formé",
    "encadré",
    "négocié",
    "vendu",
    "augmenté",
    "réduit",
];

/// Interpersonal skills counted by the Skills category.
pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "travail en équipe",
    "autonomie",
    "créativité",
    "adaptabilité",
    "organisation",
    "rigueur",
    "initiative",
    "relationnel",
    "pédagogie",
    "négociation",
];

/// Concrete-achievement vocabulary counted by the Impact category.
pub const ACHIEVEMENT_KEYWORDS: &[&str] = &[
    "réalisé",
    "accompli",
    "atteint",
    "dépassé",
    "obtenu",
    "gagné",
    "remporté",
    "succès",
    "performance",
    "résultat",
];

/// Responsibility vocabulary counted by the Impact category.
pub const RESPONSIBILITY_KEYWORDS: &[&str] = &[
    "responsable",
    "en charge",
    "supervision",
    "management",
    "direction",
    "coordination",
    "pilotage",
    "encadrement",
];

/// Section keywords an ATS expects to find somewhere in the document.
pub const ESSENTIAL_ATS_KEYWORDS: &[&str] = &["expérience", "compétences", "formation"];

/// Combined vocabulary partitioned into matched/missing by the keyword report.
/// Overlaps with the category vocabularies but is deliberately shorter.
pub const REPORT_VOCABULARY: &[&str] = &[
    "expérience",
    "compétences",
    "formation",
    "projet",
    "équipe",
    "gestion",
    "développement",
    "analyse",
    "communication",
    "leadership",
    "innovation",
    "javascript",
    "python",
    "java",
    "react",
    "sql",
    "git",
    "agile",
];

/// French function words excluded from job-description tokenization.
/// Tokens of 4 characters or fewer are already dropped by the length filter.
pub const JOB_STOP_WORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "et", "ou", "mais", "donc", "car", "ni",
    "or", "avec", "pour", "dans", "votre", "notre", "leurs",
];

/// Builds a case-insensitive, word-bounded matcher set for a term list.
/// Pattern indices line up with the input slice so hits map back to terms.
fn term_set(terms: &[&str]) -> RegexSet {
    let patterns: Vec<String> = terms
        .iter()
        .map(|t| format!(r"(?i)\b{}\b", regex::escape(t)))
        .collect();
    RegexSet::new(&patterns).expect("vocabulary patterns are statically valid")
}

pub static PROFESSIONAL_SET: LazyLock<RegexSet> = LazyLock::new(|| term_set(PROFESSIONAL_KEYWORDS));
pub static TECHNICAL_SET: LazyLock<RegexSet> = LazyLock::new(|| term_set(TECHNICAL_KEYWORDS));
pub static ACTION_VERB_SET: LazyLock<RegexSet> = LazyLock::new(|| term_set(ACTION_VERBS));
pub static SOFT_SKILL_SET: LazyLock<RegexSet> = LazyLock::new(|| term_set(SOFT_SKILLS));
pub static ACHIEVEMENT_SET: LazyLock<RegexSet> = LazyLock::new(|| term_set(ACHIEVEMENT_KEYWORDS));
pub static RESPONSIBILITY_SET: LazyLock<RegexSet> =
    LazyLock::new(|| term_set(RESPONSIBILITY_KEYWORDS));
pub static REPORT_VOCABULARY_SET: LazyLock<RegexSet> =
    LazyLock::new(|| term_set(REPORT_VOCABULARY));

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("static pattern is valid")
}

/// Syntactically plausible `local@domain.tld` address.
pub static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"));

/// French phone number: +33/0 prefix (optionally separated from the first
/// digit), then 8 digits run together or four separated pairs.
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?:\+33[\s.]?|0)[1-9](?:\d{8}|(?:[\s.]\d{2}){4})"));

/// Street or major-city marker taken as evidence of a postal address.
pub static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?i)\b(?:rue|avenue|boulevard|place|chemin|impasse|ville|paris|lyon|marseille)\b")
});

pub static SECTION_EXPERIENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)expérience|emploi|poste|travail|fonction"));
pub static SECTION_FORMATION_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)formation|diplôme|université|école|étude|master|licence|\bbac\b"));
pub static SECTION_COMPETENCES_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)compétence|skill|maîtrise|connaissance|savoir"));
pub static SECTION_PROFIL_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)profil|résumé|objectif|présentation"));

/// A number tied to a unit: percentage, money, duration, or head-count.
/// Symbol units need no trailing boundary; word units do, so that
/// `25 analyse` does not register as `25 an`.
pub static QUANTIFIED_RE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?i)\d+\s*(?:%|k€|€|\$|(?:euros?|millions?|milliers?|ans?|années?|mois|semaines?|jours?|personnes?|clients?|utilisateurs?|projets?)\b)")
});

/// Four-digit year, 1900–2099.
pub static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\b(?:19|20)\d{2}\b"));

/// Technical skill families checked by the Skills category, one pattern per domain.
pub static TECH_DOMAIN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        pattern(r"(?i)programmation|développement|coding"),
        pattern(r"(?i)base de données|sql|mongodb|mysql"),
        pattern(r"(?i)web|html|css|javascript|react|angular"),
        pattern(r"(?i)cloud|aws|azure|docker|kubernetes"),
        pattern(r"(?i)analyse|data|analytics|business intelligence"),
    ]
});

pub static CERTIFICATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?i)certification|certifié|diplômé|licence|master|ingénieur|titre professionnel")
});

pub static LANGUAGES_RE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?i)anglais|english|espagnol|spanish|allemand|german|italien|italian|bilingue|trilingue")
});

/// Impact evidence: improvement/reduction wording plus quantified outcomes.
/// Total occurrences across all patterns feed the Impact band, so each
/// pattern contributes multiplicity, not a boolean.
pub static IMPACT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        pattern(r"(?i)augment(?:é|ation)|amélioration|croissance"),
        pattern(r"(?i)réduction|diminution|économie"),
        pattern(r"\d+\s*%"),
        pattern(r"(?i)\d+\s*(?:k€|€|euros?|millions?)"),
        pattern(r"(?i)\d+\s*(?:ans?|années?|mois)\b"),
        pattern(r"(?i)\d+\s*(?:clients?|utilisateurs?|personnes?|projets?)\b"),
    ]
});

/// Layout constructs ATS parsers choke on.
pub static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)tableau|\btable\b|colonnes"));
pub static VISUAL_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)image|photo|graphique"));

/// Per-term matchers for the essential ATS keywords, index-aligned with
/// [`ESSENTIAL_ATS_KEYWORDS`] so missing terms can be named individually.
pub static ESSENTIAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ESSENTIAL_ATS_KEYWORDS
        .iter()
        .map(|t| pattern(&format!(r"(?i)\b{}\b", regex::escape(t))))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern_accepts_plausible_address() {
        assert!(EMAIL_RE.is_match("Contact: jean@example.com"));
        assert!(!EMAIL_RE.is_match("jean at example dot com"));
    }

    #[test]
    fn test_phone_pattern_accepts_both_french_forms() {
        assert!(PHONE_RE.is_match("Tel: 0612345678"));
        assert!(PHONE_RE.is_match("+33 6 12 34 56 78"));
        assert!(!PHONE_RE.is_match("12345"));
    }

    #[test]
    fn test_quantified_pattern_requires_unit() {
        assert!(QUANTIFIED_RE.is_match("croissance de 25%"));
        assert!(QUANTIFIED_RE.is_match("budget de 500 k€"));
        assert!(QUANTIFIED_RE.is_match("3 ans"));
        assert!(QUANTIFIED_RE.is_match("10 clients"));
        assert!(QUANTIFIED_RE.is_match("équipe de 5 personnes"));
        // Bare number, or number running into a word, is not a quantified result.
        assert!(!QUANTIFIED_RE.is_match("version 25 analyse"));
    }

    #[test]
    fn test_year_pattern_bounds() {
        assert!(YEAR_RE.is_match("de 2019 à 2024"));
        assert!(!YEAR_RE.is_match("1850"));
        assert!(!YEAR_RE.is_match("20190"));
    }

    #[test]
    fn test_term_sets_align_with_vocabularies() {
        assert_eq!(PROFESSIONAL_SET.len(), PROFESSIONAL_KEYWORDS.len());
        assert_eq!(TECHNICAL_SET.len(), TECHNICAL_KEYWORDS.len());
        assert_eq!(REPORT_VOCABULARY_SET.len(), REPORT_VOCABULARY.len());
    }

    #[test]
    fn test_word_boundary_matching_is_accent_aware() {
        // "équipe" must match as a whole word even with surrounding accents.
        let matches: Vec<usize> = PROFESSIONAL_SET
            .matches("Management d'équipe et planification")
            .into_iter()
            .collect();
        let matched: Vec<&str> = matches.iter().map(|&i| PROFESSIONAL_KEYWORDS[i]).collect();
        assert!(matched.contains(&"équipe"));
        assert!(matched.contains(&"management"));
        assert!(matched.contains(&"planification"));
    }

    #[test]
    fn test_slash_terms_match_with_boundaries() {
        let matches: Vec<usize> = TECHNICAL_SET
            .matches("pipeline ci/cd sous gitlab")
            .into_iter()
            .collect();
        let matched: Vec<&str> = matches.iter().map(|&i| TECHNICAL_KEYWORDS[i]).collect();
        assert!(matched.contains(&"ci/cd"));
        // "gitlab" must not count as "git": the boundary check rejects it.
        assert!(!matched.contains(&"git"));
    }

    #[test]
    fn test_impact_patterns_cover_canonical_quantified_forms() {
        let text = "25% et 3 ans et 10 clients et 50000€ et 2 projets";
        let total: usize = IMPACT_PATTERNS
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum();
        assert!(total >= 5, "expected ≥5 impact hits, got {total}");
    }

    #[test]
    fn test_table_marker_does_not_match_comptable() {
        assert!(!TABLE_RE.is_match("expert comptable"));
        assert!(TABLE_RE.is_match("tableau de bord"));
    }
}
