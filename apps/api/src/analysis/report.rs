//! Report data model — the wire shape consumed by the front-end rendering layer.
//!
//! Field names serialize in camelCase (`overallScore`, `atsCompatibility`, …)
//! because the existing UI renders this JSON directly; the shape is frozen.

use serde::{Deserialize, Serialize};

/// The five fixed scoring categories. Order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Structure et Format")]
    Structure,
    #[serde(rename = "Mots-clés et Optimisation ATS")]
    Keywords,
    #[serde(rename = "Contenu et Expérience")]
    Content,
    #[serde(rename = "Compétences et Qualifications")]
    Skills,
    #[serde(rename = "Impact et Résultats")]
    Impact,
}

impl Category {
    /// All categories in display order. Every report carries exactly these five.
    pub const ALL: [Category; 5] = [
        Category::Structure,
        Category::Keywords,
        Category::Content,
        Category::Skills,
        Category::Impact,
    ];

    /// Static one-line description shown under the category heading.
    pub fn description(self) -> &'static str {
        match self {
            Category::Structure => "Évaluation de l'organisation, lisibilité et compatibilité ATS",
            Category::Keywords => "Présence de mots-clés pertinents pour les systèmes ATS",
            Category::Content => "Qualité et pertinence des informations professionnelles",
            Category::Skills => "Présentation des compétences techniques et interpersonnelles",
            Category::Impact => "Quantification des réalisations et impact professionnel",
        }
    }
}

/// Priority of a recommendation, highest first in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Result of one category scorer: clamped score plus the human-readable
/// outcome of every check that ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: Category,
    pub score: u32,
    pub description: String,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub impact: String,
}

/// Independent ATS sub-score. Floored at 30 — the product never shows a
/// zero here, a deliberate choice carried over from the original tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsCompatibility {
    pub score: u32,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Matched/missing partition of the fixed report vocabulary, capped for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Full analysis report. Immutable once produced; created fresh per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub overall_score: u32,
    pub details: Vec<CategoryResult>,
    pub recommendations: Vec<Recommendation>,
    pub ats_compatibility: AtsCompatibility,
    pub keyword_analysis: KeywordAnalysis,
}
