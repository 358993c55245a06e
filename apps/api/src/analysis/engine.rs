//! Scoring engine — pluggable, trait-based scorer over extracted résumé text.
//!
//! Default: `HeuristicScorer` (pure-Rust, deterministic, fully testable).
//! `AppState` holds an `Arc<dyn ResumeScorer>` so the backend can be swapped
//! without touching handlers.

use async_trait::async_trait;

use crate::errors::AppError;

use super::report::ScoreReport;
use super::{ats, content, impact, keyword_report, keywords, recommendations, skills, structure};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The scorer seam. The heuristic engine is synchronous; the trait is async
/// so a future backend with I/O can slot in behind the same handlers.
#[async_trait]
pub trait ResumeScorer: Send + Sync {
    async fn score(&self, cv_text: &str, job_description: &str)
        -> Result<ScoreReport, AppError>;
}

/// Deterministic local scorer. Never fails for string input.
pub struct HeuristicScorer;

#[async_trait]
impl ResumeScorer for HeuristicScorer {
    async fn score(
        &self,
        cv_text: &str,
        job_description: &str,
    ) -> Result<ScoreReport, AppError> {
        Ok(analyze(cv_text, job_description))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Scores résumé text against an optional job description (`""` means none
/// supplied). Total function: empty or pathological input produces a valid
/// low-scoring report, never an error.
pub fn analyze(cv_text: &str, job_description: &str) -> ScoreReport {
    let details = vec![
        structure::score(cv_text),
        keywords::score(cv_text, job_description),
        content::score(cv_text),
        skills::score(cv_text),
        impact::score(cv_text),
    ];

    // Unweighted mean of the five clamped category scores.
    let sum: u32 = details.iter().map(|d| d.score).sum();
    let overall_score = (f64::from(sum) / details.len() as f64).round() as u32;

    let recommendations =
        recommendations::generate(&details, overall_score, cv_text, job_description);
    let ats_compatibility = ats::score(cv_text);
    let keyword_analysis = keyword_report::build(cv_text, job_description);

    ScoreReport {
        overall_score,
        details,
        recommendations,
        ats_compatibility,
        keyword_analysis,
    }
}
