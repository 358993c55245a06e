//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::{info, warn};

use crate::analysis::{fallback, report::ScoreReport};
use crate::errors::AppError;
use crate::state::AppState;

/// Body of `POST /api/v1/analyze`. `cv_text` is absent when upstream text
/// extraction failed; `job_description` is optional and normalizes to `""`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub cv_text: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

/// POST /api/v1/analyze
///
/// Scores extracted résumé text and returns the full report. When no text
/// is supplied at all the pre-baked fallback report is returned instead of
/// an error — the extraction failure already surfaced upstream.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    let job_description = request.job_description.unwrap_or_default();

    let Some(cv_text) = request.cv_text else {
        warn!("no résumé text supplied, returning fallback report");
        return Ok(Json(fallback::report()));
    };

    let report = state.scorer.score(&cv_text, &job_description).await?;
    info!(
        overall = report.overall_score,
        ats = report.ats_compatibility.score,
        words = cv_text.split_whitespace().count(),
        "résumé analyzed"
    );
    Ok(Json(report))
}
