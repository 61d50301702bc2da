use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::analysis::{self, models::AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;
use crate::taxonomy::Role;

/// Minimum accepted length (after trimming) for either input text. Shorter
/// inputs are rejected before the engine runs.
const MIN_TEXT_LEN: usize = 30;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_text: String,
    pub target_role: Role,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    validate_text("resume_text", &req.resume_text)?;
    validate_text("job_text", &req.job_text)?;

    let result = analysis::analyze(
        &state.catalog,
        &req.resume_text,
        &req.job_text,
        req.target_role,
    );
    info!(
        role = ?req.target_role,
        matched = result.summary.matched_count,
        missing = result.summary.missing_count,
        "analysis complete"
    );
    Ok(Json(result))
}

fn validate_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().chars().count() < MIN_TEXT_LEN {
        return Err(AppError::Validation(format!(
            "{field} must be at least {MIN_TEXT_LEN} characters"
        )));
    }
    Ok(())
}
