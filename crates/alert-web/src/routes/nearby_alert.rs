//! Nearby-alert endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use hazard_core::AlertAssessment;
use nearby_alert::AlertCheckRequest;

use crate::error::{Result, WebError};
use crate::state::AppState;

/// Run one alert check for the posted location.
///
/// Malformed bodies are answered with 400 like any other bad input, rather
/// than axum's default rejection statuses.
pub async fn check(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AlertCheckRequest>, JsonRejection>,
) -> Result<Json<AlertAssessment>> {
    let Json(request) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    let assessment = state.checker.try_check(&request).await?;
    Ok(Json(assessment))
}
