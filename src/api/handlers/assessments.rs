//! Assessment endpoints.
//!
//! Finalizing an assessment runs the profitability engine server-side over
//! the stored line items; clients send projection inputs only and can never
//! write the derived figures directly.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    api::AppState,
    core::assessment::{self, AssessmentUpdate, NewAssessment},
    errors::{Error, Result},
};

/// GET /api/assessments
pub async fn list_assessments(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = assessment::get_all_assessments(&state.db).await?;
    Ok(Json(items))
}

/// GET /api/assessments/:id
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let item = assessment::get_assessment_by_id(&state.db, id)
        .await?
        .ok_or(Error::AssessmentNotFound { id })?;
    Ok(Json(item))
}

/// GET /api/furniture/:id/assessment
/// Returns the most recent assessment for a furniture record
pub async fn get_assessment_for_furniture(
    State(state): State<AppState>,
    Path(furniture_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let item = assessment::get_assessment_for_furniture(&state.db, furniture_id)
        .await?
        .ok_or(Error::AssessmentNotFound { id: furniture_id })?;
    Ok(Json(item))
}

/// POST /api/assessments
/// Finalizes an assessment: computes profitability and persists the result
pub async fn finalize_assessment(
    State(state): State<AppState>,
    Json(payload): Json<NewAssessment>,
) -> Result<impl IntoResponse> {
    let item = assessment::finalize_assessment(
        &state.db,
        payload,
        state.settings.labor.hourly_rate,
        state.settings.profitability.margin_threshold,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/assessments/:id
/// Patches projection inputs and recomputes the derived figures
pub async fn update_assessment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AssessmentUpdate>,
) -> Result<impl IntoResponse> {
    let item = assessment::update_assessment(
        &state.db,
        id,
        payload,
        state.settings.profitability.margin_threshold,
    )
    .await?;
    Ok(Json(item))
}

/// DELETE /api/assessments/:id
pub async fn delete_assessment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    assessment::delete_assessment(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Query parameters for the similar-items report
#[derive(Debug, Deserialize)]
pub struct SimilarItemsQuery {
    /// Maximum number of items to return
    pub limit: Option<usize>,
}

/// GET /api/similar-items/:type?limit=N
/// Returns assessed furniture of the same type, best profit first
pub async fn get_similar_items(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<SimilarItemsQuery>,
) -> Result<impl IntoResponse> {
    let limit = query.limit.unwrap_or(3);
    let items = assessment::get_similar_items(&state.db, &kind, limit).await?;
    Ok(Json(items))
}
