//! Repair line-item endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    api::AppState,
    core::repair::{self, NewRepair, RepairUpdate},
    errors::Result,
};

/// GET /api/furniture/:id/repairs
pub async fn list_repairs_for_furniture(
    State(state): State<AppState>,
    Path(furniture_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let items = repair::get_repairs_for_furniture(&state.db, furniture_id).await?;
    Ok(Json(items))
}

/// POST /api/repairs
pub async fn create_repair(
    State(state): State<AppState>,
    Json(payload): Json<NewRepair>,
) -> Result<impl IntoResponse> {
    let item = repair::create_repair(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/repairs/:id
pub async fn update_repair(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RepairUpdate>,
) -> Result<impl IntoResponse> {
    let item = repair::update_repair(&state.db, id, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/repairs/:id
pub async fn delete_repair(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    repair::delete_repair(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
