//! Furniture endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    api::AppState,
    core::furniture::{self, FurnitureUpdate, NewFurniture},
    errors::{Error, Result},
};

/// GET /api/furniture
/// Returns all furniture records
pub async fn list_furniture(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = furniture::get_all_furniture(&state.db).await?;
    Ok(Json(items))
}

/// GET /api/furniture/:id
pub async fn get_furniture(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let item = furniture::get_furniture_by_id(&state.db, id)
        .await?
        .ok_or(Error::FurnitureNotFound { id })?;
    Ok(Json(item))
}

/// POST /api/furniture
pub async fn create_furniture(
    State(state): State<AppState>,
    Json(payload): Json<NewFurniture>,
) -> Result<impl IntoResponse> {
    let item = furniture::create_furniture(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/furniture/:id
/// Partial update; absent fields are left unchanged
pub async fn update_furniture(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<FurnitureUpdate>,
) -> Result<impl IntoResponse> {
    let item = furniture::update_furniture(&state.db, id, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/furniture/:id
/// Removes the record together with its line items and assessments
pub async fn delete_furniture(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    furniture::delete_furniture(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
