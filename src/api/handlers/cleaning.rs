//! Cleaning line-item endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    api::AppState,
    core::cleaning::{self, CleaningItemUpdate, NewCleaningItem},
    errors::Result,
};

/// GET /api/furniture/:id/cleaning
pub async fn list_cleaning_for_furniture(
    State(state): State<AppState>,
    Path(furniture_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let items = cleaning::get_cleaning_items_for_furniture(&state.db, furniture_id).await?;
    Ok(Json(items))
}

/// POST /api/cleaning
pub async fn create_cleaning_item(
    State(state): State<AppState>,
    Json(payload): Json<NewCleaningItem>,
) -> Result<impl IntoResponse> {
    let item = cleaning::create_cleaning_item(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/cleaning/:id
pub async fn update_cleaning_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CleaningItemUpdate>,
) -> Result<impl IntoResponse> {
    let item = cleaning::update_cleaning_item(&state.db, id, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/cleaning/:id
pub async fn delete_cleaning_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    cleaning::delete_cleaning_item(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
