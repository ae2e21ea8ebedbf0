use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use crate::models::HideRequest;
use crate::services::hidden;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};
use crate::AppState;

pub async fn list_hidden(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Response, AppError> {
    let entries = hidden::list_hidden(&state.pool, user_id).await?;
    Ok(success(entries, "Hidden events retrieved successfully"))
}

pub async fn hide_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(body): Json<HideRequest>,
) -> Result<Response, AppError> {
    let entry = hidden::hide(&state.pool, event_id, body.user_id).await?;
    Ok(created(entry, "Event hidden successfully"))
}

pub async fn unhide_event(
    State(state): State<AppState>,
    Path((event_id, user_id)): Path<(i64, i64)>,
) -> Result<Response, AppError> {
    let entry = hidden::unhide(&state.pool, event_id, user_id).await?;
    Ok(success(entry, "Event unhidden successfully"))
}
