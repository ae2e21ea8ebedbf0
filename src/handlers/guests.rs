use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::models::{GuestPatch, NewGuest};
use crate::services::guests;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};
use crate::AppState;

pub async fn list_guests(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Response, AppError> {
    let guests = guests::list_guests(&state.pool, event_id).await?;
    Ok(success(guests, "Guests retrieved successfully"))
}

pub async fn add_guest(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let new = NewGuest::from_value(body)?;
    let guest = guests::add_guest(&state.pool, event_id, new.user_id, new.status).await?;
    Ok(created(guest, "Guest added successfully"))
}

pub async fn update_guest(
    State(state): State<AppState>,
    Path((event_id, user_id)): Path<(i64, i64)>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let patch = GuestPatch::from_value(body)?;
    let guest = guests::update_guest(&state.pool, event_id, user_id, patch).await?;
    Ok(success(guest, "Guest updated successfully"))
}

pub async fn remove_guest(
    State(state): State<AppState>,
    Path((event_id, user_id)): Path<(i64, i64)>,
) -> Result<Response, AppError> {
    let guest = guests::remove_guest(&state.pool, event_id, user_id).await?;
    Ok(success(guest, "Guest removed successfully"))
}
