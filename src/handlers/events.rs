use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::models::{EventPatch, NewEvent};
use crate::services::{events, visibility};
use crate::utils::error::AppError;
use crate::utils::response::{created, success};
use crate::AppState;

#[derive(Deserialize)]
pub struct ListEventsQuery {
    pub group_id: Option<i64>,
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Response, AppError> {
    let events = visibility::list_visible(&state.pool, query.group_id).await?;
    Ok(success(events, "Events retrieved successfully"))
}

// The single fetch answers with a one-element sequence, matching the list
// shape consumers already parse.
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Response, AppError> {
    let event = visibility::get_by_id(&state.pool, event_id).await?;
    Ok(success(vec![event], "Event retrieved successfully"))
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let new: NewEvent = serde_json::from_value(body)
        .map_err(|e| AppError::ValidationError(format!("Invalid event payload: {}", e)))?;
    let event = events::create(&state.pool, state.validator.as_ref(), new).await?;
    Ok(created(event, "Event created successfully"))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let patch = EventPatch::from_value(body)?;
    let event = events::update(&state.pool, state.validator.as_ref(), event_id, patch).await?;
    Ok(success(event, "Event updated successfully"))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Response, AppError> {
    let event = events::delete(&state.pool, event_id).await?;
    Ok(success(event, "Event deleted successfully"))
}
