use chrono::Utc;
use sqlx::SqlitePool;

use crate::location::LocationValidator;
use crate::models::{Event, EventPatch, NewEvent};
use crate::utils::error::AppError;

/// Creates an event. The address is normalized through the location
/// validator before anything is written; a validator failure leaves no row
/// behind.
pub async fn create(
    pool: &SqlitePool,
    validator: &dyn LocationValidator,
    new: NewEvent,
) -> Result<Event, AppError> {
    let location = validator.validate(&new.location).await?;

    let event = sqlx::query_as::<_, Event>(
        "INSERT INTO events (title, description, created_by, location, time, privacy, group_id, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING *",
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.created_by)
    .bind(&location)
    .bind(new.time)
    .bind(new.privacy)
    .bind(new.group_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(event)
}

/// Applies a vetted partial update. Fields absent from the patch keep their
/// stored values; a changed location goes back through the validator.
pub async fn update(
    pool: &SqlitePool,
    validator: &dyn LocationValidator,
    event_id: i64,
    patch: EventPatch,
) -> Result<Event, AppError> {
    let location = match &patch.location {
        Some(raw) => Some(validator.validate(raw).await?),
        None => None,
    };

    sqlx::query_as::<_, Event>(
        "UPDATE events SET \
             title = COALESCE(?1, title), \
             description = COALESCE(?2, description), \
             location = COALESCE(?3, location), \
             time = COALESCE(?4, time), \
             privacy = COALESCE(?5, privacy), \
             group_id = COALESCE(?6, group_id) \
         WHERE id = ?7 RETURNING *",
    )
    .bind(&patch.title)
    .bind(&patch.description)
    .bind(&location)
    .bind(patch.time)
    .bind(patch.privacy)
    .bind(patch.group_id)
    .bind(event_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Event with id '{}' was not found", event_id)))
}

/// Deletes an event and its dependent guest and hide rows in one
/// transaction, returning the event's prior field values.
pub async fn delete(pool: &SqlitePool, event_id: i64) -> Result<Event, AppError> {
    let mut tx = pool.begin().await?;

    let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ?1")
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event with id '{}' was not found", event_id)))?;

    sqlx::query("DELETE FROM guests WHERE event_id = ?1")
        .bind(event_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM hidden_events WHERE event_id = ?1")
        .bind(event_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM events WHERE id = ?1")
        .bind(event_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(event)
}
