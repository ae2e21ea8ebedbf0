use sqlx::SqlitePool;

use crate::models::Event;
use crate::utils::error::AppError;

/// All public events, plus private events owned by the requester's group when
/// a group id is supplied. Without a group scope, private events are excluded
/// entirely, the requester's own included.
pub async fn list_visible(
    pool: &SqlitePool,
    group_id: Option<i64>,
) -> Result<Vec<Event>, AppError> {
    let events = match group_id {
        Some(gid) => {
            sqlx::query_as::<_, Event>(
                "SELECT * FROM events WHERE privacy = 0 OR group_id = ?1 ORDER BY id",
            )
            .bind(gid)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Event>("SELECT * FROM events WHERE privacy = 0 ORDER BY id")
                .fetch_all(pool)
                .await?
        }
    };

    Ok(events)
}

/// Single fetch is unfiltered: possession of the id counts as authorization.
pub async fn get_by_id(pool: &SqlitePool, event_id: i64) -> Result<Event, AppError> {
    sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ?1")
        .bind(event_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event with id '{}' was not found", event_id)))
}
