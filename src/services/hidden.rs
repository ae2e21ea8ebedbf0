use sqlx::SqlitePool;

use crate::models::HiddenEvent;
use crate::utils::error::AppError;

pub async fn list_hidden(pool: &SqlitePool, user_id: i64) -> Result<Vec<HiddenEvent>, AppError> {
    let hidden = sqlx::query_as::<_, HiddenEvent>(
        "SELECT id, user_id, event_id FROM hidden_events WHERE user_id = ?1 ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(hidden)
}

/// Repeated hides are tolerated and simply create another row; there is no
/// uniqueness constraint on the (user, event) pair.
pub async fn hide(pool: &SqlitePool, event_id: i64, user_id: i64) -> Result<HiddenEvent, AppError> {
    let entry = sqlx::query_as::<_, HiddenEvent>(
        "INSERT INTO hidden_events (event_id, user_id) VALUES (?1, ?2) \
         RETURNING id, user_id, event_id",
    )
    .bind(event_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(entry)
}

/// Removes one matching suppression row and returns it.
pub async fn unhide(
    pool: &SqlitePool,
    event_id: i64,
    user_id: i64,
) -> Result<HiddenEvent, AppError> {
    let mut tx = pool.begin().await?;

    let entry = sqlx::query_as::<_, HiddenEvent>(
        "SELECT id, user_id, event_id FROM hidden_events \
         WHERE event_id = ?1 AND user_id = ?2 ORDER BY id LIMIT 1",
    )
    .bind(event_id)
    .bind(user_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| {
        AppError::NotFound(format!(
            "Hidden event '{}' for user '{}' was not found",
            event_id, user_id
        ))
    })?;

    sqlx::query("DELETE FROM hidden_events WHERE id = ?1")
        .bind(entry.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(entry)
}
