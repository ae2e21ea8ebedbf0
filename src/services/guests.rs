use sqlx::SqlitePool;

use crate::models::{Guest, GuestPatch, GuestStatus, GuestWithProfile};
use crate::utils::error::AppError;

const GUEST_WITH_PROFILE: &str = "SELECT g.id, g.event_id, g.user_id, g.status, \
     u.name, u.email, u.image, u.facebook_id \
     FROM guests g JOIN users u ON u.id = g.user_id";

pub async fn list_guests(
    pool: &SqlitePool,
    event_id: i64,
) -> Result<Vec<GuestWithProfile>, AppError> {
    let sql = format!("{} WHERE g.event_id = ?1 ORDER BY g.id", GUEST_WITH_PROFILE);
    let guests = sqlx::query_as::<_, GuestWithProfile>(&sql)
        .bind(event_id)
        .fetch_all(pool)
        .await?;

    Ok(guests)
}

/// Adds a guest to an event. The existence check and the insert share one
/// transaction so two concurrent calls cannot both pass the check.
pub async fn add_guest(
    pool: &SqlitePool,
    event_id: i64,
    user_id: i64,
    status: GuestStatus,
) -> Result<GuestWithProfile, AppError> {
    let mut tx = pool.begin().await?;

    let existing: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM guests WHERE event_id = ?1 AND user_id = ?2")
            .bind(event_id)
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;
    if existing > 0 {
        return Err(AppError::AlreadyGuest);
    }

    let guest_id: i64 = sqlx::query_scalar(
        "INSERT INTO guests (event_id, user_id, status) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(event_id)
    .bind(user_id)
    .bind(status)
    .fetch_one(&mut *tx)
    .await?;

    let sql = format!("{} WHERE g.id = ?1", GUEST_WITH_PROFILE);
    let guest = sqlx::query_as::<_, GuestWithProfile>(&sql)
        .bind(guest_id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(guest)
}

/// Status moves are unrestricted: any status may transition to any other.
pub async fn update_guest(
    pool: &SqlitePool,
    event_id: i64,
    user_id: i64,
    patch: GuestPatch,
) -> Result<Guest, AppError> {
    sqlx::query_as::<_, Guest>(
        "UPDATE guests SET status = COALESCE(?1, status) \
         WHERE event_id = ?2 AND user_id = ?3 \
         RETURNING id, event_id, user_id, status",
    )
    .bind(patch.status)
    .bind(event_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| {
        AppError::NotFound(format!(
            "Guest for event '{}' and user '{}' was not found",
            event_id, user_id
        ))
    })
}

/// Removes the membership row, not the user. Failure leaves no side effects.
pub async fn remove_guest(
    pool: &SqlitePool,
    event_id: i64,
    user_id: i64,
) -> Result<GuestWithProfile, AppError> {
    let mut tx = pool.begin().await?;

    let sql = format!(
        "{} WHERE g.event_id = ?1 AND g.user_id = ?2",
        GUEST_WITH_PROFILE
    );
    let guest = sqlx::query_as::<_, GuestWithProfile>(&sql)
        .bind(event_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotAGuest)?;

    sqlx::query("DELETE FROM guests WHERE event_id = ?1 AND user_id = ?2")
        .bind(event_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(guest)
}
