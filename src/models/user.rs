use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Profile referenced by guest rows. This subsystem never creates or deletes
/// users; removing a guest removes the membership, not the user.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub facebook_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
