use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-user suppression marker. Independent of the visibility rules: hiding
/// an event does not change who may list it, only what this user sees.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HiddenEvent {
    pub id: i64,
    pub user_id: i64,
    pub event_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HideRequest {
    pub user_id: i64,
}
