use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::models::event::vet_fields;
use crate::utils::error::AppError;

/// RSVP status. Closed set: anything else is rejected at the boundary
/// instead of being persisted as a free string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum GuestStatus {
    Pending,
    Accepted,
    Declined,
}

impl GuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestStatus::Pending => "pending",
            GuestStatus::Accepted => "accepted",
            GuestStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Guest {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub status: GuestStatus,
}

/// Guest row joined with the referenced user's display fields.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GuestWithProfile {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub status: GuestStatus,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub facebook_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewGuest {
    pub user_id: i64,
    pub status: GuestStatus,
}

impl NewGuest {
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        serde_json::from_value(body)
            .map_err(|e| AppError::ValidationError(format!("Invalid guest payload: {}", e)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuestPatch {
    pub status: Option<GuestStatus>,
}

const MUTABLE_FIELDS: &[&str] = &["status"];

impl GuestPatch {
    /// Same immutable-id policy as event updates: the id key is rejected on
    /// presence alone, other unknown keys fail validation.
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        vet_fields(&body, MUTABLE_FIELDS)?;
        serde_json::from_value(body)
            .map_err(|e| AppError::ValidationError(format!("Invalid update payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_parses_known_values() {
        let guest = NewGuest::from_value(json!({ "user_id": 1, "status": "pending" })).unwrap();
        assert_eq!(guest.status, GuestStatus::Pending);
    }

    #[test]
    fn status_rejects_unknown_values() {
        let err = NewGuest::from_value(json!({ "user_id": 1, "status": "maybe" })).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn patch_rejects_id_presence() {
        let err = GuestPatch::from_value(json!({ "id": 5, "status": "declined" })).unwrap_err();
        assert!(matches!(err, AppError::ImmutableId));
    }

    #[test]
    fn patch_allows_status_only() {
        let patch = GuestPatch::from_value(json!({ "status": "declined" })).unwrap();
        assert_eq!(patch.status, Some(GuestStatus::Declined));

        let err = GuestPatch::from_value(json!({ "user_id": 3 })).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
