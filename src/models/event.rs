use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_by: i64,
    pub location: String,
    pub time: DateTime<Utc>,
    pub privacy: bool,
    pub group_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload. The location is raw address text; it is stored only
/// after the geocoder has normalized it.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_by: i64,
    pub location: String,
    pub time: DateTime<Utc>,
    pub privacy: bool,
    #[serde(default)]
    pub group_id: Option<i64>,
}

/// Partial update. Only fields present in the request body are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub time: Option<DateTime<Utc>>,
    pub privacy: Option<bool>,
    pub group_id: Option<i64>,
}

const MUTABLE_FIELDS: &[&str] = &[
    "title",
    "description",
    "location",
    "time",
    "privacy",
    "group_id",
];

impl EventPatch {
    /// Vets a raw update body against the allow-list of mutable fields.
    ///
    /// The server-assigned id may never appear in the payload, even when its
    /// value matches the target row.
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        vet_fields(&body, MUTABLE_FIELDS)?;
        serde_json::from_value(body)
            .map_err(|e| AppError::ValidationError(format!("Invalid update payload: {}", e)))
    }
}

pub(crate) fn vet_fields(body: &Value, allowed: &[&str]) -> Result<(), AppError> {
    let map = body
        .as_object()
        .ok_or_else(|| AppError::ValidationError("Request body must be a JSON object".into()))?;

    for key in map.keys() {
        if key == "id" {
            return Err(AppError::ImmutableId);
        }
        if !allowed.contains(&key.as_str()) {
            return Err(AppError::ValidationError(format!("Unknown field '{}'", key)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_accepts_mutable_fields() {
        let patch = EventPatch::from_value(json!({
            "location": "1100 Congress Ave, Austin, TX 78701",
            "privacy": true
        }))
        .unwrap();
        assert_eq!(
            patch.location.as_deref(),
            Some("1100 Congress Ave, Austin, TX 78701")
        );
        assert_eq!(patch.privacy, Some(true));
        assert!(patch.title.is_none());
    }

    #[test]
    fn patch_rejects_id_even_with_valid_fields() {
        let err = EventPatch::from_value(json!({ "id": 5, "privacy": true })).unwrap_err();
        assert!(matches!(err, AppError::ImmutableId));
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let err = EventPatch::from_value(json!({ "created_at": "2016-08-30" })).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn patch_rejects_non_object_bodies() {
        let err = EventPatch::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
