use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use gather_server::location::{LocationError, LocationValidator};
use gather_server::routes::create_routes;
use gather_server::AppState;

/// Fake geocoder: refuses the garbage address, appends a country qualifier
/// to everything else so tests can observe normalization.
struct FakeValidator;

#[async_trait]
impl LocationValidator for FakeValidator {
    async fn validate(&self, address: &str) -> Result<String, LocationError> {
        if address == "zxcv" {
            return Err(LocationError::Unresolvable(address.to_string()));
        }
        Ok(format!("{}, USA", address))
    }
}

/// Fresh in-memory database, migrated and seeded, wrapped in the full
/// router. Each test gets its own instance.
pub async fn setup() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    seed(&pool).await;

    let state = AppState {
        pool,
        validator: Arc::new(FakeValidator),
    };
    create_routes(state)
}

async fn seed(pool: &SqlitePool) {
    let now = Utc::now();
    let users = [
        ("Alice", "alice@gmail.com", "12104755554605551"),
        ("Bob", "bob@gmail.com", "12104755554605552"),
    ];
    for (name, email, facebook_id) in users {
        sqlx::query(
            "INSERT INTO users (name, email, image, facebook_id, created_at) \
             VALUES (?1, ?2, 'https://imageurl', ?3, ?4)",
        )
        .bind(name)
        .bind(email)
        .bind(facebook_id)
        .bind(now)
        .execute(pool)
        .await
        .expect("Failed to seed user");
    }

    let time = Utc.with_ymd_and_hms(2016, 8, 30, 8, 0, 0).unwrap();
    let events: [(&str, &str, i64, &str, bool, Option<i64>); 3] = [
        (
            "Pokemongodb party",
            "Catch pokemon and do some coding",
            1,
            "701 Brazos St, Austin, TX 78701",
            false,
            None,
        ),
        (
            "Dinner party",
            "Fancy dinner party",
            2,
            "11600 Research Blvd, Austin, TX 78759",
            false,
            None,
        ),
        (
            "facebook only",
            "Facebook event",
            2,
            "2100 Alamo St, Austin, TX 78722",
            true,
            Some(1),
        ),
    ];
    for (title, description, created_by, location, privacy, group_id) in events {
        sqlx::query(
            "INSERT INTO events (title, description, created_by, location, time, privacy, group_id, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(title)
        .bind(description)
        .bind(created_by)
        .bind(location)
        .bind(time)
        .bind(privacy)
        .bind(group_id)
        .bind(now)
        .execute(pool)
        .await
        .expect("Failed to seed event");
    }

    let guests: [(i64, i64, &str); 3] = [(1, 1, "accepted"), (1, 2, "pending"), (2, 2, "pending")];
    for (event_id, user_id, status) in guests {
        sqlx::query("INSERT INTO guests (event_id, user_id, status) VALUES (?1, ?2, ?3)")
            .bind(event_id)
            .bind(user_id)
            .bind(status)
            .execute(pool)
            .await
            .expect("Failed to seed guest");
    }

    sqlx::query("INSERT INTO hidden_events (event_id, user_id) VALUES (2, 1)")
        .execute(pool)
        .await
        .expect("Failed to seed hidden event");
}

pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Request failed");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body was not JSON")
    };

    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "GET", uri, None).await
}
