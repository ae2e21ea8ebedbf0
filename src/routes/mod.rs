use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::create_cors_layer;
use crate::handlers::{self, events, guests, hidden};
use crate::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        // Static segment, so it must not collide with /api/events/:id below.
        .route("/api/events/hide/:user_id", get(hidden::list_hidden))
        .route(
            "/api/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route(
            "/api/events/:id/guests",
            get(guests::list_guests).post(guests::add_guest),
        )
        .route(
            "/api/events/:id/guests/:user_id",
            put(guests::update_guest).delete(guests::remove_guest),
        )
        .route("/api/events/:id/hide", post(hidden::hide_event))
        .route("/api/events/:id/hide/:user_id", delete(hidden::unhide_event))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}
