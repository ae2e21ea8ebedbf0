use std::sync::Arc;

use sqlx::SqlitePool;

pub mod config;
pub mod handlers;
pub mod location;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::location::LocationValidator;

/// Shared handles passed into every handler; no process-global connection
/// state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub validator: Arc<dyn LocationValidator>,
}
