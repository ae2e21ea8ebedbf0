use std::env;

pub mod cors;

pub use cors::create_cors_layer;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub location_service_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:gather.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            location_service_url: env::var("LOCATION_SERVICE_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string()),
        }
    }
}
