use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{
    app::create_app,
    config::{AppConfig, EnvSettings},
    state::AppState,
};

/// Config built from fallbacks only, independent of the process environment.
pub fn test_config() -> AppConfig {
    AppConfig::from_settings(&EnvSettings::default()).expect("fallback config should be valid")
}

pub fn mock_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

pub fn test_router() -> Router {
    test_router_with(test_config())
}

pub fn test_router_with(config: AppConfig) -> Router {
    create_app(AppState::new(config, mock_db()))
}
