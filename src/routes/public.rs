use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

use super::API_PREFIX;

pub const SERVICE_NAME: &str = "Smart Enterprise Management System";
pub const API_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
pub struct RootInfo {
    pub message: String,
    pub version: &'static str,
    pub endpoints: RootEndpoints,
}

#[derive(Debug, Serialize)]
pub struct RootEndpoints {
    pub health: String,
    pub docs: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub environment: String,
}

#[derive(Debug, Serialize)]
pub struct DocsInfo {
    pub message: String,
    pub version: &'static str,
    pub endpoints: DocsEndpoints,
    pub documentation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DocsEndpoints {
    pub health: String,
    pub auth: String,
    pub maintenance: String,
    pub education: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route(&format!("{API_PREFIX}/health"), get(health))
        .route(&format!("{API_PREFIX}/docs"), get(docs))
        .with_state(state)
}

async fn root() -> Json<RootInfo> {
    Json(RootInfo {
        message: format!("{SERVICE_NAME} API"),
        version: API_VERSION,
        endpoints: RootEndpoints {
            health: format!("{API_PREFIX}/health"),
            docs: format!("{API_PREFIX}/docs"),
        },
    })
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: SERVICE_NAME,
        version: API_VERSION,
        environment: state.config.general.environment.as_str().to_string(),
    })
}

async fn docs() -> Json<DocsInfo> {
    Json(DocsInfo {
        message: format!("{SERVICE_NAME} API"),
        version: API_VERSION,
        endpoints: DocsEndpoints {
            health: format!("{API_PREFIX}/health"),
            auth: format!("{API_PREFIX}/auth/* (coming soon)"),
            maintenance: format!("{API_PREFIX}/maintenance/* (coming soon)"),
            education: format!("{API_PREFIX}/education/* (coming soon)"),
        },
        documentation: "API documentation will be available here",
    })
}
