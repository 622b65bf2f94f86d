use std::sync::Arc;

use axum::{Router, response::IntoResponse};

use crate::{response::ErrorBody, state::AppState};

use super::public;

pub const API_PREFIX: &str = "/api";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router(state))
        .fallback(not_found)
}

async fn not_found() -> impl IntoResponse {
    ErrorBody::not_found()
}
