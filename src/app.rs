use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::CorsConfig,
    middleware::{catch_panic_layer, json_error_middleware},
    routes::router,
    state::AppState,
};

/// Router with the full middleware stack applied.
pub fn create_app(state: Arc<AppState>) -> Router {
    let body_limit =
        usize::try_from(state.config.uploads.max_content_length).unwrap_or(usize::MAX);
    let cors = cors_layer(&state.config.cors);

    router(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub fn cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if cfg.origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cfg
        .origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
