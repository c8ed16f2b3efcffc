use crate::{
    state::AppState,
    routes,
    utils::middleware::{auth_middleware, error_handler_middleware, security_headers_middleware},
};
use axum::{
    http::{HeaderValue, Method, StatusCode},
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::warn;

/// 构建应用路由；`/health` 不需要认证
pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);
    let make_span = DefaultMakeSpan::new().include_headers(state.config.is_development());

    Router::new()
        .merge(routes::bookmarks::router())
        .fallback(page_not_found)
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .route("/health", get(health_check))
        .layer(middleware::from_fn_with_state(state.clone(), error_handler_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
        .with_state(state)
}

fn cors_layer(allowed_origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    if allowed_origins.trim() == "*" {
        return cors.allow_origin(Any);
    }

    let origins = allowed_origins
        .split(',')
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    cors.allow_origin(origins)
}

async fn health_check() -> &'static str {
    "ok"
}

async fn page_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page Not Found")
}
