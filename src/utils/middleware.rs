use crate::{
    error::{AppError, ErrorDetail},
    state::AppState,
};
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

/// 认证中间件：要求 `Authorization: Bearer <API_TOKEN>`
pub async fn auth_middleware(
    State(app_state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map_or(false, |token| {
            !app_state.config.api_token.is_empty() && token == app_state.config.api_token
        });

    if !authorized {
        error!("Unauthorized request to path: {}", request.uri().path());
        return Err(AppError::Unauthorized);
    }

    debug!("Authorized request to {}", request.uri().path());
    Ok(next.run(request).await)
}

/// 统一错误处理：记录服务端错误，生产环境下隐藏错误细节
pub async fn error_handler_middleware(
    State(app_state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    error!("{}", detail);

    if app_state.is_production() {
        return response;
    }

    (
        response.status(),
        Json(json!({
            "error": {
                "message": detail
            }
        })),
    )
        .into_response()
}

/// 安全头中间件
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert("x-xss-protection", HeaderValue::from_static("0"));
    headers.insert("referrer-policy", HeaderValue::from_static("no-referrer"));
    headers.insert("x-dns-prefetch-control", HeaderValue::from_static("off"));

    response
}
