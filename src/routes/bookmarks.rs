use crate::{
    error::{AppError, Result},
    models::bookmark::*,
    state::AppState,
    utils::validation::{validate_new_bookmark, validate_update},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::{debug, error, info};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/:id",
            get(get_bookmark).patch(update_bookmark).delete(delete_bookmark),
        )
}

/// List every bookmark
/// GET /bookmarks
async fn list_bookmarks(State(state): State<Arc<AppState>>) -> Result<Json<Vec<BookmarkResponse>>> {
    debug!("Listing bookmarks");

    let bookmarks = state.bookmark_service.list_all().await?;

    Ok(Json(bookmarks.iter().map(BookmarkResponse::from).collect()))
}

/// Create a bookmark
/// POST /bookmarks
async fn create_bookmark(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateBookmarkRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = payload.map_err(|rejection| {
        error!("Rejected bookmark body: {}", rejection.body_text());
        AppError::from(rejection)
    })?;

    let candidate = validate_new_bookmark(request)?;
    let bookmark = state.bookmark_service.insert(candidate).await?;

    let location = format!("/bookmarks/{}", bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookmarkResponse::from(&bookmark)),
    )
        .into_response())
}

/// Get a bookmark
/// GET /bookmarks/:id
async fn get_bookmark(
    State(state): State<Arc<AppState>>,
    Path(bookmark_id): Path<String>,
) -> Result<Json<BookmarkResponse>> {
    debug!("Getting bookmark: {}", bookmark_id);

    let bookmark = state
        .bookmark_service
        .get_by_id(&bookmark_id)
        .await?
        .ok_or_else(|| bookmark_not_found(&bookmark_id))?;

    Ok(Json(BookmarkResponse::from(bookmark)))
}

/// Replace a bookmark's description
/// PATCH /bookmarks/:id
async fn update_bookmark(
    State(state): State<Arc<AppState>>,
    Path(bookmark_id): Path<String>,
    payload: std::result::Result<Json<UpdateBookmarkRequest>, JsonRejection>,
) -> Result<Json<BookmarkResponse>> {
    debug!("Updating bookmark: {}", bookmark_id);

    let Json(request) = payload?;
    let description = validate_update(request)?;

    let bookmark = state
        .bookmark_service
        .update_description(&bookmark_id, description)
        .await?
        .ok_or_else(|| bookmark_not_found(&bookmark_id))?;

    Ok(Json(BookmarkResponse::from(bookmark)))
}

/// Delete a bookmark
/// DELETE /bookmarks/:id
async fn delete_bookmark(
    State(state): State<Arc<AppState>>,
    Path(bookmark_id): Path<String>,
) -> Result<StatusCode> {
    debug!("Deleting bookmark: {}", bookmark_id);

    if !state.bookmark_service.delete_by_id(&bookmark_id).await? {
        return Err(bookmark_not_found(&bookmark_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn bookmark_not_found(bookmark_id: &str) -> AppError {
    info!("Bookmark with id {} not found", bookmark_id);
    AppError::not_found("Bookmark")
}
