use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use models::comment::{self, CommentPayload};
use service::comment::CommentService;

use crate::errors::ApiError;
use crate::state::AppState;

async fn list(
    State(state): State<AppState>,
    Path(album_id): Path<i32>,
) -> Result<Json<Vec<comment::Model>>, ApiError> {
    let svc = CommentService::new(state.db.clone());
    Ok(Json(svc.find_by_album(album_id).await?))
}

async fn get_one(
    State(state): State<AppState>,
    Path((album_id, comment_id)): Path<(i32, i32)>,
) -> Result<Json<comment::Model>, ApiError> {
    let svc = CommentService::new(state.db.clone());
    Ok(Json(svc.find_one(album_id, comment_id).await?))
}

async fn create(
    State(state): State<AppState>,
    Path(album_id): Path<i32>,
    Json(payload): Json<CommentPayload>,
) -> Result<(StatusCode, Json<comment::Model>), ApiError> {
    let svc = CommentService::new(state.db.clone());
    Ok((StatusCode::CREATED, Json(svc.add(album_id, &payload).await?)))
}

async fn update(
    State(state): State<AppState>,
    Path((album_id, comment_id)): Path<(i32, i32)>,
    Json(payload): Json<CommentPayload>,
) -> Result<Json<comment::Model>, ApiError> {
    let svc = CommentService::new(state.db.clone());
    Ok(Json(svc.update(album_id, comment_id, &payload).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path((album_id, comment_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    let svc = CommentService::new(state.db.clone());
    svc.delete(album_id, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/albums/:album_id/comments", get(list).post(create))
        .route(
            "/albums/:album_id/comments/:comment_id",
            get(get_one).put(update).delete(remove),
        )
}
