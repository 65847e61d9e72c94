use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use models::track::{self, TrackPayload};
use service::track::TrackService;

use crate::errors::ApiError;
use crate::state::AppState;

async fn list(State(state): State<AppState>) -> Result<Json<Vec<track::Model>>, ApiError> {
    let svc = TrackService::new(state.db.clone());
    Ok(Json(svc.find_all().await?))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<track::Model>, ApiError> {
    let svc = TrackService::new(state.db.clone());
    Ok(Json(svc.find_one(id).await?))
}

async fn create(
    State(state): State<AppState>,
    Path(album_id): Path<i32>,
    Json(payload): Json<TrackPayload>,
) -> Result<(StatusCode, Json<track::Model>), ApiError> {
    let svc = TrackService::new(state.db.clone());
    Ok((StatusCode::CREATED, Json(svc.create(album_id, &payload).await?)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<TrackPayload>,
) -> Result<Json<track::Model>, ApiError> {
    let svc = TrackService::new(state.db.clone());
    Ok(Json(svc.update(id, &payload).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let svc = TrackService::new(state.db.clone());
    svc.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tracks", get(list))
        .route("/tracks/:track_id", get(get_one).put(update).delete(remove))
        .route("/albums/:album_id/tracks", post(create))
}
