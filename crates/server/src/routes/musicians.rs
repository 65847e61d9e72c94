use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use models::performer::{self, MusicianPayload};
use service::musician::{MusicianDto, MusicianService};

use crate::errors::ApiError;
use crate::state::AppState;

async fn list(State(state): State<AppState>) -> Result<Json<Vec<MusicianDto>>, ApiError> {
    let svc = MusicianService::new(state.db.clone());
    Ok(Json(svc.find_all().await?))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MusicianDto>, ApiError> {
    let svc = MusicianService::new(state.db.clone());
    Ok(Json(svc.find_one(id).await?))
}

async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MusicianPayload>,
) -> Result<(StatusCode, Json<performer::Model>), ApiError> {
    let svc = MusicianService::new(state.db.clone());
    Ok((StatusCode::CREATED, Json(svc.create(&payload).await?)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MusicianPayload>,
) -> Result<Json<performer::Model>, ApiError> {
    let svc = MusicianService::new(state.db.clone());
    Ok(Json(svc.update(id, &payload).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let svc = MusicianService::new(state.db.clone());
    svc.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/musicians", get(list).post(create))
        .route("/musicians/:musician_id", get(get_one).put(update).delete(remove))
}
