use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use models::collector::{self, CollectorPayload};
use service::collector::{CollectorDto, CollectorService};

use crate::errors::ApiError;
use crate::state::AppState;

async fn list(State(state): State<AppState>) -> Result<Json<Vec<CollectorDto>>, ApiError> {
    let svc = CollectorService::new(state.db.clone());
    Ok(Json(svc.find_all().await?))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CollectorDto>, ApiError> {
    let svc = CollectorService::new(state.db.clone());
    Ok(Json(svc.find_one(id).await?))
}

async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CollectorPayload>,
) -> Result<(StatusCode, Json<collector::Model>), ApiError> {
    let svc = CollectorService::new(state.db.clone());
    Ok((StatusCode::CREATED, Json(svc.create(&payload).await?)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CollectorPayload>,
) -> Result<Json<collector::Model>, ApiError> {
    let svc = CollectorService::new(state.db.clone());
    Ok(Json(svc.update(id, &payload).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let svc = CollectorService::new(state.db.clone());
    svc.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/collectors", get(list).post(create))
        .route("/collectors/:collector_id", get(get_one).put(update).delete(remove))
}
