//! Band musician-membership surface.
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use models::performer;
use service::links::band_musicians;

use crate::errors::ApiError;
use crate::state::AppState;

async fn add(
    State(state): State<AppState>,
    Path((band_id, musician_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<Vec<performer::Model>>), ApiError> {
    let members = band_musicians(state.db.clone()).add(band_id, musician_id).await?;
    Ok((StatusCode::CREATED, Json(members)))
}

async fn find_one(
    State(state): State<AppState>,
    Path((band_id, musician_id)): Path<(i32, i32)>,
) -> Result<Json<performer::Model>, ApiError> {
    Ok(Json(band_musicians(state.db.clone()).find_one(band_id, musician_id).await?))
}

async fn list(
    State(state): State<AppState>,
    Path(band_id): Path<i32>,
) -> Result<Json<Vec<performer::Model>>, ApiError> {
    Ok(Json(band_musicians(state.db.clone()).list(band_id).await?))
}

async fn associate(
    State(state): State<AppState>,
    Path(band_id): Path<i32>,
    Json(musician_ids): Json<Vec<i32>>,
) -> Result<Json<Vec<performer::Model>>, ApiError> {
    Ok(Json(band_musicians(state.db.clone()).associate(band_id, &musician_ids).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path((band_id, musician_id)): Path<(i32, i32)>,
) -> Result<Json<Vec<performer::Model>>, ApiError> {
    Ok(Json(band_musicians(state.db.clone()).remove(band_id, musician_id).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bands/:band_id/musicians", get(list).put(associate))
        .route(
            "/bands/:band_id/musicians/:musician_id",
            post(add).get(find_one).delete(remove),
        )
}
