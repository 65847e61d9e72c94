//! Prize-performer attributed surface; the request body carries the
//! premiation date.
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use models::performer_prize::{self, PerformerPrizePayload};
use service::links::{find_all_performer_prizes, prize_performers};

use crate::errors::ApiError;
use crate::state::AppState;

async fn add(
    State(state): State<AppState>,
    Path((prize_id, performer_id)): Path<(i32, i32)>,
    Json(attrs): Json<PerformerPrizePayload>,
) -> Result<(StatusCode, Json<performer_prize::Model>), ApiError> {
    let link = prize_performers(state.db.clone()).add(prize_id, performer_id, &attrs).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

async fn list(
    State(state): State<AppState>,
    Path(prize_id): Path<i32>,
) -> Result<Json<Vec<performer_prize::Model>>, ApiError> {
    Ok(Json(prize_performers(state.db.clone()).list(prize_id).await?))
}

async fn find(
    State(state): State<AppState>,
    Path((prize_id, performer_id)): Path<(i32, i32)>,
) -> Result<Json<Vec<performer_prize::Model>>, ApiError> {
    Ok(Json(prize_performers(state.db.clone()).find(prize_id, performer_id).await?))
}

async fn update(
    State(state): State<AppState>,
    Path((prize_id, performer_id)): Path<(i32, i32)>,
    Json(attrs): Json<PerformerPrizePayload>,
) -> Result<Json<performer_prize::Model>, ApiError> {
    Ok(Json(prize_performers(state.db.clone()).update(prize_id, performer_id, &attrs).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path((prize_id, performer_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    prize_performers(state.db.clone()).remove(prize_id, performer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<performer_prize::Model>>, ApiError> {
    Ok(Json(find_all_performer_prizes(&state.db).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/performerprizes", get(list_all))
        .route("/prizes/:prize_id/performers", get(list))
        .route(
            "/prizes/:prize_id/performers/:performer_id",
            get(find).post(add).put(update).delete(remove),
        )
}
