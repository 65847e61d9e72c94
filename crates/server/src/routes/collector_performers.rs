//! Collector favorite-performer surface.
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use models::performer;
use service::links::collector_performers;

use crate::errors::ApiError;
use crate::state::AppState;

async fn add(
    State(state): State<AppState>,
    Path((collector_id, performer_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<Vec<performer::Model>>), ApiError> {
    let members = collector_performers(state.db.clone()).add(collector_id, performer_id).await?;
    Ok((StatusCode::CREATED, Json(members)))
}

async fn find_one(
    State(state): State<AppState>,
    Path((collector_id, performer_id)): Path<(i32, i32)>,
) -> Result<Json<performer::Model>, ApiError> {
    Ok(Json(collector_performers(state.db.clone()).find_one(collector_id, performer_id).await?))
}

async fn list(
    State(state): State<AppState>,
    Path(collector_id): Path<i32>,
) -> Result<Json<Vec<performer::Model>>, ApiError> {
    Ok(Json(collector_performers(state.db.clone()).list(collector_id).await?))
}

async fn associate(
    State(state): State<AppState>,
    Path(collector_id): Path<i32>,
    Json(performer_ids): Json<Vec<i32>>,
) -> Result<Json<Vec<performer::Model>>, ApiError> {
    Ok(Json(collector_performers(state.db.clone()).associate(collector_id, &performer_ids).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path((collector_id, performer_id)): Path<(i32, i32)>,
) -> Result<Json<Vec<performer::Model>>, ApiError> {
    Ok(Json(collector_performers(state.db.clone()).remove(collector_id, performer_id).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/collectors/:collector_id/performers", get(list).put(associate))
        .route(
            "/collectors/:collector_id/performers/:performer_id",
            post(add).get(find_one).delete(remove),
        )
}
