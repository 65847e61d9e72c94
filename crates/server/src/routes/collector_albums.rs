//! Collector-owned-album attributed surface; the request body carries the
//! link attributes (price, status).
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use models::collector_album::{self, CollectorAlbumPayload};
use service::links::collector_albums;

use crate::errors::ApiError;
use crate::state::AppState;

async fn add(
    State(state): State<AppState>,
    Path((collector_id, album_id)): Path<(i32, i32)>,
    Json(attrs): Json<CollectorAlbumPayload>,
) -> Result<(StatusCode, Json<collector_album::Model>), ApiError> {
    let link = collector_albums(state.db.clone()).add(collector_id, album_id, &attrs).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

async fn list(
    State(state): State<AppState>,
    Path(collector_id): Path<i32>,
) -> Result<Json<Vec<collector_album::Model>>, ApiError> {
    Ok(Json(collector_albums(state.db.clone()).list(collector_id).await?))
}

async fn find(
    State(state): State<AppState>,
    Path((collector_id, album_id)): Path<(i32, i32)>,
) -> Result<Json<Vec<collector_album::Model>>, ApiError> {
    Ok(Json(collector_albums(state.db.clone()).find(collector_id, album_id).await?))
}

async fn update(
    State(state): State<AppState>,
    Path((collector_id, album_id)): Path<(i32, i32)>,
    Json(attrs): Json<CollectorAlbumPayload>,
) -> Result<Json<collector_album::Model>, ApiError> {
    Ok(Json(collector_albums(state.db.clone()).update(collector_id, album_id, &attrs).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path((collector_id, album_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    collector_albums(state.db.clone()).remove(collector_id, album_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/collectors/:collector_id/albums", get(list))
        .route(
            "/collectors/:collector_id/albums/:album_id",
            get(find).post(add).put(update).delete(remove),
        )
}
