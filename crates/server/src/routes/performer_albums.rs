//! Performer-side association surfaces: the albums of a band or musician.
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use models::album;
use service::links::{band_albums, musician_albums};

use crate::errors::ApiError;
use crate::state::AppState;

async fn add_band_album(
    State(state): State<AppState>,
    Path((band_id, album_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<Vec<album::Model>>), ApiError> {
    let members = band_albums(state.db.clone()).add(band_id, album_id).await?;
    Ok((StatusCode::CREATED, Json(members)))
}

async fn find_band_album(
    State(state): State<AppState>,
    Path((band_id, album_id)): Path<(i32, i32)>,
) -> Result<Json<album::Model>, ApiError> {
    Ok(Json(band_albums(state.db.clone()).find_one(band_id, album_id).await?))
}

async fn list_band_albums(
    State(state): State<AppState>,
    Path(band_id): Path<i32>,
) -> Result<Json<Vec<album::Model>>, ApiError> {
    Ok(Json(band_albums(state.db.clone()).list(band_id).await?))
}

async fn associate_band_albums(
    State(state): State<AppState>,
    Path(band_id): Path<i32>,
    Json(album_ids): Json<Vec<i32>>,
) -> Result<Json<Vec<album::Model>>, ApiError> {
    Ok(Json(band_albums(state.db.clone()).associate(band_id, &album_ids).await?))
}

async fn remove_band_album(
    State(state): State<AppState>,
    Path((band_id, album_id)): Path<(i32, i32)>,
) -> Result<Json<Vec<album::Model>>, ApiError> {
    Ok(Json(band_albums(state.db.clone()).remove(band_id, album_id).await?))
}

async fn add_musician_album(
    State(state): State<AppState>,
    Path((musician_id, album_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<Vec<album::Model>>), ApiError> {
    let members = musician_albums(state.db.clone()).add(musician_id, album_id).await?;
    Ok((StatusCode::CREATED, Json(members)))
}

async fn find_musician_album(
    State(state): State<AppState>,
    Path((musician_id, album_id)): Path<(i32, i32)>,
) -> Result<Json<album::Model>, ApiError> {
    Ok(Json(musician_albums(state.db.clone()).find_one(musician_id, album_id).await?))
}

async fn list_musician_albums(
    State(state): State<AppState>,
    Path(musician_id): Path<i32>,
) -> Result<Json<Vec<album::Model>>, ApiError> {
    Ok(Json(musician_albums(state.db.clone()).list(musician_id).await?))
}

async fn associate_musician_albums(
    State(state): State<AppState>,
    Path(musician_id): Path<i32>,
    Json(album_ids): Json<Vec<i32>>,
) -> Result<Json<Vec<album::Model>>, ApiError> {
    Ok(Json(musician_albums(state.db.clone()).associate(musician_id, &album_ids).await?))
}

async fn remove_musician_album(
    State(state): State<AppState>,
    Path((musician_id, album_id)): Path<(i32, i32)>,
) -> Result<Json<Vec<album::Model>>, ApiError> {
    Ok(Json(musician_albums(state.db.clone()).remove(musician_id, album_id).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bands/:band_id/albums", get(list_band_albums).put(associate_band_albums))
        .route(
            "/bands/:band_id/albums/:album_id",
            post(add_band_album).get(find_band_album).delete(remove_band_album),
        )
        .route(
            "/musicians/:musician_id/albums",
            get(list_musician_albums).put(associate_musician_albums),
        )
        .route(
            "/musicians/:musician_id/albums/:album_id",
            post(add_musician_album).get(find_musician_album).delete(remove_musician_album),
        )
}
