//! Album-side association surfaces: the bands and musicians on an album.
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use models::performer;
use service::links::{album_bands, album_musicians};

use crate::errors::ApiError;
use crate::state::AppState;

async fn add_band(
    State(state): State<AppState>,
    Path((album_id, band_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<Vec<performer::Model>>), ApiError> {
    let members = album_bands(state.db.clone()).add(album_id, band_id).await?;
    Ok((StatusCode::CREATED, Json(members)))
}

async fn find_band(
    State(state): State<AppState>,
    Path((album_id, band_id)): Path<(i32, i32)>,
) -> Result<Json<performer::Model>, ApiError> {
    Ok(Json(album_bands(state.db.clone()).find_one(album_id, band_id).await?))
}

async fn list_bands(
    State(state): State<AppState>,
    Path(album_id): Path<i32>,
) -> Result<Json<Vec<performer::Model>>, ApiError> {
    Ok(Json(album_bands(state.db.clone()).list(album_id).await?))
}

async fn associate_bands(
    State(state): State<AppState>,
    Path(album_id): Path<i32>,
    Json(band_ids): Json<Vec<i32>>,
) -> Result<Json<Vec<performer::Model>>, ApiError> {
    Ok(Json(album_bands(state.db.clone()).associate(album_id, &band_ids).await?))
}

async fn remove_band(
    State(state): State<AppState>,
    Path((album_id, band_id)): Path<(i32, i32)>,
) -> Result<Json<Vec<performer::Model>>, ApiError> {
    Ok(Json(album_bands(state.db.clone()).remove(album_id, band_id).await?))
}

async fn add_musician(
    State(state): State<AppState>,
    Path((album_id, musician_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<Vec<performer::Model>>), ApiError> {
    let members = album_musicians(state.db.clone()).add(album_id, musician_id).await?;
    Ok((StatusCode::CREATED, Json(members)))
}

async fn find_musician(
    State(state): State<AppState>,
    Path((album_id, musician_id)): Path<(i32, i32)>,
) -> Result<Json<performer::Model>, ApiError> {
    Ok(Json(album_musicians(state.db.clone()).find_one(album_id, musician_id).await?))
}

async fn list_musicians(
    State(state): State<AppState>,
    Path(album_id): Path<i32>,
) -> Result<Json<Vec<performer::Model>>, ApiError> {
    Ok(Json(album_musicians(state.db.clone()).list(album_id).await?))
}

async fn associate_musicians(
    State(state): State<AppState>,
    Path(album_id): Path<i32>,
    Json(musician_ids): Json<Vec<i32>>,
) -> Result<Json<Vec<performer::Model>>, ApiError> {
    Ok(Json(album_musicians(state.db.clone()).associate(album_id, &musician_ids).await?))
}

async fn remove_musician(
    State(state): State<AppState>,
    Path((album_id, musician_id)): Path<(i32, i32)>,
) -> Result<Json<Vec<performer::Model>>, ApiError> {
    Ok(Json(album_musicians(state.db.clone()).remove(album_id, musician_id).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/albums/:album_id/bands", get(list_bands).put(associate_bands))
        .route(
            "/albums/:album_id/bands/:band_id",
            post(add_band).get(find_band).delete(remove_band),
        )
        .route(
            "/albums/:album_id/musicians",
            get(list_musicians).put(associate_musicians),
        )
        .route(
            "/albums/:album_id/musicians/:musician_id",
            post(add_musician).get(find_musician).delete(remove_musician),
        )
}
