use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use common::types::Health;

use crate::state::AppState;

mod albums;
mod album_performers;
mod band_musicians;
mod bands;
mod collector_albums;
mod collector_performers;
mod collectors;
mod comments;
mod musicians;
mod performer_albums;
mod performer_prizes;
mod prizes;
mod tracks;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: entity CRUD surfaces plus the
/// association surfaces nested under their subject entities.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(albums::router())
        .merge(bands::router())
        .merge(musicians::router())
        .merge(collectors::router())
        .merge(prizes::router())
        .merge(tracks::router())
        .merge(comments::router())
        .merge(album_performers::router())
        .merge(performer_albums::router())
        .merge(band_musicians::router())
        .merge(collector_albums::router())
        .merge(collector_performers::router())
        .merge(performer_prizes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
