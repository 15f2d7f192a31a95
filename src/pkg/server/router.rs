use axum::routing::{delete, post, put};
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes(state: AppState) -> Result<Router> {
    let app = Router::new()
        .route("/job", post(handlers::jobs::create))
        .route("/job", get(handlers::jobs::list))
        .route("/job/{id}", get(handlers::jobs::get))
        .route("/job/{id}", put(handlers::jobs::update))
        .route("/job/{id}", delete(handlers::jobs::delete))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .layer(CorsLayer::permissive())
        .with_state(state);

    Ok(app)
}
