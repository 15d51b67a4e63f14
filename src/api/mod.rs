use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

use crate::api::plans::{
    AppState, create_plan, get_plan, get_progress, get_workout, reset_progress, update_exercise,
    update_note,
};

pub mod error;
pub mod plans;

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_allow_origin.clone());

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/plan", post(create_plan))
        .route("/api/plan/{id}", get(get_plan))
        .route("/api/plan/{id}/workouts/{index}", get(get_workout))
        .route("/api/plan/{id}/progress", get(get_progress).delete(reset_progress))
        .route("/api/plan/{id}/progress/exercises", put(update_exercise))
        .route("/api/plan/{id}/progress/notes", put(update_note))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allow_origin: Option<HeaderValue>) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match allow_origin {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}
