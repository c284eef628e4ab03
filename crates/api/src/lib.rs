pub mod error;
pub mod routes;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use state::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Meeting session routes
    let meeting_routes = Router::new()
        .route("/", post(routes::meeting::create))
        .route("/{meeting_id}", get(routes::meeting::get))
        .route("/{meeting_id}/end", post(routes::meeting::end))
        .route("/{meeting_id}/minutes", get(routes::meeting::minutes));

    // Transcript routes (under meeting)
    let transcript_routes = Router::new()
        .route("/", get(routes::transcript::read))
        .route("/", post(routes::transcript::ingest));

    // Q&A routes (under meeting)
    let qa_routes = Router::new().route("/", post(routes::qa::ask));

    // Compose API
    let api = Router::new()
        .nest("/meeting", meeting_routes)
        .nest("/meeting/{meeting_id}/transcript", transcript_routes)
        .nest("/meeting/{meeting_id}/qa", qa_routes);

    // Health check
    let health = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api)
        .merge(health)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
