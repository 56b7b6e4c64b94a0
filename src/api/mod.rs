use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::engine::pool::EnginePool;

pub mod engines;
pub mod infer;
pub mod response;

#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<EnginePool>,
    pub asr_default: String,
}

pub fn create_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/v0/health", get(engines::handle_health))
        .route("/v0/infer", post(infer::handle_infer_request))
        .route("/v0/engine", get(engines::handle_engine_list))
        .route("/v0/engine/default", get(engines::handle_engine_default))
        // 10 MB limit for base64 audio payloads
        .layer(DefaultBodyLimit::max(10_000_000))
        .layer(trace_layer)
        .with_state(state)
}
