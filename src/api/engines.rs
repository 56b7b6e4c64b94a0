use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::response::{ApiResponse, EngineListOut, InferOut};
use crate::api::AppState;
use crate::engine::pool::EngineType;

#[axum_macros::debug_handler]
pub async fn handle_health() -> (StatusCode, Json<ApiResponse<String>>) {
    (StatusCode::OK, Json(ApiResponse::empty()))
}

#[axum_macros::debug_handler]
pub async fn handle_engine_list(
    State(state): State<AppState>,
) -> (StatusCode, Json<EngineListOut>) {
    let names = state.pool.list(EngineType::Asr);
    (StatusCode::OK, Json(EngineListOut::ok(names)))
}

#[axum_macros::debug_handler]
pub async fn handle_engine_default(
    State(state): State<AppState>,
) -> (StatusCode, Json<InferOut>) {
    (StatusCode::OK, Json(InferOut::ok(state.asr_default.clone())))
}
