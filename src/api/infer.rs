use anyhow::{anyhow, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use base64ct::{Base64, Encoding};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::api::response::InferOut;
use crate::api::AppState;
use crate::engine::message::{AudioFormatType, AudioMessage};
use crate::engine::pool::{EnginePool, EngineType};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InferIn {
    /// Engine to run, falls back to the configured default when omitted
    #[serde(default)]
    pub engine: Option<String>,
    pub data: String,
    pub format: String,
    pub sample_rate: u32,
    pub sample_width: u32,
}

#[axum_macros::debug_handler]
pub async fn handle_infer_request(
    State(state): State<AppState>,
    Json(req): Json<InferIn>,
) -> (StatusCode, Json<InferOut>) {
    let engine_name = req
        .engine
        .clone()
        .unwrap_or_else(|| state.asr_default.clone());

    let out = match run_asr(&state.pool, &engine_name, req).await {
        Ok(text) => InferOut::ok(text),
        Err(err) => {
            warn!("ASR inference with engine {engine_name} failed: {err:#}");
            InferOut::error(err.to_string())
        }
    };

    // Failures are reported inside the envelope, the transport status stays 200.
    (StatusCode::OK, Json(out))
}

async fn run_asr(pool: &EnginePool, engine_name: &str, req: InferIn) -> Result<String> {
    let format = AudioFormatType::from_tag(&req.format)
        .ok_or_else(|| anyhow!("Unsupported audio format"))?;
    let data =
        Base64::decode_vec(&req.data).map_err(|err| anyhow!("Invalid base64 audio data: {err}"))?;
    debug!("decoded {} bytes of {} audio", data.len(), format);

    let input = AudioMessage::new(data, format, req.sample_rate, req.sample_width);
    let engine = pool.get(EngineType::Asr, engine_name)?;
    let output = engine
        .run(input)
        .await?
        .ok_or_else(|| anyhow!("ASR engine run failed"))?;

    Ok(output.data)
}
