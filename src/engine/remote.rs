use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use base64ct::{Base64, Encoding};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::engine::message::{AudioMessage, TextMessage};
use crate::engine::Engine;

/// ASR engine that forwards audio to a remote transcription service over
/// HTTP. The model itself runs out of process, this engine only carries the
/// audio across and maps the reply back into a `TextMessage`.
#[derive(Debug)]
pub struct RemoteAsrEngine {
    name: String,
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RemoteAsrRequest {
    data: String,
    format: &'static str,
    sample_rate: u32,
    sample_width: u32,
}

#[derive(Deserialize, Debug)]
struct RemoteAsrResponse {
    text: Option<String>,
}

impl RemoteAsrEngine {
    pub fn new(
        name: &str,
        endpoint: &str,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let endpoint = Url::parse(endpoint).context("Invalid ASR service endpoint")?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            name: name.to_string(),
            client,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl Engine for RemoteAsrEngine {
    fn name(&self) -> &str {
        &self.name
    }

    #[tracing::instrument(level = "info", skip(self, input))]
    async fn run(&self, input: AudioMessage) -> Result<Option<TextMessage>> {
        let request = RemoteAsrRequest {
            data: Base64::encode_string(&input.data),
            format: input.format.as_tag(),
            sample_rate: input.sample_rate,
            sample_width: input.sample_width,
        };

        let mut builder = self.client.post(self.endpoint.clone()).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .context("ASR service request failed")?;
        if !response.status().is_success() {
            bail!("ASR service returned status {}", response.status());
        }

        let body: RemoteAsrResponse = response
            .json()
            .await
            .context("Failed to parse ASR service response")?;
        debug!(
            "remote engine produced {} chars",
            body.text.as_deref().map_or(0, str::len)
        );

        Ok(body.text.map(TextMessage::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_endpoint_is_rejected() {
        let err = RemoteAsrEngine::new("remote", "not a url", None, 30).unwrap_err();
        assert!(err.to_string().contains("Invalid ASR service endpoint"));
    }

    #[test]
    fn engine_reports_its_name() {
        let engine =
            RemoteAsrEngine::new("remote", "http://127.0.0.1:6006/asr", None, 30).unwrap();
        assert_eq!(engine.name(), "remote");
    }
}
