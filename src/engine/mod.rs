use anyhow::Result;
use async_trait::async_trait;

use crate::engine::message::{AudioMessage, TextMessage};

pub mod message;
pub mod pool;
pub mod remote;

/// A runnable inference engine.
///
/// `run` consumes one `AudioMessage` and produces the recognized text.
/// `Ok(None)` means the engine completed without producing a result, which
/// is distinct from an error raised during the run.
#[async_trait]
pub trait Engine: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;

    async fn run(&self, input: AudioMessage) -> Result<Option<TextMessage>>;
}
