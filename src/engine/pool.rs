use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use anyhow::{bail, Result};

use crate::engine::Engine;

/// The categories engines can be registered under. Only `Asr` is served over
/// HTTP by this service, the other categories exist so one pool can back the
/// full engine registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineType {
    Asr,
    Tts,
    Agent,
}

impl Display for EngineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineType::Asr => write!(f, "asr"),
            EngineType::Tts => write!(f, "tts"),
            EngineType::Agent => write!(f, "agent"),
        }
    }
}

/// Registry mapping an engine category and name to a runnable engine
/// instance. Built once at startup and shared read-only behind an `Arc`.
#[derive(Default)]
pub struct EnginePool {
    engines: HashMap<(EngineType, String), Arc<dyn Engine>>,
}

impl EnginePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an engine under its own name. A second registration with
    /// the same category and name replaces the first.
    pub fn register(&mut self, kind: EngineType, engine: Arc<dyn Engine>) {
        self.engines
            .insert((kind, engine.name().to_string()), engine);
    }

    pub fn get(&self, kind: EngineType, name: &str) -> Result<Arc<dyn Engine>> {
        match self.engines.get(&(kind, name.to_string())) {
            Some(engine) => Ok(Arc::clone(engine)),
            None => bail!("Engine {name} is not registered for {kind}"),
        }
    }

    /// Names of the engines registered under a category, sorted for stable
    /// output.
    pub fn list(&self, kind: EngineType) -> Vec<String> {
        let mut names: Vec<String> = self
            .engines
            .keys()
            .filter(|(registered_kind, _)| *registered_kind == kind)
            .map(|(_, name)| name.clone())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use async_trait::async_trait;

    use super::*;
    use crate::engine::message::{AudioFormatType, AudioMessage, TextMessage};

    #[derive(Debug)]
    struct FixedEngine {
        name: &'static str,
        reply: Option<&'static str>,
    }

    #[async_trait]
    impl Engine for FixedEngine {
        fn name(&self) -> &str {
            self.name
        }

        async fn run(&self, _input: AudioMessage) -> Result<Option<TextMessage>> {
            Ok(self.reply.map(|text| TextMessage::new(text.to_string())))
        }
    }

    #[test]
    fn registered_engine_is_found_by_name() {
        let mut pool = EnginePool::new();
        pool.register(
            EngineType::Asr,
            Arc::new(FixedEngine {
                name: "stub",
                reply: Some("hello"),
            }),
        );

        let engine = pool.get(EngineType::Asr, "stub").unwrap();
        assert_eq!(engine.name(), "stub");
    }

    #[test]
    fn unknown_engine_fails_lookup() {
        let pool = EnginePool::new();
        let err = pool.get(EngineType::Asr, "missing").unwrap_err();
        assert!(err.to_string().contains("missing"));
        assert!(err.to_string().contains("asr"));
    }

    #[test]
    fn categories_are_isolated() {
        let mut pool = EnginePool::new();
        pool.register(
            EngineType::Asr,
            Arc::new(FixedEngine {
                name: "stub",
                reply: Some("hello"),
            }),
        );

        assert!(pool.get(EngineType::Tts, "stub").is_err());
        assert!(pool.get(EngineType::Agent, "stub").is_err());
    }

    #[test]
    fn list_returns_sorted_names_per_category() {
        let mut pool = EnginePool::new();
        pool.register(
            EngineType::Asr,
            Arc::new(FixedEngine {
                name: "b-engine",
                reply: None,
            }),
        );
        pool.register(
            EngineType::Asr,
            Arc::new(FixedEngine {
                name: "a-engine",
                reply: None,
            }),
        );
        pool.register(
            EngineType::Tts,
            Arc::new(FixedEngine {
                name: "voice",
                reply: None,
            }),
        );

        assert_eq!(pool.list(EngineType::Asr), vec!["a-engine", "b-engine"]);
        assert_eq!(pool.list(EngineType::Tts), vec!["voice"]);
        assert!(pool.list(EngineType::Agent).is_empty());
    }

    #[tokio::test]
    async fn pooled_engine_runs() {
        let mut pool = EnginePool::new();
        pool.register(
            EngineType::Asr,
            Arc::new(FixedEngine {
                name: "stub",
                reply: Some("hello"),
            }),
        );

        let engine = pool.get(EngineType::Asr, "stub").unwrap();
        let input = AudioMessage::new(vec![0u8; 4], AudioFormatType::Wav, 16000, 2);
        let output = engine.run(input).await.unwrap().unwrap();
        assert_eq!(output.data, "hello");
    }
}
