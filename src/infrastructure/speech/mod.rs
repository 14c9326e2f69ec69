//! Fire-and-forget speech synthesis.
//!
//! The dispatcher builds a private engine per call and offloads the blocking
//! speak-and-wait to the blocking thread pool. Callers learn only whether
//! dispatch succeeded; synthesis outcomes are logged and published on a
//! broadcast channel that the request path never reads.

pub mod engine;

pub use engine::{
    CommandSpeechEngine, CommandSpeechEngineFactory, SpeechEngine, SpeechEngineFactory,
    SpeechError,
};

use std::sync::Arc;
use tokio::sync::broadcast;

/// Terminal state of one background synthesis task
#[derive(Debug, Clone)]
pub enum SpeechOutcome {
    Completed { characters: usize },
    Failed { error: String },
}

pub struct SpeechDispatcher {
    factory: Arc<dyn SpeechEngineFactory>,
    outcomes: broadcast::Sender<SpeechOutcome>,
}

impl SpeechDispatcher {
    pub fn new(factory: Arc<dyn SpeechEngineFactory>) -> Self {
        let (outcomes, _) = broadcast::channel(16);
        Self { factory, outcomes }
    }

    /// Observe synthesis outcomes. Nothing in the request path consumes
    /// these; they exist for diagnostics and tests.
    pub fn subscribe(&self) -> broadcast::Receiver<SpeechOutcome> {
        self.outcomes.subscribe()
    }

    /// Schedule `text` for synthesis on the host audio device.
    ///
    /// Returns `true` once the background task is scheduled, regardless of
    /// whether synthesis later succeeds. Returns `false` only when the
    /// engine cannot be constructed. The task is never joined or cancelled.
    pub fn dispatch(&self, text: &str) -> bool {
        let mut engine = match self.factory.create() {
            Ok(engine) => engine,
            Err(e) => {
                tracing::error!(error = %e, "Speech engine construction failed");
                return false;
            }
        };

        let text = text.to_string();
        let outcomes = self.outcomes.clone();

        tokio::task::spawn_blocking(move || {
            let characters = text.chars().count();
            match engine.speak(&text) {
                Ok(()) => {
                    tracing::debug!(characters, "Speech synthesis completed");
                    let _ = outcomes.send(SpeechOutcome::Completed { characters });
                }
                Err(e) => {
                    // Swallowed: the client already got its response
                    tracing::error!(error = %e, "Speech synthesis failed");
                    let _ = outcomes.send(SpeechOutcome::Failed {
                        error: e.to_string(),
                    });
                }
            }
        });

        true
    }
}
