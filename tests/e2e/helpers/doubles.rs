use async_trait::async_trait;
use echoflow_backend::infrastructure::repositories::GenerationRepository;
use echoflow_backend::infrastructure::speech::{SpeechEngine, SpeechEngineFactory, SpeechError};
use parking_lot::Mutex;
use std::sync::Arc;

pub const STUB_REPLY: &str =
    "Great job practicing today! Try slowing down on the tricky words and breathe between phrases.";

/// Generation double: canned reply, or a uniform failure on demand
pub struct StubGenerationRepository {
    fail: bool,
}

impl StubGenerationRepository {
    pub fn new(fail: bool) -> Self {
        Self { fail }
    }
}

#[async_trait]
impl GenerationRepository for StubGenerationRepository {
    async fn generate(&self, _prompt: &str) -> Result<String, String> {
        if self.fail {
            return Err("AI generation failed: provider unavailable".to_string());
        }
        Ok(STUB_REPLY.to_string())
    }
}

/// Speech engine double that records spoken text instead of producing audio
pub struct RecordingSpeechEngine {
    spoken: Arc<Mutex<Vec<String>>>,
}

impl SpeechEngine for RecordingSpeechEngine {
    fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
        self.spoken.lock().push(text.to_string());
        Ok(())
    }
}

pub struct RecordingSpeechFactory {
    pub spoken: Arc<Mutex<Vec<String>>>,
}

impl RecordingSpeechFactory {
    pub fn new() -> Self {
        Self {
            spoken: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl SpeechEngineFactory for RecordingSpeechFactory {
    fn create(&self) -> Result<Box<dyn SpeechEngine>, SpeechError> {
        Ok(Box::new(RecordingSpeechEngine {
            spoken: self.spoken.clone(),
        }))
    }
}
