use std::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("engine construction failed: {0}")]
    Construction(String),

    #[error("synthesis failed: {0}")]
    Synthesis(String),
}

/// A stateful, blocking text-to-speech engine.
///
/// `speak` blocks until audio playback finishes. Engines are single-use:
/// the dispatcher constructs a fresh instance for every dispatch so no
/// engine state survives across calls.
pub trait SpeechEngine: Send {
    fn speak(&mut self, text: &str) -> Result<(), SpeechError>;
}

/// Builds a fresh engine per dispatch
pub trait SpeechEngineFactory: Send + Sync {
    fn create(&self) -> Result<Box<dyn SpeechEngine>, SpeechError>;
}

/// Engine backed by a host TTS command (`espeak-ng` by default).
/// The command is expected to block until playback completes and to exit
/// non-zero on failure.
pub struct CommandSpeechEngine {
    program: String,
    rate_wpm: u32,
}

impl CommandSpeechEngine {
    pub fn new(program: String, rate_wpm: u32) -> Self {
        Self { program, rate_wpm }
    }
}

impl SpeechEngine for CommandSpeechEngine {
    fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
        // Empty text is a no-op, not an error
        if text.is_empty() {
            return Ok(());
        }

        let status = Command::new(&self.program)
            .arg("-s")
            .arg(self.rate_wpm.to_string())
            .arg(text)
            .status()
            .map_err(|e| {
                SpeechError::Synthesis(format!("failed to run {}: {}", self.program, e))
            })?;

        if !status.success() {
            return Err(SpeechError::Synthesis(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        Ok(())
    }
}

pub struct CommandSpeechEngineFactory {
    program: String,
    rate_wpm: u32,
}

impl CommandSpeechEngineFactory {
    pub fn new(program: String, rate_wpm: u32) -> Self {
        Self { program, rate_wpm }
    }
}

impl SpeechEngineFactory for CommandSpeechEngineFactory {
    fn create(&self) -> Result<Box<dyn SpeechEngine>, SpeechError> {
        if self.program.trim().is_empty() {
            return Err(SpeechError::Construction(
                "speech command is not configured".to_string(),
            ));
        }

        Ok(Box::new(CommandSpeechEngine::new(
            self.program.clone(),
            self.rate_wpm,
        )))
    }
}
