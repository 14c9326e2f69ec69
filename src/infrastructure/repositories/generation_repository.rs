use async_trait::async_trait;

/// Repository for AI text generation.
/// Abstracts the underlying completion provider.
///
/// Implementations are responsible for:
/// - Submitting the composed prompt as-is (no prompt rewriting)
/// - Collapsing every provider-side failure into one opaque error
///
/// No retry is attempted at any layer; a failure is terminal for the request.
#[async_trait]
pub trait GenerationRepository: Send + Sync {
    /// Generate a response for the given prompt.
    ///
    /// # Errors
    /// Returns an error string if the provider call fails for any reason
    /// (quota, timeout, malformed prompt); callers cannot distinguish causes.
    async fn generate(&self, prompt: &str) -> Result<String, String>;
}
