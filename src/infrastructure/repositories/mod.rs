pub mod generation_repository;
pub mod openai_generation_repository;
pub mod progress_repository;

pub use generation_repository::GenerationRepository;
pub use openai_generation_repository::OpenAiGenerationRepository;
pub use progress_repository::UserProgressRepository;
