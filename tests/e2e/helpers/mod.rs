use anyhow::Result;
use axum::Router;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use sqlx::PgPool;
use std::sync::Arc;
use testcontainers::{clients::Cli, Container};
use testcontainers_modules::postgres::Postgres;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

pub mod db_pool;
pub mod doubles;

use api_client::TestClient;
use db_pool::{DatabasePool, PooledDatabase};
use doubles::{RecordingSpeechFactory, StubGenerationRepository};

use echoflow_backend::controllers::{
    scenario::ScenarioController, voice_assistant::VoiceAssistantController,
    word_repetition::WordRepetitionController,
};
use echoflow_backend::domain::{
    scenario::ScenarioService, voice_assistant::VoiceAssistantService,
    word_repetition::WordRepetitionService,
};
use echoflow_backend::infrastructure::http::build_router;
use echoflow_backend::infrastructure::repositories::{
    GenerationRepository, UserProgressRepository,
};
use echoflow_backend::infrastructure::speech::{SpeechDispatcher, SpeechOutcome};

// Docker client for test containers
static DOCKER: Lazy<Cli> = Lazy::new(Cli::default);

// Shared PostgreSQL container for all tests
static SHARED_CONTAINER: Lazy<SharedContainer> = Lazy::new(SharedContainer::new);

// Global database pool
static DB_POOL: Lazy<DatabasePool> = Lazy::new(|| DatabasePool::new(SHARED_CONTAINER.port));

/// Shared container that lives for the duration of all tests
struct SharedContainer {
    _container: Container<'static, Postgres>,
    port: u16,
}

impl SharedContainer {
    fn new() -> Self {
        let container = DOCKER.run(Postgres::default());
        let port = container.get_host_port_ipv4(5432);

        println!("🐳 Started shared PostgreSQL container on port {}", port);

        Self {
            _container: container,
            port,
        }
    }
}

pub struct TestContext {
    pub client: TestClient,
    pub pool: PgPool,
    /// Everything the speech engine double was asked to speak
    pub spoken: Arc<Mutex<Vec<String>>>,
    speech: Arc<SpeechDispatcher>,
    _db: PooledDatabase,
}

impl TestContext {
    /// App with a working generator double
    pub async fn new() -> Result<Self> {
        Self::build(false).await
    }

    /// App whose generator fails every call
    pub async fn with_failing_generator() -> Result<Self> {
        Self::build(true).await
    }

    async fn build(fail_generator: bool) -> Result<Self> {
        // Get a database from the shared pool
        let pooled_db = DB_POOL.get_database().await?;

        let (app, spoken, speech) = create_app(pooled_db.pool.clone(), fail_generator);

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        Ok(Self {
            client: TestClient::new(&base_url),
            pool: pooled_db.pool.clone(),
            spoken,
            speech,
            _db: pooled_db,
        })
    }

    /// Subscribe to synthesis outcomes. Subscribe BEFORE issuing the request
    /// that dispatches speech, or the event is missed.
    pub fn speech_outcomes(&self) -> broadcast::Receiver<SpeechOutcome> {
        self.speech.subscribe()
    }

    pub async fn count_rows(&self, table: &str) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Wire the real router with test doubles for the AI generator and the
/// speech engine
fn create_app(
    pool: PgPool,
    fail_generator: bool,
) -> (Router, Arc<Mutex<Vec<String>>>, Arc<SpeechDispatcher>) {
    let pool = Arc::new(pool);

    let progress_repo = Arc::new(UserProgressRepository::new(pool.clone()));
    let generation_repo: Arc<dyn GenerationRepository> =
        Arc::new(StubGenerationRepository::new(fail_generator));

    let speech_factory = RecordingSpeechFactory::new();
    let spoken = speech_factory.spoken.clone();
    let speech = Arc::new(SpeechDispatcher::new(Arc::new(speech_factory)));

    let voice_assistant_service = Arc::new(VoiceAssistantService::new(
        generation_repo.clone(),
        progress_repo.clone(),
        speech.clone(),
    ));
    let word_repetition_service = Arc::new(WordRepetitionService::new(progress_repo.clone()));
    let scenario_service = Arc::new(ScenarioService::new(
        generation_repo.clone(),
        progress_repo.clone(),
    ));

    let voice_assistant_controller =
        Arc::new(VoiceAssistantController::new(voice_assistant_service));
    let word_repetition_controller =
        Arc::new(WordRepetitionController::new(word_repetition_service));
    let scenario_controller = Arc::new(ScenarioController::new(scenario_service));

    let app = build_router(
        pool,
        voice_assistant_controller,
        word_repetition_controller,
        scenario_controller,
    );

    (app, spoken, speech)
}
