use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use echoflow_backend::infrastructure::config::{Config, LogFormat};
use echoflow_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use echoflow_backend::infrastructure::http::start_http_server;
use echoflow_backend::infrastructure::speech::{CommandSpeechEngineFactory, SpeechDispatcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting EchoFlow Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    // Apply migrations (history tables are created on first boot)
    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // Create OpenAI client
    let openai_config = async_openai::config::OpenAIConfig::new()
        .with_api_key(config.openai_api_key.clone());
    let openai_client = Arc::new(async_openai::Client::with_config(openai_config));
    tracing::info!(model = %config.openai_model, "OpenAI client initialized");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject db pool / provider clients)
    tracing::info!("Instantiating repositories...");
    let progress_repo = Arc::new(
        echoflow_backend::infrastructure::repositories::UserProgressRepository::new(pool.clone()),
    );
    let generation_repo: Arc<dyn echoflow_backend::infrastructure::repositories::GenerationRepository> =
        Arc::new(
            echoflow_backend::infrastructure::repositories::OpenAiGenerationRepository::new(
                openai_client,
                config.openai_model.clone(),
            ),
        );

    // 2. Instantiate the speech dispatcher (fresh engine per dispatch)
    tracing::info!(
        command = %config.speech_command,
        rate_wpm = config.speech_rate_wpm,
        "Instantiating speech dispatcher..."
    );
    let speech = Arc::new(SpeechDispatcher::new(Arc::new(
        CommandSpeechEngineFactory::new(config.speech_command.clone(), config.speech_rate_wpm),
    )));

    // 3. Instantiate services (inject repositories and dispatcher)
    tracing::info!("Instantiating services...");
    let voice_assistant_service = Arc::new(
        echoflow_backend::domain::voice_assistant::VoiceAssistantService::new(
            generation_repo.clone(),
            progress_repo.clone(),
            speech.clone(),
        ),
    );
    let word_repetition_service = Arc::new(
        echoflow_backend::domain::word_repetition::WordRepetitionService::new(
            progress_repo.clone(),
        ),
    );
    let scenario_service = Arc::new(echoflow_backend::domain::scenario::ScenarioService::new(
        generation_repo.clone(),
        progress_repo.clone(),
    ));

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let voice_assistant_controller = Arc::new(
        echoflow_backend::controllers::voice_assistant::VoiceAssistantController::new(
            voice_assistant_service,
        ),
    );
    let word_repetition_controller = Arc::new(
        echoflow_backend::controllers::word_repetition::WordRepetitionController::new(
            word_repetition_service,
        ),
    );
    let scenario_controller = Arc::new(
        echoflow_backend::controllers::scenario::ScenarioController::new(scenario_service),
    );

    // Start HTTP server with all routes
    start_http_server(
        pool,
        config,
        voice_assistant_controller,
        word_repetition_controller,
        scenario_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "echoflow_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "echoflow_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
