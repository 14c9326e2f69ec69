pub mod request_id;

pub use request_id::{request_id_middleware, RequestId};

use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    health, scenario::ScenarioController, voice_assistant::VoiceAssistantController,
    word_repetition::WordRepetitionController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;

/// Assemble the application router.
///
/// Controllers are injected so the e2e harness can wire test doubles behind
/// the same routes the binary serves. The client is a browser SPA on another
/// origin, hence the permissive CORS layer.
pub fn build_router(
    pool: Arc<DbPool>,
    voice_assistant_controller: Arc<VoiceAssistantController>,
    word_repetition_controller: Arc<WordRepetitionController>,
    scenario_controller: Arc<ScenarioController>,
) -> Router {
    let voice_assistant_routes = Router::new()
        .route(
            "/api/voice-assistant",
            post(VoiceAssistantController::chat),
        )
        .route(
            "/api/voice-assistant/history/:user_id",
            get(VoiceAssistantController::history),
        )
        .with_state(voice_assistant_controller);

    let word_repetition_routes = Router::new()
        .route(
            "/api/word-repetition/progress",
            post(WordRepetitionController::save),
        )
        .route(
            "/api/word-repetition/progress/:user_id",
            get(WordRepetitionController::history),
        )
        .with_state(word_repetition_controller);

    let scenario_routes = Router::new()
        .route("/api/analyze", post(ScenarioController::analyze))
        .route("/api/progress/:user_id", get(ScenarioController::progress))
        .with_state(scenario_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(voice_assistant_routes)
        .merge(word_repetition_routes)
        .merge(scenario_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    voice_assistant_controller: Arc<VoiceAssistantController>,
    word_repetition_controller: Arc<WordRepetitionController>,
    scenario_controller: Arc<ScenarioController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(
        pool,
        voice_assistant_controller,
        word_repetition_controller,
        scenario_controller,
    );

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
