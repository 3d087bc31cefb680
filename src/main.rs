//! Smart Tour Server
//!
//! REST API for tourism analytics, itineraries and the chat assistant.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use smart_tour_server::{
    api,
    chatbot::{Language, ResponseTable},
    config::{AppConfig, ChatbotConfig, LoggingConfig},
    repository::{conversations::ConversationStore, metrics::SimulatedMetricSource, Repository},
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing; the guard flushes the log file on exit
    let _guard = init_tracing(&config.logging);

    tracing::info!("Starting Smart Tour Server v{}", env!("CARGO_PKG_VERSION"));

    let responses = load_responses(&config.chatbot).await?;
    tracing::info!(
        "Chat replies available in {} language(s), default {}",
        responses.languages().count(),
        responses.default_language().code()
    );

    let conversations = match &config.chatbot.history_file {
        Some(path) => ConversationStore::open(path, config.chatbot.max_history)
            .await
            .with_context(|| format!("Failed to open chat history {}", path))?,
        None => ConversationStore::in_memory(config.chatbot.max_history),
    };

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(Arc::new(SimulatedMetricSource::new()), conversations);
    let services = Services::new(repository, &config, responses);

    if services.analytics.spawn_refresh_task().is_some() {
        tracing::info!(
            "Refreshing analytics every {}s",
            config.analytics.refresh_interval_secs
        );
    }

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = api::create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host
            .parse()
            .with_context(|| format!("Invalid host address {}", server_host))?,
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Console logging, plus a daily rolling file when a directory is configured
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("smart_tour_server={},tower_http=debug", logging.level).into());

    let console = if logging.format == "json" {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    let (file, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "smart-tour.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();

    guard
}

/// Built-in replies, or the configured JSON table, with the configured default language
async fn load_responses(chatbot: &ChatbotConfig) -> anyhow::Result<ResponseTable> {
    let mut table = match &chatbot.responses_file {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read reply table {}", path))?;
            ResponseTable::from_json(&json)
                .with_context(|| format!("Invalid reply table {}", path))?
        }
        None => ResponseTable::builtin(),
    };

    match Language::from_code(&chatbot.default_language) {
        Some(language) => table.set_default_language(language),
        None => tracing::warn!(
            "Unknown default language '{}', using {}",
            chatbot.default_language,
            table.default_language().code()
        ),
    }
    table
        .validate()
        .context("Reply table has no entries for the default language")?;

    Ok(table)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
