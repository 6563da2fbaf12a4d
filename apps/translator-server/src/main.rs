//! Translator REST API server
//!
//! ```bash
//! TRANSLATOR__TRANSLATION__API_KEY=... translator-server --config config/translator.yaml
//!
//! curl -X POST http://localhost:8080/translate \
//!   -H "Content-Type: application/json" \
//!   -d '{"inputText": "Hello world", "sourceLanguage": "en", "targetLanguage": "ru"}'
//! curl http://localhost:8080/supported-languages
//! ```

mod config;
mod logging;

use anyhow::Context;
use clap::Parser;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::future::Future;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use translation_service::TranslationServiceModule;

#[derive(Debug, Parser)]
#[command(name = "translator-server", version, about = "Word-by-word translation REST API")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, default_value = "config/translator.yaml")]
    config: PathBuf,

    /// Print the OpenAPI document and exit
    #[arg(long)]
    print_openapi: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_openapi {
        let doc = TranslationServiceModule::openapi();
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let config = config::load(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    logging::init_logging(&config.logging)?;

    let translation_budget = config.translation.worst_case_latency();
    if config.server.request_timeout <= translation_budget {
        tracing::warn!(
            server_timeout = ?config.server.request_timeout,
            translation_budget = ?translation_budget,
            "server request timeout may cut off retried translations"
        );
    }

    let db = connect(&config.database).await?;
    let module = TranslationServiceModule::init(&config.translation, db)?;
    module.migrate().await?;

    let app = module
        .router()
        .layer(TimeoutLayer::new(config.server.request_timeout))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "translator server listening");

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_on_ctrl_c(cancel.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    tracing::info!("translator server stopped");
    Ok(())
}

async fn connect(config: &config::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    tracing::info!(url = %config.redacted_url(), "connecting to database");

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to {}", config.redacted_url()))
}

async fn shutdown_on_ctrl_c(cancel: CancellationToken) {
    shutdown_on(tokio::signal::ctrl_c(), cancel).await;
}

async fn shutdown_on<F>(signal: F, cancel: CancellationToken)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            tracing::info!("shutdown requested");
            cancel.cancel();
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for ctrl-c, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
