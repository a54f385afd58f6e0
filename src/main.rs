//! AI Risk Assessment server entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ai_risk_assessment::adapters::http::{app_router, AppServices, HttpSettings};
use ai_risk_assessment::adapters::{FileQuestionSource, PdfExportService, SpreadsheetParser};
use ai_risk_assessment::config::AppConfig;
use ai_risk_assessment::ports::TabularParser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let parser: Arc<dyn TabularParser> = Arc::new(SpreadsheetParser::new());
    let services = AppServices {
        questions: Arc::new(FileQuestionSource::new(
            &config.data.questions_path,
            parser.clone(),
        )),
        parser,
        exporter: Arc::new(PdfExportService::new()),
        static_dir: config.data.static_dir.clone(),
    };
    let app = app_router(services, &HttpSettings::from(&config.server));

    let addr = config.server.socket_addr()?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        questions = %config.data.questions_path.display(),
        "Starting AI risk assessment server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
