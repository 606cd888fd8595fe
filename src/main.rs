//! # Messenger API
//!
//! Application entry point: configuration, logging, database and HTTP server.

use anyhow::Result;
use tracing::info;

use messenger_api::config::Settings;
use messenger_api::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment and config files
    let settings = Settings::load()?;

    messenger_api::telemetry::init_tracing(settings.is_production());
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
