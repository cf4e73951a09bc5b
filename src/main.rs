use dotenvy::dotenv;
use stockroom::config;
use stockroom::config::database;
use stockroom::errors::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;
    info!(url = %app_config.database.url, "Loaded application configuration");

    // 4. Connect and make sure the schema exists for the service layer
    let db = app_config.database.connect().await?;
    info!("Database connection opened. Ensuring tables are created...");
    database::create_tables(&db).await?;

    info!("Schema ready; store is prepared for fulfillment traffic");
    Ok(())
}
