use dotenvy::dotenv;
use help_games::config;
use help_games::errors::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the default leisure split configuration
    let split = config::allocation::load_default_config().default_split;
    if split.total() == 100 {
        info!("Default leisure split loaded.");
    } else {
        warn!(
            total = split.total(),
            "Default leisure split does not sum to 100%"
        );
    }

    // 4. Initialize database and create the schema
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| tracing::error!("Failed to connect to database: {e}"))?;

    config::database::create_tables(&db)
        .await
        .inspect(|()| info!("Database schema ready."))
        .inspect_err(|e| tracing::error!("Failed to create database schema: {e}"))?;

    info!(url = %config::database::get_database_url(), "HelpGames storage initialized");

    Ok(())
}
