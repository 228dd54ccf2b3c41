//! Binary entry point: wires configuration, the database, and the bot together.

use dotenvy::dotenv;
use greenroom::errors::{Error, Result};
use greenroom::{bot, config, core};
use std::env;
use tracing::{error, info};
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
    info!("Attempted to load .env file.");

    // 3. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;

    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database tables ready."))
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 4. Seed initial positions from config.toml
    let seed_config = config::positions::load_default_config()
        .inspect_err(|e| error!("Failed to load config.toml: {e}"))?;
    let seeded = core::position::seed_positions(&db, &seed_config).await?;
    info!("Seeded {seeded} position(s) from config.toml.");

    // 5. Run the bot. DISCORD_BOT_TOKEN is loaded directly before use.
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {e}"))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, db).await?;

    Ok(())
}
