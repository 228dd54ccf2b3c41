//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the greenroom application,
//! including all slash commands, interaction handlers, embed rendering, and
//! bot context management.

/// Discord command implementations (positions, staff, venues, services, ...)
pub mod commands;
/// Embed builders for every status display
pub mod embeds;
/// Discord interaction handlers (components, modals, autocomplete)
pub mod handlers;

use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use tracing::info;

/// Shared data available to all bot commands.
/// This structure holds the database connection and any other global state
/// that commands need to access.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
}

impl BotData {
    /// Creates a new `BotData` instance with the given database connection.
    /// This is typically called during bot initialization to set up the
    /// shared context for all commands.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                tracing::error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {e}");
            }
        }
    }
}

/// Builds the poise framework and runs the bot until the gateway closes.
pub async fn run_bot(token: String, database: DatabaseConnection) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::general::ping(),
                commands::general::help(),
                commands::position::positions(),
                commands::position::position_info(),
                commands::position::create_position(),
                commands::position::delete_position(),
                commands::position::add_requirement(),
                commands::position::remove_requirement(),
                commands::position::set_position_role(),
                commands::position::set_trainer_pay(),
                commands::staff::staff_register(),
                commands::staff::staff_info(),
                commands::staff::hiatus(),
                commands::staff::qualify(),
                commands::staff::unqualify(),
                commands::venue::create_venue(),
                commands::venue::venues(),
                commands::venue::venue_info(),
                commands::venue::venue_manage(),
                commands::venue::delete_venue(),
                commands::service::create_service(),
                commands::service::services(),
                commands::service::service_profile(),
                commands::service::service_listings(),
                commands::background::background_check(),
                commands::background::pending_checks(),
                commands::posting::post_job(),
                commands::posting::postings(),
                commands::setup::set_role(),
                commands::setup::set_channel(),
                commands::setup::config(),
            ],
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::event_handler(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(BotData::new(database))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    client.start().await?;
    Ok(())
}
