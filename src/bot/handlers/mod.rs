//! Discord interaction handlers.
//!
//! The event handler routes component and modal interactions to the
//! custom_id dispatchers; autocomplete handlers back the name parameters on
//! slash commands.

/// Autocomplete suggestions for command parameters
pub mod autocomplete;
/// Button and select-menu dispatch by custom_id
pub mod components;
/// Modal submission dispatch by custom_id
pub mod modals;

use crate::bot::BotData;
use crate::errors::Error;
use poise::serenity_prelude as serenity;

/// Routes raw gateway events into the component and modal dispatchers.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            tracing::info!("Bot logged in as {}", data_about_bot.user.name);
        }
        serenity::FullEvent::InteractionCreate { interaction } => match interaction {
            serenity::Interaction::Component(component_interaction) => {
                if let Err(e) =
                    components::handle_component(ctx, component_interaction, data).await
                {
                    tracing::error!("Error handling component interaction: {e:?}");
                }
            }
            serenity::Interaction::Modal(modal_interaction) => {
                if let Err(e) = modals::handle_modal(ctx, modal_interaction, data).await {
                    tracing::error!("Error handling modal interaction: {e:?}");
                }
            }
            _ => {}
        },
        _ => {}
    }
    Ok(())
}
