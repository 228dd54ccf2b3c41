//! Guild configuration Discord commands.
//!
//! `/set_channel` follows the original capture flow: the bot prompts for a
//! channel mention and waits up to 180 seconds for the invoker's next
//! message before giving up with an explicit timeout reply.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, embeds},
        core::{format, guild_config},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::time::Duration;

    const MENTION_TIMEOUT: Duration = Duration::from_secs(180);

    /// Maps a role purpose to a Discord role.
    #[poise::command(slash_command, prefix_command, required_permissions = "MANAGE_GUILD")]
    pub async fn set_role(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Purpose: staff, trainer, or hiring_manager"] purpose: String,
        #[description = "Role to map to the purpose"] role: serenity::Role,
    ) -> Result<()> {
        let parsed = match guild_config::RolePurpose::parse(&purpose) {
            Ok(parsed) => parsed,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let db = &ctx.data().database;
        guild_config::set_role(db, parsed, role.id.to_string()).await?;

        ctx.say(format!(
            "✅ Mapped **{}** to <@&{}>.",
            parsed.as_str(),
            role.id
        ))
        .await?;
        Ok(())
    }

    /// Maps a channel purpose to a channel mentioned in your next message.
    #[poise::command(slash_command, prefix_command, required_permissions = "MANAGE_GUILD")]
    pub async fn set_channel(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Purpose: job_board, service_listings, background_checks, venue_directory"]
        purpose: String,
    ) -> Result<()> {
        let parsed = match guild_config::ChannelPurpose::parse(&purpose) {
            Ok(parsed) => parsed,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        ctx.say(format!(
            "📌 Mention the channel to use for **{}** (e.g. `#job-board`). \
             You have 3 minutes.",
            parsed.as_str()
        ))
        .await?;

        let Some(message) = serenity::MessageCollector::new(ctx)
            .channel_id(ctx.channel_id())
            .author_id(ctx.author().id)
            .timeout(MENTION_TIMEOUT)
            .await
        else {
            ctx.say("⏱️ Timed out waiting for a channel mention. Run `/set_channel` again.")
                .await?;
            return Ok(());
        };

        let Some(channel_id) = format::parse_channel_mention(&message.content) else {
            ctx.say("❌ That message does not mention a channel. Run `/set_channel` again.")
                .await?;
            return Ok(());
        };

        let db = &ctx.data().database;
        guild_config::set_channel(db, parsed, channel_id.to_string()).await?;

        ctx.say(format!(
            "✅ Mapped **{}** to <#{channel_id}>.",
            parsed.as_str()
        ))
        .await?;
        Ok(())
    }

    /// Shows the current role and channel configuration.
    #[poise::command(slash_command, prefix_command, required_permissions = "MANAGE_GUILD")]
    pub async fn config(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;

        let roles = guild_config::all_roles(db).await?;
        let channels = guild_config::all_channels(db).await?;

        ctx.send(poise::CreateReply::default().embed(embeds::config_embed(&roles, &channels)))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
