//! Venue Discord commands - creation, browsing, and the interactive edit panel.
//!
//! The edit panel is a status embed plus buttons; every button press routes
//! through the component handlers, persists its field, and re-renders the
//! same panel.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, embeds, handlers::autocomplete},
        core::{guild_config, venue},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Creates a new venue profile owned by the caller.
    #[poise::command(slash_command, prefix_command)]
    pub async fn create_venue(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the venue"] name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        if name.trim().is_empty() {
            ctx.say("❌ Venue name cannot be empty.").await?;
            return Ok(());
        }

        if venue::get_venue_by_name(db, name.trim()).await?.is_some() {
            ctx.say(format!(
                "❌ Venue '{name}' already exists. Use a different name or delete the existing venue first."
            ))
            .await?;
            return Ok(());
        }

        let created =
            venue::create_venue(db, name.clone(), ctx.author().id.to_string()).await?;

        // Announce the new profile in the venue directory when configured;
        // creation already succeeded, so a failed announcement only logs.
        if let Some(channel_id) =
            guild_config::get_channel(db, guild_config::ChannelPurpose::VenueDirectory)
                .await?
                .and_then(|c| c.parse::<u64>().ok())
        {
            let announcement =
                serenity::CreateMessage::new().embed(embeds::venue_embed(&created));
            if let Err(e) = serenity::ChannelId::new(channel_id)
                .send_message(&ctx.serenity_context().http, announcement)
                .await
            {
                tracing::warn!("Failed to announce venue: {e}");
            }
        }

        ctx.say(format!(
            "✅ Created venue **{}**! Open its edit panel with `/venue_manage {}`.",
            created.name, created.name
        ))
        .await?;
        Ok(())
    }

    /// Lists all active venues.
    #[poise::command(slash_command, prefix_command)]
    pub async fn venues(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;

        let all_venues = venue::get_all_active_venues(db).await?;

        if all_venues.is_empty() {
            ctx.say("🏮 No venues found. Create one with `/create_venue` to get started!")
                .await?;
            return Ok(());
        }

        let mut response = String::from("🏮 **All Venues**\n\n");

        for v in all_venues {
            let hiring_indicator = if v.hiring { "📗 hiring" } else { "📕 not hiring" };
            writeln!(
                &mut response,
                "**{}** — {} — owned by <@{}>",
                v.name, hiring_indicator, v.owner_id
            )?;
        }

        ctx.say(response).await?;
        Ok(())
    }

    /// Shows a venue's profile.
    #[poise::command(slash_command, prefix_command)]
    pub async fn venue_info(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the venue"]
        #[autocomplete = "autocomplete::autocomplete_venue_name"]
        name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(v) = venue::get_venue_by_name(db, &name).await? else {
            ctx.say(format!(
                "❌ Venue '{name}' not found. Use `/venues` to see all venues."
            ))
            .await?;
            return Ok(());
        };

        ctx.send(poise::CreateReply::default().embed(embeds::venue_embed(&v)))
            .await?;
        Ok(())
    }

    /// Opens the interactive edit panel for a venue you own.
    #[poise::command(slash_command, prefix_command)]
    pub async fn venue_manage(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the venue"]
        #[autocomplete = "autocomplete::autocomplete_venue_name"]
        name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(v) = venue::get_venue_by_name(db, &name).await? else {
            ctx.say(format!("❌ Venue '{name}' not found.")).await?;
            return Ok(());
        };

        if ctx.author().id.to_string() != v.owner_id {
            ctx.say("❌ Only the venue owner can open its edit panel.")
                .await?;
            return Ok(());
        }

        ctx.send(
            poise::CreateReply::default()
                .embed(embeds::venue_embed(&v))
                .components(embeds::venue_panel_components(&v)),
        )
        .await?;
        Ok(())
    }

    /// Deletes a venue you own.
    #[poise::command(slash_command, prefix_command)]
    pub async fn delete_venue(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the venue to delete"]
        #[autocomplete = "autocomplete::autocomplete_venue_name"]
        name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(v) = venue::get_venue_by_name(db, &name).await? else {
            ctx.say(format!("❌ Venue '{name}' not found.")).await?;
            return Ok(());
        };

        let is_owner = ctx.author().id.to_string() == v.owner_id;
        let can_manage = ctx
            .author_member()
            .await
            .is_some_and(|m| m.permissions.is_some_and(|p| p.manage_guild()));

        if !is_owner && !can_manage {
            ctx.say("❌ Only the venue owner or a guild manager can delete this venue.")
                .await?;
            return Ok(());
        }

        venue::soft_delete_venue(db, v.id).await?;

        ctx.say(format!(
            "✅ Deleted venue **{name}**. Its posting history has been preserved."
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
