//! Background check Discord commands - submission entry and the review queue.
//!
//! The application form is a modal, which Discord only lets us open from a
//! component interaction, so `/background_check` replies with a start button
//! and the component handlers take it from there.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, embeds},
        core::{background, guild_config},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    async fn caller_is_hiring_manager(ctx: poise::Context<'_, BotData, Error>) -> Result<bool> {
        let Some(member) = ctx.author_member().await else {
            return Ok(false);
        };

        if member.permissions.is_some_and(|p| p.manage_guild()) {
            return Ok(true);
        }

        let db = &ctx.data().database;
        if let Some(role_id) =
            guild_config::get_role(db, guild_config::RolePurpose::HiringManager).await?
        {
            if let Ok(id) = role_id.parse::<u64>() {
                return Ok(member.roles.contains(&serenity::RoleId::new(id)));
            }
        }

        Ok(false)
    }

    /// Starts a background check application.
    #[poise::command(slash_command, prefix_command)]
    pub async fn background_check(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;
        let user_id = ctx.author().id.to_string();

        // Short-circuit before the modal when a check is already in flight
        if let Some(latest) = background::latest_check_for_user(db, &user_id).await? {
            if latest.status == background::STATUS_PENDING {
                ctx.send(
                    poise::CreateReply::default()
                        .embed(embeds::error_embed(
                            "Already submitted",
                            "You already have a background check awaiting review.",
                        ))
                        .ephemeral(true),
                )
                .await?;
                return Ok(());
            }
        }

        let start_button = serenity::CreateActionRow::Buttons(vec![
            serenity::CreateButton::new("bgc_start")
                .label("📝 Begin Application")
                .style(serenity::ButtonStyle::Primary),
        ]);

        ctx.send(
            poise::CreateReply::default()
                .content(
                    "🔍 **Background Check**\nPress the button below to open the application \
                     form. The review team will look it over once submitted.",
                )
                .components(vec![start_button])
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }

    /// Lists background checks awaiting review.
    #[poise::command(slash_command, prefix_command)]
    pub async fn pending_checks(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        if !caller_is_hiring_manager(ctx).await? {
            ctx.say("❌ Only hiring managers can view the review queue.")
                .await?;
            return Ok(());
        }

        let db = &ctx.data().database;
        let pending = background::get_pending_checks(db).await?;

        if pending.is_empty() {
            ctx.say("✅ No background checks are waiting for review.")
                .await?;
            return Ok(());
        }

        let mut response = String::from("⏳ **Pending Background Checks**\n\n");
        for check in pending {
            writeln!(
                &mut response,
                "• #{} — <@{}> as **{}**, submitted {}",
                check.id,
                check.user_id,
                check.character_name,
                check.submitted_at.format("%Y-%m-%d %H:%M UTC")
            )?;
        }

        ctx.say(response).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
