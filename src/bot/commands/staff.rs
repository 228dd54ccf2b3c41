//! Staff Discord commands - registration, info, hiatus, and qualifications.
//!
//! Qualification grants are gated on the caller being a trainer for the
//! position (or a guild manager); the matching Discord role is applied
//! best-effort so a failed role edit never loses the database grant.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{guild_config, position, staff},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;
    use tracing::warn;

    async fn caller_can_manage(ctx: poise::Context<'_, BotData, Error>) -> bool {
        if let Some(member) = ctx.author_member().await {
            return member.permissions.is_some_and(|p| p.manage_guild());
        }
        false
    }

    /// Registers the caller as a staff member.
    #[poise::command(slash_command, prefix_command)]
    pub async fn staff_register(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Preferred display name"] display_name: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let user_id = ctx.author().id.to_string();

        let already_registered = staff::get_staff_member_by_user(db, &user_id).await?.is_some();
        let member =
            staff::get_or_create_staff_member(db, &user_id, display_name.as_deref()).await?;

        if already_registered {
            if let Some(name) = display_name {
                staff::set_display_name(db, member.id, Some(name)).await?;
                ctx.say("✅ You are already registered; your display name was updated.")
                    .await?;
            } else {
                ctx.say("ℹ️ You are already registered as staff.").await?;
            }
            return Ok(());
        }

        // Apply the staff role when one is configured; registration succeeds
        // even if the role edit fails.
        if let Some(role_id) = guild_config::get_role(db, guild_config::RolePurpose::Staff).await?
        {
            if let (Some(guild_id), Ok(id)) = (ctx.guild_id(), role_id.parse::<u64>()) {
                if let Err(e) = ctx
                    .serenity_context()
                    .http
                    .add_member_role(
                        guild_id,
                        ctx.author().id,
                        serenity::RoleId::new(id),
                        Some("Staff registration"),
                    )
                    .await
                {
                    warn!("Failed to apply staff role: {e}");
                }
            }
        }

        ctx.say("✅ Welcome aboard! You are now registered as staff.")
            .await?;
        Ok(())
    }

    /// Shows a staff member's qualifications and status.
    #[poise::command(slash_command, prefix_command)]
    pub async fn staff_info(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Staff member to look up (defaults to you)"] user: Option<serenity::User>,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let target = user.as_ref().unwrap_or_else(|| ctx.author());
        let user_id = target.id.to_string();

        let Some(member) = staff::get_staff_member_by_user(db, &user_id).await? else {
            ctx.say(format!(
                "❌ <@{user_id}> is not registered as staff. They can register with `/staff_register`."
            ))
            .await?;
            return Ok(());
        };

        let qualifications = staff::get_qualifications_for_member(db, member.id).await?;

        let mut response = format!("📋 **Staff record for <@{user_id}>**\n\n");
        if let Some(ref name) = member.display_name {
            writeln!(&mut response, "Display name: **{name}**")?;
        }
        writeln!(
            &mut response,
            "Status: {}",
            if member.on_hiatus {
                "🌙 On hiatus"
            } else {
                "🟢 Active"
            }
        )?;
        writeln!(&mut response)?;

        if qualifications.is_empty() {
            response.push_str("_No qualifications yet_\n");
        } else {
            response.push_str("**Qualifications:**\n");
            for qual in qualifications {
                let position_name = position::get_position_by_id(db, qual.position_id)
                    .await?
                    .map_or_else(|| format!("position #{}", qual.position_id), |p| p.name);
                let trainer_mark = if qual.is_trainer { " (trainer)" } else { "" };
                writeln!(&mut response, "• {position_name}{trainer_mark}")?;
            }
        }

        ctx.say(response).await?;
        Ok(())
    }

    /// Toggles your hiatus status.
    #[poise::command(slash_command, prefix_command)]
    pub async fn hiatus(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "true to go on hiatus, false to return"] on: bool,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let user_id = ctx.author().id.to_string();

        let Some(member) = staff::get_staff_member_by_user(db, &user_id).await? else {
            ctx.say("❌ You are not registered as staff. Register with `/staff_register` first.")
                .await?;
            return Ok(());
        };

        staff::set_hiatus(db, member.id, on).await?;

        if on {
            ctx.say("🌙 You are now on hiatus. You will be hidden from trainer listings.")
                .await?;
        } else {
            ctx.say("🟢 Welcome back! You are active again.").await?;
        }
        Ok(())
    }

    /// Grants a qualification to a staff member.
    #[poise::command(slash_command, prefix_command)]
    pub async fn qualify(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Staff member to qualify"] user: serenity::User,
        #[description = "Position they are qualified for"]
        #[autocomplete = "autocomplete::autocomplete_position_name"]
        position_name: String,
        #[description = "Also mark them as a trainer (default: false)"] as_trainer: Option<bool>,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(pos) = position::get_position_by_name(db, &position_name).await? else {
            ctx.say(format!("❌ Position '{position_name}' not found."))
                .await?;
            return Ok(());
        };

        let caller_id = ctx.author().id.to_string();
        if !staff::is_trainer_for(db, &caller_id, pos.id).await? && !caller_can_manage(ctx).await {
            ctx.say(format!(
                "❌ Only trainers for **{}** (or guild managers) can qualify staff.",
                pos.name
            ))
            .await?;
            return Ok(());
        }

        let target_id = user.id.to_string();
        let member = staff::get_or_create_staff_member(db, &target_id, None).await?;
        let qualification = staff::grant_qualification(
            db,
            member.id,
            pos.id,
            as_trainer.unwrap_or(false),
            &caller_id,
        )
        .await?;

        // Apply the position's Discord role best-effort
        if let Some(ref role_id) = pos.role_id {
            if let (Some(guild_id), Ok(id)) = (ctx.guild_id(), role_id.parse::<u64>()) {
                if let Err(e) = ctx
                    .serenity_context()
                    .http
                    .add_member_role(
                        guild_id,
                        user.id,
                        serenity::RoleId::new(id),
                        Some("Position qualification"),
                    )
                    .await
                {
                    warn!("Failed to apply position role: {e}");
                }
            }
        }

        // Trainers also get the guild's trainer role when one is mapped
        if qualification.is_trainer {
            if let Some(trainer_role) =
                guild_config::get_role(db, guild_config::RolePurpose::Trainer).await?
            {
                if let (Some(guild_id), Ok(id)) = (ctx.guild_id(), trainer_role.parse::<u64>()) {
                    if let Err(e) = ctx
                        .serenity_context()
                        .http
                        .add_member_role(
                            guild_id,
                            user.id,
                            serenity::RoleId::new(id),
                            Some("Trainer qualification"),
                        )
                        .await
                    {
                        warn!("Failed to apply trainer role: {e}");
                    }
                }
            }
        }

        let trainer_note = if qualification.is_trainer {
            " as a trainer"
        } else {
            ""
        };
        ctx.say(format!(
            "✅ <@{target_id}> is now qualified for **{}**{trainer_note}.",
            pos.name
        ))
        .await?;
        Ok(())
    }

    /// Revokes a staff member's qualification.
    #[poise::command(slash_command, prefix_command)]
    pub async fn unqualify(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Staff member to unqualify"] user: serenity::User,
        #[description = "Position to revoke"]
        #[autocomplete = "autocomplete::autocomplete_position_name"]
        position_name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(pos) = position::get_position_by_name(db, &position_name).await? else {
            ctx.say(format!("❌ Position '{position_name}' not found."))
                .await?;
            return Ok(());
        };

        let caller_id = ctx.author().id.to_string();
        if !staff::is_trainer_for(db, &caller_id, pos.id).await? && !caller_can_manage(ctx).await {
            ctx.say(format!(
                "❌ Only trainers for **{}** (or guild managers) can revoke qualifications.",
                pos.name
            ))
            .await?;
            return Ok(());
        }

        let target_id = user.id.to_string();
        let Some(member) = staff::get_staff_member_by_user(db, &target_id).await? else {
            ctx.say(format!("❌ <@{target_id}> is not registered as staff."))
                .await?;
            return Ok(());
        };

        if !staff::revoke_qualification(db, member.id, pos.id).await? {
            ctx.say(format!(
                "ℹ️ <@{target_id}> does not hold a qualification for **{}**.",
                pos.name
            ))
            .await?;
            return Ok(());
        }

        // Remove the position's Discord role best-effort
        if let Some(ref role_id) = pos.role_id {
            if let (Some(guild_id), Ok(id)) = (ctx.guild_id(), role_id.parse::<u64>()) {
                if let Err(e) = ctx
                    .serenity_context()
                    .http
                    .remove_member_role(
                        guild_id,
                        user.id,
                        serenity::RoleId::new(id),
                        Some("Qualification revoked"),
                    )
                    .await
                {
                    warn!("Failed to remove position role: {e}");
                }
            }
        }

        ctx.say(format!(
            "✅ Revoked **{}** qualification from <@{target_id}>.",
            pos.name
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
