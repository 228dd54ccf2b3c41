//! Position Discord commands - listing, info, and management.
//!
//! This module contains commands that interact with the database through the
//! core position module to manage job positions and their requirement lists.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, embeds, handlers::autocomplete},
        core::{format, position, staff},
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Lists all active positions with their trainer pay.
    #[poise::command(slash_command, prefix_command)]
    pub async fn positions(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;

        let all_positions = position::get_all_active_positions(db).await?;

        if all_positions.is_empty() {
            ctx.say("💼 No positions found. Create one with `/create_position` to get started!")
                .await?;
            return Ok(());
        }

        let mut response = String::from("💼 **All Positions**\n\n");

        for pos in all_positions {
            writeln!(
                &mut response,
                "**{}** — trainer pay {} per session",
                pos.name,
                format::format_salary(pos.trainer_pay)
            )?;
        }

        ctx.say(response).await?;
        Ok(())
    }

    /// Shows a position's description, requirements, and available trainers.
    #[poise::command(slash_command, prefix_command)]
    pub async fn position_info(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the position"]
        #[autocomplete = "autocomplete::autocomplete_position_name"]
        name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(pos) = position::get_position_by_name(db, &name).await? else {
            ctx.say(format!(
                "❌ Position '{name}' not found. Use `/positions` to see all available positions."
            ))
            .await?;
            return Ok(());
        };

        let requirements = position::get_requirements_for_position(db, pos.id).await?;
        let trainers = staff::list_trainers_for_position(db, pos.id).await?;
        let trainer_mentions: Vec<String> = trainers
            .iter()
            .map(|t| format!("<@{}>", t.user_id))
            .collect();

        let embed = embeds::position_embed(&pos, &requirements, &trainer_mentions);
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Creates a new position.
    #[poise::command(slash_command, prefix_command, required_permissions = "MANAGE_GUILD")]
    pub async fn create_position(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the position"] name: String,
        #[description = "Description shown on the job board"] description: String,
        #[description = "Trainer pay per session (e.g. 50,000 or 50k)"] trainer_pay: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let pay = match format::parse_salary(&trainer_pay) {
            Ok(pay) => pay,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        if position::get_position_by_name(db, name.trim()).await?.is_some() {
            ctx.say(format!(
                "❌ Position '{name}' already exists. Use a different name or delete the existing position first."
            ))
            .await?;
            return Ok(());
        }

        let created = position::create_position(db, name, description, pay).await?;

        ctx.say(format!(
            "✅ Created position **{}** with trainer pay {} per session. \
             Add requirements with `/add_requirement`.",
            created.name,
            format::format_salary(created.trainer_pay)
        ))
        .await?;
        Ok(())
    }

    /// Soft-deletes a position, keeping its qualification history.
    #[poise::command(slash_command, prefix_command, required_permissions = "MANAGE_GUILD")]
    pub async fn delete_position(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the position to delete"]
        #[autocomplete = "autocomplete::autocomplete_position_name"]
        name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(pos) = position::get_position_by_name(db, &name).await? else {
            ctx.say(format!("❌ Position '{name}' not found.")).await?;
            return Ok(());
        };

        position::soft_delete_position(db, pos.id).await?;

        ctx.say(format!(
            "✅ Deleted position **{name}**. Existing qualifications have been preserved."
        ))
        .await?;
        Ok(())
    }

    /// Adds a requirement line to a position.
    #[poise::command(slash_command, prefix_command, required_permissions = "MANAGE_GUILD")]
    pub async fn add_requirement(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the position"]
        #[autocomplete = "autocomplete::autocomplete_position_name"]
        name: String,
        #[description = "Requirement text"] text: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(pos) = position::get_position_by_name(db, &name).await? else {
            ctx.say(format!("❌ Position '{name}' not found.")).await?;
            return Ok(());
        };

        if text.trim().is_empty() {
            ctx.say("❌ Requirement text cannot be empty.").await?;
            return Ok(());
        }

        position::add_requirement(db, pos.id, text.clone()).await?;

        ctx.say(format!("✅ Added requirement to **{name}**: {text}"))
            .await?;
        Ok(())
    }

    /// Removes a requirement from a position by its list number.
    #[poise::command(slash_command, prefix_command, required_permissions = "MANAGE_GUILD")]
    pub async fn remove_requirement(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the position"]
        #[autocomplete = "autocomplete::autocomplete_position_name"]
        name: String,
        #[description = "Requirement number as shown in /position_info"] number: usize,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(pos) = position::get_position_by_name(db, &name).await? else {
            ctx.say(format!("❌ Position '{name}' not found.")).await?;
            return Ok(());
        };

        let requirements = position::get_requirements_for_position(db, pos.id).await?;

        let Some(target) = number.checked_sub(1).and_then(|i| requirements.get(i)) else {
            ctx.say(format!(
                "❌ Requirement #{number} does not exist. **{name}** has {} requirement(s).",
                requirements.len()
            ))
            .await?;
            return Ok(());
        };

        position::remove_requirement(db, target.id).await?;

        ctx.say(format!(
            "✅ Removed requirement #{number} from **{name}**: {}",
            target.text
        ))
        .await?;
        Ok(())
    }

    /// Links a Discord role to a position so qualified staff receive it.
    #[poise::command(slash_command, prefix_command, required_permissions = "MANAGE_GUILD")]
    pub async fn set_position_role(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the position"]
        #[autocomplete = "autocomplete::autocomplete_position_name"]
        name: String,
        #[description = "Role granted to qualified staff (omit to clear)"] role: Option<
            poise::serenity_prelude::Role,
        >,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(pos) = position::get_position_by_name(db, &name).await? else {
            ctx.say(format!("❌ Position '{name}' not found.")).await?;
            return Ok(());
        };

        let role_id = role.as_ref().map(|r| r.id.to_string());
        position::set_role_id(db, pos.id, role_id).await?;

        match role {
            Some(r) => {
                ctx.say(format!(
                    "✅ Staff qualified for **{name}** will now receive <@&{}>.",
                    r.id
                ))
                .await?;
            }
            None => {
                ctx.say(format!("✅ Cleared the role link for **{name}**."))
                    .await?;
            }
        }
        Ok(())
    }

    /// Updates a position's trainer pay.
    #[poise::command(slash_command, prefix_command, required_permissions = "MANAGE_GUILD")]
    pub async fn set_trainer_pay(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the position"]
        #[autocomplete = "autocomplete::autocomplete_position_name"]
        name: String,
        #[description = "New trainer pay per session (e.g. 50,000 or 50k)"] amount: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let pay = match format::parse_salary(&amount) {
            Ok(pay) => pay,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let Some(pos) = position::get_position_by_name(db, &name).await? else {
            ctx.say(format!("❌ Position '{name}' not found.")).await?;
            return Ok(());
        };

        let updated = position::set_trainer_pay(db, pos.id, pay).await?;

        ctx.say(format!(
            "✅ Updated trainer pay for **{}** to {} per session.",
            updated.name,
            format::format_salary(updated.trainer_pay)
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
