//! Hireable service Discord commands - categories, profiles, and listings.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, embeds, handlers::autocomplete},
        core::service,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Creates a new hireable service category.
    #[poise::command(slash_command, prefix_command, required_permissions = "MANAGE_GUILD")]
    pub async fn create_service(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the service"] name: String,
        #[description = "What this service covers"] description: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;

        if name.trim().is_empty() {
            ctx.say("❌ Service name cannot be empty.").await?;
            return Ok(());
        }

        if service::get_service_by_name(db, name.trim()).await?.is_some() {
            ctx.say(format!("❌ Service '{name}' already exists."))
                .await?;
            return Ok(());
        }

        let created = service::create_service(db, name, description).await?;

        ctx.say(format!(
            "✅ Created service **{}**. Staff can now set up listings with `/service_profile {}`.",
            created.name, created.name
        ))
        .await?;
        Ok(())
    }

    /// Lists all hireable service categories.
    #[poise::command(slash_command, prefix_command)]
    pub async fn services(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;

        let all_services = service::get_all_active_services(db).await?;

        if all_services.is_empty() {
            ctx.say("🎭 No services found. An admin can create one with `/create_service`.")
                .await?;
            return Ok(());
        }

        let mut response = String::from("🎭 **Hireable Services**\n\n");

        for s in all_services {
            match s.description {
                Some(ref description) => {
                    writeln!(&mut response, "**{}** — {description}", s.name)?;
                }
                None => writeln!(&mut response, "**{}**", s.name)?,
            }
        }

        ctx.say(response).await?;
        Ok(())
    }

    /// Opens your profile editor for a service.
    #[poise::command(slash_command, prefix_command)]
    pub async fn service_profile(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the service"]
        #[autocomplete = "autocomplete::autocomplete_service_name"]
        name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(s) = service::get_service_by_name(db, &name).await? else {
            ctx.say(format!(
                "❌ Service '{name}' not found. Use `/services` to see all services."
            ))
            .await?;
            return Ok(());
        };

        let profile =
            service::get_or_create_profile(db, s.id, &ctx.author().id.to_string()).await?;

        ctx.send(
            poise::CreateReply::default()
                .embed(embeds::service_profile_embed(&s, &profile))
                .components(embeds::service_panel_components(&profile)),
        )
        .await?;
        Ok(())
    }

    /// Lists published profiles under a service.
    #[poise::command(slash_command, prefix_command)]
    pub async fn service_listings(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the service"]
        #[autocomplete = "autocomplete::autocomplete_service_name"]
        name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(s) = service::get_service_by_name(db, &name).await? else {
            ctx.say(format!(
                "❌ Service '{name}' not found. Use `/services` to see all services."
            ))
            .await?;
            return Ok(());
        };

        let profiles = service::get_published_profiles(db, s.id).await?;

        if profiles.is_empty() {
            ctx.say(format!(
                "🎭 No published listings for **{}** yet. Set one up with `/service_profile {}`.",
                s.name, s.name
            ))
            .await?;
            return Ok(());
        }

        let mut listing_embed = serenity::CreateEmbed::new()
            .title(format!("🎭 {} — Listings", s.name))
            .color(embeds::DEFAULT_COLOR)
            .timestamp(chrono::Utc::now());

        for profile in profiles {
            let mut value = format!("<@{}>", profile.user_id);
            if let Some(ref rates) = profile.rates {
                write!(&mut value, "\nRates: {rates}")?;
            }
            if let Some(ref availability) = profile.availability {
                write!(&mut value, "\nAvailability: {availability}")?;
            }

            let field_name = profile
                .headline
                .clone()
                .unwrap_or_else(|| format!("Listing #{}", profile.id));
            listing_embed = listing_embed.field(field_name, value, false);
        }

        ctx.send(poise::CreateReply::default().embed(listing_embed))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
