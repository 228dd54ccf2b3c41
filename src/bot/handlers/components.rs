//! Button and select-menu dispatch.
//!
//! Persistent components carry their record id in the custom_id
//! (`venue_edit:color:17`), so every press can be resolved without any
//! in-memory session state. Interactions the dispatcher does not recognize
//! are ignored: wizard components are consumed by collectors inside the
//! command that created them.

use crate::bot::{BotData, embeds};
use crate::core::{background, format, guild_config, position, posting, service, venue};
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;

/// Entry point for all component interactions.
pub async fn handle_component(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    data: &BotData,
) -> Result<()> {
    let custom_id = interaction.data.custom_id.clone();
    let (action, rest) = custom_id
        .split_once(':')
        .unwrap_or((custom_id.as_str(), ""));

    match action {
        "venue_edit" => handle_venue_edit(ctx, interaction, data, rest).await,
        "venue_toggle_hiring" => handle_venue_toggle_hiring(ctx, interaction, data, rest).await,
        "svc_edit" => handle_service_edit(ctx, interaction, data, rest).await,
        "svc_toggle_publish" => handle_service_toggle_publish(ctx, interaction, data, rest).await,
        "bgc_start" => handle_check_start(ctx, interaction).await,
        "bgc_approve" => handle_check_review(ctx, interaction, data, rest, true).await,
        "bgc_deny" => handle_check_review(ctx, interaction, data, rest, false).await,
        "job_close" => handle_job_close(ctx, interaction, data, rest).await,
        _ => {
            // Collector-driven components (job wizard) land here too; leave
            // them for the collector that is waiting on them.
            tracing::debug!(custom_id = %custom_id, "Ignoring unrecognized component interaction");
            Ok(())
        }
    }
}

async fn respond_error(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    message: &str,
) -> Result<()> {
    interaction
        .create_response(
            &ctx.http,
            serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new()
                    .embed(embeds::error_embed("Error", message))
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}

/// Checks whether the pressing member may review checks and close postings:
/// the configured hiring-manager role when present, Manage Guild otherwise.
async fn is_hiring_manager(
    data: &BotData,
    interaction: &serenity::ComponentInteraction,
) -> Result<bool> {
    let Some(member) = &interaction.member else {
        return Ok(false);
    };

    if member.permissions.is_some_and(|p| p.manage_guild()) {
        return Ok(true);
    }

    if let Some(role_id) =
        guild_config::get_role(&data.database, guild_config::RolePurpose::HiringManager).await?
    {
        if let Ok(id) = role_id.parse::<u64>() {
            return Ok(member.roles.contains(&serenity::RoleId::new(id)));
        }
    }

    Ok(false)
}

fn single_input_modal(
    custom_id: String,
    title: &str,
    label: &str,
    placeholder: &str,
    current: Option<&str>,
    paragraph: bool,
) -> serenity::CreateModal {
    let style = if paragraph {
        serenity::InputTextStyle::Paragraph
    } else {
        serenity::InputTextStyle::Short
    };

    let mut input = serenity::CreateInputText::new(style, label, "value")
        .placeholder(placeholder)
        .required(false);
    if let Some(value) = current {
        input = input.value(value);
    }

    serenity::CreateModal::new(custom_id, title)
        .components(vec![serenity::CreateActionRow::InputText(input)])
}

async fn handle_venue_edit(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    data: &BotData,
    rest: &str,
) -> Result<()> {
    let Some((field, id)) = rest.split_once(':') else {
        return Ok(());
    };
    let Ok(venue_id) = id.parse::<i64>() else {
        return Ok(());
    };

    let Some(venue) = venue::get_venue_by_id(&data.database, venue_id).await? else {
        return respond_error(ctx, interaction, "This venue no longer exists.").await;
    };

    if interaction.user.id.to_string() != venue.owner_id {
        return respond_error(ctx, interaction, "Only the venue owner can edit this profile.")
            .await;
    }

    let modal_id = format!("venue_modal:{field}:{venue_id}");
    let color_value = venue
        .accent_color
        .map(|c| format::format_accent_color(u32::try_from(c).unwrap_or_default()));

    let modal = match field {
        "description" => single_input_modal(
            modal_id,
            "Edit Description",
            "Description",
            "What makes this venue special?",
            venue.description.as_deref(),
            true,
        ),
        "website" => single_input_modal(
            modal_id,
            "Edit Website",
            "Website",
            "https://...",
            venue.website.as_deref(),
            false,
        ),
        "banner" => single_input_modal(
            modal_id,
            "Edit Banner",
            "Banner image URL",
            "https://.../banner.png",
            venue.banner_url.as_deref(),
            false,
        ),
        "color" => single_input_modal(
            modal_id,
            "Edit Accent Color",
            "Accent color",
            "#A1B2C3",
            color_value.as_deref(),
            false,
        ),
        _ => return Ok(()),
    };

    interaction
        .create_response(&ctx.http, serenity::CreateInteractionResponse::Modal(modal))
        .await?;
    Ok(())
}

async fn handle_venue_toggle_hiring(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    data: &BotData,
    rest: &str,
) -> Result<()> {
    let Ok(venue_id) = rest.parse::<i64>() else {
        return Ok(());
    };

    let Some(current) = venue::get_venue_by_id(&data.database, venue_id).await? else {
        return respond_error(ctx, interaction, "This venue no longer exists.").await;
    };

    if interaction.user.id.to_string() != current.owner_id {
        return respond_error(ctx, interaction, "Only the venue owner can edit this profile.")
            .await;
    }

    let updated = venue::set_hiring(&data.database, venue_id, !current.hiring).await?;

    interaction
        .create_response(
            &ctx.http,
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .embed(embeds::venue_embed(&updated))
                    .components(embeds::venue_panel_components(&updated)),
            ),
        )
        .await?;
    Ok(())
}

async fn handle_service_edit(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    data: &BotData,
    rest: &str,
) -> Result<()> {
    let Some((field, id)) = rest.split_once(':') else {
        return Ok(());
    };
    let Ok(profile_id) = id.parse::<i64>() else {
        return Ok(());
    };

    let Some(profile) = service::get_profile_by_id(&data.database, profile_id).await? else {
        return respond_error(ctx, interaction, "This profile no longer exists.").await;
    };

    if interaction.user.id.to_string() != profile.user_id {
        return respond_error(ctx, interaction, "Only the profile owner can edit it.").await;
    }

    let modal_id = format!("svc_modal:{field}:{profile_id}");
    let color_value = profile
        .accent_color
        .map(|c| format::format_accent_color(u32::try_from(c).unwrap_or_default()));

    let modal = match field {
        "headline" => single_input_modal(
            modal_id,
            "Edit Headline",
            "Headline",
            "One line shown in listings",
            profile.headline.as_deref(),
            false,
        ),
        "description" => single_input_modal(
            modal_id,
            "Edit Description",
            "Description",
            "Tell clients what you offer",
            profile.description.as_deref(),
            true,
        ),
        "rates" => single_input_modal(
            modal_id,
            "Edit Rates",
            "Rates",
            "e.g. 100k/hour, first session free",
            profile.rates.as_deref(),
            false,
        ),
        "availability" => single_input_modal(
            modal_id,
            "Edit Availability",
            "Availability",
            "e.g. weekends, EU evenings",
            profile.availability.as_deref(),
            false,
        ),
        "thumbnail" => single_input_modal(
            modal_id,
            "Edit Thumbnail",
            "Thumbnail image URL",
            "https://.../me.png",
            profile.thumbnail_url.as_deref(),
            false,
        ),
        "color" => single_input_modal(
            modal_id,
            "Edit Accent Color",
            "Accent color",
            "#A1B2C3",
            color_value.as_deref(),
            false,
        ),
        _ => return Ok(()),
    };

    interaction
        .create_response(&ctx.http, serenity::CreateInteractionResponse::Modal(modal))
        .await?;
    Ok(())
}

async fn handle_service_toggle_publish(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    data: &BotData,
    rest: &str,
) -> Result<()> {
    let Ok(profile_id) = rest.parse::<i64>() else {
        return Ok(());
    };

    let Some(profile) = service::get_profile_by_id(&data.database, profile_id).await? else {
        return respond_error(ctx, interaction, "This profile no longer exists.").await;
    };

    if interaction.user.id.to_string() != profile.user_id {
        return respond_error(ctx, interaction, "Only the profile owner can edit it.").await;
    }

    let updated =
        service::set_published(&data.database, profile_id, !profile.published).await?;
    let Some(service_record) =
        service::get_service_by_id(&data.database, updated.service_id).await?
    else {
        return respond_error(ctx, interaction, "This service no longer exists.").await;
    };

    // Announce fresh listings to the listings channel when one is configured;
    // the publish itself already succeeded, so a failed announcement only logs.
    if updated.published {
        if let Some(channel_id) = guild_config::get_channel(
            &data.database,
            guild_config::ChannelPurpose::ServiceListings,
        )
        .await?
        .and_then(|c| c.parse::<u64>().ok())
        {
            let announcement = serenity::CreateMessage::new()
                .embed(embeds::service_profile_embed(&service_record, &updated));
            if let Err(e) = serenity::ChannelId::new(channel_id)
                .send_message(&ctx.http, announcement)
                .await
            {
                tracing::warn!("Failed to announce service listing: {e}");
            }
        }
    }

    interaction
        .create_response(
            &ctx.http,
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .embed(embeds::service_profile_embed(&service_record, &updated))
                    .components(embeds::service_panel_components(&updated)),
            ),
        )
        .await?;
    Ok(())
}

async fn handle_check_start(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
) -> Result<()> {
    let modal = serenity::CreateModal::new("bgc_modal", "Background Check").components(vec![
        serenity::CreateActionRow::InputText(
            serenity::CreateInputText::new(
                serenity::InputTextStyle::Short,
                "Character name",
                "character_name",
            )
            .placeholder("Your in-game character")
            .required(true)
            .max_length(100),
        ),
        serenity::CreateActionRow::InputText(
            serenity::CreateInputText::new(
                serenity::InputTextStyle::Paragraph,
                "Relevant experience",
                "experience",
            )
            .placeholder("Previous venues, positions held, references")
            .required(true),
        ),
        serenity::CreateActionRow::InputText(
            serenity::CreateInputText::new(
                serenity::InputTextStyle::Short,
                "Do you meet the age requirement?",
                "age_confirm",
            )
            .placeholder("yes / no")
            .required(true)
            .max_length(5),
        ),
    ]);

    interaction
        .create_response(&ctx.http, serenity::CreateInteractionResponse::Modal(modal))
        .await?;
    Ok(())
}

async fn handle_check_review(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    data: &BotData,
    rest: &str,
    approve: bool,
) -> Result<()> {
    let Ok(check_id) = rest.parse::<i64>() else {
        return Ok(());
    };

    if !is_hiring_manager(data, interaction).await? {
        return respond_error(
            ctx,
            interaction,
            "Only hiring managers can review background checks.",
        )
        .await;
    }

    let reviewer_id = interaction.user.id.to_string();
    let result = if approve {
        background::approve_check(&data.database, check_id, &reviewer_id).await
    } else {
        background::deny_check(&data.database, check_id, &reviewer_id).await
    };

    let reviewed = match result {
        Ok(check) => check,
        Err(Error::CheckAlreadyReviewed { .. }) => {
            return respond_error(ctx, interaction, "This check has already been reviewed.").await;
        }
        Err(Error::CheckNotFound { .. }) => {
            return respond_error(ctx, interaction, "This check no longer exists.").await;
        }
        Err(e) => return Err(e),
    };

    let verdict = if approve { "approved" } else { "denied" };
    let edit = interaction
        .create_response(
            &ctx.http,
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .embed(embeds::background_check_embed(&reviewed))
                    .components(vec![]),
            ),
        )
        .await;

    // Fall back to a plain confirmation when the embed edit fails; the
    // review itself is already recorded.
    if let Err(e) = edit {
        tracing::warn!("Failed to update review embed: {e}");
        interaction
            .create_response(
                &ctx.http,
                serenity::CreateInteractionResponse::Message(
                    serenity::CreateInteractionResponseMessage::new()
                        .content(format!("Check #{} {verdict}.", reviewed.id))
                        .ephemeral(true),
                ),
            )
            .await?;
    }
    Ok(())
}

async fn handle_job_close(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    data: &BotData,
    rest: &str,
) -> Result<()> {
    let Ok(posting_id) = rest.parse::<i64>() else {
        return Ok(());
    };

    let Some(current) = posting::get_posting_by_id(&data.database, posting_id).await? else {
        return respond_error(ctx, interaction, "This posting no longer exists.").await;
    };

    let is_poster = interaction.user.id.to_string() == current.contact_id;
    if !is_poster && !is_hiring_manager(data, interaction).await? {
        return respond_error(
            ctx,
            interaction,
            "Only the poster or a hiring manager can close this posting.",
        )
        .await;
    }

    let closed = posting::close_posting(&data.database, posting_id).await?;

    let venue_record = venue::get_venue_by_id(&data.database, closed.venue_id).await?;
    let position_record =
        position::get_position_by_id(&data.database, closed.position_id).await?;

    match (venue_record, position_record) {
        (Some(v), Some(p)) => {
            interaction
                .create_response(
                    &ctx.http,
                    serenity::CreateInteractionResponse::UpdateMessage(
                        serenity::CreateInteractionResponseMessage::new()
                            .embed(embeds::job_posting_embed(&closed, &v, &p))
                            .components(vec![]),
                    ),
                )
                .await?;
        }
        _ => {
            // References went away; still confirm the close rather than fail
            interaction
                .create_response(
                    &ctx.http,
                    serenity::CreateInteractionResponse::UpdateMessage(
                        serenity::CreateInteractionResponseMessage::new()
                            .content("📪 Posting closed.")
                            .components(vec![]),
                    ),
                )
                .await?;
        }
    }
    Ok(())
}
