//! Modal submission dispatch.
//!
//! Modal custom_ids mirror the component that opened them
//! (`venue_modal:color:17`), so a submission can be validated and applied
//! without session state. Invalid color and salary input is answered with an
//! ephemeral error embed and leaves the record untouched.

use crate::bot::{BotData, embeds};
use crate::core::{background, format, guild_config, service, venue};
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;

/// Entry point for all modal submissions.
pub async fn handle_modal(
    ctx: &serenity::Context,
    interaction: &serenity::ModalInteraction,
    data: &BotData,
) -> Result<()> {
    let custom_id = interaction.data.custom_id.clone();
    let (action, rest) = custom_id
        .split_once(':')
        .unwrap_or((custom_id.as_str(), ""));

    match action {
        "venue_modal" => handle_venue_modal(ctx, interaction, data, rest).await,
        "svc_modal" => handle_service_modal(ctx, interaction, data, rest).await,
        "bgc_modal" => handle_check_modal(ctx, interaction, data).await,
        _ => {
            tracing::debug!(custom_id = %custom_id, "Ignoring unrecognized modal interaction");
            Ok(())
        }
    }
}

/// Extracts the trimmed text of the nth modal input, mapping empty
/// submissions to None so fields can be cleared.
pub(crate) fn modal_value(
    interaction: &serenity::ModalInteraction,
    index: usize,
) -> Option<String> {
    interaction
        .data
        .components
        .get(index)
        .and_then(|row| row.components.first())
        .and_then(|component| {
            if let serenity::ActionRowComponent::InputText(input) = component {
                input.value.as_deref()
            } else {
                None
            }
        })
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

async fn respond_error(
    ctx: &serenity::Context,
    interaction: &serenity::ModalInteraction,
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

/// Parses an optional color input into its stored form.
fn parse_color_input(value: Option<&str>) -> Result<Option<i32>> {
    value
        .map(format::parse_accent_color)
        .transpose()
        .map(|color| color.map(|c| i32::try_from(c).unwrap_or_default()))
}

async fn handle_venue_modal(
    ctx: &serenity::Context,
    interaction: &serenity::ModalInteraction,
    data: &BotData,
    rest: &str,
) -> Result<()> {
    let Some((field, id)) = rest.split_once(':') else {
        return Ok(());
    };
    let Ok(venue_id) = id.parse::<i64>() else {
        return Ok(());
    };

    let Some(current) = venue::get_venue_by_id(&data.database, venue_id).await? else {
        return respond_error(ctx, interaction, "This venue no longer exists.").await;
    };

    if interaction.user.id.to_string() != current.owner_id {
        return respond_error(ctx, interaction, "Only the venue owner can edit this profile.")
            .await;
    }

    let value = modal_value(interaction, 0);
    let db = &data.database;

    let updated = match field {
        "description" => venue::set_description(db, venue_id, value).await?,
        "website" => venue::set_website(db, venue_id, value).await?,
        "banner" => venue::set_banner_url(db, venue_id, value).await?,
        "color" => match parse_color_input(value.as_deref()) {
            Ok(color) => venue::set_accent_color(db, venue_id, color).await?,
            Err(e) => return respond_error(ctx, interaction, &e.to_string()).await,
        },
        _ => return Ok(()),
    };

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

async fn handle_service_modal(
    ctx: &serenity::Context,
    interaction: &serenity::ModalInteraction,
    data: &BotData,
    rest: &str,
) -> Result<()> {
    let Some((field, id)) = rest.split_once(':') else {
        return Ok(());
    };
    let Ok(profile_id) = id.parse::<i64>() else {
        return Ok(());
    };

    let Some(current) = service::get_profile_by_id(&data.database, profile_id).await? else {
        return respond_error(ctx, interaction, "This profile no longer exists.").await;
    };

    if interaction.user.id.to_string() != current.user_id {
        return respond_error(ctx, interaction, "Only the profile owner can edit it.").await;
    }

    let value = modal_value(interaction, 0);
    let db = &data.database;

    let updated = match field {
        "headline" => service::set_headline(db, profile_id, value).await?,
        "description" => service::set_profile_description(db, profile_id, value).await?,
        "rates" => service::set_rates(db, profile_id, value).await?,
        "availability" => service::set_availability(db, profile_id, value).await?,
        "thumbnail" => service::set_thumbnail_url(db, profile_id, value).await?,
        "color" => match parse_color_input(value.as_deref()) {
            Ok(color) => service::set_profile_color(db, profile_id, color).await?,
            Err(e) => return respond_error(ctx, interaction, &e.to_string()).await,
        },
        _ => return Ok(()),
    };

    let Some(service_record) =
        service::get_service_by_id(&data.database, updated.service_id).await?
    else {
        return respond_error(ctx, interaction, "This service no longer exists.").await;
    };

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

async fn handle_check_modal(
    ctx: &serenity::Context,
    interaction: &serenity::ModalInteraction,
    data: &BotData,
) -> Result<()> {
    let Some(character_name) = modal_value(interaction, 0) else {
        return respond_error(ctx, interaction, "Character name cannot be empty.").await;
    };
    let experience = modal_value(interaction, 1).unwrap_or_default();
    let age_verified = modal_value(interaction, 2)
        .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y"));

    let user_id = interaction.user.id.to_string();
    let check = match background::submit_check(
        &data.database,
        &user_id,
        character_name,
        experience,
        age_verified,
    )
    .await
    {
        Ok(check) => check,
        Err(Error::CheckAlreadyPending { .. }) => {
            return respond_error(
                ctx,
                interaction,
                "You already have a background check awaiting review.",
            )
            .await;
        }
        Err(e) => return Err(e),
    };

    // Post the check into the review channel when one is configured
    let review_channel =
        guild_config::get_channel(&data.database, guild_config::ChannelPurpose::BackgroundChecks)
            .await?;

    let confirmation = if let Some(channel_id) = review_channel.and_then(|c| c.parse::<u64>().ok())
    {
        let message = serenity::CreateMessage::new()
            .embed(embeds::background_check_embed(&check))
            .components(embeds::background_check_components(check.id));

        serenity::ChannelId::new(channel_id)
            .send_message(&ctx.http, message)
            .await?;

        "Your background check was submitted and sent to the review team."
    } else {
        "Your background check was submitted. Staff will review it with `/pending_checks`."
    };

    interaction
        .create_response(
            &ctx.http,
            serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new()
                    .embed(embeds::success_embed("Submitted", confirmation))
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}
