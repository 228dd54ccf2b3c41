//! Job posting Discord commands - the guided posting wizard and the board.
//!
//! The wizard chains a position select menu into a details modal, each step
//! accumulating one answer. Both steps run on collectors with 300 second
//! timeouts; walking away simply expires the ephemeral wizard message.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, embeds, handlers::autocomplete, handlers::modals::modal_value},
        core::{format, guild_config, position, posting, venue},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;
    use std::time::Duration;

    const WIZARD_STEP_TIMEOUT: Duration = Duration::from_secs(300);

    /// Posts a job opening for one of your venues to the job board.
    #[poise::command(slash_command, prefix_command)]
    #[allow(clippy::too_many_lines)] // Sequential wizard steps read best in one place
    pub async fn post_job(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Venue that is hiring"]
        #[autocomplete = "autocomplete::autocomplete_venue_name"]
        venue_name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(hiring_venue) = venue::get_venue_by_name(db, &venue_name).await? else {
            ctx.say(format!("❌ Venue '{venue_name}' not found.")).await?;
            return Ok(());
        };

        if ctx.author().id.to_string() != hiring_venue.owner_id {
            ctx.say("❌ Only the venue owner can post jobs for it.")
                .await?;
            return Ok(());
        }

        let Some(board_channel) =
            guild_config::get_channel(db, guild_config::ChannelPurpose::JobBoard)
                .await?
                .and_then(|c| c.parse::<u64>().ok())
        else {
            ctx.say(
                "❌ No job board channel is configured. An admin can set one with \
                 `/set_channel job_board`.",
            )
            .await?;
            return Ok(());
        };

        let open_positions = position::get_all_active_positions(db).await?;
        if open_positions.is_empty() {
            ctx.say("❌ No positions exist yet. Create one with `/create_position` first.")
                .await?;
            return Ok(());
        }

        // Step 1: position select menu
        let select_id = format!("job_position:{}", ctx.id());
        let options: Vec<serenity::CreateSelectMenuOption> = open_positions
            .iter()
            .take(25) // Discord select menu limit
            .map(|p| serenity::CreateSelectMenuOption::new(p.name.clone(), p.id.to_string()))
            .collect();

        let menu = serenity::CreateSelectMenu::new(
            select_id.clone(),
            serenity::CreateSelectMenuKind::String { options },
        )
        .placeholder("Select the position you are hiring for");

        let reply = ctx
            .send(
                poise::CreateReply::default()
                    .content(format!(
                        "📢 **Job posting for {}** — pick the position:",
                        hiring_venue.name
                    ))
                    .components(vec![serenity::CreateActionRow::SelectMenu(menu)])
                    .ephemeral(true),
            )
            .await?;

        let select_filter_id = select_id.clone();
        let Some(selection) = serenity::ComponentInteractionCollector::new(ctx)
            .author_id(ctx.author().id)
            .filter(move |mci| mci.data.custom_id == select_filter_id)
            .timeout(WIZARD_STEP_TIMEOUT)
            .await
        else {
            reply
                .edit(
                    ctx,
                    poise::CreateReply::default()
                        .content("⏱️ Timed out waiting for a position selection.")
                        .components(vec![]),
                )
                .await?;
            return Ok(());
        };

        let selected_position_id = match &selection.data.kind {
            serenity::ComponentInteractionDataKind::StringSelect { values } => {
                values.first().and_then(|v| v.parse::<i64>().ok())
            }
            _ => None,
        };
        let Some(position_id) = selected_position_id else {
            return Ok(());
        };

        // Step 2: salary and details modal
        let modal_id = format!("job_details:{}", ctx.id());
        let modal = serenity::CreateModal::new(modal_id.clone(), "Job Posting Details")
            .components(vec![
                serenity::CreateActionRow::InputText(
                    serenity::CreateInputText::new(
                        serenity::InputTextStyle::Short,
                        "Salary per shift",
                        "salary",
                    )
                    .placeholder("e.g. 150,000 or 150k")
                    .required(true)
                    .max_length(20),
                ),
                serenity::CreateActionRow::InputText(
                    serenity::CreateInputText::new(
                        serenity::InputTextStyle::Paragraph,
                        "Details",
                        "details",
                    )
                    .placeholder("Shift times, expectations, perks")
                    .required(false),
                ),
            ]);

        selection
            .create_response(
                &ctx.serenity_context().http,
                serenity::CreateInteractionResponse::Modal(modal),
            )
            .await?;

        let modal_filter_id = modal_id.clone();
        let Some(submission) = serenity::ModalInteractionCollector::new(ctx)
            .filter(move |mi| mi.data.custom_id == modal_filter_id)
            .timeout(WIZARD_STEP_TIMEOUT)
            .await
        else {
            reply
                .edit(
                    ctx,
                    poise::CreateReply::default()
                        .content("⏱️ Timed out waiting for the posting details.")
                        .components(vec![]),
                )
                .await?;
            return Ok(());
        };

        let salary_input = modal_value(&submission, 0).unwrap_or_default();
        let salary = match format::parse_salary(&salary_input) {
            Ok(salary) => salary,
            Err(e) => {
                submission
                    .create_response(
                        &ctx.serenity_context().http,
                        serenity::CreateInteractionResponse::Message(
                            serenity::CreateInteractionResponseMessage::new()
                                .embed(embeds::error_embed("Invalid salary", &e.to_string()))
                                .ephemeral(true),
                        ),
                    )
                    .await?;
                return Ok(());
            }
        };
        let details = modal_value(&submission, 1);

        let created = posting::create_posting(
            db,
            hiring_venue.id,
            position_id,
            salary,
            details,
            ctx.author().id.to_string(),
        )
        .await?;

        let Some(hired_position) = position::get_position_by_id(db, position_id).await? else {
            return Ok(());
        };

        // Publish the posting embed and remember where it landed
        let board = serenity::ChannelId::new(board_channel);
        let message = board
            .send_message(
                &ctx.serenity_context().http,
                serenity::CreateMessage::new()
                    .embed(embeds::job_posting_embed(
                        &created,
                        &hiring_venue,
                        &hired_position,
                    ))
                    .components(embeds::job_posting_components(created.id)),
            )
            .await?;

        posting::attach_message(db, created.id, board.to_string(), message.id.to_string())
            .await?;

        submission
            .create_response(
                &ctx.serenity_context().http,
                serenity::CreateInteractionResponse::UpdateMessage(
                    serenity::CreateInteractionResponseMessage::new()
                        .content(format!("✅ Posting published to <#{board_channel}>!"))
                        .components(vec![]),
                ),
            )
            .await?;
        Ok(())
    }

    /// Lists open job postings.
    #[poise::command(slash_command, prefix_command)]
    pub async fn postings(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;

        let open = posting::get_open_postings(db).await?;

        if open.is_empty() {
            ctx.say("📪 No open postings right now.").await?;
            return Ok(());
        }

        let mut response = String::from("📢 **Open Postings**\n\n");
        for post in open {
            let venue_name = venue::get_venue_by_id(db, post.venue_id)
                .await?
                .map_or_else(|| format!("venue #{}", post.venue_id), |v| v.name);
            let position_name = position::get_position_by_id(db, post.position_id)
                .await?
                .map_or_else(|| format!("position #{}", post.position_id), |p| p.name);

            writeln!(
                &mut response,
                "• #{} — **{}** at **{}**, {} — contact <@{}>",
                post.id,
                position_name,
                venue_name,
                format::format_salary(post.salary),
                post.contact_id
            )?;
        }

        ctx.say(response).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
