//! Embed and component builders for every status display.
//!
//! All rendering for the interactive panels lives here so commands and the
//! component/modal handlers re-render the exact same views.

use crate::core::{background, format};
use crate::entities::{
    background_check, guild_channel, guild_role, job_posting, position, requirement, service,
    service_profile, venue,
};
use poise::serenity_prelude as serenity;

/// Default accent color used when a record has none configured.
pub const DEFAULT_COLOR: u32 = 0x0034_98DB;

fn accent_or_default(color: Option<i32>) -> u32 {
    color
        .and_then(|c| u32::try_from(c).ok())
        .unwrap_or(DEFAULT_COLOR)
}

/// Green confirmation embed.
pub fn success_embed(title: &str, description: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .description(description)
        .color(0x002E_CC71)
        .timestamp(chrono::Utc::now())
}

/// Red error embed for invalid input and rejected actions.
pub fn error_embed(title: &str, description: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .description(description)
        .color(0x00E7_4C3C)
        .timestamp(chrono::Utc::now())
}

/// Renders a venue profile.
pub fn venue_embed(venue: &venue::Model) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(format!("🏮 {}", venue.name))
        .color(accent_or_default(venue.accent_color))
        .field("Owner", format!("<@{}>", venue.owner_id), true)
        .field(
            "Hiring",
            if venue.hiring { "✅ Yes" } else { "❌ No" },
            true,
        )
        .timestamp(chrono::Utc::now());

    if let Some(ref description) = venue.description {
        embed = embed.description(description.clone());
    }
    if let Some(ref website) = venue.website {
        embed = embed.field("Website", website.clone(), false);
    }
    if let Some(ref banner) = venue.banner_url {
        embed = embed.image(banner.clone());
    }

    embed
}

/// Button rows for the venue edit panel. Shown only to the venue owner.
pub fn venue_panel_components(venue: &venue::Model) -> Vec<serenity::CreateActionRow> {
    let id = venue.id;
    let hiring_label = if venue.hiring {
        "📕 Stop Hiring"
    } else {
        "📗 Start Hiring"
    };

    vec![
        serenity::CreateActionRow::Buttons(vec![
            serenity::CreateButton::new(format!("venue_edit:description:{id}"))
                .label("📝 Description")
                .style(serenity::ButtonStyle::Primary),
            serenity::CreateButton::new(format!("venue_edit:website:{id}"))
                .label("🔗 Website")
                .style(serenity::ButtonStyle::Primary),
            serenity::CreateButton::new(format!("venue_edit:banner:{id}"))
                .label("🖼️ Banner")
                .style(serenity::ButtonStyle::Primary),
            serenity::CreateButton::new(format!("venue_edit:color:{id}"))
                .label("🎨 Color")
                .style(serenity::ButtonStyle::Primary),
        ]),
        serenity::CreateActionRow::Buttons(vec![
            serenity::CreateButton::new(format!("venue_toggle_hiring:{id}"))
                .label(hiring_label)
                .style(serenity::ButtonStyle::Secondary),
        ]),
    ]
}

/// Renders a position with its requirements and available trainers.
pub fn position_embed(
    position: &position::Model,
    requirements: &[requirement::Model],
    trainer_mentions: &[String],
) -> serenity::CreateEmbed {
    let requirements_text = if requirements.is_empty() {
        "_No requirements listed_".to_string()
    } else {
        requirements
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}. {}", i + 1, r.text))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let trainers_text = if trainer_mentions.is_empty() {
        "_No trainers available_".to_string()
    } else {
        trainer_mentions.join(", ")
    };

    serenity::CreateEmbed::new()
        .title(format!("💼 {}", position.name))
        .description(position.description.clone())
        .color(DEFAULT_COLOR)
        .field(
            "Trainer Pay",
            format!("{} per session", format::format_salary(position.trainer_pay)),
            true,
        )
        .field("Requirements", requirements_text, false)
        .field("Trainers", trainers_text, false)
        .timestamp(chrono::Utc::now())
}

/// Renders one user's service profile.
pub fn service_profile_embed(
    service: &service::Model,
    profile: &service_profile::Model,
) -> serenity::CreateEmbed {
    let title = match profile.headline {
        Some(ref headline) => format!("🎭 {} — {headline}", service.name),
        None => format!("🎭 {}", service.name),
    };

    let mut embed = serenity::CreateEmbed::new()
        .title(title)
        .color(accent_or_default(profile.accent_color))
        .field("Offered by", format!("<@{}>", profile.user_id), true)
        .field(
            "Listed",
            if profile.published {
                "✅ Published"
            } else {
                "📄 Draft"
            },
            true,
        )
        .timestamp(chrono::Utc::now());

    if let Some(ref description) = profile.description {
        embed = embed.description(description.clone());
    }
    if let Some(ref rates) = profile.rates {
        embed = embed.field("Rates", rates.clone(), false);
    }
    if let Some(ref availability) = profile.availability {
        embed = embed.field("Availability", availability.clone(), false);
    }
    if let Some(ref thumbnail) = profile.thumbnail_url {
        embed = embed.thumbnail(thumbnail.clone());
    }

    embed
}

/// Button rows for the service profile edit panel.
pub fn service_panel_components(
    profile: &service_profile::Model,
) -> Vec<serenity::CreateActionRow> {
    let id = profile.id;
    let publish_label = if profile.published {
        "📥 Unpublish"
    } else {
        "📤 Publish"
    };

    vec![
        serenity::CreateActionRow::Buttons(vec![
            serenity::CreateButton::new(format!("svc_edit:headline:{id}"))
                .label("🏷️ Headline")
                .style(serenity::ButtonStyle::Primary),
            serenity::CreateButton::new(format!("svc_edit:description:{id}"))
                .label("📝 Description")
                .style(serenity::ButtonStyle::Primary),
            serenity::CreateButton::new(format!("svc_edit:rates:{id}"))
                .label("💰 Rates")
                .style(serenity::ButtonStyle::Primary),
            serenity::CreateButton::new(format!("svc_edit:availability:{id}"))
                .label("🗓️ Availability")
                .style(serenity::ButtonStyle::Primary),
        ]),
        serenity::CreateActionRow::Buttons(vec![
            serenity::CreateButton::new(format!("svc_edit:thumbnail:{id}"))
                .label("🖼️ Thumbnail")
                .style(serenity::ButtonStyle::Secondary),
            serenity::CreateButton::new(format!("svc_edit:color:{id}"))
                .label("🎨 Color")
                .style(serenity::ButtonStyle::Secondary),
            serenity::CreateButton::new(format!("svc_toggle_publish:{id}"))
                .label(publish_label)
                .style(serenity::ButtonStyle::Success),
        ]),
    ]
}

/// Renders a background check for the review channel.
pub fn background_check_embed(check: &background_check::Model) -> serenity::CreateEmbed {
    let (status_text, color) = match check.status.as_str() {
        background::STATUS_APPROVED => ("✅ Approved", 0x002E_CC71),
        background::STATUS_DENIED => ("⛔ Denied", 0x00E7_4C3C),
        _ => ("⏳ Pending review", 0x00F3_9C12),
    };

    let mut embed = serenity::CreateEmbed::new()
        .title(format!("🔍 Background Check #{}", check.id))
        .color(color)
        .field("Applicant", format!("<@{}>", check.user_id), true)
        .field("Character", check.character_name.clone(), true)
        .field(
            "Age requirement",
            if check.age_verified {
                "Confirmed"
            } else {
                "Not confirmed"
            },
            true,
        )
        .field("Experience", check.experience.clone(), false)
        .field("Status", status_text, false)
        .timestamp(chrono::Utc::now());

    if let Some(ref reviewer) = check.reviewer_id {
        embed = embed.field("Reviewed by", format!("<@{reviewer}>"), true);
    }

    embed
}

/// Approve/deny buttons attached to a pending check.
pub fn background_check_components(check_id: i64) -> Vec<serenity::CreateActionRow> {
    vec![serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(format!("bgc_approve:{check_id}"))
            .label("✅ Approve")
            .style(serenity::ButtonStyle::Success),
        serenity::CreateButton::new(format!("bgc_deny:{check_id}"))
            .label("⛔ Deny")
            .style(serenity::ButtonStyle::Danger),
    ])]
}

/// Renders a job posting for the job board.
pub fn job_posting_embed(
    posting: &job_posting::Model,
    venue: &venue::Model,
    position: &position::Model,
) -> serenity::CreateEmbed {
    let title = if posting.open {
        format!("📢 {} — {}", venue.name, position.name)
    } else {
        format!("📪 [CLOSED] {} — {}", venue.name, position.name)
    };

    let mut embed = serenity::CreateEmbed::new()
        .title(title)
        .color(accent_or_default(venue.accent_color))
        .field("Salary", format::format_salary(posting.salary), true)
        .field("Contact", format!("<@{}>", posting.contact_id), true)
        .footer(serenity::CreateEmbedFooter::new(format!(
            "Posting #{}",
            posting.id
        )))
        .timestamp(chrono::Utc::now());

    if let Some(ref details) = posting.details {
        embed = embed.description(details.clone());
    }

    embed
}

/// Close button attached to an open posting.
pub fn job_posting_components(posting_id: i64) -> Vec<serenity::CreateActionRow> {
    vec![serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(format!("job_close:{posting_id}"))
            .label("📪 Close Posting")
            .style(serenity::ButtonStyle::Secondary),
    ])]
}

/// Renders the guild role/channel configuration snapshot.
pub fn config_embed(
    roles: &[guild_role::Model],
    channels: &[guild_channel::Model],
) -> serenity::CreateEmbed {
    let roles_text = if roles.is_empty() {
        "_No roles configured_".to_string()
    } else {
        roles
            .iter()
            .map(|r| format!("**{}** → <@&{}>", r.purpose, r.role_id))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let channels_text = if channels.is_empty() {
        "_No channels configured_".to_string()
    } else {
        channels
            .iter()
            .map(|c| format!("**{}** → <#{}>", c.purpose, c.channel_id))
            .collect::<Vec<_>>()
            .join("\n")
    };

    serenity::CreateEmbed::new()
        .title("⚙️ Greenroom Configuration")
        .color(DEFAULT_COLOR)
        .field("Roles", roles_text, false)
        .field("Channels", channels_text, false)
        .timestamp(chrono::Utc::now())
}
