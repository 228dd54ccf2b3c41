//! Autocomplete handlers for Discord slash command parameters.
//!
//! This module provides autocomplete functionality for command parameters
//! like position, venue, and service names, suggesting valid options as the
//! user types.

use crate::{
    bot::BotData,
    core::{position, service, venue},
    errors::Error,
};

/// Provides autocomplete suggestions for position names.
///
/// Queries the database for active positions that match the user's partial
/// input and returns up to 25 matching names.
pub async fn autocomplete_position_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let db = &ctx.data().database;

    let Ok(positions) = position::get_all_active_positions(db).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();

    positions
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&partial_lower))
        .map(|p| p.name)
        .take(25) // Discord autocomplete limit
        .collect()
}

/// Provides autocomplete suggestions for venue names.
pub async fn autocomplete_venue_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let db = &ctx.data().database;

    let Ok(venues) = venue::get_all_active_venues(db).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();

    venues
        .into_iter()
        .filter(|v| v.name.to_lowercase().contains(&partial_lower))
        .map(|v| v.name)
        .take(25) // Discord autocomplete limit
        .collect()
}

/// Provides autocomplete suggestions for service names.
pub async fn autocomplete_service_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let db = &ctx.data().database;

    let Ok(services) = service::get_all_active_services(db).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();

    services
        .into_iter()
        .filter(|s| s.name.to_lowercase().contains(&partial_lower))
        .map(|s| s.name)
        .take(25) // Discord autocomplete limit
        .collect()
}
