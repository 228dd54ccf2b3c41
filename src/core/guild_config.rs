//! Guild role/channel purpose mappings.
//!
//! The bot needs to know which Discord role marks staff, trainers, and
//! hiring managers, and which channels receive job postings, service
//! listings, and background checks. Admins maintain these mappings through
//! the setup commands; each purpose maps to at most one ID (upsert).

use crate::{
    entities::{GuildChannel, GuildRole, guild_channel, guild_role},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, QueryOrder, Set, prelude::*};

/// What a configured role is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolePurpose {
    /// General staff role granted to registered members
    Staff,
    /// Role marking members who may run trainings
    Trainer,
    /// Role allowed to review background checks
    HiringManager,
}

impl RolePurpose {
    /// Stable key used in the database and in command input.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Trainer => "trainer",
            Self::HiringManager => "hiring_manager",
        }
    }

    /// All purposes, for help text and the config embed.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Staff, Self::Trainer, Self::HiringManager]
    }

    /// Parses a purpose key from command input.
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "staff" => Ok(Self::Staff),
            "trainer" => Ok(Self::Trainer),
            "hiring_manager" | "hiring-manager" => Ok(Self::HiringManager),
            other => Err(Error::Config {
                message: format!(
                    "Unknown role purpose '{other}'. Valid purposes: staff, trainer, hiring_manager"
                ),
            }),
        }
    }
}

/// What a configured channel is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelPurpose {
    /// Channel that receives job posting embeds
    JobBoard,
    /// Channel that receives published service listings
    ServiceListings,
    /// Channel where background checks land for review
    BackgroundChecks,
    /// Channel that receives venue profile announcements
    VenueDirectory,
}

impl ChannelPurpose {
    /// Stable key used in the database and in command input.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JobBoard => "job_board",
            Self::ServiceListings => "service_listings",
            Self::BackgroundChecks => "background_checks",
            Self::VenueDirectory => "venue_directory",
        }
    }

    /// All purposes, for help text and the config embed.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::JobBoard,
            Self::ServiceListings,
            Self::BackgroundChecks,
            Self::VenueDirectory,
        ]
    }

    /// Parses a purpose key from command input.
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "job_board" | "job-board" | "jobs" => Ok(Self::JobBoard),
            "service_listings" | "service-listings" | "services" => Ok(Self::ServiceListings),
            "background_checks" | "background-checks" => Ok(Self::BackgroundChecks),
            "venue_directory" | "venue-directory" | "venues" => Ok(Self::VenueDirectory),
            other => Err(Error::Config {
                message: format!(
                    "Unknown channel purpose '{other}'. Valid purposes: job_board, \
                     service_listings, background_checks, venue_directory"
                ),
            }),
        }
    }
}

/// Maps a purpose to a Discord role ID, replacing any existing mapping.
pub async fn set_role(
    db: &DatabaseConnection,
    purpose: RolePurpose,
    role_id: String,
) -> Result<guild_role::Model> {
    let existing = GuildRole::find()
        .filter(guild_role::Column::Purpose.eq(purpose.as_str()))
        .one(db)
        .await?;

    if let Some(found) = existing {
        let mut active: guild_role::ActiveModel = found.into();
        active.role_id = Set(role_id);
        return active.update(db).await.map_err(Into::into);
    }

    let mapping = guild_role::ActiveModel {
        purpose: Set(purpose.as_str().to_string()),
        role_id: Set(role_id),
        ..Default::default()
    };

    mapping.insert(db).await.map_err(Into::into)
}

/// Looks up the Discord role ID configured for a purpose.
pub async fn get_role(db: &DatabaseConnection, purpose: RolePurpose) -> Result<Option<String>> {
    let mapping = GuildRole::find()
        .filter(guild_role::Column::Purpose.eq(purpose.as_str()))
        .one(db)
        .await?;

    Ok(mapping.map(|m| m.role_id))
}

/// Maps a purpose to a Discord channel ID, replacing any existing mapping.
pub async fn set_channel(
    db: &DatabaseConnection,
    purpose: ChannelPurpose,
    channel_id: String,
) -> Result<guild_channel::Model> {
    let existing = GuildChannel::find()
        .filter(guild_channel::Column::Purpose.eq(purpose.as_str()))
        .one(db)
        .await?;

    if let Some(found) = existing {
        let mut active: guild_channel::ActiveModel = found.into();
        active.channel_id = Set(channel_id);
        return active.update(db).await.map_err(Into::into);
    }

    let mapping = guild_channel::ActiveModel {
        purpose: Set(purpose.as_str().to_string()),
        channel_id: Set(channel_id),
        ..Default::default()
    };

    mapping.insert(db).await.map_err(Into::into)
}

/// Looks up the Discord channel ID configured for a purpose.
pub async fn get_channel(
    db: &DatabaseConnection,
    purpose: ChannelPurpose,
) -> Result<Option<String>> {
    let mapping = GuildChannel::find()
        .filter(guild_channel::Column::Purpose.eq(purpose.as_str()))
        .one(db)
        .await?;

    Ok(mapping.map(|m| m.channel_id))
}

/// Snapshot of all role mappings for the config embed.
pub async fn all_roles(db: &DatabaseConnection) -> Result<Vec<guild_role::Model>> {
    GuildRole::find()
        .order_by_asc(guild_role::Column::Purpose)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Snapshot of all channel mappings for the config embed.
pub async fn all_channels(db: &DatabaseConnection) -> Result<Vec<guild_channel::Model>> {
    GuildChannel::find()
        .order_by_asc(guild_channel::Column::Purpose)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[test]
    fn test_role_purpose_parse() {
        assert_eq!(RolePurpose::parse("staff").unwrap(), RolePurpose::Staff);
        assert_eq!(
            RolePurpose::parse(" Hiring_Manager ").unwrap(),
            RolePurpose::HiringManager
        );
        assert!(matches!(
            RolePurpose::parse("dj"),
            Err(Error::Config { message: _ })
        ));
    }

    #[test]
    fn test_channel_purpose_parse() {
        assert_eq!(
            ChannelPurpose::parse("jobs").unwrap(),
            ChannelPurpose::JobBoard
        );
        assert_eq!(
            ChannelPurpose::parse("background-checks").unwrap(),
            ChannelPurpose::BackgroundChecks
        );
        assert!(matches!(
            ChannelPurpose::parse("lounge"),
            Err(Error::Config { message: _ })
        ));
    }

    #[tokio::test]
    async fn test_set_role_upserts() -> Result<()> {
        let db = setup_test_db().await?;

        set_role(&db, RolePurpose::Trainer, "111".to_string()).await?;
        assert_eq!(
            get_role(&db, RolePurpose::Trainer).await?.as_deref(),
            Some("111")
        );

        // Replacing keeps a single row per purpose
        set_role(&db, RolePurpose::Trainer, "222".to_string()).await?;
        assert_eq!(
            get_role(&db, RolePurpose::Trainer).await?.as_deref(),
            Some("222")
        );
        assert_eq!(all_roles(&db).await?.len(), 1);

        assert!(get_role(&db, RolePurpose::Staff).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_set_channel_upserts() -> Result<()> {
        let db = setup_test_db().await?;

        set_channel(&db, ChannelPurpose::JobBoard, "333".to_string()).await?;
        set_channel(&db, ChannelPurpose::JobBoard, "444".to_string()).await?;
        set_channel(&db, ChannelPurpose::BackgroundChecks, "555".to_string()).await?;

        assert_eq!(
            get_channel(&db, ChannelPurpose::JobBoard).await?.as_deref(),
            Some("444")
        );

        let all = all_channels(&db).await?;
        assert_eq!(all.len(), 2);

        Ok(())
    }
}
