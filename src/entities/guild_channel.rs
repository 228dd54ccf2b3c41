//! Guild channel entity - Maps a bot purpose to a Discord channel ID.
//! One row per purpose; admins maintain these through `/set_channel`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Guild channel mapping database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "guild_channels")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Purpose key (e.g., `"job_board"`, `"background_checks"`)
    pub purpose: String,
    /// Discord channel ID mapped to the purpose
    pub channel_id: String,
}

/// `GuildChannel` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
