//! Guild role entity - Maps a bot purpose to a Discord role ID.
//! One row per purpose; admins maintain these through `/set_role`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Guild role mapping database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "guild_roles")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Purpose key (e.g., "staff", "trainer", `"hiring_manager"`)
    pub purpose: String,
    /// Discord role ID mapped to the purpose
    pub role_id: String,
}

/// `GuildRole` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
