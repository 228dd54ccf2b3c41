//! Service entity - A hireable-service category staff can offer under.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Service database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Service name (e.g., "Bard", "Photographer")
    pub name: String,
    /// What this service covers
    pub description: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
}

/// Defines relationships between Service and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One service has many per-user profiles
    #[sea_orm(has_many = "super::service_profile::Entity")]
    Profiles,
}

impl Related<super::service_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
