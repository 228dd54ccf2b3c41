//! Venue entity - An in-universe roleplay location profile.
//!
//! Venue profiles are owned by the Discord user who created them and edited
//! through the interactive venue panel. The hiring flag surfaces the venue
//! in hiring listings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Venue database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    /// Unique identifier for the venue
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Venue name (e.g., "The Gilded Lily")
    pub name: String,
    /// Discord user ID of the venue owner
    pub owner_id: String,
    /// Profile description shown on the venue embed
    pub description: Option<String>,
    /// Website or carrd link
    pub website: Option<String>,
    /// Banner image URL for the profile embed
    pub banner_url: Option<String>,
    /// Accent color as a validated RGB value
    pub accent_color: Option<i32>,
    /// Whether the venue is currently hiring
    pub hiring: bool,
    /// Soft delete flag - if true, venue is hidden but data is preserved
    pub is_deleted: bool,
}

/// Defines relationships between Venue and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One venue has many job postings
    #[sea_orm(has_many = "super::job_posting::Entity")]
    JobPostings,
}

impl Related<super::job_posting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobPostings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
