//! Service profile entity - One user's configurable listing under a service.
//!
//! The profile is the template the original ecosystem called a service
//! configuration: every field is optional and edited through the profile
//! panel, and nothing is visible to other members until published.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Service profile database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_profiles")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The service this profile is listed under
    pub service_id: i64,
    /// Discord user ID of the profile owner
    pub user_id: String,
    /// Short headline shown in listings
    pub headline: Option<String>,
    /// Longer pitch shown on the profile embed
    pub description: Option<String>,
    /// Rates, free text (e.g., "100k/hour, first session free")
    pub rates: Option<String>,
    /// Availability, free text (e.g., "weekends, EU evenings")
    pub availability: Option<String>,
    /// Thumbnail image URL
    pub thumbnail_url: Option<String>,
    /// Accent color as a validated RGB value
    pub accent_color: Option<i32>,
    /// Whether this profile appears in public listings
    pub published: bool,
}

/// Defines relationships between `ServiceProfile` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each profile belongs to one service
    #[sea_orm(
        belongs_to = "super::service::Entity",
        from = "Column::ServiceId",
        to = "super::service::Column::Id"
    )]
    Service,
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
