//! Job posting entity - A published opening for a position at a venue.
//!
//! Once the posting embed lands in the job-board channel its channel and
//! message IDs are recorded here so the close action can edit it later.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Job posting database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job_postings")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The venue that is hiring
    pub venue_id: i64,
    /// The position being hired for
    pub position_id: i64,
    /// Validated salary amount
    pub salary: i64,
    /// Extra details given in the posting modal
    pub details: Option<String>,
    /// Discord user ID applicants should contact
    pub contact_id: String,
    /// Channel the posting embed was published to
    pub channel_id: Option<String>,
    /// Message ID of the posting embed
    pub message_id: Option<String>,
    /// Whether the posting is still open
    pub open: bool,
    /// When the posting was created
    pub created_at: DateTime,
}

/// Defines relationships between `JobPosting` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each posting belongs to one venue
    #[sea_orm(
        belongs_to = "super::venue::Entity",
        from = "Column::VenueId",
        to = "super::venue::Column::Id"
    )]
    Venue,
    /// Each posting belongs to one position
    #[sea_orm(
        belongs_to = "super::position::Entity",
        from = "Column::PositionId",
        to = "super::position::Column::Id"
    )]
    Position,
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl Related<super::position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Position.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
