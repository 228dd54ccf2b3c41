//! Qualification entity - Links a staff member to a position they hold.
//!
//! `is_trainer` marks members allowed to train others in the position.
//! At most one row exists per (staff member, position) pair.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Qualification database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "qualifications")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The staff member holding this qualification
    pub staff_member_id: i64,
    /// The position the qualification is for
    pub position_id: i64,
    /// Whether this member may train others in the position
    pub is_trainer: bool,
    /// Discord user ID of whoever granted the qualification
    pub granted_by: String,
    /// When the qualification was granted
    pub granted_at: DateTime,
}

/// Defines relationships between Qualification and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each qualification belongs to one staff member
    #[sea_orm(
        belongs_to = "super::staff_member::Entity",
        from = "Column::StaffMemberId",
        to = "super::staff_member::Column::Id"
    )]
    StaffMember,
    /// Each qualification belongs to one position
    #[sea_orm(
        belongs_to = "super::position::Entity",
        from = "Column::PositionId",
        to = "super::position::Column::Id"
    )]
    Position,
}

impl Related<super::staff_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StaffMember.def()
    }
}

impl Related<super::position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Position.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
