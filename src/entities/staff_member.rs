//! Staff member entity - A tracked trainer/trainee record.
//!
//! One row per registered Discord user. Qualifications hang off this record;
//! the hiatus flag hides a member from trainer listings without losing their
//! qualification history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Staff member database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "staff_members")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord user ID of this staff member
    pub user_id: String,
    /// Preferred display name, if set
    pub display_name: Option<String>,
    /// Whether the member is on hiatus (hidden from trainer listings)
    pub on_hiatus: bool,
    /// When the member registered
    pub created_at: DateTime,
}

/// Defines relationships between `StaffMember` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One staff member has many qualifications
    #[sea_orm(has_many = "super::qualification::Entity")]
    Qualifications,
}

impl Related<super::qualification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Qualifications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
