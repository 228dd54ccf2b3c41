//! Position entity - A job role staff can be qualified for.
//!
//! Each position carries a human-readable name, a description shown on the
//! job board, the pay a trainer receives for running a training session, and
//! optionally the Discord role granted to qualified staff.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Position database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "positions")]
pub struct Model {
    /// Unique identifier for the position
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name (e.g., "Bartender", "Greeter")
    pub name: String,
    /// Description shown in position info and job postings
    pub description: String,
    /// Pay a trainer receives per training session
    pub trainer_pay: i64,
    /// Discord role ID granted to qualified staff, if configured
    pub role_id: Option<String>,
    /// Soft delete flag - if true, position is hidden but data is preserved
    pub is_deleted: bool,
}

/// Defines relationships between Position and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One position has many requirements
    #[sea_orm(has_many = "super::requirement::Entity")]
    Requirements,
    /// One position has many qualifications
    #[sea_orm(has_many = "super::qualification::Entity")]
    Qualifications,
    /// One position has many job postings
    #[sea_orm(has_many = "super::job_posting::Entity")]
    JobPostings,
}

impl Related<super::requirement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requirements.def()
    }
}

impl Related<super::qualification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Qualifications.def()
    }
}

impl Related<super::job_posting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobPostings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
