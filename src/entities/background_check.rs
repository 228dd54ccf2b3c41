//! Background check entity - A member-submitted application under review.
//!
//! Status moves pending -> approved/denied exactly once; the reviewer and
//! review time are recorded on transition.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Background check database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "background_checks")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord user ID of the applicant
    pub user_id: String,
    /// In-game character name given on the form
    pub character_name: String,
    /// Free-text experience answer
    pub experience: String,
    /// Whether the applicant confirmed the age requirement
    pub age_verified: bool,
    /// Review status: "pending", "approved", or "denied"
    pub status: String,
    /// Discord user ID of the reviewer, once reviewed
    pub reviewer_id: Option<String>,
    /// When the check was submitted
    pub submitted_at: DateTime,
    /// When the check was reviewed, if it has been
    pub reviewed_at: Option<DateTime>,
}

/// `BackgroundCheck` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
