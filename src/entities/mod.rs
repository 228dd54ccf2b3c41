//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod background_check;
pub mod guild_channel;
pub mod guild_role;
pub mod job_posting;
pub mod position;
pub mod qualification;
pub mod requirement;
pub mod service;
pub mod service_profile;
pub mod staff_member;
pub mod venue;

// Re-export specific types to avoid conflicts
pub use background_check::{
    Column as BackgroundCheckColumn, Entity as BackgroundCheck, Model as BackgroundCheckModel,
};
pub use guild_channel::{
    Column as GuildChannelColumn, Entity as GuildChannel, Model as GuildChannelModel,
};
pub use guild_role::{Column as GuildRoleColumn, Entity as GuildRole, Model as GuildRoleModel};
pub use job_posting::{Column as JobPostingColumn, Entity as JobPosting, Model as JobPostingModel};
pub use position::{Column as PositionColumn, Entity as Position, Model as PositionModel};
pub use qualification::{
    Column as QualificationColumn, Entity as Qualification, Model as QualificationModel,
};
pub use requirement::{
    Column as RequirementColumn, Entity as Requirement, Model as RequirementModel,
};
pub use service::{Column as ServiceColumn, Entity as Service, Model as ServiceModel};
pub use service_profile::{
    Column as ServiceProfileColumn, Entity as ServiceProfile, Model as ServiceProfileModel,
};
pub use staff_member::{
    Column as StaffMemberColumn, Entity as StaffMember, Model as StaffMemberModel,
};
pub use venue::{Column as VenueColumn, Entity as Venue, Model as VenueModel};
