//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{
    BackgroundCheck, GuildChannel, GuildRole, JobPosting, Position, Qualification, Requirement,
    Service, ServiceProfile, StaffMember, Venue,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is set.
/// This function handles connection errors and provides a clean interface for database access
/// throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/greenroom.sqlite".to_string());

    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct
/// definitions. Tables that already exist are left alone.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = vec![
        schema.create_table_from_entity(Position),
        schema.create_table_from_entity(Requirement),
        schema.create_table_from_entity(StaffMember),
        schema.create_table_from_entity(Qualification),
        schema.create_table_from_entity(Venue),
        schema.create_table_from_entity(Service),
        schema.create_table_from_entity(ServiceProfile),
        schema.create_table_from_entity(BackgroundCheck),
        schema.create_table_from_entity(JobPosting),
        schema.create_table_from_entity(GuildRole),
        schema.create_table_from_entity(GuildChannel),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(&*statement)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        position::Model as PositionModel, staff_member::Model as StaffMemberModel,
        venue::Model as VenueModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<PositionModel> = Position::find().limit(1).all(&db).await?;
        let _: Vec<StaffMemberModel> = StaffMember::find().limit(1).all(&db).await?;
        let _: Vec<VenueModel> = Venue::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<PositionModel> = Position::find().limit(1).all(&db).await?;
        Ok(())
    }
}
