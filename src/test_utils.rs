//! Shared test utilities for `Greenroom`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{core, entities, errors::Result};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test position with sensible defaults.
///
/// # Defaults
/// * `description`: "Test position"
/// * `trainer_pay`: 50000
pub async fn create_test_position(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::position::Model> {
    core::position::create_position(db, name.to_string(), "Test position".to_string(), 50_000)
        .await
}

/// Creates a test staff member keyed by Discord user ID.
pub async fn create_test_staff_member(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entities::staff_member::Model> {
    core::staff::get_or_create_staff_member(db, user_id, None).await
}

/// Creates a test venue with the given owner.
pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    owner_id: &str,
) -> Result<entities::venue::Model> {
    core::venue::create_venue(db, name.to_string(), owner_id.to_string()).await
}

/// Creates a test service category.
pub async fn create_test_service(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::service::Model> {
    core::service::create_service(db, name.to_string(), None).await
}

/// Sets up a complete test environment with a venue and a position.
/// Returns (db, venue, position) for posting-related tests.
pub async fn setup_with_venue_and_position() -> Result<(
    DatabaseConnection,
    entities::venue::Model,
    entities::position::Model,
)> {
    let db = setup_test_db().await?;
    let venue = create_test_venue(&db, "Test Venue", "owner1").await?;
    let position = create_test_position(&db, "Test Position").await?;
    Ok((db, venue, position))
}
