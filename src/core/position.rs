//! Position business logic - Handles all position-related operations.
//!
//! Provides functions for creating, retrieving, updating, and managing job
//! positions and their requirement lists. All functions are async and return
//! Result types for error handling.

use crate::{
    config::positions::Config,
    entities::{Position, Requirement, position, requirement},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, QueryOrder, Set, prelude::*};
use tracing::info;

/// Retrieves all active (non-deleted) positions, ordered alphabetically by name.
///
/// Used for the position list command, the job wizard select menu, and
/// autocomplete suggestions.
pub async fn get_all_active_positions(db: &DatabaseConnection) -> Result<Vec<position::Model>> {
    Position::find()
        .filter(position::Column::IsDeleted.eq(false))
        .order_by_asc(position::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific position by its name, returning None if not found or deleted.
pub async fn get_position_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<position::Model>> {
    Position::find()
        .filter(position::Column::Name.eq(name))
        .filter(position::Column::IsDeleted.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a position by its unique ID.
pub async fn get_position_by_id(
    db: &DatabaseConnection,
    position_id: i64,
) -> Result<Option<position::Model>> {
    Position::find_by_id(position_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new position with the specified parameters, performing input validation.
///
/// Validates that the name is not empty and the trainer pay is non-negative,
/// and trims whitespace from the name.
pub async fn create_position(
    db: &DatabaseConnection,
    name: String,
    description: String,
    trainer_pay: i64,
) -> Result<position::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Position name cannot be empty".to_string(),
        });
    }

    if trainer_pay < 0 {
        return Err(Error::InvalidSalary {
            input: trainer_pay.to_string(),
        });
    }

    let position = position::ActiveModel {
        name: Set(name.trim().to_string()),
        description: Set(description),
        trainer_pay: Set(trainer_pay),
        role_id: Set(None),
        is_deleted: Set(false),
        ..Default::default()
    };

    let result = position.insert(db).await?;
    Ok(result)
}

/// Updates the trainer pay of an existing position, persisting immediately.
pub async fn set_trainer_pay(
    db: &DatabaseConnection,
    position_id: i64,
    trainer_pay: i64,
) -> Result<position::Model> {
    if trainer_pay < 0 {
        return Err(Error::InvalidSalary {
            input: trainer_pay.to_string(),
        });
    }

    let position = get_position_by_id(db, position_id)
        .await?
        .ok_or_else(|| Error::PositionNotFound {
            name: position_id.to_string(),
        })?;

    let mut active: position::ActiveModel = position.into();
    active.trainer_pay = Set(trainer_pay);
    active.update(db).await.map_err(Into::into)
}

/// Attaches (or clears) the Discord role granted to staff qualified for this position.
pub async fn set_role_id(
    db: &DatabaseConnection,
    position_id: i64,
    role_id: Option<String>,
) -> Result<position::Model> {
    let position = get_position_by_id(db, position_id)
        .await?
        .ok_or_else(|| Error::PositionNotFound {
            name: position_id.to_string(),
        })?;

    let mut active: position::ActiveModel = position.into();
    active.role_id = Set(role_id);
    active.update(db).await.map_err(Into::into)
}

/// Soft deletes a position, hiding it from lookups while preserving history.
pub async fn soft_delete_position(
    db: &DatabaseConnection,
    position_id: i64,
) -> Result<position::Model> {
    let position = get_position_by_id(db, position_id)
        .await?
        .ok_or_else(|| Error::PositionNotFound {
            name: position_id.to_string(),
        })?;

    let mut active: position::ActiveModel = position.into();
    active.is_deleted = Set(true);
    active.update(db).await.map_err(Into::into)
}

/// Adds a requirement line to a position.
pub async fn add_requirement(
    db: &DatabaseConnection,
    position_id: i64,
    text: String,
) -> Result<requirement::Model> {
    if text.trim().is_empty() {
        return Err(Error::Config {
            message: "Requirement text cannot be empty".to_string(),
        });
    }

    // Reject requirements against positions that don't exist or are deleted
    let position = get_position_by_id(db, position_id)
        .await?
        .filter(|p| !p.is_deleted)
        .ok_or_else(|| Error::PositionNotFound {
            name: position_id.to_string(),
        })?;

    let requirement = requirement::ActiveModel {
        position_id: Set(position.id),
        text: Set(text.trim().to_string()),
        ..Default::default()
    };

    requirement.insert(db).await.map_err(Into::into)
}

/// Removes a requirement by its ID. Returns false when no such requirement existed.
pub async fn remove_requirement(db: &DatabaseConnection, requirement_id: i64) -> Result<bool> {
    let result = Requirement::delete_by_id(requirement_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Lists the requirements attached to a position, in insertion order.
pub async fn get_requirements_for_position(
    db: &DatabaseConnection,
    position_id: i64,
) -> Result<Vec<requirement::Model>> {
    Requirement::find()
        .filter(requirement::Column::PositionId.eq(position_id))
        .order_by_asc(requirement::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Seeds positions from the parsed config file, skipping names that already
/// exist. Returns the number of positions inserted.
pub async fn seed_positions(db: &DatabaseConnection, config: &Config) -> Result<usize> {
    let mut inserted = 0;

    for seed in &config.positions {
        if get_position_by_name(db, &seed.name).await?.is_some() {
            continue;
        }

        let position = create_position(
            db,
            seed.name.clone(),
            seed.description.clone(),
            seed.trainer_pay,
        )
        .await?;

        for text in &seed.requirements {
            add_requirement(db, position.id, text.clone()).await?;
        }

        info!(position = %seed.name, "Seeded position from config");
        inserted += 1;
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::positions::PositionConfig;
    use crate::test_utils::{create_test_position, setup_test_db};

    #[tokio::test]
    async fn test_create_position_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_position(&db, String::new(), "desc".to_string(), 0).await;
        assert!(matches!(result, Err(Error::Config { message: _ })));

        let result = create_position(&db, "   ".to_string(), "desc".to_string(), 0).await;
        assert!(matches!(result, Err(Error::Config { message: _ })));

        let result = create_position(&db, "Bartender".to_string(), "desc".to_string(), -5).await;
        assert!(matches!(result, Err(Error::InvalidSalary { input: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_position_trims_name() -> Result<()> {
        let db = setup_test_db().await?;

        let position =
            create_position(&db, "  Bartender  ".to_string(), "desc".to_string(), 50_000).await?;
        assert_eq!(position.name, "Bartender");
        assert_eq!(position.trainer_pay, 50_000);
        assert!(!position.is_deleted);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_position_by_name() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_position(&db, "Greeter").await?;

        let found = get_position_by_name(&db, "Greeter").await?;
        assert_eq!(found.unwrap().id, created.id);

        let missing = get_position_by_name(&db, "Nope").await?;
        assert!(missing.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_active_positions_sorted_and_filtered() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_position(&db, "Security").await?;
        create_test_position(&db, "Bartender").await?;
        let deleted = create_test_position(&db, "Dancer").await?;
        soft_delete_position(&db, deleted.id).await?;

        let positions = get_all_active_positions(&db).await?;
        let names: Vec<&str> = positions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bartender", "Security"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_trainer_pay() -> Result<()> {
        let db = setup_test_db().await?;
        let position = create_test_position(&db, "Bartender").await?;

        let updated = set_trainer_pay(&db, position.id, 75_000).await?;
        assert_eq!(updated.trainer_pay, 75_000);

        let reloaded = get_position_by_id(&db, position.id).await?.unwrap();
        assert_eq!(reloaded.trainer_pay, 75_000);

        let result = set_trainer_pay(&db, position.id, -1).await;
        assert!(matches!(result, Err(Error::InvalidSalary { input: _ })));

        let result = set_trainer_pay(&db, 999, 10).await;
        assert!(matches!(result, Err(Error::PositionNotFound { name: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_requirements_lifecycle() -> Result<()> {
        let db = setup_test_db().await?;
        let position = create_test_position(&db, "Bartender").await?;

        let first = add_requirement(&db, position.id, "Knows the menu".to_string()).await?;
        add_requirement(&db, position.id, "Two trial shifts".to_string()).await?;

        let listed = get_requirements_for_position(&db, position.id).await?;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].text, "Knows the menu");

        assert!(remove_requirement(&db, first.id).await?);
        assert!(!remove_requirement(&db, first.id).await?);

        let listed = get_requirements_for_position(&db, position.id).await?;
        assert_eq!(listed.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_requirement_rejects_missing_position() -> Result<()> {
        let db = setup_test_db().await?;

        let result = add_requirement(&db, 42, "text".to_string()).await;
        assert!(matches!(result, Err(Error::PositionNotFound { name: _ })));

        let result = add_requirement(&db, 42, "   ".to_string()).await;
        assert!(matches!(result, Err(Error::Config { message: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_positions_skips_existing() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_position(&db, "Bartender").await?;

        let config = Config {
            positions: vec![
                PositionConfig {
                    name: "Bartender".to_string(),
                    description: "desc".to_string(),
                    trainer_pay: 10,
                    requirements: vec![],
                },
                PositionConfig {
                    name: "Greeter".to_string(),
                    description: "desc".to_string(),
                    trainer_pay: 20,
                    requirements: vec!["Friendly".to_string()],
                },
            ],
        };

        let inserted = seed_positions(&db, &config).await?;
        assert_eq!(inserted, 1);

        let greeter = get_position_by_name(&db, "Greeter").await?.unwrap();
        let requirements = get_requirements_for_position(&db, greeter.id).await?;
        assert_eq!(requirements.len(), 1);

        // Seeding again inserts nothing
        let inserted = seed_positions(&db, &config).await?;
        assert_eq!(inserted, 0);

        Ok(())
    }
}
