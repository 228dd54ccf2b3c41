//! Venue business logic - profile records with persist-on-set field setters.
//!
//! Every setter loads the venue, writes the single field, and persists
//! immediately; the interactive panel re-renders from the returned model.

use crate::{
    entities::{Venue, venue},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, QueryOrder, Set, prelude::*};

/// Retrieves all active (non-deleted) venues, ordered alphabetically by name.
pub async fn get_all_active_venues(db: &DatabaseConnection) -> Result<Vec<venue::Model>> {
    Venue::find()
        .filter(venue::Column::IsDeleted.eq(false))
        .order_by_asc(venue::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a venue by name, returning None if not found or deleted.
pub async fn get_venue_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<venue::Model>> {
    Venue::find()
        .filter(venue::Column::Name.eq(name))
        .filter(venue::Column::IsDeleted.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a venue by its unique ID.
pub async fn get_venue_by_id(
    db: &DatabaseConnection,
    venue_id: i64,
) -> Result<Option<venue::Model>> {
    Venue::find_by_id(venue_id).one(db).await.map_err(Into::into)
}

/// Lists the venues a Discord user owns.
pub async fn get_venues_for_owner(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<Vec<venue::Model>> {
    Venue::find()
        .filter(venue::Column::OwnerId.eq(owner_id))
        .filter(venue::Column::IsDeleted.eq(false))
        .order_by_asc(venue::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new venue owned by the given user, performing input validation.
pub async fn create_venue(
    db: &DatabaseConnection,
    name: String,
    owner_id: String,
) -> Result<venue::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Venue name cannot be empty".to_string(),
        });
    }

    let venue = venue::ActiveModel {
        name: Set(name.trim().to_string()),
        owner_id: Set(owner_id),
        description: Set(None),
        website: Set(None),
        banner_url: Set(None),
        accent_color: Set(None),
        hiring: Set(false),
        is_deleted: Set(false),
        ..Default::default()
    };

    venue.insert(db).await.map_err(Into::into)
}

async fn load_active_model(db: &DatabaseConnection, venue_id: i64) -> Result<venue::ActiveModel> {
    let venue = get_venue_by_id(db, venue_id)
        .await?
        .ok_or_else(|| Error::VenueNotFound {
            name: venue_id.to_string(),
        })?;
    Ok(venue.into())
}

/// Updates the venue description, persisting immediately.
pub async fn set_description(
    db: &DatabaseConnection,
    venue_id: i64,
    description: Option<String>,
) -> Result<venue::Model> {
    let mut active = load_active_model(db, venue_id).await?;
    active.description = Set(description);
    active.update(db).await.map_err(Into::into)
}

/// Updates the venue website link, persisting immediately.
pub async fn set_website(
    db: &DatabaseConnection,
    venue_id: i64,
    website: Option<String>,
) -> Result<venue::Model> {
    let mut active = load_active_model(db, venue_id).await?;
    active.website = Set(website);
    active.update(db).await.map_err(Into::into)
}

/// Updates the venue banner image URL, persisting immediately.
pub async fn set_banner_url(
    db: &DatabaseConnection,
    venue_id: i64,
    banner_url: Option<String>,
) -> Result<venue::Model> {
    let mut active = load_active_model(db, venue_id).await?;
    active.banner_url = Set(banner_url);
    active.update(db).await.map_err(Into::into)
}

/// Updates the venue accent color, persisting immediately.
///
/// Callers validate the color with [`crate::core::format::parse_accent_color`]
/// before it gets here; this function stores whatever validated value it is given.
pub async fn set_accent_color(
    db: &DatabaseConnection,
    venue_id: i64,
    accent_color: Option<i32>,
) -> Result<venue::Model> {
    let mut active = load_active_model(db, venue_id).await?;
    active.accent_color = Set(accent_color);
    active.update(db).await.map_err(Into::into)
}

/// Toggles whether the venue is currently hiring, persisting immediately.
pub async fn set_hiring(
    db: &DatabaseConnection,
    venue_id: i64,
    hiring: bool,
) -> Result<venue::Model> {
    let mut active = load_active_model(db, venue_id).await?;
    active.hiring = Set(hiring);
    active.update(db).await.map_err(Into::into)
}

/// Soft deletes a venue, hiding it from lookups while preserving history.
pub async fn soft_delete_venue(db: &DatabaseConnection, venue_id: i64) -> Result<venue::Model> {
    let mut active = load_active_model(db, venue_id).await?;
    active.is_deleted = Set(true);
    active.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_venue, setup_test_db};

    #[tokio::test]
    async fn test_create_venue_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_venue(&db, String::new(), "owner".to_string()).await;
        assert!(matches!(result, Err(Error::Config { message: _ })));

        let result = create_venue(&db, "  ".to_string(), "owner".to_string()).await;
        assert!(matches!(result, Err(Error::Config { message: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_venue_defaults() -> Result<()> {
        let db = setup_test_db().await?;

        let venue = create_venue(&db, " The Gilded Lily ".to_string(), "owner1".to_string()).await?;
        assert_eq!(venue.name, "The Gilded Lily");
        assert_eq!(venue.owner_id, "owner1");
        assert!(venue.description.is_none());
        assert!(!venue.hiring);
        assert!(!venue.is_deleted);

        Ok(())
    }

    #[tokio::test]
    async fn test_field_setters_persist() -> Result<()> {
        let db = setup_test_db().await?;
        let venue = create_test_venue(&db, "The Gilded Lily", "owner1").await?;

        set_description(&db, venue.id, Some("A cozy rooftop lounge".to_string())).await?;
        set_website(&db, venue.id, Some("https://example.test".to_string())).await?;
        set_banner_url(&db, venue.id, Some("https://example.test/banner.png".to_string())).await?;
        set_accent_color(&db, venue.id, Some(0x0034_98DB)).await?;
        let updated = set_hiring(&db, venue.id, true).await?;

        assert!(updated.hiring);

        let reloaded = get_venue_by_id(&db, venue.id).await?.unwrap();
        assert_eq!(reloaded.description.as_deref(), Some("A cozy rooftop lounge"));
        assert_eq!(reloaded.website.as_deref(), Some("https://example.test"));
        assert_eq!(reloaded.accent_color, Some(0x0034_98DB));
        assert!(reloaded.hiring);

        Ok(())
    }

    #[tokio::test]
    async fn test_setters_report_missing_venue() -> Result<()> {
        let db = setup_test_db().await?;

        let result = set_description(&db, 999, None).await;
        assert!(matches!(result, Err(Error::VenueNotFound { name: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_soft_delete_hides_venue() -> Result<()> {
        let db = setup_test_db().await?;
        let venue = create_test_venue(&db, "The Gilded Lily", "owner1").await?;

        soft_delete_venue(&db, venue.id).await?;

        assert!(get_venue_by_name(&db, "The Gilded Lily").await?.is_none());
        assert!(get_all_active_venues(&db).await?.is_empty());
        assert!(get_venues_for_owner(&db, "owner1").await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_venues_for_owner() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_venue(&db, "Second Star", "owner1").await?;
        create_test_venue(&db, "Aftertown", "owner1").await?;
        create_test_venue(&db, "Elsewhere", "owner2").await?;

        let owned = get_venues_for_owner(&db, "owner1").await?;
        let names: Vec<&str> = owned.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Aftertown", "Second Star"]);

        Ok(())
    }
}
