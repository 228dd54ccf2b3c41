//! Hireable service business logic.
//!
//! Services are admin-defined categories; each staff member gets at most one
//! profile per service, created lazily and edited field-by-field through the
//! profile panel. Profiles stay invisible to listings until published.

use crate::{
    entities::{Service, ServiceProfile, service, service_profile},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, QueryOrder, Set, prelude::*};

/// Retrieves all active (non-deleted) services, ordered alphabetically by name.
pub async fn get_all_active_services(db: &DatabaseConnection) -> Result<Vec<service::Model>> {
    Service::find()
        .filter(service::Column::IsDeleted.eq(false))
        .order_by_asc(service::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a service by name, returning None if not found or deleted.
pub async fn get_service_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<service::Model>> {
    Service::find()
        .filter(service::Column::Name.eq(name))
        .filter(service::Column::IsDeleted.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a service by its unique ID.
pub async fn get_service_by_id(
    db: &DatabaseConnection,
    service_id: i64,
) -> Result<Option<service::Model>> {
    Service::find_by_id(service_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new hireable service category, performing input validation.
pub async fn create_service(
    db: &DatabaseConnection,
    name: String,
    description: Option<String>,
) -> Result<service::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Service name cannot be empty".to_string(),
        });
    }

    let service = service::ActiveModel {
        name: Set(name.trim().to_string()),
        description: Set(description),
        is_deleted: Set(false),
        ..Default::default()
    };

    service.insert(db).await.map_err(Into::into)
}

/// Soft deletes a service, hiding it and its listings while preserving data.
pub async fn soft_delete_service(
    db: &DatabaseConnection,
    service_id: i64,
) -> Result<service::Model> {
    let service = get_service_by_id(db, service_id)
        .await?
        .ok_or_else(|| Error::ServiceNotFound {
            name: service_id.to_string(),
        })?;

    let mut active: service::ActiveModel = service.into();
    active.is_deleted = Set(true);
    active.update(db).await.map_err(Into::into)
}

/// Finds a profile by its unique ID.
pub async fn get_profile_by_id(
    db: &DatabaseConnection,
    profile_id: i64,
) -> Result<Option<service_profile::Model>> {
    ServiceProfile::find_by_id(profile_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns a user's profile under a service, creating an unpublished blank
/// one on first access.
pub async fn get_or_create_profile(
    db: &DatabaseConnection,
    service_id: i64,
    user_id: &str,
) -> Result<service_profile::Model> {
    // The service must exist and be active before a profile hangs off it
    let service = get_service_by_id(db, service_id)
        .await?
        .filter(|s| !s.is_deleted)
        .ok_or_else(|| Error::ServiceNotFound {
            name: service_id.to_string(),
        })?;

    let existing = ServiceProfile::find()
        .filter(service_profile::Column::ServiceId.eq(service.id))
        .filter(service_profile::Column::UserId.eq(user_id))
        .one(db)
        .await?;

    if let Some(profile) = existing {
        return Ok(profile);
    }

    let profile = service_profile::ActiveModel {
        service_id: Set(service.id),
        user_id: Set(user_id.to_string()),
        headline: Set(None),
        description: Set(None),
        rates: Set(None),
        availability: Set(None),
        thumbnail_url: Set(None),
        accent_color: Set(None),
        published: Set(false),
        ..Default::default()
    };

    profile.insert(db).await.map_err(Into::into)
}

async fn load_profile_active_model(
    db: &DatabaseConnection,
    profile_id: i64,
) -> Result<service_profile::ActiveModel> {
    let profile = get_profile_by_id(db, profile_id)
        .await?
        .ok_or(Error::ProfileNotFound { id: profile_id })?;
    Ok(profile.into())
}

/// Updates the profile headline, persisting immediately.
pub async fn set_headline(
    db: &DatabaseConnection,
    profile_id: i64,
    headline: Option<String>,
) -> Result<service_profile::Model> {
    let mut active = load_profile_active_model(db, profile_id).await?;
    active.headline = Set(headline);
    active.update(db).await.map_err(Into::into)
}

/// Updates the profile description, persisting immediately.
pub async fn set_profile_description(
    db: &DatabaseConnection,
    profile_id: i64,
    description: Option<String>,
) -> Result<service_profile::Model> {
    let mut active = load_profile_active_model(db, profile_id).await?;
    active.description = Set(description);
    active.update(db).await.map_err(Into::into)
}

/// Updates the profile rates text, persisting immediately.
pub async fn set_rates(
    db: &DatabaseConnection,
    profile_id: i64,
    rates: Option<String>,
) -> Result<service_profile::Model> {
    let mut active = load_profile_active_model(db, profile_id).await?;
    active.rates = Set(rates);
    active.update(db).await.map_err(Into::into)
}

/// Updates the profile availability text, persisting immediately.
pub async fn set_availability(
    db: &DatabaseConnection,
    profile_id: i64,
    availability: Option<String>,
) -> Result<service_profile::Model> {
    let mut active = load_profile_active_model(db, profile_id).await?;
    active.availability = Set(availability);
    active.update(db).await.map_err(Into::into)
}

/// Updates the profile thumbnail URL, persisting immediately.
pub async fn set_thumbnail_url(
    db: &DatabaseConnection,
    profile_id: i64,
    thumbnail_url: Option<String>,
) -> Result<service_profile::Model> {
    let mut active = load_profile_active_model(db, profile_id).await?;
    active.thumbnail_url = Set(thumbnail_url);
    active.update(db).await.map_err(Into::into)
}

/// Updates the profile accent color, persisting immediately.
pub async fn set_profile_color(
    db: &DatabaseConnection,
    profile_id: i64,
    accent_color: Option<i32>,
) -> Result<service_profile::Model> {
    let mut active = load_profile_active_model(db, profile_id).await?;
    active.accent_color = Set(accent_color);
    active.update(db).await.map_err(Into::into)
}

/// Publishes or unpublishes a profile, persisting immediately.
pub async fn set_published(
    db: &DatabaseConnection,
    profile_id: i64,
    published: bool,
) -> Result<service_profile::Model> {
    let mut active = load_profile_active_model(db, profile_id).await?;
    active.published = Set(published);
    active.update(db).await.map_err(Into::into)
}

/// Lists published profiles under a service for the public listing.
pub async fn get_published_profiles(
    db: &DatabaseConnection,
    service_id: i64,
) -> Result<Vec<service_profile::Model>> {
    ServiceProfile::find()
        .filter(service_profile::Column::ServiceId.eq(service_id))
        .filter(service_profile::Column::Published.eq(true))
        .order_by_asc(service_profile::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_service, setup_test_db};

    #[tokio::test]
    async fn test_create_service_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_service(&db, "  ".to_string(), None).await;
        assert!(matches!(result, Err(Error::Config { message: _ })));

        let service = create_service(&db, "Bard".to_string(), Some("Live music".to_string())).await?;
        assert_eq!(service.name, "Bard");
        assert!(!service.is_deleted);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_or_create_profile_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let service = create_test_service(&db, "Bard").await?;

        let first = get_or_create_profile(&db, service.id, "user123").await?;
        let second = get_or_create_profile(&db, service.id, "user123").await?;

        assert_eq!(first.id, second.id);
        assert!(!first.published);
        assert!(first.headline.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_or_create_profile_rejects_missing_service() -> Result<()> {
        let db = setup_test_db().await?;

        let result = get_or_create_profile(&db, 999, "user123").await;
        assert!(matches!(result, Err(Error::ServiceNotFound { name: _ })));

        let service = create_test_service(&db, "Bard").await?;
        soft_delete_service(&db, service.id).await?;

        let result = get_or_create_profile(&db, service.id, "user123").await;
        assert!(matches!(result, Err(Error::ServiceNotFound { name: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_profile_field_setters_persist() -> Result<()> {
        let db = setup_test_db().await?;
        let service = create_test_service(&db, "Bard").await?;
        let profile = get_or_create_profile(&db, service.id, "user123").await?;

        set_headline(&db, profile.id, Some("Songs for every mood".to_string())).await?;
        set_rates(&db, profile.id, Some("100k/hour".to_string())).await?;
        set_availability(&db, profile.id, Some("weekends".to_string())).await?;
        set_profile_color(&db, profile.id, Some(0x009B_59B6)).await?;

        let reloaded = get_profile_by_id(&db, profile.id).await?.unwrap();
        assert_eq!(reloaded.headline.as_deref(), Some("Songs for every mood"));
        assert_eq!(reloaded.rates.as_deref(), Some("100k/hour"));
        assert_eq!(reloaded.availability.as_deref(), Some("weekends"));
        assert_eq!(reloaded.accent_color, Some(0x009B_59B6));

        Ok(())
    }

    #[tokio::test]
    async fn test_published_profiles_listing() -> Result<()> {
        let db = setup_test_db().await?;
        let service = create_test_service(&db, "Bard").await?;

        let published = get_or_create_profile(&db, service.id, "user1").await?;
        let _draft = get_or_create_profile(&db, service.id, "user2").await?;
        set_published(&db, published.id, true).await?;

        let listed = get_published_profiles(&db, service.id).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].user_id, "user1");

        set_published(&db, published.id, false).await?;
        assert!(get_published_profiles(&db, service.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_profile_setter_reports_missing_profile() -> Result<()> {
        let db = setup_test_db().await?;

        let result = set_headline(&db, 999, None).await;
        assert!(matches!(result, Err(Error::ProfileNotFound { id: 999 })));

        Ok(())
    }
}
