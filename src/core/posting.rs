//! Job posting business logic.
//!
//! Postings are created at the end of the job wizard, get their channel and
//! message IDs attached once the embed is published, and close via the
//! posting's close button or command.

use crate::{
    entities::{JobPosting, job_posting},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, QueryOrder, Set, prelude::*};

/// Creates a new open job posting after validating its references.
pub async fn create_posting(
    db: &DatabaseConnection,
    venue_id: i64,
    position_id: i64,
    salary: i64,
    details: Option<String>,
    contact_id: String,
) -> Result<job_posting::Model> {
    if salary <= 0 {
        return Err(Error::InvalidSalary {
            input: salary.to_string(),
        });
    }

    let venue = crate::core::venue::get_venue_by_id(db, venue_id)
        .await?
        .filter(|v| !v.is_deleted)
        .ok_or_else(|| Error::VenueNotFound {
            name: venue_id.to_string(),
        })?;

    let position = crate::core::position::get_position_by_id(db, position_id)
        .await?
        .filter(|p| !p.is_deleted)
        .ok_or_else(|| Error::PositionNotFound {
            name: position_id.to_string(),
        })?;

    let posting = job_posting::ActiveModel {
        venue_id: Set(venue.id),
        position_id: Set(position.id),
        salary: Set(salary),
        details: Set(details),
        contact_id: Set(contact_id),
        channel_id: Set(None),
        message_id: Set(None),
        open: Set(true),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    posting.insert(db).await.map_err(Into::into)
}

/// Finds a posting by its unique ID.
pub async fn get_posting_by_id(
    db: &DatabaseConnection,
    posting_id: i64,
) -> Result<Option<job_posting::Model>> {
    JobPosting::find_by_id(posting_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists open postings, newest first.
pub async fn get_open_postings(db: &DatabaseConnection) -> Result<Vec<job_posting::Model>> {
    JobPosting::find()
        .filter(job_posting::Column::Open.eq(true))
        .order_by_desc(job_posting::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Records where the posting embed was published, persisting immediately.
pub async fn attach_message(
    db: &DatabaseConnection,
    posting_id: i64,
    channel_id: String,
    message_id: String,
) -> Result<job_posting::Model> {
    let posting = get_posting_by_id(db, posting_id)
        .await?
        .ok_or(Error::PostingNotFound { id: posting_id })?;

    let mut active: job_posting::ActiveModel = posting.into();
    active.channel_id = Set(Some(channel_id));
    active.message_id = Set(Some(message_id));
    active.update(db).await.map_err(Into::into)
}

/// Closes a posting. Closing an already-closed posting is a no-op.
pub async fn close_posting(
    db: &DatabaseConnection,
    posting_id: i64,
) -> Result<job_posting::Model> {
    let posting = get_posting_by_id(db, posting_id)
        .await?
        .ok_or(Error::PostingNotFound { id: posting_id })?;

    if !posting.open {
        return Ok(posting);
    }

    let mut active: job_posting::ActiveModel = posting.into();
    active.open = Set(false);
    active.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{setup_test_db, setup_with_venue_and_position};

    #[tokio::test]
    async fn test_create_posting_validates_references() -> Result<()> {
        let (db, venue, position) = setup_with_venue_and_position().await?;

        let result =
            create_posting(&db, venue.id, position.id, 0, None, "owner1".to_string()).await;
        assert!(matches!(result, Err(Error::InvalidSalary { input: _ })));

        let result =
            create_posting(&db, 999, position.id, 100, None, "owner1".to_string()).await;
        assert!(matches!(result, Err(Error::VenueNotFound { name: _ })));

        let result = create_posting(&db, venue.id, 999, 100, None, "owner1".to_string()).await;
        assert!(matches!(result, Err(Error::PositionNotFound { name: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_posting_lifecycle() -> Result<()> {
        let (db, venue, position) = setup_with_venue_and_position().await?;

        let posting = create_posting(
            &db,
            venue.id,
            position.id,
            150_000,
            Some("Weekend shifts".to_string()),
            "owner1".to_string(),
        )
        .await?;
        assert!(posting.open);
        assert!(posting.message_id.is_none());

        let attached =
            attach_message(&db, posting.id, "111".to_string(), "222".to_string()).await?;
        assert_eq!(attached.channel_id.as_deref(), Some("111"));
        assert_eq!(attached.message_id.as_deref(), Some("222"));

        let open = get_open_postings(&db).await?;
        assert_eq!(open.len(), 1);

        let closed = close_posting(&db, posting.id).await?;
        assert!(!closed.open);
        assert!(get_open_postings(&db).await?.is_empty());

        // Closing again is a no-op
        let closed_again = close_posting(&db, posting.id).await?;
        assert!(!closed_again.open);

        Ok(())
    }

    #[tokio::test]
    async fn test_close_missing_posting() -> Result<()> {
        let db = setup_test_db().await?;

        let result = close_posting(&db, 999).await;
        assert!(matches!(result, Err(Error::PostingNotFound { id: 999 })));

        Ok(())
    }
}
