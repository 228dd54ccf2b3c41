//! Background check business logic.
//!
//! Checks move pending -> approved/denied exactly once. A user can have at
//! most one pending check at a time; resubmission is allowed after review.

use crate::{
    entities::{BackgroundCheck, background_check},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, QueryOrder, Set, prelude::*};

/// Review status for a check awaiting a decision.
pub const STATUS_PENDING: &str = "pending";
/// Review status after approval.
pub const STATUS_APPROVED: &str = "approved";
/// Review status after denial.
pub const STATUS_DENIED: &str = "denied";

/// Submits a new background check for review.
///
/// Rejects the submission when the applicant already has a pending check or
/// when the character name is empty.
pub async fn submit_check(
    db: &DatabaseConnection,
    user_id: &str,
    character_name: String,
    experience: String,
    age_verified: bool,
) -> Result<background_check::Model> {
    if character_name.trim().is_empty() {
        return Err(Error::Config {
            message: "Character name cannot be empty".to_string(),
        });
    }

    let pending = BackgroundCheck::find()
        .filter(background_check::Column::UserId.eq(user_id))
        .filter(background_check::Column::Status.eq(STATUS_PENDING))
        .one(db)
        .await?;

    if pending.is_some() {
        return Err(Error::CheckAlreadyPending {
            user_id: user_id.to_string(),
        });
    }

    let check = background_check::ActiveModel {
        user_id: Set(user_id.to_string()),
        character_name: Set(character_name.trim().to_string()),
        experience: Set(experience),
        age_verified: Set(age_verified),
        status: Set(STATUS_PENDING.to_string()),
        reviewer_id: Set(None),
        submitted_at: Set(chrono::Utc::now().naive_utc()),
        reviewed_at: Set(None),
        ..Default::default()
    };

    check.insert(db).await.map_err(Into::into)
}

/// Lists pending checks, oldest first, for the review queue.
pub async fn get_pending_checks(db: &DatabaseConnection) -> Result<Vec<background_check::Model>> {
    BackgroundCheck::find()
        .filter(background_check::Column::Status.eq(STATUS_PENDING))
        .order_by_asc(background_check::Column::SubmittedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a check by its unique ID.
pub async fn get_check_by_id(
    db: &DatabaseConnection,
    check_id: i64,
) -> Result<Option<background_check::Model>> {
    BackgroundCheck::find_by_id(check_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns a user's most recent check, regardless of status.
pub async fn latest_check_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Option<background_check::Model>> {
    BackgroundCheck::find()
        .filter(background_check::Column::UserId.eq(user_id))
        .order_by_desc(background_check::Column::SubmittedAt)
        .one(db)
        .await
        .map_err(Into::into)
}

async fn review_check(
    db: &DatabaseConnection,
    check_id: i64,
    reviewer_id: &str,
    status: &str,
) -> Result<background_check::Model> {
    let check = get_check_by_id(db, check_id)
        .await?
        .ok_or(Error::CheckNotFound { id: check_id })?;

    if check.status != STATUS_PENDING {
        return Err(Error::CheckAlreadyReviewed { id: check_id });
    }

    let mut active: background_check::ActiveModel = check.into();
    active.status = Set(status.to_string());
    active.reviewer_id = Set(Some(reviewer_id.to_string()));
    active.reviewed_at = Set(Some(chrono::Utc::now().naive_utc()));
    active.update(db).await.map_err(Into::into)
}

/// Approves a pending check, recording the reviewer and review time.
pub async fn approve_check(
    db: &DatabaseConnection,
    check_id: i64,
    reviewer_id: &str,
) -> Result<background_check::Model> {
    review_check(db, check_id, reviewer_id, STATUS_APPROVED).await
}

/// Denies a pending check, recording the reviewer and review time.
pub async fn deny_check(
    db: &DatabaseConnection,
    check_id: i64,
    reviewer_id: &str,
) -> Result<background_check::Model> {
    review_check(db, check_id, reviewer_id, STATUS_DENIED).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    async fn submit_default(
        db: &DatabaseConnection,
        user_id: &str,
    ) -> Result<background_check::Model> {
        submit_check(
            db,
            user_id,
            "Aster Vale".to_string(),
            "Two years tending bar at another venue".to_string(),
            true,
        )
        .await
    }

    #[tokio::test]
    async fn test_submit_check_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = submit_check(&db, "user123", "  ".to_string(), String::new(), true).await;
        assert!(matches!(result, Err(Error::Config { message: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_submit_check_rejects_second_pending() -> Result<()> {
        let db = setup_test_db().await?;

        let first = submit_default(&db, "user123").await?;
        assert_eq!(first.status, STATUS_PENDING);

        let result = submit_default(&db, "user123").await;
        assert!(matches!(result, Err(Error::CheckAlreadyPending { user_id: _ })));

        // A different user is unaffected
        submit_default(&db, "user456").await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_approve_and_resubmit() -> Result<()> {
        let db = setup_test_db().await?;
        let check = submit_default(&db, "user123").await?;

        let approved = approve_check(&db, check.id, "reviewer9").await?;
        assert_eq!(approved.status, STATUS_APPROVED);
        assert_eq!(approved.reviewer_id.as_deref(), Some("reviewer9"));
        assert!(approved.reviewed_at.is_some());

        // Once reviewed, the user may submit again
        let second = submit_default(&db, "user123").await?;
        assert_eq!(second.status, STATUS_PENDING);

        let latest = latest_check_for_user(&db, "user123").await?.unwrap();
        assert_eq!(latest.id, second.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_deny_check() -> Result<()> {
        let db = setup_test_db().await?;
        let check = submit_default(&db, "user123").await?;

        let denied = deny_check(&db, check.id, "reviewer9").await?;
        assert_eq!(denied.status, STATUS_DENIED);

        Ok(())
    }

    #[tokio::test]
    async fn test_double_review_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let check = submit_default(&db, "user123").await?;

        approve_check(&db, check.id, "reviewer9").await?;

        let result = deny_check(&db, check.id, "reviewer9").await;
        assert!(matches!(result, Err(Error::CheckAlreadyReviewed { id: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_pending_queue_is_oldest_first() -> Result<()> {
        let db = setup_test_db().await?;

        let first = submit_default(&db, "user1").await?;
        let second = submit_default(&db, "user2").await?;
        approve_check(&db, first.id, "reviewer9").await?;
        let third = submit_default(&db, "user3").await?;

        let pending = get_pending_checks(&db).await?;
        let ids: Vec<i64> = pending.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![second.id, third.id]);

        let result = get_check_by_id(&db, 999).await?;
        assert!(result.is_none());

        Ok(())
    }
}
