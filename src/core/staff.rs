//! Staff member and qualification business logic.
//!
//! Staff records are created lazily the first time a user shows up, and
//! qualifications link them to positions with an optional trainer flag.
//! Granting an existing qualification upgrades the trainer flag rather than
//! duplicating the row.

use crate::{
    entities::{Qualification, StaffMember, qualification, staff_member},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, QueryOrder, Set, prelude::*};

/// Finds a staff member by their Discord user ID.
pub async fn get_staff_member_by_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Option<staff_member::Model>> {
    StaffMember::find()
        .filter(staff_member::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a staff member by their database ID.
pub async fn get_staff_member_by_id(
    db: &DatabaseConnection,
    staff_member_id: i64,
) -> Result<Option<staff_member::Model>> {
    StaffMember::find_by_id(staff_member_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns the staff record for a Discord user, creating it on first contact.
pub async fn get_or_create_staff_member(
    db: &DatabaseConnection,
    user_id: &str,
    display_name: Option<&str>,
) -> Result<staff_member::Model> {
    if let Some(existing) = get_staff_member_by_user(db, user_id).await? {
        return Ok(existing);
    }

    let member = staff_member::ActiveModel {
        user_id: Set(user_id.to_string()),
        display_name: Set(display_name.map(ToString::to_string)),
        on_hiatus: Set(false),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    member.insert(db).await.map_err(Into::into)
}

/// Sets the hiatus flag on a staff member, persisting immediately.
pub async fn set_hiatus(
    db: &DatabaseConnection,
    staff_member_id: i64,
    on_hiatus: bool,
) -> Result<staff_member::Model> {
    let member = get_staff_member_by_id(db, staff_member_id)
        .await?
        .ok_or_else(|| Error::Config {
            message: format!("Staff member #{staff_member_id} not found"),
        })?;

    let mut active: staff_member::ActiveModel = member.into();
    active.on_hiatus = Set(on_hiatus);
    active.update(db).await.map_err(Into::into)
}

/// Updates a staff member's display name, persisting immediately.
pub async fn set_display_name(
    db: &DatabaseConnection,
    staff_member_id: i64,
    display_name: Option<String>,
) -> Result<staff_member::Model> {
    let member = get_staff_member_by_id(db, staff_member_id)
        .await?
        .ok_or_else(|| Error::Config {
            message: format!("Staff member #{staff_member_id} not found"),
        })?;

    let mut active: staff_member::ActiveModel = member.into();
    active.display_name = Set(display_name);
    active.update(db).await.map_err(Into::into)
}

/// Grants a qualification, upserting on the (staff member, position) pair.
///
/// If the member already holds the qualification, the trainer flag is only
/// ever upgraded; use [`revoke_qualification`] to take a qualification away.
pub async fn grant_qualification(
    db: &DatabaseConnection,
    staff_member_id: i64,
    position_id: i64,
    is_trainer: bool,
    granted_by: &str,
) -> Result<qualification::Model> {
    let existing = Qualification::find()
        .filter(qualification::Column::StaffMemberId.eq(staff_member_id))
        .filter(qualification::Column::PositionId.eq(position_id))
        .one(db)
        .await?;

    if let Some(found) = existing {
        if is_trainer && !found.is_trainer {
            let mut active: qualification::ActiveModel = found.into();
            active.is_trainer = Set(true);
            active.granted_by = Set(granted_by.to_string());
            active.granted_at = Set(chrono::Utc::now().naive_utc());
            return active.update(db).await.map_err(Into::into);
        }
        return Ok(found);
    }

    let qualification = qualification::ActiveModel {
        staff_member_id: Set(staff_member_id),
        position_id: Set(position_id),
        is_trainer: Set(is_trainer),
        granted_by: Set(granted_by.to_string()),
        granted_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    qualification.insert(db).await.map_err(Into::into)
}

/// Revokes a qualification. Returns false when the member never held it.
pub async fn revoke_qualification(
    db: &DatabaseConnection,
    staff_member_id: i64,
    position_id: i64,
) -> Result<bool> {
    let result = Qualification::delete_many()
        .filter(qualification::Column::StaffMemberId.eq(staff_member_id))
        .filter(qualification::Column::PositionId.eq(position_id))
        .exec(db)
        .await?;

    Ok(result.rows_affected > 0)
}

/// Lists a member's qualifications, newest first.
pub async fn get_qualifications_for_member(
    db: &DatabaseConnection,
    staff_member_id: i64,
) -> Result<Vec<qualification::Model>> {
    Qualification::find()
        .filter(qualification::Column::StaffMemberId.eq(staff_member_id))
        .order_by_desc(qualification::Column::GrantedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists staff who can train a position, excluding members on hiatus.
pub async fn list_trainers_for_position(
    db: &DatabaseConnection,
    position_id: i64,
) -> Result<Vec<staff_member::Model>> {
    let trainer_ids: Vec<i64> = Qualification::find()
        .filter(qualification::Column::PositionId.eq(position_id))
        .filter(qualification::Column::IsTrainer.eq(true))
        .all(db)
        .await?
        .into_iter()
        .map(|q| q.staff_member_id)
        .collect();

    if trainer_ids.is_empty() {
        return Ok(Vec::new());
    }

    StaffMember::find()
        .filter(staff_member::Column::Id.is_in(trainer_ids))
        .filter(staff_member::Column::OnHiatus.eq(false))
        .order_by_asc(staff_member::Column::UserId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Checks whether a Discord user may train a position.
pub async fn is_trainer_for(
    db: &DatabaseConnection,
    user_id: &str,
    position_id: i64,
) -> Result<bool> {
    let Some(member) = get_staff_member_by_user(db, user_id).await? else {
        return Ok(false);
    };

    let qualification = Qualification::find()
        .filter(qualification::Column::StaffMemberId.eq(member.id))
        .filter(qualification::Column::PositionId.eq(position_id))
        .filter(qualification::Column::IsTrainer.eq(true))
        .one(db)
        .await?;

    Ok(qualification.is_some())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_position, create_test_staff_member, setup_test_db};

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;

        let first = get_or_create_staff_member(&db, "user123", Some("Aster")).await?;
        let second = get_or_create_staff_member(&db, "user123", None).await?;

        assert_eq!(first.id, second.id);
        assert_eq!(second.display_name.as_deref(), Some("Aster"));
        assert!(!first.on_hiatus);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_hiatus() -> Result<()> {
        let db = setup_test_db().await?;
        let member = create_test_staff_member(&db, "user123").await?;

        let updated = set_hiatus(&db, member.id, true).await?;
        assert!(updated.on_hiatus);

        let reloaded = get_staff_member_by_id(&db, member.id).await?.unwrap();
        assert!(reloaded.on_hiatus);

        let result = set_hiatus(&db, 999, true).await;
        assert!(matches!(result, Err(Error::Config { message: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_grant_qualification_upserts() -> Result<()> {
        let db = setup_test_db().await?;
        let member = create_test_staff_member(&db, "user123").await?;
        let position = create_test_position(&db, "Bartender").await?;

        let first = grant_qualification(&db, member.id, position.id, false, "granter").await?;
        assert!(!first.is_trainer);

        // Re-granting does not duplicate
        let second = grant_qualification(&db, member.id, position.id, false, "granter").await?;
        assert_eq!(first.id, second.id);

        // Upgrade to trainer
        let upgraded = grant_qualification(&db, member.id, position.id, true, "lead").await?;
        assert_eq!(first.id, upgraded.id);
        assert!(upgraded.is_trainer);
        assert_eq!(upgraded.granted_by, "lead");

        // A trainer grant never downgrades
        let still_trainer =
            grant_qualification(&db, member.id, position.id, false, "granter").await?;
        assert!(still_trainer.is_trainer);

        let all = get_qualifications_for_member(&db, member.id).await?;
        assert_eq!(all.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_revoke_qualification() -> Result<()> {
        let db = setup_test_db().await?;
        let member = create_test_staff_member(&db, "user123").await?;
        let position = create_test_position(&db, "Bartender").await?;

        grant_qualification(&db, member.id, position.id, false, "granter").await?;

        assert!(revoke_qualification(&db, member.id, position.id).await?);
        assert!(!revoke_qualification(&db, member.id, position.id).await?);

        let all = get_qualifications_for_member(&db, member.id).await?;
        assert!(all.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_list_trainers_excludes_hiatus_and_non_trainers() -> Result<()> {
        let db = setup_test_db().await?;
        let position = create_test_position(&db, "Bartender").await?;

        let trainer = create_test_staff_member(&db, "trainer").await?;
        let trainee = create_test_staff_member(&db, "trainee").await?;
        let away = create_test_staff_member(&db, "away").await?;

        grant_qualification(&db, trainer.id, position.id, true, "lead").await?;
        grant_qualification(&db, trainee.id, position.id, false, "lead").await?;
        grant_qualification(&db, away.id, position.id, true, "lead").await?;
        set_hiatus(&db, away.id, true).await?;

        let trainers = list_trainers_for_position(&db, position.id).await?;
        assert_eq!(trainers.len(), 1);
        assert_eq!(trainers[0].id, trainer.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_is_trainer_for() -> Result<()> {
        let db = setup_test_db().await?;
        let position = create_test_position(&db, "Bartender").await?;
        let member = create_test_staff_member(&db, "user123").await?;

        assert!(!is_trainer_for(&db, "user123", position.id).await?);
        assert!(!is_trainer_for(&db, "stranger", position.id).await?);

        grant_qualification(&db, member.id, position.id, true, "lead").await?;
        assert!(is_trainer_for(&db, "user123", position.id).await?);

        Ok(())
    }
}
