//! Crisis message business logic.
//!
//! Users write supportive messages to their future selves in calm moments;
//! during a crisis the active ones are shown back. Messages can be edited,
//! deactivated without deleting, or removed entirely, always scoped to
//! their owner.

use crate::{
    entities::{CrisisMessage, crisis_message},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};

fn validate_message(message: &str) -> Result<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            message: "Crisis message cannot be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Stores a new crisis message for the user, active by default.
pub async fn create_crisis_message(
    db: &DatabaseConnection,
    user_id: i64,
    message: String,
) -> Result<crisis_message::Model> {
    let message = validate_message(&message)?;

    let now = Utc::now();
    let active = crisis_message::ActiveModel {
        user_id: Set(user_id),
        message: Set(message),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    active.insert(db).await.map_err(Into::into)
}

/// Lists the user's active messages, newest first. Deactivated messages
/// are kept in storage but not returned.
pub async fn get_crisis_messages(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<crisis_message::Model>> {
    CrisisMessage::find()
        .filter(crisis_message::Column::UserId.eq(user_id))
        .filter(crisis_message::Column::IsActive.eq(true))
        .order_by_desc(crisis_message::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Updates the text or active flag of a message owned by the user.
pub async fn update_crisis_message(
    db: &DatabaseConnection,
    message_id: i64,
    user_id: i64,
    message: Option<String>,
    is_active: Option<bool>,
) -> Result<crisis_message::Model> {
    let existing = CrisisMessage::find_by_id(message_id)
        .filter(crisis_message::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .ok_or(Error::RecordNotFound {
            entity: "crisis message",
            id: message_id,
        })?;

    let mut active: crisis_message::ActiveModel = existing.into();
    if let Some(text) = message {
        active.message = Set(validate_message(&text)?);
    }
    if let Some(flag) = is_active {
        active.is_active = Set(flag);
    }
    active.updated_at = Set(Utc::now());

    active.update(db).await.map_err(Into::into)
}

/// Deletes a message owned by the user.
pub async fn delete_crisis_message(
    db: &DatabaseConnection,
    message_id: i64,
    user_id: i64,
) -> Result<()> {
    let result = CrisisMessage::delete_many()
        .filter(crisis_message::Column::Id.eq(message_id))
        .filter(crisis_message::Column::UserId.eq(user_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::RecordNotFound {
            entity: "crisis message",
            id: message_id,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_and_list_active_messages() -> Result<()> {
        let db = setup_test_db().await?;

        create_crisis_message(&db, 1, "You have goals worth more than a bet".to_string()).await?;
        let second =
            create_crisis_message(&db, 1, "Call your brother instead".to_string()).await?;

        update_crisis_message(&db, second.id, 1, None, Some(false)).await?;

        let messages = get_crisis_messages(&db, 1).await?;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, "You have goals worth more than a bet");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_empty_message() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_crisis_message(&db, 1, "  \n ".to_string()).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_edits_text() -> Result<()> {
        let db = setup_test_db().await?;

        let message = create_crisis_message(&db, 1, "Original".to_string()).await?;
        let updated =
            update_crisis_message(&db, message.id, 1, Some("Rewritten".to_string()), None).await?;

        assert_eq!(updated.message, "Rewritten");
        assert!(updated.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn test_operations_scoped_to_owner() -> Result<()> {
        let db = setup_test_db().await?;

        let message = create_crisis_message(&db, 1, "Mine".to_string()).await?;

        let result = update_crisis_message(&db, message.id, 2, None, Some(false)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::RecordNotFound {
                entity: "crisis message",
                ..
            }
        ));

        assert!(delete_crisis_message(&db, message.id, 2).await.is_err());
        delete_crisis_message(&db, message.id, 1).await?;
        assert!(get_crisis_messages(&db, 1).await?.is_empty());

        Ok(())
    }
}
