//! Savings goal business logic.
//!
//! Goals are tangible items the user is saving toward instead of
//! gambling. They are owner-scoped: every lookup, update, and delete is
//! keyed by (goal id, user id) so one user can never touch another's.

use crate::{
    entities::{Goal, goal},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};

const MAX_TITLE_LENGTH: usize = 255;

/// Partial update for a goal. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct GoalUpdate {
    /// New title
    pub title: Option<String>,
    /// New target amount in cents
    pub target_amount: Option<i64>,
    /// New image URL
    pub image_url: Option<String>,
    /// Mark the goal completed or reopen it
    pub is_completed: Option<bool>,
}

fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            message: "Goal title cannot be empty".to_string(),
        });
    }
    if trimmed.len() > MAX_TITLE_LENGTH {
        return Err(Error::Validation {
            message: format!("Goal title cannot exceed {MAX_TITLE_LENGTH} characters"),
        });
    }
    Ok(trimmed.to_string())
}

/// Creates a new savings goal for the user.
pub async fn create_goal(
    db: &DatabaseConnection,
    user_id: i64,
    title: String,
    target_amount: i64,
    image_url: Option<String>,
) -> Result<goal::Model> {
    let title = validate_title(&title)?;
    if target_amount < 0 {
        return Err(Error::InvalidAmount {
            amount: target_amount,
        });
    }

    let now = Utc::now();
    let active = goal::ActiveModel {
        user_id: Set(user_id),
        title: Set(title),
        target_amount: Set(target_amount),
        image_url: Set(image_url),
        is_completed: Set(false),
        completed_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    active.insert(db).await.map_err(Into::into)
}

/// Lists the user's goals, newest first.
pub async fn get_goals(db: &DatabaseConnection, user_id: i64) -> Result<Vec<goal::Model>> {
    Goal::find()
        .filter(goal::Column::UserId.eq(user_id))
        .order_by_desc(goal::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Updates a goal owned by the user.
///
/// Completing a goal stamps `completed_at`; reopening clears it.
pub async fn update_goal(
    db: &DatabaseConnection,
    goal_id: i64,
    user_id: i64,
    update: GoalUpdate,
) -> Result<goal::Model> {
    let existing = Goal::find_by_id(goal_id)
        .filter(goal::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .ok_or(Error::RecordNotFound {
            entity: "goal",
            id: goal_id,
        })?;

    let was_completed = existing.is_completed;
    let mut active: goal::ActiveModel = existing.into();

    if let Some(title) = update.title {
        active.title = Set(validate_title(&title)?);
    }
    if let Some(amount) = update.target_amount {
        if amount < 0 {
            return Err(Error::InvalidAmount { amount });
        }
        active.target_amount = Set(amount);
    }
    if let Some(url) = update.image_url {
        active.image_url = Set(Some(url));
    }

    let now = Utc::now();
    if let Some(completed) = update.is_completed {
        active.is_completed = Set(completed);
        if completed && !was_completed {
            active.completed_at = Set(Some(now));
        } else if !completed {
            active.completed_at = Set(None);
        }
    }
    active.updated_at = Set(now);

    active.update(db).await.map_err(Into::into)
}

/// Deletes a goal owned by the user.
pub async fn delete_goal(db: &DatabaseConnection, goal_id: i64, user_id: i64) -> Result<()> {
    let result = Goal::delete_many()
        .filter(goal::Column::Id.eq(goal_id))
        .filter(goal::Column::UserId.eq(user_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::RecordNotFound {
            entity: "goal",
            id: goal_id,
        });
    }

    Ok(())
}
