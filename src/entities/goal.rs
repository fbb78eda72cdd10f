//! Goal entity - A tangible savings target that motivates not gambling,
//! e.g. "New TV" or "Beach trip". Owned and managed by one user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Goal database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "goals")]
pub struct Model {
    /// Unique identifier for the goal
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Short description of the desired item
    pub title: String,
    /// Price of the item in cents
    pub target_amount: i64,
    /// Optional picture of the item
    pub image_url: Option<String>,
    /// Whether the goal has been reached
    pub is_completed: bool,
    /// When the goal was marked completed
    pub completed_at: Option<DateTimeUtc>,
    /// When the goal was created
    pub created_at: DateTimeUtc,
    /// When the goal was last modified
    pub updated_at: DateTimeUtc,
}

/// `Goal` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
