//! Crisis message entity - Supportive text the user wrote to their future
//! self in a moment of clarity, shown back during a crisis.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Crisis message database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "crisis_messages")]
pub struct Model {
    /// Unique identifier for the message
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// The supportive text
    pub message: String,
    /// Inactive messages are kept but not shown
    pub is_active: bool,
    /// When the message was written
    pub created_at: DateTimeUtc,
    /// When the message was last modified
    pub updated_at: DateTimeUtc,
}

/// `CrisisMessage` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
