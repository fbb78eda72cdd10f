//! User hobby entity - An alternative activity the user enjoys, offered
//! as a suggestion when they report a gambling access attempt.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User hobby database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_hobbies")]
pub struct Model {
    /// Unique identifier for the hobby
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Name of the hobby
    pub name: String,
    /// When the hobby was registered
    pub created_at: DateTimeUtc,
}

/// `UserHobby` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
