//! Avoided bet entity - Append-only log of amounts the user chose not to
//! wager. Each record is a victory over the impulse to bet.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Avoided bet database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "avoided_bets")]
pub struct Model {
    /// Unique identifier for the log entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Amount that would have been wagered, in cents
    pub amount: i64,
    /// How the user was feeling at the time, free text
    pub emotional_context: Option<String>,
    /// When the entry was logged
    pub created_at: DateTimeUtc,
}

/// `AvoidedBet` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
