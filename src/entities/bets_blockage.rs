//! Bets blockage entity - A time-boxed self-restriction record. Once
//! created it cannot be shortened or revoked; the block ends only by
//! clock expiry. A user may hold any number of historical records.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bets blockage database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bets_blockages")]
pub struct Model {
    /// Unique identifier for the blockage
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Instant at which the block expires
    pub blocked_until: DateTimeUtc,
    /// Why the block was activated, free text
    pub reason: String,
    /// When the block was activated
    pub created_at: DateTimeUtc,
}

/// `BetsBlockage` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
