//! Avoided-bet business logic.
//!
//! Each record is an amount the user chose not to wager. The log is
//! append-only; the interesting outputs are the aggregates: total money
//! preserved and days elapsed since the last recorded impulse.

use crate::{
    entities::{AvoidedBet, avoided_bet},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};

/// Number of entries a listing returns when the caller does not choose.
pub const DEFAULT_LIST_LIMIT: u64 = 50;

/// Logs an avoided bet for the user.
pub async fn create_avoided_bet(
    db: &DatabaseConnection,
    user_id: i64,
    amount: i64,
    emotional_context: Option<String>,
) -> Result<avoided_bet::Model> {
    if amount < 0 {
        return Err(Error::InvalidAmount { amount });
    }

    let active = avoided_bet::ActiveModel {
        user_id: Set(user_id),
        amount: Set(amount),
        emotional_context: Set(emotional_context),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    active.insert(db).await.map_err(Into::into)
}

/// Lists the user's avoided bets, newest first.
pub async fn get_avoided_bets(
    db: &DatabaseConnection,
    user_id: i64,
    limit: Option<u64>,
) -> Result<Vec<avoided_bet::Model>> {
    AvoidedBet::find()
        .filter(avoided_bet::Column::UserId.eq(user_id))
        .order_by_desc(avoided_bet::Column::CreatedAt)
        .limit(limit.unwrap_or(DEFAULT_LIST_LIMIT))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Total amount the user has declined to wager, across all entries.
pub async fn get_total_preserved_money(db: &DatabaseConnection, user_id: i64) -> Result<i64> {
    let total: Option<Option<i64>> = AvoidedBet::find()
        .select_only()
        .column_as(avoided_bet::Column::Amount.sum(), "total")
        .filter(avoided_bet::Column::UserId.eq(user_id))
        .into_tuple()
        .one(db)
        .await?;

    Ok(total.flatten().unwrap_or(0))
}

/// Whole days since the user last logged an avoided bet; 0 when the log
/// is empty.
pub async fn get_days_without_betting(db: &DatabaseConnection, user_id: i64) -> Result<i64> {
    let last = AvoidedBet::find()
        .filter(avoided_bet::Column::UserId.eq(user_id))
        .order_by_desc(avoided_bet::Column::CreatedAt)
        .one(db)
        .await?;

    Ok(last.map_or(0, |entry| (Utc::now() - entry.created_at).num_days()))
}
