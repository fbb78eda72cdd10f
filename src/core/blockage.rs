//! Temporary access blockage business logic.
//!
//! A blockage is a time-boxed commitment device: once activated it cannot
//! be shortened or revoked, and it ends only when the clock passes
//! `blocked_until`. Activations append immutable records; overlapping
//! blocks coexist and the most recently created active record answers
//! status queries. History and aggregate statistics are derived views over
//! all records for the user.

use crate::{
    entities::{BetsBlockage, bets_blockage},
    errors::{Error, Result},
};
use chrono::{Duration, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Block length applied when the user does not choose one.
pub const DEFAULT_BLOCK_MINUTES: i64 = 30;

/// Outcome of a successful activation.
#[derive(Debug, Clone)]
pub struct BlockageActivation {
    /// Human-readable confirmation naming the chosen duration
    pub message: String,
    /// Instant at which the new block expires
    pub blocked_until: DateTimeUtc,
}

/// Current block state for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockageStatus {
    /// True while any block is still running
    pub is_blocked: bool,
    /// Seconds until the newest active block expires, rounded up; 0 when unblocked
    pub remaining_seconds: i64,
    /// Minutes until expiry, rounded up from the remaining seconds
    pub remaining_minutes: i64,
}

/// One historical block with its derived length and completion state.
#[derive(Debug, Clone)]
pub struct BlockageHistoryEntry {
    /// The stored record
    pub blockage: bets_blockage::Model,
    /// Planned length of the block in whole minutes
    pub duration_minutes: i64,
    /// True once the block has run to its natural expiry
    pub completed: bool,
}

/// Aggregate statistics over a user's block history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockageStats {
    /// Number of blocks ever activated
    pub total_blockages: u64,
    /// Blocks whose expiry has already passed
    pub successful_blockages: u64,
    /// Sum of planned block lengths in minutes
    pub total_minutes_blocked: i64,
}

/// Activates a new betting block for the user.
///
/// Durations below one minute are rejected before anything is written.
/// When no duration is given the default of 30 minutes applies. An
/// existing active block does not prevent activation; records coexist.
pub async fn activate_blockage(
    db: &DatabaseConnection,
    user_id: i64,
    duration_minutes: Option<i64>,
) -> Result<BlockageActivation> {
    let minutes = duration_minutes.unwrap_or(DEFAULT_BLOCK_MINUTES);
    if minutes < 1 {
        return Err(Error::InvalidDuration { minutes });
    }

    let now = Utc::now();
    let blocked_until = now + Duration::minutes(minutes);

    let active = bets_blockage::ActiveModel {
        user_id: Set(user_id),
        blocked_until: Set(blocked_until),
        reason: Set(format!("Manual betting block for {minutes} minutes")),
        created_at: Set(now),
        ..Default::default()
    };
    active.insert(db).await?;

    tracing::info!(user_id, minutes, "betting block activated");

    Ok(BlockageActivation {
        message: format!("Betting block activated for {minutes} minutes"),
        blocked_until,
    })
}

/// Finds the most recently created block that is still running, if any.
pub async fn get_active_blockage(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Option<bets_blockage::Model>> {
    BetsBlockage::find()
        .filter(bets_blockage::Column::UserId.eq(user_id))
        .filter(bets_blockage::Column::BlockedUntil.gt(Utc::now()))
        .order_by_desc(bets_blockage::Column::CreatedAt)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Reports whether the user is currently blocked and for how much longer.
///
/// Remaining time is measured against the newest active record and rounded
/// up, so a block never reads as expired while any of it is left.
pub async fn get_blockage_status(db: &DatabaseConnection, user_id: i64) -> Result<BlockageStatus> {
    let Some(blockage) = get_active_blockage(db, user_id).await? else {
        return Ok(BlockageStatus {
            is_blocked: false,
            remaining_seconds: 0,
            remaining_minutes: 0,
        });
    };

    let remaining_ms = (blockage.blocked_until - Utc::now())
        .num_milliseconds()
        .max(0);
    let remaining_seconds = (remaining_ms + 999) / 1000;
    let remaining_minutes = (remaining_seconds + 59) / 60;

    Ok(BlockageStatus {
        is_blocked: remaining_seconds > 0,
        remaining_seconds,
        remaining_minutes,
    })
}

/// Returns the user's full block history, newest first.
pub async fn get_blockage_history(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<BlockageHistoryEntry>> {
    let now = Utc::now();
    let records = BetsBlockage::find()
        .filter(bets_blockage::Column::UserId.eq(user_id))
        .order_by_desc(bets_blockage::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(records
        .into_iter()
        .map(|blockage| {
            let duration_minutes = (blockage.blocked_until - blockage.created_at).num_minutes();
            let completed = blockage.blocked_until <= now;
            BlockageHistoryEntry {
                blockage,
                duration_minutes,
                completed,
            }
        })
        .collect())
}

/// Aggregates the user's block history into totals.
///
/// A block counts as successful once its expiry has passed; with no
/// cancellation path, running to completion is the only way a block ends.
pub async fn get_blockage_stats(db: &DatabaseConnection, user_id: i64) -> Result<BlockageStats> {
    let history = get_blockage_history(db, user_id).await?;

    let total_blockages = history.len() as u64;
    let successful_blockages = history.iter().filter(|entry| entry.completed).count() as u64;
    let total_minutes_blocked = history.iter().map(|entry| entry.duration_minutes).sum();

    Ok(BlockageStats {
        total_blockages,
        successful_blockages,
        total_minutes_blocked,
    })
}
