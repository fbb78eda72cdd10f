//! Monthly betting-spend tracking business logic.
//!
//! Accumulates betting spend against the betting share of the leisure
//! budget, resetting automatically when the calendar month changes. The
//! reset is applied before the triggering operation takes effect: a write
//! that crosses a month boundary starts the new month at the written
//! amount, and a read that crosses one persists a zeroed accumulator and
//! returns zero. All read-modify-write sequences run inside a database
//! transaction so concurrent requests for the same user cannot lose
//! updates. Threshold timestamps record the first crossing of 80% and 95%
//! of the betting limit within a month and are cleared on rollover.

use crate::{
    core::leisure,
    entities::{FinancialProfile, financial_profile},
    errors::{Error, Result},
};
use chrono::{Datelike, Utc};
use sea_orm::{Set, TransactionTrait, prelude::*};

/// Spend ratio at which the first warning fires, in percent.
pub const WARNING_THRESHOLD_PERCENT: i64 = 80;
/// Spend ratio at which the critical warning fires, in percent.
pub const CRITICAL_THRESHOLD_PERCENT: i64 = 95;

/// Snapshot of a user's betting spend against their monthly limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpendingStatus {
    /// Spend accumulated this calendar month, in cents
    pub spent: i64,
    /// Monthly betting limit, in cents; 0 when profile or allocation is missing
    pub limit: i64,
    /// Limit minus spend; negative when the limit is already exceeded
    pub remaining: i64,
    /// Spend as a percentage of the limit; 0 when there is no limit
    pub ratio_percent: f64,
}

/// True when `last_reset` falls in a different calendar month (or year)
/// than `now`, meaning the accumulator is stale.
#[must_use]
pub fn needs_monthly_reset(last_reset: DateTimeUtc, now: DateTimeUtc) -> bool {
    last_reset.year() != now.year() || last_reset.month() != now.month()
}

/// Spend as a percentage of the limit, for threshold comparisons.
/// Returns 0 when there is no limit to compare against.
#[must_use]
pub fn spending_ratio(spent: i64, limit: i64) -> f64 {
    if limit == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    {
        (spent as f64 / limit as f64) * 100.0
    }
}

/// Adds betting spend to the user's monthly accumulator.
///
/// Requires an existing financial profile. If the calendar month has
/// rolled over since the last reset, the accumulator starts fresh at
/// `amount` rather than stacking on stale state. Without a rollover the
/// accumulator is incremented in a single UPDATE statement so two
/// concurrent spends both land. Threshold crossings are stamped before
/// the transaction commits.
pub async fn add_betting_spending<C>(
    db: &C,
    user_id: i64,
    amount: i64,
) -> Result<financial_profile::Model>
where
    C: ConnectionTrait + TransactionTrait,
{
    if amount <= 0 {
        return Err(Error::InvalidAmount { amount });
    }

    let txn = db.begin().await?;

    let profile = crate::core::distribution::get_financial_profile(&txn, user_id)
        .await?
        .ok_or(Error::ProfileNotFound { user_id })?;

    let now = Utc::now();

    if needs_monthly_reset(profile.last_reset_date, now) {
        let mut active: financial_profile::ActiveModel = profile.into();
        active.betting_spent_this_month = Set(amount);
        active.last_reset_date = Set(now);
        active.notified_at_80_percent = Set(None);
        active.notified_at_95_percent = Set(None);
        active.updated_at = Set(now);
        active.update(&txn).await?;
    } else {
        use sea_orm::sea_query::Expr;

        // Atomic increment: betting_spent_this_month = betting_spent_this_month + amount
        FinancialProfile::update_many()
            .col_expr(
                financial_profile::Column::BettingSpentThisMonth,
                Expr::col(financial_profile::Column::BettingSpentThisMonth).add(amount),
            )
            .col_expr(financial_profile::Column::UpdatedAt, Expr::value(now))
            .filter(financial_profile::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
    }

    let updated = crate::core::distribution::get_financial_profile(&txn, user_id)
        .await?
        .ok_or(Error::ProfileNotFound { user_id })?;

    let limit = leisure::calculate_betting_limit(&txn, user_id).await?;
    let updated = mark_threshold_crossings(&txn, updated, limit, now).await?;

    txn.commit().await?;

    Ok(updated)
}

/// Stamps the 80%/95% notification timestamps the first time cumulative
/// spend crosses each threshold within the month.
async fn mark_threshold_crossings<C>(
    db: &C,
    profile: financial_profile::Model,
    limit: i64,
    now: DateTimeUtc,
) -> Result<financial_profile::Model>
where
    C: ConnectionTrait,
{
    if limit <= 0 {
        return Ok(profile);
    }

    let spent = profile.betting_spent_this_month;
    let stamp_warning =
        spent * 100 >= limit * WARNING_THRESHOLD_PERCENT && profile.notified_at_80_percent.is_none();
    let stamp_critical = spent * 100 >= limit * CRITICAL_THRESHOLD_PERCENT
        && profile.notified_at_95_percent.is_none();

    if !stamp_warning && !stamp_critical {
        return Ok(profile);
    }

    let mut active: financial_profile::ActiveModel = profile.into();
    if stamp_warning {
        active.notified_at_80_percent = Set(Some(now));
    }
    if stamp_critical {
        active.notified_at_95_percent = Set(Some(now));
    }
    active.update(db).await.map_err(Into::into)
}

/// Returns the betting spend accumulated this calendar month.
///
/// A read that crosses a month boundary persists the reset before
/// answering, so subsequent writes start from zero. A user without a
/// profile reads as zero spend.
pub async fn get_betting_spent_this_month(db: &DatabaseConnection, user_id: i64) -> Result<i64> {
    let Some(profile) = crate::core::distribution::get_financial_profile(db, user_id).await? else {
        return Ok(0);
    };

    let now = Utc::now();
    if !needs_monthly_reset(profile.last_reset_date, now) {
        return Ok(profile.betting_spent_this_month);
    }

    use sea_orm::sea_query::Expr;

    // Conditional on the observed reset marker: if a concurrent operation
    // already rolled the month over, this update matches nothing and the
    // fresh accumulator is re-read instead of being clobbered.
    let result = FinancialProfile::update_many()
        .col_expr(
            financial_profile::Column::BettingSpentThisMonth,
            Expr::value(0_i64),
        )
        .col_expr(financial_profile::Column::LastResetDate, Expr::value(now))
        .col_expr(
            financial_profile::Column::NotifiedAt80Percent,
            Expr::value(None::<DateTimeUtc>),
        )
        .col_expr(
            financial_profile::Column::NotifiedAt95Percent,
            Expr::value(None::<DateTimeUtc>),
        )
        .col_expr(financial_profile::Column::UpdatedAt, Expr::value(now))
        .filter(financial_profile::Column::UserId.eq(user_id))
        .filter(financial_profile::Column::LastResetDate.eq(profile.last_reset_date))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        let current = crate::core::distribution::get_financial_profile(db, user_id).await?;
        return Ok(current.map_or(0, |p| p.betting_spent_this_month));
    }

    Ok(0)
}

/// Computes the user's current spend position against their betting limit.
/// Performs the same month-rollover side effect as a spend read.
pub async fn get_spending_status(db: &DatabaseConnection, user_id: i64) -> Result<SpendingStatus> {
    let spent = get_betting_spent_this_month(db, user_id).await?;
    let limit = leisure::calculate_betting_limit(db, user_id).await?;

    Ok(SpendingStatus {
        spent,
        limit,
        remaining: limit - spent,
        ratio_percent: spending_ratio(spent, limit),
    })
}
