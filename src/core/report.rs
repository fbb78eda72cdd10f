//! Report generation business logic.
//!
//! Aggregates the per-user records into the numbers the surrounding
//! application shows: recovery statistics and a budget overview combining
//! the income distribution, the leisure split, and the month's spend
//! position. All functions are framework-agnostic and return structured
//! data for the caller to format.

use crate::{
    core::{
        avoided_bets,
        distribution::{self, Distribution},
        leisure::{self, CategoryAmounts},
        spending::{self, SpendingStatus},
    },
    entities::{AvoidedBet, avoided_bet},
    errors::Result,
};
use sea_orm::prelude::*;

/// Recovery statistics across the user's avoided-bet log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStatistics {
    /// Total amount never wagered, in cents
    pub total_preserved: i64,
    /// Whole days since the last logged impulse
    pub days_without_betting: i64,
    /// Number of avoided bets ever logged
    pub total_bets_avoided: u64,
}

/// A user's full budget picture for the current month.
#[derive(Debug, Clone, Copy)]
pub struct BudgetOverview {
    /// Necessities, leisure, and savings derived from the profile
    pub distribution: Distribution,
    /// Per-category leisure amounts; absent until the split is configured
    pub categories: Option<CategoryAmounts>,
    /// Betting spend against the monthly limit
    pub spending: SpendingStatus,
}

/// Computes the user's recovery statistics. A user with no history gets
/// all zeroes rather than an error, keeping read-only views functional.
pub async fn get_statistics(db: &DatabaseConnection, user_id: i64) -> Result<UserStatistics> {
    let total_preserved = avoided_bets::get_total_preserved_money(db, user_id).await?;
    let days_without_betting = avoided_bets::get_days_without_betting(db, user_id).await?;
    let total_bets_avoided = AvoidedBet::find()
        .filter(avoided_bet::Column::UserId.eq(user_id))
        .count(db)
        .await?;

    Ok(UserStatistics {
        total_preserved,
        days_without_betting,
        total_bets_avoided,
    })
}

/// Assembles the budget overview for a user, or None when no financial
/// profile exists yet. Reading the overview performs the same month
/// rollover side effect as any other spend read.
pub async fn generate_budget_overview(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Option<BudgetOverview>> {
    let Some(profile) = distribution::get_financial_profile(db, user_id).await? else {
        return Ok(None);
    };

    let computed =
        distribution::compute_distribution(profile.monthly_income, profile.fixed_expenses);

    let categories = leisure::get_leisure_allocation(db, user_id)
        .await?
        .map(|allocation| leisure::split_leisure_budget(profile.leisure_budget, &allocation));

    let spending = spending::get_spending_status(db, user_id).await?;

    Ok(Some(BudgetOverview {
        distribution: computed,
        categories,
        spending,
    }))
}
