//! Leisure sub-allocation business logic.
//!
//! Splits the leisure budget across five user-configurable percentage
//! categories (betting, cinema, hobbies, travel, other). Weights are
//! expected to sum to 100 but each category amount is computed
//! independently, so a skewed total never corrupts the arithmetic of the
//! others; it is surfaced as a warning instead.

use crate::{
    config::allocation::SplitConfig,
    entities::{LeisureAllocation, leisure_allocation},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};

/// Partial update for the five category weights. `None` fields keep their
/// current value, or the configured default when the allocation is first
/// created.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocationInput {
    /// New weight for the betting category
    pub betting_percentage: Option<i32>,
    /// New weight for the cinema category
    pub cinema_percentage: Option<i32>,
    /// New weight for the hobbies category
    pub hobbies_percentage: Option<i32>,
    /// New weight for the travel category
    pub travel_percentage: Option<i32>,
    /// New weight for everything else
    pub other_percentage: Option<i32>,
}

/// Minor-unit amounts per leisure category for a given leisure budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAmounts {
    /// Amount available for betting
    pub betting: i64,
    /// Amount available for cinema
    pub cinema: i64,
    /// Amount available for hobbies
    pub hobbies: i64,
    /// Amount available for travel
    pub travel: i64,
    /// Amount available for everything else
    pub other: i64,
}

fn validate_percentage(value: i32) -> Result<()> {
    if (0..=100).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidPercentage { value })
    }
}

/// Finds the leisure allocation for a user, returning None if never configured.
pub async fn get_leisure_allocation<C>(
    db: &C,
    user_id: i64,
) -> Result<Option<leisure_allocation::Model>>
where
    C: ConnectionTrait,
{
    LeisureAllocation::find()
        .filter(leisure_allocation::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates or updates the leisure allocation for a user.
///
/// On first creation, unspecified categories take the configured default
/// split; on update they keep their stored value. Each submitted weight
/// must lie in `[0, 100]`. A resulting set that does not sum to 100 is
/// accepted but logged, since the category amounts are computed
/// independently anyway.
pub async fn create_or_update_leisure_allocation(
    db: &DatabaseConnection,
    user_id: i64,
    input: AllocationInput,
    defaults: &SplitConfig,
) -> Result<leisure_allocation::Model> {
    for value in [
        input.betting_percentage,
        input.cinema_percentage,
        input.hobbies_percentage,
        input.travel_percentage,
        input.other_percentage,
    ]
    .into_iter()
    .flatten()
    {
        validate_percentage(value)?;
    }

    let now = Utc::now();
    let existing = get_leisure_allocation(db, user_id).await?;

    let allocation = if let Some(allocation) = existing {
        let mut active: leisure_allocation::ActiveModel = allocation.into();
        if let Some(v) = input.betting_percentage {
            active.betting_percentage = Set(v);
        }
        if let Some(v) = input.cinema_percentage {
            active.cinema_percentage = Set(v);
        }
        if let Some(v) = input.hobbies_percentage {
            active.hobbies_percentage = Set(v);
        }
        if let Some(v) = input.travel_percentage {
            active.travel_percentage = Set(v);
        }
        if let Some(v) = input.other_percentage {
            active.other_percentage = Set(v);
        }
        active.updated_at = Set(now);
        active.update(db).await?
    } else {
        let active = leisure_allocation::ActiveModel {
            user_id: Set(user_id),
            betting_percentage: Set(input
                .betting_percentage
                .unwrap_or(defaults.betting_percentage)),
            cinema_percentage: Set(input.cinema_percentage.unwrap_or(defaults.cinema_percentage)),
            hobbies_percentage: Set(input
                .hobbies_percentage
                .unwrap_or(defaults.hobbies_percentage)),
            travel_percentage: Set(input.travel_percentage.unwrap_or(defaults.travel_percentage)),
            other_percentage: Set(input.other_percentage.unwrap_or(defaults.other_percentage)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        active.insert(db).await?
    };

    let total = allocation.betting_percentage
        + allocation.cinema_percentage
        + allocation.hobbies_percentage
        + allocation.travel_percentage
        + allocation.other_percentage;
    if total != 100 {
        tracing::warn!(user_id, total, "leisure split does not sum to 100%");
    }

    Ok(allocation)
}

/// Computes one category's share of the leisure budget, rounded down.
#[must_use]
pub const fn category_amount(leisure_budget: i64, percentage: i32) -> i64 {
    leisure_budget * percentage as i64 / 100
}

/// Computes every category's share of the leisure budget.
#[must_use]
pub const fn split_leisure_budget(
    leisure_budget: i64,
    allocation: &leisure_allocation::Model,
) -> CategoryAmounts {
    CategoryAmounts {
        betting: category_amount(leisure_budget, allocation.betting_percentage),
        cinema: category_amount(leisure_budget, allocation.cinema_percentage),
        hobbies: category_amount(leisure_budget, allocation.hobbies_percentage),
        travel: category_amount(leisure_budget, allocation.travel_percentage),
        other: category_amount(leisure_budget, allocation.other_percentage),
    }
}

/// Monthly betting limit for a user: the betting share of their leisure
/// budget, or 0 when either the profile or the allocation is missing.
pub async fn calculate_betting_limit<C>(db: &C, user_id: i64) -> Result<i64>
where
    C: ConnectionTrait,
{
    let profile = crate::core::distribution::get_financial_profile(db, user_id).await?;
    let allocation = get_leisure_allocation(db, user_id).await?;

    match (profile, allocation) {
        (Some(profile), Some(allocation)) => Ok(category_amount(
            profile.leisure_budget,
            allocation.betting_percentage,
        )),
        _ => Ok(0),
    }
}
