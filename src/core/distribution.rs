//! Income distribution business logic.
//!
//! Converts a user's declared income and fixed expenses into the three
//! budget buckets: necessities, leisure, and savings. The remainder after
//! expenses is split 3:2 between leisure and savings, with savings taking
//! whatever integer truncation leaves behind so the three buckets always
//! add back up exactly. The computed leisure budget is persisted on the
//! user's financial profile.

use crate::{
    entities::{FinancialProfile, financial_profile},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};

/// The three budget buckets derived from income and fixed expenses,
/// in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    /// Real fixed expenses; absorbs any excess when expenses exceed income
    pub necessities: i64,
    /// 60% of the post-expense remainder, rounded down
    pub leisure: i64,
    /// The rest of the remainder after leisure is taken
    pub savings: i64,
}

/// Splits income into necessities, leisure, and savings.
///
/// Inputs are clamped rather than rejected: negative values are treated as
/// zero, and when expenses exceed income the remainder is zero, leaving
/// both leisure and savings empty. For any inputs,
/// `necessities + leisure + savings == max(income, expenses)`.
#[must_use]
pub fn compute_distribution(monthly_income: i64, fixed_expenses: i64) -> Distribution {
    let income = monthly_income.max(0);
    let expenses = fixed_expenses.max(0);

    let remaining = (income - expenses).max(0);

    // 3:2 leisure:savings split of the remainder. Savings is derived by
    // subtraction so the buckets sum exactly under integer truncation.
    let leisure = remaining * 6 / 10;
    let savings = remaining - leisure;

    Distribution {
        necessities: expenses,
        leisure,
        savings,
    }
}

/// Creates or overwrites the financial profile for a user, recomputing the
/// leisure budget from the submitted income and expenses.
///
/// Insert-if-absent, update-if-present keyed on the user. An update only
/// touches the declared figures, the derived leisure budget, and
/// `updated_at`; the monthly spend accumulator and its notification marks
/// are left untouched.
pub async fn upsert_financial_profile(
    db: &DatabaseConnection,
    user_id: i64,
    monthly_income: i64,
    fixed_expenses: i64,
) -> Result<financial_profile::Model> {
    if monthly_income < 0 {
        return Err(Error::InvalidAmount {
            amount: monthly_income,
        });
    }
    if fixed_expenses < 0 {
        return Err(Error::InvalidAmount {
            amount: fixed_expenses,
        });
    }

    let distribution = compute_distribution(monthly_income, fixed_expenses);
    let now = Utc::now();

    let existing = get_financial_profile(db, user_id).await?;

    let profile = if let Some(profile) = existing {
        let mut active: financial_profile::ActiveModel = profile.into();
        active.monthly_income = Set(monthly_income);
        active.fixed_expenses = Set(fixed_expenses);
        active.leisure_budget = Set(distribution.leisure);
        active.updated_at = Set(now);
        active.update(db).await?
    } else {
        let active = financial_profile::ActiveModel {
            user_id: Set(user_id),
            monthly_income: Set(monthly_income),
            fixed_expenses: Set(fixed_expenses),
            leisure_budget: Set(distribution.leisure),
            betting_spent_this_month: Set(0),
            last_reset_date: Set(now),
            notified_at_80_percent: Set(None),
            notified_at_95_percent: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        active.insert(db).await?
    };

    Ok(profile)
}

/// Finds the financial profile for a user, returning None if not created yet.
pub async fn get_financial_profile<C>(
    db: &C,
    user_id: i64,
) -> Result<Option<financial_profile::Model>>
where
    C: ConnectionTrait,
{
    FinancialProfile::find()
        .filter(financial_profile::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[test]
    fn test_distribution_even_split() {
        let d = compute_distribution(500_000, 250_000);
        assert_eq!(d.necessities, 250_000);
        assert_eq!(d.leisure, 150_000);
        assert_eq!(d.savings, 100_000);
        assert_eq!(d.necessities + d.leisure + d.savings, 500_000);
    }

    #[test]
    fn test_distribution_high_expenses() {
        let d = compute_distribution(500_000, 300_000);
        assert_eq!(d.necessities, 300_000);
        assert_eq!(d.leisure, 120_000);
        assert_eq!(d.savings, 80_000);
        assert_eq!(d.necessities + d.leisure + d.savings, 500_000);
    }

    #[test]
    fn test_distribution_low_expenses() {
        let d = compute_distribution(500_000, 200_000);
        assert_eq!(d.necessities, 200_000);
        assert_eq!(d.leisure, 180_000);
        assert_eq!(d.savings, 120_000);
        assert_eq!(d.necessities + d.leisure + d.savings, 500_000);
    }

    #[test]
    fn test_distribution_zero_expenses() {
        let d = compute_distribution(500_000, 0);
        assert_eq!(d.necessities, 0);
        assert_eq!(d.leisure, 300_000);
        assert_eq!(d.savings, 200_000);
    }

    #[test]
    fn test_distribution_expenses_equal_income() {
        let d = compute_distribution(500_000, 500_000);
        assert_eq!(d.necessities, 500_000);
        assert_eq!(d.leisure, 0);
        assert_eq!(d.savings, 0);
    }

    #[test]
    fn test_distribution_expenses_exceed_income() {
        // Necessities absorb the excess; nothing is left for leisure or savings
        let d = compute_distribution(500_000, 600_000);
        assert_eq!(d.necessities, 600_000);
        assert_eq!(d.leisure, 0);
        assert_eq!(d.savings, 0);
        assert_eq!(d.necessities + d.leisure + d.savings, 600_000);
    }

    #[test]
    fn test_distribution_truncating_remainder() {
        let d = compute_distribution(100_000, 33_333);
        assert_eq!(d.necessities, 33_333);
        assert_eq!(d.leisure, 40_000);
        assert_eq!(d.savings, 26_667);
        assert_eq!(d.necessities + d.leisure + d.savings, 100_000);
    }

    #[test]
    fn test_distribution_three_to_two_ratio() {
        for (income, expenses) in [(500_000, 250_000), (512_345, 256_789), (100_000, 33_333)] {
            let d = compute_distribution(income, expenses);
            if d.savings > 0 {
                #[allow(clippy::cast_precision_loss)]
                let ratio = d.leisure as f64 / d.savings as f64;
                assert!((ratio - 1.5).abs() < 0.1, "ratio {ratio} not close to 3:2");
            }
        }
    }

    #[test]
    fn test_distribution_clamps_negative_inputs() {
        let d = compute_distribution(-100, -50);
        assert_eq!(d.necessities, 0);
        assert_eq!(d.leisure, 0);
        assert_eq!(d.savings, 0);
    }

    #[tokio::test]
    async fn test_upsert_creates_profile() -> Result<()> {
        let db = setup_test_db().await?;

        let profile = upsert_financial_profile(&db, 1, 500_000, 250_000).await?;

        assert_eq!(profile.user_id, 1);
        assert_eq!(profile.monthly_income, 500_000);
        assert_eq!(profile.fixed_expenses, 250_000);
        assert_eq!(profile.leisure_budget, 150_000);
        assert_eq!(profile.betting_spent_this_month, 0);
        assert!(profile.notified_at_80_percent.is_none());
        assert!(profile.notified_at_95_percent.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_overwrites_and_recomputes() -> Result<()> {
        let db = setup_test_db().await?;

        let first = upsert_financial_profile(&db, 1, 500_000, 250_000).await?;
        let second = upsert_financial_profile(&db, 1, 500_000, 200_000).await?;

        // Same row, updated in place
        assert_eq!(first.id, second.id);
        assert_eq!(second.leisure_budget, 180_000);

        let count = FinancialProfile::find().count(&db).await?;
        assert_eq!(count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_preserves_spend_accumulator() -> Result<()> {
        let db = setup_test_db().await?;

        upsert_financial_profile(&db, 1, 500_000, 250_000).await?;
        crate::test_utils::set_profile_spend_state(&db, 1, 4_000, Utc::now()).await?;

        let updated = upsert_financial_profile(&db, 1, 600_000, 250_000).await?;
        assert_eq!(updated.betting_spent_this_month, 4_000);

        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_rejects_negative_income() -> Result<()> {
        let db = setup_test_db().await?;

        let result = upsert_financial_profile(&db, 1, -1, 0).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -1 }
        ));

        // No partial write occurred
        assert!(get_financial_profile(&db, 1).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_profile_missing() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(get_financial_profile(&db, 42).await?.is_none());
        Ok(())
    }
}
