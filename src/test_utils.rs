//! Shared test utilities for `HelpGames`.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test records with sensible defaults.

use crate::{
    config::allocation::SplitConfig,
    core::{distribution, leisure},
    entities::{bets_blockage, financial_profile, gambling_website},
    errors::{Error, Result},
};
use chrono::Duration;
use sea_orm::{DatabaseConnection, Set, prelude::*};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a financial profile through the regular upsert path.
pub async fn create_test_profile(
    db: &DatabaseConnection,
    user_id: i64,
    monthly_income: i64,
    fixed_expenses: i64,
) -> Result<financial_profile::Model> {
    distribution::upsert_financial_profile(db, user_id, monthly_income, fixed_expenses).await
}

/// Creates a leisure allocation with the built-in default split
/// (10/20/30/20/20).
pub async fn create_test_allocation(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<crate::entities::leisure_allocation::Model> {
    leisure::create_or_update_leisure_allocation(
        db,
        user_id,
        leisure::AllocationInput::default(),
        &SplitConfig::default(),
    )
    .await
}

/// Overwrites the spend accumulator and reset marker on a user's profile,
/// bypassing the tracker. Used to simulate state left over from an
/// earlier month.
pub async fn set_profile_spend_state(
    db: &DatabaseConnection,
    user_id: i64,
    spent: i64,
    last_reset: DateTimeUtc,
) -> Result<financial_profile::Model> {
    let profile = distribution::get_financial_profile(db, user_id)
        .await?
        .ok_or(Error::ProfileNotFound { user_id })?;

    let mut active: financial_profile::ActiveModel = profile.into();
    active.betting_spent_this_month = Set(spent);
    active.last_reset_date = Set(last_reset);
    active.update(db).await.map_err(Into::into)
}

/// A timestamp guaranteed to fall in an earlier calendar month than `now`.
#[must_use]
pub fn previous_month(now: DateTimeUtc) -> DateTimeUtc {
    // 40 days ago is always in a different month
    now - Duration::days(40)
}

/// Inserts a blockage record with explicit timestamps, bypassing the
/// activation path. Used to simulate blocks created in the past.
pub async fn insert_blockage(
    db: &DatabaseConnection,
    user_id: i64,
    created_at: DateTimeUtc,
    blocked_until: DateTimeUtc,
) -> Result<bets_blockage::Model> {
    let active = bets_blockage::ActiveModel {
        user_id: Set(user_id),
        blocked_until: Set(blocked_until),
        reason: Set("Test block".to_string()),
        created_at: Set(created_at),
        ..Default::default()
    };
    active.insert(db).await.map_err(Into::into)
}

/// Inserts a known gambling site for search tests.
pub async fn insert_gambling_website(
    db: &DatabaseConnection,
    name: &str,
    domain: &str,
) -> Result<gambling_website::Model> {
    let active = gambling_website::ActiveModel {
        name: Set(name.to_string()),
        domain: Set(domain.to_string()),
        ..Default::default()
    };
    active.insert(db).await.map_err(Into::into)
}
