//! Financial profile entity - One row per user, the system of record for
//! the budget engine.
//!
//! Holds the declared income/expenses, the derived leisure budget, and the
//! monthly betting-spend accumulator with its reset marker and threshold
//! notification timestamps. All monetary fields are minor currency units.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Financial profile database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "financial_profiles")]
pub struct Model {
    /// Unique identifier for the profile
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user; exactly one profile per user
    #[sea_orm(unique)]
    pub user_id: i64,
    /// Declared monthly income in cents
    pub monthly_income: i64,
    /// Declared fixed monthly expenses in cents
    pub fixed_expenses: i64,
    /// Derived leisure budget in cents; recomputed on every upsert
    pub leisure_budget: i64,
    /// Betting spend accumulated in the current calendar month, in cents
    pub betting_spent_this_month: i64,
    /// When the accumulator was last reset to zero (month rollover)
    pub last_reset_date: DateTimeUtc,
    /// When the 80% spend alert last fired; cleared on rollover
    pub notified_at_80_percent: Option<DateTimeUtc>,
    /// When the 95% spend alert last fired; cleared on rollover
    pub notified_at_95_percent: Option<DateTimeUtc>,
    /// When the profile was first created
    pub created_at: DateTimeUtc,
    /// When the profile was last modified
    pub updated_at: DateTimeUtc,
}

/// `FinancialProfile` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
