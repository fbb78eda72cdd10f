//! Access attempt entity - Immutable log of an attempted visit to a known
//! gambling domain, together with the stake the user intended to wager and
//! how the attempt ended.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Access attempt database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "access_attempts")]
pub struct Model {
    /// Unique identifier for the attempt
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Gambling domain the user tried to reach
    pub domain: String,
    /// Stake the user intended to wager, in cents
    pub stake: i64,
    /// Odds quoted for the intended bet, if known
    pub odds: Option<f64>,
    /// How the user was feeling at the time, free text
    pub emotional_context: String,
    /// Whether the user accepted the suggested redirect away from the site
    pub accepted_redirect: bool,
    /// Alternative hobby suggested at the moment of the attempt
    pub suggested_hobby: Option<String>,
    /// Outcome of the attempt: `"blocked"`, `"redirected"`, or `"wagered"`
    pub outcome: String,
    /// When the attempt was logged
    pub created_at: DateTimeUtc,
}

/// `AccessAttempt` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
