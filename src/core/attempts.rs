//! Access attempt business logic.
//!
//! When the user reports trying to reach a gambling site, the attempt is
//! logged together with its financial impact: how much of the betting
//! budget the intended stake would consume, and whether it would exceed
//! what is left this month. A wagered attempt feeds straight into the
//! monthly spend tracker. The module also covers the supporting lookups:
//! the known-site search and the user's alternative hobbies.

use crate::{
    core::{blockage, spending},
    entities::{GamblingWebsite, UserHobby, access_attempt, gambling_website, user_hobby},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{Condition, QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};

/// Number of sites a search returns when the caller does not choose.
pub const DEFAULT_SEARCH_LIMIT: u64 = 20;

/// How a reported access attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// A self-imposed block was running at the time of the attempt
    Blocked,
    /// The user accepted the redirect away from the site
    Redirected,
    /// The user went through with the bet
    Wagered,
}

impl AttemptOutcome {
    /// Storage representation of the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocked => "blocked",
            Self::Redirected => "redirected",
            Self::Wagered => "wagered",
        }
    }
}

/// A reported attempt to visit a gambling site.
#[derive(Debug, Clone)]
pub struct NewAccessAttempt {
    /// Domain the user tried to reach
    pub domain: String,
    /// Stake the user intended to wager, in cents
    pub stake: i64,
    /// Odds quoted for the intended bet, if known
    pub odds: Option<f64>,
    /// How the user was feeling, free text
    pub emotional_context: String,
    /// Whether the user accepted the redirect away from the site
    pub accepted_redirect: bool,
}

/// A persisted attempt together with its derived budget impact.
#[derive(Debug, Clone)]
pub struct RegisteredAttempt {
    /// The stored record
    pub attempt: access_attempt::Model,
    /// How the attempt ended
    pub outcome: AttemptOutcome,
    /// True when the stake was larger than what the betting budget had left
    pub exceeds_limit: bool,
    /// Betting budget remaining before this attempt, in cents
    pub remaining_before: i64,
}

/// Searches known gambling sites by name or domain substring.
pub async fn search_gambling_websites(
    db: &DatabaseConnection,
    query: &str,
    limit: Option<u64>,
) -> Result<Vec<gambling_website::Model>> {
    GamblingWebsite::find()
        .filter(
            Condition::any()
                .add(gambling_website::Column::Name.contains(query))
                .add(gambling_website::Column::Domain.contains(query)),
        )
        .limit(limit.unwrap_or(DEFAULT_SEARCH_LIMIT))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Registers an access attempt for the user.
///
/// The outcome is derived, not chosen: an active block wins over
/// everything, an accepted redirect comes next, and anything else counts
/// as wagered. A wagered stake is added to the monthly spend accumulator,
/// which requires the user's financial profile to exist. The attempt is
/// flagged, never silently dropped, when the stake exceeds what the
/// betting budget has left.
pub async fn register_access_attempt(
    db: &DatabaseConnection,
    user_id: i64,
    input: NewAccessAttempt,
) -> Result<RegisteredAttempt> {
    let domain = input.domain.trim().to_string();
    if domain.is_empty() {
        return Err(Error::Validation {
            message: "Attempt domain cannot be empty".to_string(),
        });
    }
    let emotional_context = input.emotional_context.trim().to_string();
    if emotional_context.is_empty() {
        return Err(Error::Validation {
            message: "Emotional context cannot be empty".to_string(),
        });
    }
    if input.stake <= 0 {
        return Err(Error::InvalidAmount {
            amount: input.stake,
        });
    }

    let status = spending::get_spending_status(db, user_id).await?;
    let exceeds_limit = input.stake > status.remaining;

    let outcome = if blockage::get_blockage_status(db, user_id).await?.is_blocked {
        AttemptOutcome::Blocked
    } else if input.accepted_redirect {
        AttemptOutcome::Redirected
    } else {
        AttemptOutcome::Wagered
    };

    let suggested_hobby = get_user_hobbies(db, user_id)
        .await?
        .into_iter()
        .next()
        .map(|hobby| hobby.name);

    // One transaction covers the attempt record and the spend it implies,
    // so neither can land without the other.
    let txn = db.begin().await?;

    let active = access_attempt::ActiveModel {
        user_id: Set(user_id),
        domain: Set(domain),
        stake: Set(input.stake),
        odds: Set(input.odds),
        emotional_context: Set(emotional_context),
        accepted_redirect: Set(input.accepted_redirect),
        suggested_hobby: Set(suggested_hobby),
        outcome: Set(outcome.as_str().to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let attempt = active.insert(&txn).await?;

    if outcome == AttemptOutcome::Wagered {
        spending::add_betting_spending(&txn, user_id, input.stake).await?;
    }

    txn.commit().await?;

    if exceeds_limit {
        tracing::warn!(
            user_id,
            stake = input.stake,
            remaining = status.remaining,
            "attempt stake exceeds the remaining betting budget"
        );
    }

    Ok(RegisteredAttempt {
        attempt,
        outcome,
        exceeds_limit,
        remaining_before: status.remaining,
    })
}

/// Registers an alternative hobby for the user.
pub async fn add_user_hobby(
    db: &DatabaseConnection,
    user_id: i64,
    name: String,
) -> Result<user_hobby::Model> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "Hobby name cannot be empty".to_string(),
        });
    }

    let active = user_hobby::ActiveModel {
        user_id: Set(user_id),
        name: Set(name),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    active.insert(db).await.map_err(Into::into)
}

/// Lists the user's hobbies in the order they were registered.
pub async fn get_user_hobbies(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<user_hobby::Model>> {
    UserHobby::find()
        .filter(user_hobby::Column::UserId.eq(user_id))
        .order_by_asc(user_hobby::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::blockage::activate_blockage;
    use crate::test_utils::{
        create_test_allocation, create_test_profile, insert_gambling_website, setup_test_db,
    };

    fn attempt(stake: i64) -> NewAccessAttempt {
        NewAccessAttempt {
            domain: "bet365.com".to_string(),
            stake,
            odds: Some(2.5),
            emotional_context: "stressed after work".to_string(),
            accepted_redirect: false,
        }
    }

    #[tokio::test]
    async fn test_search_matches_name_and_domain() -> Result<()> {
        let db = setup_test_db().await?;

        insert_gambling_website(&db, "Bet365", "bet365.com").await?;
        insert_gambling_website(&db, "Betano", "betano.com").await?;
        insert_gambling_website(&db, "PokerHouse", "pokerhouse.io").await?;

        let by_name = search_gambling_websites(&db, "Bet", None).await?;
        assert_eq!(by_name.len(), 2);

        let by_domain = search_gambling_websites(&db, "pokerhouse", None).await?;
        assert_eq!(by_domain.len(), 1);
        assert_eq!(by_domain[0].name, "PokerHouse");

        Ok(())
    }

    #[tokio::test]
    async fn test_wagered_attempt_feeds_spend_tracker() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_profile(&db, 1, 500_000, 250_000).await?;
        create_test_allocation(&db, 1).await?;

        let registered = register_access_attempt(&db, 1, attempt(4_000)).await?;

        assert_eq!(registered.outcome, AttemptOutcome::Wagered);
        assert!(!registered.exceeds_limit);
        assert_eq!(registered.remaining_before, 15_000);
        assert_eq!(
            spending::get_betting_spent_this_month(&db, 1).await?,
            4_000
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_redirected_attempt_spends_nothing() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_profile(&db, 1, 500_000, 250_000).await?;
        create_test_allocation(&db, 1).await?;

        let mut input = attempt(4_000);
        input.accepted_redirect = true;
        let registered = register_access_attempt(&db, 1, input).await?;

        assert_eq!(registered.outcome, AttemptOutcome::Redirected);
        assert_eq!(spending::get_betting_spent_this_month(&db, 1).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_active_block_wins_over_everything() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_profile(&db, 1, 500_000, 250_000).await?;
        create_test_allocation(&db, 1).await?;
        activate_blockage(&db, 1, Some(30)).await?;

        let registered = register_access_attempt(&db, 1, attempt(4_000)).await?;

        assert_eq!(registered.outcome, AttemptOutcome::Blocked);
        assert_eq!(registered.attempt.outcome, "blocked");
        assert_eq!(spending::get_betting_spent_this_month(&db, 1).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_flags_stake_exceeding_remaining_budget() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_profile(&db, 1, 500_000, 250_000).await?;
        create_test_allocation(&db, 1).await?;

        // Limit is 15_000; this stake overshoots it
        let mut input = attempt(20_000);
        input.accepted_redirect = true;
        let registered = register_access_attempt(&db, 1, input).await?;

        assert!(registered.exceeds_limit);

        Ok(())
    }

    #[tokio::test]
    async fn test_attempt_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let mut input = attempt(4_000);
        input.domain = "  ".to_string();
        assert!(matches!(
            register_access_attempt(&db, 1, input).await.unwrap_err(),
            Error::Validation { .. }
        ));

        assert!(matches!(
            register_access_attempt(&db, 1, attempt(0)).await.unwrap_err(),
            Error::InvalidAmount { amount: 0 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_suggested_hobby_comes_from_user_list() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_profile(&db, 1, 500_000, 250_000).await?;

        add_user_hobby(&db, 1, "Running".to_string()).await?;
        add_user_hobby(&db, 1, "Chess".to_string()).await?;

        let mut input = attempt(1_000);
        input.accepted_redirect = true;
        let registered = register_access_attempt(&db, 1, input).await?;

        assert_eq!(registered.attempt.suggested_hobby.as_deref(), Some("Running"));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_hobby_rejects_empty_name() -> Result<()> {
        let db = setup_test_db().await?;

        let result = add_user_hobby(&db, 1, " ".to_string()).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }
}
