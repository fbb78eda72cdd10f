//! Unified error type for the crate.
//!
//! Validation failures carry enough context to produce a specific message
//! at the operation boundary; storage failures wrap `SeaORM` errors.

use thiserror::Error;

/// All errors produced by configuration, storage, and core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem failure while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No financial profile exists for the user; it must be created first
    #[error("Financial profile not found for user {user_id}")]
    ProfileNotFound {
        /// Owner of the missing profile
        user_id: i64,
    },

    /// A monetary amount was out of bounds for the operation
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount in minor currency units
        amount: i64,
    },

    /// A blockage duration below the one-minute minimum
    #[error("Invalid block duration: {minutes} minutes")]
    InvalidDuration {
        /// The rejected duration
        minutes: i64,
    },

    /// A leisure category weight outside `[0, 100]`
    #[error("Invalid percentage: {value}")]
    InvalidPercentage {
        /// The rejected weight
        value: i32,
    },

    /// An owner-scoped record lookup came up empty
    #[error("{entity} not found: {id}")]
    RecordNotFound {
        /// Entity kind, e.g. `"goal"`
        entity: &'static str,
        /// Primary key that failed to resolve
        id: i64,
    },

    /// User input failed a boundary check before any state mutation
    #[error("Validation error: {message}")]
    Validation {
        /// Why the input was rejected
        message: String,
    },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
