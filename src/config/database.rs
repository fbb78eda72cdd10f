//! Database configuration module for `HelpGames`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.
//!
//! There is deliberately no module-level connection handle: the connection is
//! created once at startup and passed explicitly into every core function.

use crate::entities::{
    AccessAttempt, AvoidedBet, BetsBlockage, CrisisMessage, FinancialProfile, GamblingWebsite,
    Goal, LeisureAllocation, UserHobby,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/help_games.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is set.
/// This function handles connection errors and provides a clean interface for database access
/// throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    db.execute(builder.build(&schema.create_table_from_entity(FinancialProfile)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(LeisureAllocation)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(AvoidedBet)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(Goal)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(CrisisMessage)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(AccessAttempt)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(BetsBlockage)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(GamblingWebsite)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(UserHobby)))
        .await?;

    Ok(())
}
