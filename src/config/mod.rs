/// Default leisure split loading from config.toml
pub mod allocation;

/// Database configuration and connection management
pub mod database;
