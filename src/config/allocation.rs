//! Default leisure split loading from config.toml
//!
//! This module provides the default percentage split applied when a user
//! configures their leisure allocation for the first time without naming
//! every category. Deployments can override the built-in 10/20/30/20/20
//! split through a `[default_split]` table in config.toml.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default split applied on first-time allocation setup
    #[serde(default)]
    pub default_split: SplitConfig,
}

/// Default percentage weights for the five leisure categories
#[derive(Debug, Deserialize, Clone)]
pub struct SplitConfig {
    /// Default weight of the betting category
    #[serde(default = "default_betting")]
    pub betting_percentage: i32,
    /// Default weight of the cinema category
    #[serde(default = "default_cinema")]
    pub cinema_percentage: i32,
    /// Default weight of the hobbies category
    #[serde(default = "default_hobbies")]
    pub hobbies_percentage: i32,
    /// Default weight of the travel category
    #[serde(default = "default_travel")]
    pub travel_percentage: i32,
    /// Default weight of everything else
    #[serde(default = "default_other")]
    pub other_percentage: i32,
}

const fn default_betting() -> i32 {
    10
}
const fn default_cinema() -> i32 {
    20
}
const fn default_hobbies() -> i32 {
    30
}
const fn default_travel() -> i32 {
    20
}
const fn default_other() -> i32 {
    20
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            betting_percentage: default_betting(),
            cinema_percentage: default_cinema(),
            hobbies_percentage: default_hobbies(),
            travel_percentage: default_travel(),
            other_percentage: default_other(),
        }
    }
}

impl SplitConfig {
    /// Sum of the five weights; 100 for a well-formed split
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.betting_percentage
            + self.cinema_percentage
            + self.hobbies_percentage
            + self.travel_percentage
            + self.other_percentage
    }
}

/// Loads the split configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the split configuration from the default location (./config.toml),
/// falling back to the built-in split when the file is absent.
#[must_use]
pub fn load_default_config() -> Config {
    match load_config("config.toml") {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!("Using built-in default split: {e}");
            Config::default()
        }
    }
}
