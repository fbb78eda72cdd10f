//! Core business logic - framework-agnostic operations over the budget
//! engine and its supporting records. All functions take an explicit
//! database connection and return crate `Result` values.

pub mod attempts;
pub mod avoided_bets;
pub mod blockage;
pub mod crisis;
pub mod distribution;
pub mod goals;
pub mod leisure;
pub mod report;
pub mod spending;
