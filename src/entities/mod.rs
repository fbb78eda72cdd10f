//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod access_attempt;
pub mod avoided_bet;
pub mod bets_blockage;
pub mod crisis_message;
pub mod financial_profile;
pub mod gambling_website;
pub mod goal;
pub mod leisure_allocation;
pub mod user_hobby;

// Re-export specific types to avoid conflicts
pub use access_attempt::{Entity as AccessAttempt, Model as AccessAttemptModel};
pub use avoided_bet::{Entity as AvoidedBet, Model as AvoidedBetModel};
pub use bets_blockage::{Entity as BetsBlockage, Model as BetsBlockageModel};
pub use crisis_message::{Entity as CrisisMessage, Model as CrisisMessageModel};
pub use financial_profile::{Entity as FinancialProfile, Model as FinancialProfileModel};
pub use gambling_website::{Entity as GamblingWebsite, Model as GamblingWebsiteModel};
pub use goal::{Entity as Goal, Model as GoalModel};
pub use leisure_allocation::{Entity as LeisureAllocation, Model as LeisureAllocationModel};
pub use user_hobby::{Entity as UserHobby, Model as UserHobbyModel};
