//! Leisure allocation entity - Per-user split of the leisure budget into
//! five category weights that are expected (not enforced) to sum to 100.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Leisure allocation database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leisure_allocations")]
pub struct Model {
    /// Unique identifier for the allocation
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user; at most one allocation per user
    #[sea_orm(unique)]
    pub user_id: i64,
    /// Weight of the betting category, percent of the leisure budget
    pub betting_percentage: i32,
    /// Weight of the cinema category
    pub cinema_percentage: i32,
    /// Weight of the hobbies category
    pub hobbies_percentage: i32,
    /// Weight of the travel category
    pub travel_percentage: i32,
    /// Weight of everything else
    pub other_percentage: i32,
    /// When the allocation was first configured
    pub created_at: DateTimeUtc,
    /// When the allocation was last modified
    pub updated_at: DateTimeUtc,
}

/// `LeisureAllocation` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
