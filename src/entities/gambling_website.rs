//! Gambling website entity - A known gambling site, matched against when
//! the user reports an access attempt. Rows are populated by an external
//! import; this crate only reads them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Gambling website database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gambling_websites")]
pub struct Model {
    /// Unique identifier for the site
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name, e.g. `"Bet365"`
    pub name: String,
    /// Primary domain of the site
    pub domain: String,
}

/// `GamblingWebsite` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
