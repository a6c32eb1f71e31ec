//! Cleaning item entity - A single cleaning line item on a furniture record.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cleaning line-item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cleaning_items")]
pub struct Model {
    /// Unique identifier for the cleaning item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning furniture record
    pub furniture_id: i64,
    /// Label (e.g., "Nettoyage standard", "Traitement du tissu")
    pub name: String,
    /// Whether this cleaning step is actually needed
    pub is_needed: bool,
    /// Material cost of the cleaning step
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub cost: Decimal,
    /// Estimated work time in minutes
    pub time_minutes: i32,
}

/// Defines relationships between `CleaningItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each cleaning item belongs to one furniture record
    #[sea_orm(
        belongs_to = "super::furniture::Entity",
        from = "Column::FurnitureId",
        to = "super::furniture::Column::Id"
    )]
    Furniture,
}

impl Related<super::furniture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Furniture.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
