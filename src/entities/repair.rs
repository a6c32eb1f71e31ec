//! Repair entity - A single repair line item on a furniture record.
//!
//! Only items marked as needed contribute to the material and labor totals.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Repair line-item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "repairs")]
pub struct Model {
    /// Unique identifier for the repair item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning furniture record
    pub furniture_id: i64,
    /// Label (e.g., "Remplacement des roulettes")
    pub name: String,
    /// Whether this repair is actually needed; unneeded items are kept for
    /// reference but excluded from every total
    pub is_needed: bool,
    /// Material cost of the repair
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub cost: Decimal,
    /// Estimated work time in minutes
    pub time_minutes: i32,
}

/// Defines relationships between Repair and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each repair belongs to one furniture record
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
