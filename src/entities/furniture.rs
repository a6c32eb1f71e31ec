//! Furniture entity - Represents a piece of office furniture under evaluation.
//!
//! Each record captures the physical attributes the assessment form collects:
//! type, brand, model, condition, age, and the price paid to acquire the piece.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Furniture database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "furniture")]
pub struct Model {
    /// Unique identifier for the furniture record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Furniture type (e.g., "Chaise de Bureau", "Bureau")
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    /// Manufacturer brand (e.g., "Steelcase", "Herman Miller")
    pub brand: String,
    /// Model name
    pub model: String,
    /// Observed condition (e.g., "Excellent", "Bon", "Moyen")
    pub condition: String,
    /// Age in years, if known
    pub age: Option<i32>,
    /// Price paid to acquire the piece
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub acquisition_cost: Decimal,
    /// Free-form description
    pub description: Option<String>,
    /// Whether photos of the piece exist
    pub has_photo: bool,
    /// Whether visible damage was recorded
    pub has_damage: bool,
    /// Whether all parts are present
    pub is_complete: bool,
    /// Creation timestamp
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Furniture and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One furniture record has many repair line items
    #[sea_orm(has_many = "super::repair::Entity")]
    Repairs,
    /// One furniture record has many cleaning line items
    #[sea_orm(has_many = "super::cleaning_item::Entity")]
    CleaningItems,
    /// One furniture record has many assessments
    #[sea_orm(has_many = "super::assessment::Entity")]
    Assessments,
}

impl Related<super::repair::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Repairs.def()
    }
}

impl Related<super::cleaning_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CleaningItems.def()
    }
}

impl Related<super::assessment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
