//! Assessment entity - A finalized profitability assessment for a furniture record.
//!
//! The cost/profit columns are derived: they are computed by the profitability
//! engine from the furniture record and its line items at finalize time, rounded
//! to two decimals, and never accepted from the client.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Assessment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assessments")]
pub struct Model {
    /// Unique identifier for the assessment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Furniture record this assessment evaluates
    pub furniture_id: i64,
    /// Projected resale price
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub market_value: Decimal,
    /// Expected days until sold
    pub expected_sell_time: i32,
    /// Free-form sales notes
    pub sales_notes: Option<String>,
    /// Sum of needed repair and cleaning costs
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_material_cost: Decimal,
    /// Sum of needed repair and cleaning minutes
    pub total_labor_minutes: i64,
    /// Hourly labor rate the evaluation ran with
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub hourly_labor_rate: Decimal,
    /// Labor cost at the hourly rate
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_labor_cost: Decimal,
    /// Acquisition + material + labor
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_cost: Decimal,
    /// Market value minus total cost; negative for a loss
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub profit: Decimal,
    /// Profit as a percentage of market value
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub margin_percentage: Decimal,
    /// Verdict of the profitability engine
    pub is_profitable: bool,
    /// Finalization timestamp
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Assessment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each assessment belongs to one furniture record
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
