//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod assessment;
pub mod cleaning_item;
pub mod furniture;
pub mod repair;

// Re-export specific types to avoid conflicts
pub use assessment::{Column as AssessmentColumn, Entity as Assessment, Model as AssessmentModel};
pub use cleaning_item::{
    Column as CleaningItemColumn, Entity as CleaningItem, Model as CleaningItemModel,
};
pub use furniture::{Column as FurnitureColumn, Entity as Furniture, Model as FurnitureModel};
pub use repair::{Column as RepairColumn, Entity as Repair, Model as RepairModel};
