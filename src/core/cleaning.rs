//! Cleaning business logic - Handles cleaning line items on furniture records.
//!
//! Same shape and rules as repairs; kept separate because the assessment form
//! and the reporting views treat the two categories as distinct cost groups.

use crate::{
    entities::{CleaningItem, Furniture, cleaning_item},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Payload for creating a cleaning line item.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCleaningItem {
    /// Owning furniture record
    pub furniture_id: i64,
    /// Label for the cleaning step
    pub name: String,
    /// Whether the step is needed
    #[serde(default)]
    pub is_needed: bool,
    /// Material cost
    #[serde(default)]
    pub cost: Decimal,
    /// Estimated work time in minutes
    #[serde(default)]
    pub time_minutes: i32,
}

/// Partial update for a cleaning line item; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CleaningItemUpdate {
    /// New label
    pub name: Option<String>,
    /// New needed flag
    pub is_needed: Option<bool>,
    /// New material cost
    pub cost: Option<Decimal>,
    /// New time estimate in minutes
    pub time_minutes: Option<i32>,
}

/// Retrieves all cleaning items for a furniture record, in creation order.
pub async fn get_cleaning_items_for_furniture(
    db: &DatabaseConnection,
    furniture_id: i64,
) -> Result<Vec<cleaning_item::Model>> {
    CleaningItem::find()
        .filter(cleaning_item::Column::FurnitureId.eq(furniture_id))
        .order_by_asc(cleaning_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific cleaning item by its unique ID.
pub async fn get_cleaning_item_by_id(
    db: &DatabaseConnection,
    item_id: i64,
) -> Result<Option<cleaning_item::Model>> {
    CleaningItem::find_by_id(item_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new cleaning line item, performing input validation.
pub async fn create_cleaning_item(
    db: &DatabaseConnection,
    new: NewCleaningItem,
) -> Result<cleaning_item::Model> {
    if new.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "name cannot be empty".to_string(),
        });
    }
    if new.cost < Decimal::ZERO {
        return Err(Error::InvalidAmount { amount: new.cost });
    }
    if new.time_minutes < 0 {
        return Err(Error::Validation {
            message: format!("time_minutes cannot be negative: {}", new.time_minutes),
        });
    }

    Furniture::find_by_id(new.furniture_id)
        .one(db)
        .await?
        .ok_or(Error::FurnitureNotFound {
            id: new.furniture_id,
        })?;

    let model = cleaning_item::ActiveModel {
        furniture_id: Set(new.furniture_id),
        name: Set(new.name.trim().to_string()),
        is_needed: Set(new.is_needed),
        cost: Set(new.cost),
        time_minutes: Set(new.time_minutes),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to an existing cleaning item.
pub async fn update_cleaning_item(
    db: &DatabaseConnection,
    item_id: i64,
    update: CleaningItemUpdate,
) -> Result<cleaning_item::Model> {
    if let Some(cost) = update.cost {
        if cost < Decimal::ZERO {
            return Err(Error::InvalidAmount { amount: cost });
        }
    }
    if let Some(minutes) = update.time_minutes {
        if minutes < 0 {
            return Err(Error::Validation {
                message: format!("time_minutes cannot be negative: {minutes}"),
            });
        }
    }

    let mut model: cleaning_item::ActiveModel = CleaningItem::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or(Error::CleaningItemNotFound { id: item_id })?
        .into();

    if let Some(name) = update.name {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "name cannot be empty".to_string(),
            });
        }
        model.name = Set(name.trim().to_string());
    }
    if let Some(is_needed) = update.is_needed {
        model.is_needed = Set(is_needed);
    }
    if let Some(cost) = update.cost {
        model.cost = Set(cost);
    }
    if let Some(minutes) = update.time_minutes {
        model.time_minutes = Set(minutes);
    }

    model.update(db).await.map_err(Into::into)
}

/// Deletes a cleaning item.
pub async fn delete_cleaning_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    let result = CleaningItem::delete_by_id(item_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::CleaningItemNotFound { id: item_id });
    }
    Ok(())
}
