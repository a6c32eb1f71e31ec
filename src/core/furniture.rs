//! Furniture business logic - Handles all furniture-related operations.
//!
//! Provides functions for creating, retrieving, updating, and deleting furniture
//! records. Deleting a furniture record also removes its repair items, cleaning
//! items, and assessments so no line items are left pointing at a missing owner.
//! All functions are async and return Result types for error handling.

use crate::{
    entities::{CleaningItem, Furniture, Repair, assessment, cleaning_item, furniture, repair},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Deserialize;

/// Payload for creating a furniture record.
///
/// Field defaults mirror the assessment form: a free acquisition, no photo,
/// no damage, all parts present.
#[derive(Debug, Clone, Deserialize)]
pub struct NewFurniture {
    /// Furniture type (e.g., "Chaise de Bureau")
    #[serde(rename = "type")]
    pub kind: String,
    /// Manufacturer brand
    pub brand: String,
    /// Model name
    pub model: String,
    /// Observed condition
    pub condition: String,
    /// Age in years, if known
    #[serde(default)]
    pub age: Option<i32>,
    /// Price paid to acquire the piece
    #[serde(default)]
    pub acquisition_cost: Decimal,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether photos of the piece exist
    #[serde(default)]
    pub has_photo: bool,
    /// Whether visible damage was recorded
    #[serde(default)]
    pub has_damage: bool,
    /// Whether all parts are present
    #[serde(default = "default_true")]
    pub is_complete: bool,
}

fn default_true() -> bool {
    true
}

/// Partial update for a furniture record; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FurnitureUpdate {
    /// New furniture type
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// New brand
    pub brand: Option<String>,
    /// New model name
    pub model: Option<String>,
    /// New condition
    pub condition: Option<String>,
    /// New age in years
    pub age: Option<i32>,
    /// New acquisition cost
    pub acquisition_cost: Option<Decimal>,
    /// New description
    pub description: Option<String>,
    /// New photo flag
    pub has_photo: Option<bool>,
    /// New damage flag
    pub has_damage: Option<bool>,
    /// New completeness flag
    pub is_complete: Option<bool>,
}

/// Retrieves all furniture records, ordered by creation (oldest first).
pub async fn get_all_furniture(db: &DatabaseConnection) -> Result<Vec<furniture::Model>> {
    Furniture::find()
        .order_by_asc(furniture::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a furniture record by its unique ID, returning None if absent.
pub async fn get_furniture_by_id(
    db: &DatabaseConnection,
    furniture_id: i64,
) -> Result<Option<furniture::Model>> {
    Furniture::find_by_id(furniture_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new furniture record, performing input validation.
///
/// The type, brand, model and condition labels must be non-empty after
/// trimming; the acquisition cost must be non-negative; a negative age is
/// rejected.
pub async fn create_furniture(
    db: &DatabaseConnection,
    new: NewFurniture,
) -> Result<furniture::Model> {
    validate_label("type", &new.kind)?;
    validate_label("brand", &new.brand)?;
    validate_label("model", &new.model)?;
    validate_label("condition", &new.condition)?;

    if new.acquisition_cost < Decimal::ZERO {
        return Err(Error::InvalidAmount {
            amount: new.acquisition_cost,
        });
    }

    if let Some(age) = new.age {
        if age < 0 {
            return Err(Error::Validation {
                message: format!("age cannot be negative: {age}"),
            });
        }
    }

    let model = furniture::ActiveModel {
        kind: Set(new.kind.trim().to_string()),
        brand: Set(new.brand.trim().to_string()),
        model: Set(new.model.trim().to_string()),
        condition: Set(new.condition.trim().to_string()),
        age: Set(new.age),
        acquisition_cost: Set(new.acquisition_cost),
        description: Set(new.description),
        has_photo: Set(new.has_photo),
        has_damage: Set(new.has_damage),
        is_complete: Set(new.is_complete),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to an existing furniture record.
pub async fn update_furniture(
    db: &DatabaseConnection,
    furniture_id: i64,
    update: FurnitureUpdate,
) -> Result<furniture::Model> {
    if let Some(cost) = update.acquisition_cost {
        if cost < Decimal::ZERO {
            return Err(Error::InvalidAmount { amount: cost });
        }
    }

    if let Some(age) = update.age {
        if age < 0 {
            return Err(Error::Validation {
                message: format!("age cannot be negative: {age}"),
            });
        }
    }

    let mut model: furniture::ActiveModel = Furniture::find_by_id(furniture_id)
        .one(db)
        .await?
        .ok_or(Error::FurnitureNotFound { id: furniture_id })?
        .into();

    if let Some(kind) = update.kind {
        validate_label("type", &kind)?;
        model.kind = Set(kind.trim().to_string());
    }
    if let Some(brand) = update.brand {
        validate_label("brand", &brand)?;
        model.brand = Set(brand.trim().to_string());
    }
    if let Some(name) = update.model {
        validate_label("model", &name)?;
        model.model = Set(name.trim().to_string());
    }
    if let Some(condition) = update.condition {
        validate_label("condition", &condition)?;
        model.condition = Set(condition.trim().to_string());
    }
    if update.age.is_some() {
        model.age = Set(update.age);
    }
    if let Some(cost) = update.acquisition_cost {
        model.acquisition_cost = Set(cost);
    }
    if update.description.is_some() {
        model.description = Set(update.description);
    }
    if let Some(has_photo) = update.has_photo {
        model.has_photo = Set(has_photo);
    }
    if let Some(has_damage) = update.has_damage {
        model.has_damage = Set(has_damage);
    }
    if let Some(is_complete) = update.is_complete {
        model.is_complete = Set(is_complete);
    }

    model.update(db).await.map_err(Into::into)
}

/// Deletes a furniture record and everything attached to it.
///
/// The line items and assessments go in the same database transaction, so a
/// failure leaves the record fully intact.
pub async fn delete_furniture(db: &DatabaseConnection, furniture_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let existing = Furniture::find_by_id(furniture_id).one(&txn).await?;
    if existing.is_none() {
        return Err(Error::FurnitureNotFound { id: furniture_id });
    }

    Repair::delete_many()
        .filter(repair::Column::FurnitureId.eq(furniture_id))
        .exec(&txn)
        .await?;
    CleaningItem::delete_many()
        .filter(cleaning_item::Column::FurnitureId.eq(furniture_id))
        .exec(&txn)
        .await?;
    crate::entities::Assessment::delete_many()
        .filter(assessment::Column::FurnitureId.eq(furniture_id))
        .exec(&txn)
        .await?;
    Furniture::delete_by_id(furniture_id).exec(&txn).await?;

    txn.commit().await?;
    Ok(())
}

fn validate_label(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation {
            message: format!("{field} cannot be empty"),
        });
    }
    Ok(())
}
