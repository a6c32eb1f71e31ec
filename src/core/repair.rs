//! Repair business logic - Handles repair line items on furniture records.
//!
//! Repairs are created and edited independently by the assessment form; the
//! profitability engine only reads the subset marked as needed.

use crate::{
    entities::{Furniture, Repair, repair},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Payload for creating a repair line item.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRepair {
    /// Owning furniture record
    pub furniture_id: i64,
    /// Label for the repair task
    pub name: String,
    /// Whether the repair is needed; defaults to false like a fresh checkbox
    #[serde(default)]
    pub is_needed: bool,
    /// Material cost
    #[serde(default)]
    pub cost: Decimal,
    /// Estimated work time in minutes
    #[serde(default)]
    pub time_minutes: i32,
}

/// Partial update for a repair line item; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepairUpdate {
    /// New label
    pub name: Option<String>,
    /// New needed flag
    pub is_needed: Option<bool>,
    /// New material cost
    pub cost: Option<Decimal>,
    /// New time estimate in minutes
    pub time_minutes: Option<i32>,
}

/// Retrieves all repair items for a furniture record, in creation order.
pub async fn get_repairs_for_furniture(
    db: &DatabaseConnection,
    furniture_id: i64,
) -> Result<Vec<repair::Model>> {
    Repair::find()
        .filter(repair::Column::FurnitureId.eq(furniture_id))
        .order_by_asc(repair::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific repair item by its unique ID.
pub async fn get_repair_by_id(
    db: &DatabaseConnection,
    repair_id: i64,
) -> Result<Option<repair::Model>> {
    Repair::find_by_id(repair_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new repair line item, performing input validation.
///
/// The owning furniture record must exist, the name must be non-empty, and
/// cost and time estimates must be non-negative.
pub async fn create_repair(db: &DatabaseConnection, new: NewRepair) -> Result<repair::Model> {
    validate_line_item(&new.name, new.cost, new.time_minutes)?;

    Furniture::find_by_id(new.furniture_id)
        .one(db)
        .await?
        .ok_or(Error::FurnitureNotFound {
            id: new.furniture_id,
        })?;

    let model = repair::ActiveModel {
        furniture_id: Set(new.furniture_id),
        name: Set(new.name.trim().to_string()),
        is_needed: Set(new.is_needed),
        cost: Set(new.cost),
        time_minutes: Set(new.time_minutes),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to an existing repair item.
pub async fn update_repair(
    db: &DatabaseConnection,
    repair_id: i64,
    update: RepairUpdate,
) -> Result<repair::Model> {
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

    let mut model: repair::ActiveModel = Repair::find_by_id(repair_id)
        .one(db)
        .await?
        .ok_or(Error::RepairNotFound { id: repair_id })?
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

/// Deletes a repair item.
pub async fn delete_repair(db: &DatabaseConnection, repair_id: i64) -> Result<()> {
    let result = Repair::delete_by_id(repair_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::RepairNotFound { id: repair_id });
    }
    Ok(())
}

fn validate_line_item(name: &str, cost: Decimal, time_minutes: i32) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "name cannot be empty".to_string(),
        });
    }
    if cost < Decimal::ZERO {
        return Err(Error::InvalidAmount { amount: cost });
    }
    if time_minutes < 0 {
        return Err(Error::Validation {
            message: format!("time_minutes cannot be negative: {time_minutes}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_create_repair_integration() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;

        let repair = create_test_repair(&db, chair.id, true, dec!(20), 15).await?;

        assert_eq!(repair.furniture_id, chair.id);
        assert!(repair.is_needed);
        assert_eq!(repair.cost, dec!(20));
        assert_eq!(repair.time_minutes, 15);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_repair_requires_furniture() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_repair(
            &db,
            NewRepair {
                furniture_id: 999,
                name: "Remplacement des roulettes".to_string(),
                is_needed: true,
                cost: dec!(20),
                time_minutes: 15,
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::FurnitureNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_repair_validation() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;

        let result = create_repair(
            &db,
            NewRepair {
                furniture_id: chair.id,
                name: "  ".to_string(),
                is_needed: false,
                cost: Decimal::ZERO,
                time_minutes: 0,
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        let result = create_repair(
            &db,
            NewRepair {
                furniture_id: chair.id,
                name: "Remplacement du vérin".to_string(),
                is_needed: true,
                cost: dec!(-35),
                time_minutes: 30,
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { .. }));

        let result = create_repair(
            &db,
            NewRepair {
                furniture_id: chair.id,
                name: "Remplacement du vérin".to_string(),
                is_needed: true,
                cost: dec!(35),
                time_minutes: -30,
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_repairs_for_furniture_scoped() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;
        let other = create_test_furniture(&db, "Bureau").await?;

        create_test_repair(&db, chair.id, true, dec!(20), 15).await?;
        create_test_repair(&db, chair.id, false, dec!(35), 30).await?;
        create_test_repair(&db, other.id, true, dec!(10), 10).await?;

        let repairs = get_repairs_for_furniture(&db, chair.id).await?;
        assert_eq!(repairs.len(), 2);
        assert!(repairs.iter().all(|r| r.furniture_id == chair.id));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_repair_partial() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;
        let repair = create_test_repair(&db, chair.id, false, dec!(35), 30).await?;

        let updated = update_repair(
            &db,
            repair.id,
            RepairUpdate {
                is_needed: Some(true),
                cost: Some(dec!(40)),
                ..Default::default()
            },
        )
        .await?;

        assert!(updated.is_needed);
        assert_eq!(updated.cost, dec!(40));
        assert_eq!(updated.name, repair.name);
        assert_eq!(updated.time_minutes, repair.time_minutes);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_repair_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_repair(&db, 999, RepairUpdate::default()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::RepairNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_repair_integration() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;
        let repair = create_test_repair(&db, chair.id, true, dec!(20), 15).await?;

        delete_repair(&db, repair.id).await?;
        assert!(get_repair_by_id(&db, repair.id).await?.is_none());

        let result = delete_repair(&db, repair.id).await;
        assert!(matches!(result.unwrap_err(), Error::RepairNotFound { .. }));

        Ok(())
    }
}
