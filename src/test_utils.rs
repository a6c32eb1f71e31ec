//! Shared test utilities for `reseat`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config,
    core::{cleaning, furniture, repair},
    entities,
    errors::Result,
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = config::database::create_connection("sqlite::memory:").await?;
    config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a furniture payload with sensible defaults.
///
/// # Defaults
/// * `brand`: "Steelcase"
/// * `model`: "Think v2"
/// * `condition`: "Bon"
/// * `age`: 5
/// * `acquisition_cost`: 0
#[must_use]
pub fn new_test_furniture(kind: &str) -> furniture::NewFurniture {
    furniture::NewFurniture {
        kind: kind.to_string(),
        brand: "Steelcase".to_string(),
        model: "Think v2".to_string(),
        condition: "Bon".to_string(),
        age: Some(5),
        acquisition_cost: Decimal::ZERO,
        description: None,
        has_photo: false,
        has_damage: false,
        is_complete: true,
    }
}

/// Creates a test furniture record with sensible defaults.
pub async fn create_test_furniture(
    db: &DatabaseConnection,
    kind: &str,
) -> Result<entities::furniture::Model> {
    furniture::create_furniture(db, new_test_furniture(kind)).await
}

/// Creates a test repair line item.
pub async fn create_test_repair(
    db: &DatabaseConnection,
    furniture_id: i64,
    is_needed: bool,
    cost: Decimal,
    time_minutes: i32,
) -> Result<entities::repair::Model> {
    repair::create_repair(
        db,
        repair::NewRepair {
            furniture_id,
            name: "Test repair".to_string(),
            is_needed,
            cost,
            time_minutes,
        },
    )
    .await
}

/// Creates a test cleaning line item.
pub async fn create_test_cleaning_item(
    db: &DatabaseConnection,
    furniture_id: i64,
    is_needed: bool,
    cost: Decimal,
    time_minutes: i32,
) -> Result<entities::cleaning_item::Model> {
    cleaning::create_cleaning_item(
        db,
        cleaning::NewCleaningItem {
            furniture_id,
            name: "Test cleaning".to_string(),
            is_needed,
            cost,
            time_minutes,
        },
    )
    .await
}

/// Sets up a complete test environment with one furniture record.
/// Returns (db, furniture) for common test scenarios.
pub async fn setup_with_furniture() -> Result<(DatabaseConnection, entities::furniture::Model)> {
    let db = setup_test_db().await?;
    let furniture = create_test_furniture(&db, "Chaise de Bureau").await?;
    Ok((db, furniture))
}
