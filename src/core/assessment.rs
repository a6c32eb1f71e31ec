//! Assessment business logic - Finalizes and manages profitability assessments.
//!
//! Finalizing runs the profitability engine over a furniture record's stored
//! line items and persists the derived figures rounded to two decimals. The
//! derived columns are never taken from the caller; updating an assessment
//! patches its projection inputs and recomputes everything.

use crate::{
    core::profitability::{self, LineItem},
    entities::{
        Assessment, CleaningItem, Furniture, Repair, assessment, cleaning_item, furniture, repair,
    },
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};

/// Projection inputs for finalizing an assessment.
///
/// Only inputs, never derived figures: material cost, labor, profit and the
/// verdict all come out of the engine at finalize time.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAssessment {
    /// Furniture record to evaluate
    pub furniture_id: i64,
    /// Projected resale price
    pub market_value: Decimal,
    /// Expected days until sold
    #[serde(default)]
    pub expected_sell_time: i32,
    /// Free-form sales notes
    #[serde(default)]
    pub sales_notes: Option<String>,
    /// Hourly labor rate override; the configured default applies when absent
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
}

/// Partial update of an assessment's projection inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentUpdate {
    /// New projected resale price
    pub market_value: Option<Decimal>,
    /// New expected days until sold
    pub expected_sell_time: Option<i32>,
    /// New sales notes
    pub sales_notes: Option<String>,
    /// New hourly labor rate
    pub hourly_rate: Option<Decimal>,
}

/// An assessment paired with the furniture it evaluates, for the
/// similar-items report.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarItem {
    /// The furniture record
    pub furniture: furniture::Model,
    /// Its most recent assessment
    pub assessment: assessment::Model,
}

/// Finalizes an assessment: evaluates profitability from the stored line
/// items and persists the result.
///
/// The whole operation runs inside one database transaction so the figures
/// are computed against a consistent view of the line items.
pub async fn finalize_assessment(
    db: &DatabaseConnection,
    new: NewAssessment,
    default_hourly_rate: Decimal,
    margin_threshold: Decimal,
) -> Result<assessment::Model> {
    if new.market_value < Decimal::ZERO {
        return Err(Error::InvalidAmount {
            amount: new.market_value,
        });
    }
    if let Some(rate) = new.hourly_rate {
        if rate < Decimal::ZERO {
            return Err(Error::InvalidAmount { amount: rate });
        }
    }
    if new.expected_sell_time < 0 {
        return Err(Error::Validation {
            message: format!(
                "expected_sell_time cannot be negative: {}",
                new.expected_sell_time
            ),
        });
    }

    let txn = db.begin().await?;

    let furniture = Furniture::find_by_id(new.furniture_id)
        .one(&txn)
        .await?
        .ok_or(Error::FurnitureNotFound {
            id: new.furniture_id,
        })?;

    let hourly_rate = new.hourly_rate.unwrap_or(default_hourly_rate);
    let result = evaluate_for_furniture(
        &txn,
        &furniture,
        hourly_rate,
        new.market_value,
        margin_threshold,
    )
    .await?;

    let model = assessment::ActiveModel {
        furniture_id: Set(furniture.id),
        market_value: Set(new.market_value),
        expected_sell_time: Set(new.expected_sell_time),
        sales_notes: Set(new.sales_notes),
        total_material_cost: Set(result.material_cost),
        total_labor_minutes: Set(result.labor_minutes),
        hourly_labor_rate: Set(hourly_rate),
        total_labor_cost: Set(result.labor_cost),
        total_cost: Set(result.total_cost),
        profit: Set(result.profit),
        margin_percentage: Set(result.margin_percentage),
        is_profitable: Set(result.is_profitable),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let inserted = model.insert(&txn).await?;
    txn.commit().await?;

    Ok(inserted)
}

/// Retrieves a specific assessment by its unique ID.
pub async fn get_assessment_by_id(
    db: &DatabaseConnection,
    assessment_id: i64,
) -> Result<Option<assessment::Model>> {
    Assessment::find_by_id(assessment_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the most recent assessment for a furniture record, if any.
pub async fn get_assessment_for_furniture(
    db: &DatabaseConnection,
    furniture_id: i64,
) -> Result<Option<assessment::Model>> {
    Assessment::find()
        .filter(assessment::Column::FurnitureId.eq(furniture_id))
        .order_by_desc(assessment::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all assessments, oldest first.
pub async fn get_all_assessments(db: &DatabaseConnection) -> Result<Vec<assessment::Model>> {
    Assessment::find()
        .order_by_asc(assessment::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Patches an assessment's projection inputs and recomputes the derived
/// figures from the current line items.
pub async fn update_assessment(
    db: &DatabaseConnection,
    assessment_id: i64,
    update: AssessmentUpdate,
    margin_threshold: Decimal,
) -> Result<assessment::Model> {
    if let Some(value) = update.market_value {
        if value < Decimal::ZERO {
            return Err(Error::InvalidAmount { amount: value });
        }
    }
    if let Some(rate) = update.hourly_rate {
        if rate < Decimal::ZERO {
            return Err(Error::InvalidAmount { amount: rate });
        }
    }
    if let Some(days) = update.expected_sell_time {
        if days < 0 {
            return Err(Error::Validation {
                message: format!("expected_sell_time cannot be negative: {days}"),
            });
        }
    }

    let txn = db.begin().await?;

    let existing = Assessment::find_by_id(assessment_id)
        .one(&txn)
        .await?
        .ok_or(Error::AssessmentNotFound { id: assessment_id })?;

    let furniture = Furniture::find_by_id(existing.furniture_id)
        .one(&txn)
        .await?
        .ok_or(Error::FurnitureNotFound {
            id: existing.furniture_id,
        })?;

    let market_value = update.market_value.unwrap_or(existing.market_value);
    let hourly_rate = update.hourly_rate.unwrap_or(existing.hourly_labor_rate);
    let result =
        evaluate_for_furniture(&txn, &furniture, hourly_rate, market_value, margin_threshold)
            .await?;

    let mut model: assessment::ActiveModel = existing.into();
    model.market_value = Set(market_value);
    if let Some(days) = update.expected_sell_time {
        model.expected_sell_time = Set(days);
    }
    if update.sales_notes.is_some() {
        model.sales_notes = Set(update.sales_notes);
    }
    model.total_material_cost = Set(result.material_cost);
    model.total_labor_minutes = Set(result.labor_minutes);
    model.hourly_labor_rate = Set(hourly_rate);
    model.total_labor_cost = Set(result.labor_cost);
    model.total_cost = Set(result.total_cost);
    model.profit = Set(result.profit);
    model.margin_percentage = Set(result.margin_percentage);
    model.is_profitable = Set(result.is_profitable);

    let updated = model.update(&txn).await?;
    txn.commit().await?;

    Ok(updated)
}

/// Deletes an assessment.
pub async fn delete_assessment(db: &DatabaseConnection, assessment_id: i64) -> Result<()> {
    let result = Assessment::delete_by_id(assessment_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::AssessmentNotFound { id: assessment_id });
    }
    Ok(())
}

/// Finds assessed furniture of the same type, best profit first.
///
/// Type comparison ignores ASCII case, matching how the catalog search treats
/// user-entered types. `limit` bounds the result (the reports page shows 3).
pub async fn get_similar_items(
    db: &DatabaseConnection,
    kind: &str,
    limit: usize,
) -> Result<Vec<SimilarItem>> {
    let furniture = Furniture::find().all(db).await?;

    let mut items = Vec::new();
    for record in furniture
        .into_iter()
        .filter(|f| f.kind.eq_ignore_ascii_case(kind))
    {
        if let Some(assessment) = get_assessment_for_furniture(db, record.id).await? {
            items.push(SimilarItem {
                furniture: record,
                assessment,
            });
        }
    }

    items.sort_by(|a, b| b.assessment.profit.cmp(&a.assessment.profit));
    items.truncate(limit);
    Ok(items)
}

/// Runs the engine over a furniture record's current line items.
async fn evaluate_for_furniture<C>(
    db: &C,
    furniture: &furniture::Model,
    hourly_rate: Decimal,
    market_value: Decimal,
    margin_threshold: Decimal,
) -> Result<profitability::ProfitabilityResult>
where
    C: ConnectionTrait,
{
    let repairs: Vec<LineItem> = Repair::find()
        .filter(repair::Column::FurnitureId.eq(furniture.id))
        .all(db)
        .await?
        .iter()
        .map(LineItem::from)
        .collect();

    let cleaning: Vec<LineItem> = CleaningItem::find()
        .filter(cleaning_item::Column::FurnitureId.eq(furniture.id))
        .all(db)
        .await?
        .iter()
        .map(LineItem::from)
        .collect();

    Ok(profitability::evaluate(
        furniture.acquisition_cost,
        &repairs,
        &cleaning,
        hourly_rate,
        market_value,
        margin_threshold,
    )
    .rounded())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    fn projection(furniture_id: i64, market_value: Decimal) -> NewAssessment {
        NewAssessment {
            furniture_id,
            market_value,
            expected_sell_time: 14,
            sales_notes: None,
            hourly_rate: None,
        }
    }

    #[tokio::test]
    async fn test_finalize_assessment_office_chair() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;

        create_test_repair(&db, chair.id, true, dec!(20), 15).await?;
        create_test_repair(&db, chair.id, false, dec!(35), 30).await?;
        create_test_cleaning_item(&db, chair.id, true, dec!(5), 20).await?;
        create_test_cleaning_item(&db, chair.id, true, dec!(15), 30).await?;

        let assessment =
            finalize_assessment(&db, projection(chair.id, dec!(200)), dec!(20), dec!(20)).await?;

        assert_eq!(assessment.total_material_cost, dec!(40));
        assert_eq!(assessment.total_labor_minutes, 65);
        assert_eq!(assessment.hourly_labor_rate, dec!(20));
        assert_eq!(assessment.total_labor_cost, dec!(21.67));
        assert_eq!(assessment.total_cost, dec!(61.67));
        assert_eq!(assessment.profit, dec!(138.33));
        assert_eq!(assessment.margin_percentage, dec!(69.17));
        assert!(assessment.is_profitable);

        Ok(())
    }

    #[tokio::test]
    async fn test_finalize_assessment_no_line_items() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;

        let assessment =
            finalize_assessment(&db, projection(chair.id, dec!(100)), dec!(20), dec!(20)).await?;

        // Nothing to do: the only cost is acquisition (zero for the default
        // test chair), so the whole sale price is profit.
        assert_eq!(assessment.total_material_cost, Decimal::ZERO);
        assert_eq!(assessment.total_labor_minutes, 0);
        assert_eq!(assessment.total_cost, Decimal::ZERO);
        assert_eq!(assessment.profit, dec!(100));
        assert_eq!(assessment.margin_percentage, dec!(100));
        assert!(assessment.is_profitable);

        Ok(())
    }

    #[tokio::test]
    async fn test_finalize_assessment_furniture_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = finalize_assessment(&db, projection(999, dec!(100)), dec!(20), dec!(20)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::FurnitureNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_finalize_assessment_rejects_negative_market_value() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;

        let result =
            finalize_assessment(&db, projection(chair.id, dec!(-5)), dec!(20), dec!(20)).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_finalize_assessment_hourly_rate_override() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;
        create_test_repair(&db, chair.id, true, dec!(10), 60).await?;

        let mut new = projection(chair.id, dec!(100));
        new.hourly_rate = Some(dec!(30));
        let assessment = finalize_assessment(&db, new, dec!(20), dec!(20)).await?;

        assert_eq!(assessment.hourly_labor_rate, dec!(30));
        assert_eq!(assessment.total_labor_cost, dec!(30));
        assert_eq!(assessment.total_cost, dec!(40));

        Ok(())
    }

    #[tokio::test]
    async fn test_finalize_assessment_zero_market_value() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;
        create_test_repair(&db, chair.id, true, dec!(10), 0).await?;

        let assessment =
            finalize_assessment(&db, projection(chair.id, Decimal::ZERO), dec!(20), dec!(20))
                .await?;

        // Guarded division: zero sale price means zero margin, not a panic
        assert_eq!(assessment.margin_percentage, Decimal::ZERO);
        assert_eq!(assessment.profit, dec!(-10));
        assert!(!assessment.is_profitable);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_assessment_recomputes() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;
        create_test_repair(&db, chair.id, true, dec!(20), 60).await?;

        let assessment =
            finalize_assessment(&db, projection(chair.id, dec!(100)), dec!(20), dec!(20)).await?;
        assert_eq!(assessment.profit, dec!(60));

        // Raise the projected price; the derived figures must follow
        let updated = update_assessment(
            &db,
            assessment.id,
            AssessmentUpdate {
                market_value: Some(dec!(200)),
                ..Default::default()
            },
            dec!(20),
        )
        .await?;

        assert_eq!(updated.market_value, dec!(200));
        assert_eq!(updated.total_cost, dec!(40));
        assert_eq!(updated.profit, dec!(160));
        assert_eq!(updated.margin_percentage, dec!(80));
        assert!(updated.is_profitable);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_assessment_sees_line_item_edits() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;
        let repair = create_test_repair(&db, chair.id, false, dec!(35), 30).await?;

        let assessment =
            finalize_assessment(&db, projection(chair.id, dec!(100)), dec!(20), dec!(20)).await?;
        assert_eq!(assessment.total_material_cost, Decimal::ZERO);

        // Mark the repair as needed, then re-run the evaluation
        crate::core::repair::update_repair(
            &db,
            repair.id,
            crate::core::repair::RepairUpdate {
                is_needed: Some(true),
                ..Default::default()
            },
        )
        .await?;

        let updated =
            update_assessment(&db, assessment.id, AssessmentUpdate::default(), dec!(20)).await?;
        assert_eq!(updated.total_material_cost, dec!(35));
        assert_eq!(updated.total_labor_minutes, 30);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_assessment_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_assessment(&db, 999, AssessmentUpdate::default(), dec!(20)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AssessmentNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_assessment_for_furniture_returns_latest() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;

        finalize_assessment(&db, projection(chair.id, dec!(100)), dec!(20), dec!(20)).await?;
        let second =
            finalize_assessment(&db, projection(chair.id, dec!(250)), dec!(20), dec!(20)).await?;

        let latest = get_assessment_for_furniture(&db, chair.id).await?.unwrap();
        assert_eq!(latest.id, second.id);
        assert_eq!(latest.market_value, dec!(250));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_assessment_integration() -> Result<()> {
        let (db, chair) = setup_with_furniture().await?;
        let assessment =
            finalize_assessment(&db, projection(chair.id, dec!(100)), dec!(20), dec!(20)).await?;

        delete_assessment(&db, assessment.id).await?;
        assert!(get_assessment_by_id(&db, assessment.id).await?.is_none());

        let result = delete_assessment(&db, assessment.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AssessmentNotFound { .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_similar_items_sorted_by_profit() -> Result<()> {
        let db = setup_test_db().await?;

        let low = create_test_furniture(&db, "Chaise de Bureau").await?;
        let high = create_test_furniture(&db, "Chaise de Bureau").await?;
        let other_kind = create_test_furniture(&db, "Bureau").await?;

        finalize_assessment(&db, projection(low.id, dec!(80)), dec!(20), dec!(20)).await?;
        finalize_assessment(&db, projection(high.id, dec!(300)), dec!(20), dec!(20)).await?;
        finalize_assessment(&db, projection(other_kind.id, dec!(500)), dec!(20), dec!(20)).await?;

        let items = get_similar_items(&db, "chaise de bureau", 3).await?;

        // Same type only, case-insensitive, best profit first
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].furniture.id, high.id);
        assert_eq!(items[1].furniture.id, low.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_similar_items_respects_limit_and_skips_unassessed() -> Result<()> {
        let db = setup_test_db().await?;

        for value in [dec!(50), dec!(100), dec!(150), dec!(200)] {
            let chair = create_test_furniture(&db, "Chaise de Bureau").await?;
            finalize_assessment(&db, projection(chair.id, value), dec!(20), dec!(20)).await?;
        }
        // Assessed furniture only: this one never gets an assessment
        create_test_furniture(&db, "Chaise de Bureau").await?;

        let items = get_similar_items(&db, "Chaise de Bureau", 3).await?;
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].assessment.market_value, dec!(200));

        Ok(())
    }
}
