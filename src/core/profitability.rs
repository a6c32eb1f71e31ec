//! Profitability engine - the business rules that decide whether reconditioning
//! a piece of furniture is worth it.
//!
//! Every function here is pure: no I/O, no state, and identical inputs always
//! produce identical outputs. All currency arithmetic uses [`Decimal`] so the
//! totals are exact; rounding happens only in [`ProfitabilityResult::rounded`],
//! at the persistence/display boundary.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::entities::{cleaning_item, repair};

/// The subset of a repair or cleaning line item the engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    /// Items not marked as needed are excluded from every total
    pub is_needed: bool,
    /// Material cost of the line item
    pub cost: Decimal,
    /// Estimated work time in minutes
    pub time_minutes: i64,
}

impl From<&repair::Model> for LineItem {
    fn from(model: &repair::Model) -> Self {
        Self {
            is_needed: model.is_needed,
            cost: model.cost,
            time_minutes: i64::from(model.time_minutes),
        }
    }
}

impl From<&cleaning_item::Model> for LineItem {
    fn from(model: &cleaning_item::Model) -> Self {
        Self {
            is_needed: model.is_needed,
            cost: model.cost,
            time_minutes: i64::from(model.time_minutes),
        }
    }
}

/// Everything the engine derives from one evaluation run.
///
/// Invariants: `total_cost = acquisition + material + labor` and
/// `profit = sale_price - total_cost`, both exact (unrounded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfitabilityResult {
    /// Sum of needed line-item costs
    pub material_cost: Decimal,
    /// Sum of needed line-item minutes
    pub labor_minutes: i64,
    /// Labor cost at the hourly rate
    pub labor_cost: Decimal,
    /// Acquisition + material + labor
    pub total_cost: Decimal,
    /// Sale price minus total cost; negative for a loss
    pub profit: Decimal,
    /// Profit as a percentage of sale price
    pub margin_percentage: Decimal,
    /// Final verdict
    pub is_profitable: bool,
}

impl ProfitabilityResult {
    /// Projects every monetary figure to two decimals for persistence and
    /// display. The verdict and minute count are untouched.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            material_cost: self.material_cost.round_dp(2),
            labor_minutes: self.labor_minutes,
            labor_cost: self.labor_cost.round_dp(2),
            total_cost: self.total_cost.round_dp(2),
            profit: self.profit.round_dp(2),
            margin_percentage: self.margin_percentage.round_dp(2),
            is_profitable: self.is_profitable,
        }
    }
}

/// Sums the cost of line items marked as needed. Zero for an empty slice.
#[must_use]
pub fn sum_cost(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .filter(|item| item.is_needed)
        .map(|item| item.cost)
        .sum()
}

/// Sums the time of line items marked as needed, in minutes.
#[must_use]
pub fn sum_time(items: &[LineItem]) -> i64 {
    items
        .iter()
        .filter(|item| item.is_needed)
        .map(|item| item.time_minutes)
        .sum()
}

/// Labor cost for `total_minutes` of work at `hourly_rate`.
///
/// Fractional hours are kept exact; no rounding happens here.
#[must_use]
pub fn labor_cost(total_minutes: i64, hourly_rate: Decimal) -> Decimal {
    Decimal::from(total_minutes) / Decimal::from(60) * hourly_rate
}

/// Total cost of reconditioning: acquisition + material + labor.
#[must_use]
pub fn total_cost(acquisition_cost: Decimal, material_cost: Decimal, labor: Decimal) -> Decimal {
    acquisition_cost + material_cost + labor
}

/// Profit at a given sale price. Negative when reconditioning loses money.
#[must_use]
pub fn profit(sale_price: Decimal, total: Decimal) -> Decimal {
    sale_price - total
}

/// Profit as a percentage of sale price.
///
/// A zero sale price yields zero, not a division error.
#[must_use]
pub fn margin_percentage(profit: Decimal, sale_price: Decimal) -> Decimal {
    if sale_price.is_zero() {
        return Decimal::ZERO;
    }
    profit / sale_price * Decimal::ONE_HUNDRED
}

/// Verdict: profitable when there is a positive profit and the sale-price
/// margin reaches the threshold.
#[must_use]
pub fn is_profitable(profit: Decimal, margin_percentage: Decimal, margin_threshold: Decimal) -> bool {
    profit > Decimal::ZERO && margin_percentage >= margin_threshold
}

/// Runs the full evaluation over a furniture record's line items.
///
/// `sale_price` is the projected resale price, `hourly_rate` the labor rate
/// in currency units per hour, `margin_threshold` the minimum acceptable
/// margin percentage for a profitable verdict.
#[must_use]
pub fn evaluate(
    acquisition_cost: Decimal,
    repairs: &[LineItem],
    cleaning: &[LineItem],
    hourly_rate: Decimal,
    sale_price: Decimal,
    margin_threshold: Decimal,
) -> ProfitabilityResult {
    let material_cost = sum_cost(repairs) + sum_cost(cleaning);
    let labor_minutes = sum_time(repairs) + sum_time(cleaning);
    let labor = labor_cost(labor_minutes, hourly_rate);
    let total = total_cost(acquisition_cost, material_cost, labor);
    let profit = profit(sale_price, total);
    let margin = margin_percentage(profit, sale_price);

    ProfitabilityResult {
        material_cost,
        labor_minutes,
        labor_cost: labor,
        total_cost: total,
        profit,
        margin_percentage: margin,
        is_profitable: is_profitable(profit, margin, margin_threshold),
    }
}

/// Formats a monetary value for display, e.g. `"138.33 €"`.
#[must_use]
pub fn format_currency(value: Decimal) -> String {
    format!("{:.2} €", value.round_dp(2))
}
