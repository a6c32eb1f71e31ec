//! Core business logic - framework-agnostic operations over the domain.
//!
//! The profitability engine lives in [`profitability`] and is pure; the other
//! modules wrap it with persistence for furniture records, their line items,
//! and finalized assessments.

/// Assessment finalization, recomputation, and the similar-items report
pub mod assessment;
/// Cleaning line-item operations
pub mod cleaning;
/// Furniture record operations
pub mod furniture;
/// The pure profitability engine
pub mod profitability;
/// Repair line-item operations
pub mod repair;
