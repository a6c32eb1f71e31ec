//! HTTP API - axum router and handlers for the evaluation tool.
//!
//! Thin layer over [`crate::core`]: handlers deserialize payloads, call the
//! business logic, and map domain errors onto HTTP statuses via
//! [`crate::errors::Error`]'s `IntoResponse` impl.

/// Request handlers, one module per resource
pub mod handlers;
/// Route table and middleware
pub mod router;

use crate::config::settings::Settings;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Business settings (hourly rate, margin threshold)
    pub settings: Arc<Settings>,
}
