//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns the shared [`Result`] alias.
//! The error enum also knows how to render itself as an HTTP response so axum
//! handlers can use `?` all the way down to the database layer.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;

/// Unified error type for the whole crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or parsing failed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A request payload failed validation
    #[error("Validation error: {message}")]
    Validation {
        /// What was rejected and why
        message: String,
    },

    /// A monetary amount or time estimate was negative
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending value
        amount: Decimal,
    },

    /// Furniture record lookup failed
    #[error("Furniture not found: {id}")]
    FurnitureNotFound {
        /// Requested furniture id
        id: i64,
    },

    /// Repair line-item lookup failed
    #[error("Repair not found: {id}")]
    RepairNotFound {
        /// Requested repair id
        id: i64,
    },

    /// Cleaning line-item lookup failed
    #[error("Cleaning item not found: {id}")]
    CleaningItemNotFound {
        /// Requested cleaning item id
        id: i64,
    },

    /// Assessment lookup failed
    #[error("Assessment not found: {id}")]
    AssessmentNotFound {
        /// Requested assessment id
        id: i64,
    },

    /// Database error from SeaORM
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Listen address could not be parsed
    #[error("Invalid listen address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::FurnitureNotFound { .. }
            | Error::RepairNotFound { .. }
            | Error::CleaningItemNotFound { .. }
            | Error::AssessmentNotFound { .. } => StatusCode::NOT_FOUND,
            Error::Validation { .. } | Error::InvalidAmount { .. } => StatusCode::BAD_REQUEST,
            Error::Config { .. }
            | Error::Database(_)
            | Error::Io(_)
            | Error::AddrParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
