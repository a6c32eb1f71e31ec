//! Route table for the evaluation API.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{AppState, handlers};

/// Create the main application router with all API endpoints
pub fn create_router(state: AppState) -> Router {
    // The form UI is served from a different origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Furniture
        .route(
            "/api/furniture",
            get(handlers::furniture::list_furniture).post(handlers::furniture::create_furniture),
        )
        .route(
            "/api/furniture/:id",
            get(handlers::furniture::get_furniture)
                .put(handlers::furniture::update_furniture)
                .delete(handlers::furniture::delete_furniture),
        )
        .route(
            "/api/furniture/:id/repairs",
            get(handlers::repairs::list_repairs_for_furniture),
        )
        .route(
            "/api/furniture/:id/cleaning",
            get(handlers::cleaning::list_cleaning_for_furniture),
        )
        .route(
            "/api/furniture/:id/assessment",
            get(handlers::assessments::get_assessment_for_furniture),
        )
        // Repair line items
        .route("/api/repairs", post(handlers::repairs::create_repair))
        .route(
            "/api/repairs/:id",
            put(handlers::repairs::update_repair).delete(handlers::repairs::delete_repair),
        )
        // Cleaning line items
        .route("/api/cleaning", post(handlers::cleaning::create_cleaning_item))
        .route(
            "/api/cleaning/:id",
            put(handlers::cleaning::update_cleaning_item)
                .delete(handlers::cleaning::delete_cleaning_item),
        )
        // Assessments
        .route(
            "/api/assessments",
            get(handlers::assessments::list_assessments)
                .post(handlers::assessments::finalize_assessment),
        )
        .route(
            "/api/assessments/:id",
            get(handlers::assessments::get_assessment)
                .put(handlers::assessments::update_assessment)
                .delete(handlers::assessments::delete_assessment),
        )
        // Reporting
        .route(
            "/api/similar-items/:type",
            get(handlers::assessments::get_similar_items),
        )
        // Shared state and middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
