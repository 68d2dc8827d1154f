//! HTTP surface of the directory.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::model::Insights;
use crate::store::EmployeeStore;

pub use error::ErrorResponse;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
    pub insights: Arc<Insights>,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>, insights: Insights) -> Self {
        Self {
            store,
            insights: Arc::new(insights),
        }
    }
}

/// Routes served under `/api`, plus `/health`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route("/employees/bulk-delete", post(handlers::delete_employees_bulk))
        .route(
            "/employees/:id",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .patch(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
        .route("/dashboard", get(handlers::dashboard))
        .route("/performance", get(handlers::performance_series))
        .route("/alerts", get(handlers::alerts));

    Router::new()
        .route("/health", get(handlers::healthcheck))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
