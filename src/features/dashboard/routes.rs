use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers::dashboard_handler;
use crate::features::dashboard::services::DashboardService;

/// Create dashboard routes
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard/summary", get(dashboard_handler::get_summary))
        .route("/api/dashboard/by-type", get(dashboard_handler::get_by_type))
        .route("/api/dashboard/reports", get(dashboard_handler::list_reports))
        .with_state(dashboard_service)
}
