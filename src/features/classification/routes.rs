use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::classification::handlers::classification_handler;
use crate::features::classification::services::ClassificationService;

/// Create classification routes
pub fn routes(classification_service: Arc<ClassificationService>) -> Router {
    Router::new()
        .route(
            "/api/classifications",
            post(classification_handler::start_classification),
        )
        .route(
            "/api/classifications/{token}",
            get(classification_handler::get_classification)
                .delete(classification_handler::cancel_classification),
        )
        .with_state(classification_service)
}
