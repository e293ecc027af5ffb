use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::features::viewport::handlers::viewport_handler;
use crate::features::viewport::services::ViewportService;

/// Create viewport routes
pub fn routes(viewport_service: Arc<ViewportService>) -> Router {
    Router::new()
        .route("/api/viewports", post(viewport_handler::open_view))
        .route(
            "/api/viewports/{id}",
            get(viewport_handler::get_view).delete(viewport_handler::close_view),
        )
        // Drag state machine
        .route(
            "/api/viewports/{id}/drag/begin",
            post(viewport_handler::begin_drag),
        )
        .route(
            "/api/viewports/{id}/drag/move",
            post(viewport_handler::drag_move),
        )
        .route(
            "/api/viewports/{id}/drag/end",
            post(viewport_handler::end_drag),
        )
        // Zoom
        .route("/api/viewports/{id}/wheel", post(viewport_handler::wheel))
        .route(
            "/api/viewports/{id}/zoom-in",
            post(viewport_handler::zoom_in),
        )
        .route(
            "/api/viewports/{id}/zoom-out",
            post(viewport_handler::zoom_out),
        )
        // Direct camera writes
        .route("/api/viewports/{id}/pan", put(viewport_handler::set_pan))
        .route("/api/viewports/{id}/zoom", put(viewport_handler::set_zoom))
        // Selection and filtering
        .route(
            "/api/viewports/{id}/selection",
            put(viewport_handler::select_report),
        )
        .route(
            "/api/viewports/{id}/filter",
            put(viewport_handler::set_type_filter),
        )
        // Rendered markers
        .route(
            "/api/viewports/{id}/markers",
            get(viewport_handler::markers),
        )
        .with_state(viewport_service)
}
