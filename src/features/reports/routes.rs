use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::features::reports::handlers::report_handler;
use crate::features::reports::services::ReportService;

/// Create report routes
pub fn routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            post(report_handler::submit_report).get(report_handler::list_reports),
        )
        .route("/api/reports/{id}", get(report_handler::get_report))
        .route(
            "/api/reports/{id}/status",
            patch(report_handler::update_report_status),
        )
        .route(
            "/api/reports/{id}/assign-team",
            post(report_handler::assign_team),
        )
        .with_state(report_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::features::reports::dtos::ReportResponseDto;
    use crate::shared::types::ApiResponse;

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(ReportService::new()))).unwrap()
    }

    #[tokio::test]
    async fn test_submit_then_list_over_http() {
        let server = server();

        let res = server
            .post("/api/reports")
            .json(&json!({
                "type": "Contaminación del Agua",
                "level": "Crítico",
                "description": "Río contaminado con residuos sólidos",
                "location": {
                    "lat": -12.0464,
                    "lng": -77.0428,
                    "address": "Cercado de Lima, Lima"
                },
                "image": "data:image/jpeg;base64,aGVsbG8="
            }))
            .await;
        res.assert_status_ok();

        let body: ApiResponse<Vec<ReportResponseDto>> =
            server.get("/api/reports").await.json();
        let reports = body.data.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].status.to_string(), "pending");
    }

    #[tokio::test]
    async fn test_submit_without_classification_is_unprocessable() {
        let server = server();

        let res = server
            .post("/api/reports")
            .json(&json!({
                "description": "Foto sin clasificar",
                "location": {
                    "lat": -12.0464,
                    "lng": -77.0428,
                    "address": "Cercado de Lima, Lima"
                },
                "image": "aGVsbG8="
            }))
            .await;
        res.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_status_update_on_unknown_report_is_not_found() {
        let server = server();

        let res = server
            .patch(&format!("/api/reports/{}/status", uuid::Uuid::now_v7()))
            .json(&json!({ "status": "resolved" }))
            .await;
        res.assert_status_not_found();
    }
}
