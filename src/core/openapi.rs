use utoipa::{Modify, OpenApi};

use crate::features::classification::{
    dtos as classification_dtos, handlers as classification_handlers,
    models as classification_models,
};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::viewport::{
    dtos as viewport_dtos, handlers as viewport_handlers, models as viewport_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::submit_report,
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::get_report,
        reports_handlers::report_handler::update_report_status,
        reports_handlers::report_handler::assign_team,
        // Classifications
        classification_handlers::classification_handler::start_classification,
        classification_handlers::classification_handler::get_classification,
        classification_handlers::classification_handler::cancel_classification,
        // Viewports
        viewport_handlers::viewport_handler::open_view,
        viewport_handlers::viewport_handler::get_view,
        viewport_handlers::viewport_handler::close_view,
        viewport_handlers::viewport_handler::begin_drag,
        viewport_handlers::viewport_handler::drag_move,
        viewport_handlers::viewport_handler::end_drag,
        viewport_handlers::viewport_handler::wheel,
        viewport_handlers::viewport_handler::zoom_in,
        viewport_handlers::viewport_handler::zoom_out,
        viewport_handlers::viewport_handler::set_pan,
        viewport_handlers::viewport_handler::set_zoom,
        viewport_handlers::viewport_handler::select_report,
        viewport_handlers::viewport_handler::set_type_filter,
        viewport_handlers::viewport_handler::markers,
        // Dashboard
        dashboard_handlers::dashboard_handler::get_summary,
        dashboard_handlers::dashboard_handler::get_by_type,
        dashboard_handlers::dashboard_handler::list_reports,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Report models
            reports_models::PollutionType,
            reports_models::SeverityLevel,
            reports_models::ReportStatus,
            // Report DTOs
            reports_dtos::ReportLocationDto,
            reports_dtos::SubmitReportDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::ReportDetailResponseDto,
            reports_dtos::UpdateReportStatusDto,
            reports_dtos::AssignTeamDto,
            reports_dtos::TeamAssignmentDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            ApiResponse<reports_dtos::ReportDetailResponseDto>,
            ApiResponse<reports_dtos::TeamAssignmentDto>,
            // Classification
            classification_models::ClassificationOutcome,
            classification_dtos::ClassificationPhase,
            classification_dtos::StartClassificationDto,
            classification_dtos::ClassificationStatusDto,
            ApiResponse<classification_dtos::ClassificationStatusDto>,
            // Viewport
            viewport_models::Point,
            viewport_models::PointerButton,
            viewport_dtos::ViewportStateDto,
            viewport_dtos::BeginDragDto,
            viewport_dtos::DragMoveDto,
            viewport_dtos::WheelDto,
            viewport_dtos::SetPanDto,
            viewport_dtos::SetZoomDto,
            viewport_dtos::SelectReportDto,
            viewport_dtos::SetTypeFilterDto,
            viewport_dtos::DragBeginResponseDto,
            viewport_dtos::MarkerDto,
            viewport_dtos::MapMarkersDto,
            ApiResponse<viewport_dtos::ViewportStateDto>,
            ApiResponse<viewport_dtos::DragBeginResponseDto>,
            ApiResponse<viewport_dtos::MapMarkersDto>,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            dashboard_dtos::TypeCountDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            ApiResponse<Vec<dashboard_dtos::TypeCountDto>>,
        )
    ),
    tags(
        (name = "reports", description = "Citizen pollution incident reports"),
        (name = "classifications", description = "Asynchronous image classification"),
        (name = "viewports", description = "Interactive map camera state"),
        (name = "dashboard", description = "Triage statistics for authorities"),
    ),
    info(
        title = "EcoVision API",
        version = "0.1.0",
        description = "Pollution incident reporting and triage API for EcoVision",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct ApiInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for ApiInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
