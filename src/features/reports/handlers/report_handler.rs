use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use base64::prelude::*;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{
    AssignTeamDto, ReportDetailResponseDto, ReportResponseDto, SubmitReportDto, TeamAssignmentDto,
    UpdateReportStatusDto,
};
use crate::features::reports::models::ReportDraft;
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta};

/// Submit a classified report
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = SubmitReportDto,
    responses(
        (status = 200, description = "Report created", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Invalid payload"),
        (status = 422, description = "Classification not completed")
    ),
    tag = "reports"
)]
pub async fn submit_report(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<SubmitReportDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    dto.validate()?;

    let image = ReportService::decode_image(&dto.image)?;
    let draft = ReportDraft {
        pollution_type: dto.pollution_type,
        level: dto.level,
        description: dto.description,
        location: dto.location.into(),
        image,
    };

    let report = service.submit(draft).await?;
    Ok(Json(ApiResponse::success(
        Some(ReportResponseDto::from(&report)),
        None,
        None,
    )))
}

/// List reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "Reports in reverse-chronological order", body = ApiResponse<Vec<ReportResponseDto>>)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = service.all().await;
    let total = reports.len() as i64;
    let dtos: Vec<ReportResponseDto> = reports.iter().map(ReportResponseDto::from).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get report by ID with the stored photo
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportDetailResponseDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ReportDetailResponseDto>>> {
    let report = service.get(id).await?;
    let dto = ReportDetailResponseDto {
        report: ReportResponseDto::from(&report),
        image: BASE64_STANDARD.encode(&report.image),
    };
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// Update report status (authority action)
#[utoipa::path(
    patch,
    path = "/api/reports/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn update_report_status(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.update_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(
        Some(ReportResponseDto::from(&report)),
        None,
        None,
    )))
}

/// Assign a response team to a report (acknowledgement only)
#[utoipa::path(
    post,
    path = "/api/reports/{id}/assign-team",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    request_body = AssignTeamDto,
    responses(
        (status = 200, description = "Team assignment acknowledged", body = ApiResponse<TeamAssignmentDto>),
        (status = 400, description = "Invalid team details"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn assign_team(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<AssignTeamDto>,
) -> Result<Json<ApiResponse<TeamAssignmentDto>>> {
    dto.validate()?;
    let ack = service
        .assign_team(id, dto.team_name, dto.team_contact)
        .await?;
    Ok(Json(ApiResponse::success(Some(ack), None, None)))
}
