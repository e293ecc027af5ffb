use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::dashboard::dtos::{DashboardReportsParams, DashboardSummaryDto, TypeCountDto};
use crate::features::dashboard::services::DashboardService;
use crate::features::reports::dtos::ReportResponseDto;
use crate::shared::types::{ApiResponse, Meta};

/// Get headline triage counters
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>)
    ),
    tag = "dashboard"
)]
pub async fn get_summary(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>> {
    let summary = service.summary().await;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Get the type distribution, most frequent first
#[utoipa::path(
    get,
    path = "/api/dashboard/by-type",
    responses(
        (status = 200, description = "Counts per pollution type", body = ApiResponse<Vec<TypeCountDto>>)
    ),
    tag = "dashboard"
)]
pub async fn get_by_type(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<Vec<TypeCountDto>>>> {
    let breakdown = service.by_type().await;
    Ok(Json(ApiResponse::success(Some(breakdown), None, None)))
}

/// List reports for the dashboard, optionally filtered by status
#[utoipa::path(
    get,
    path = "/api/dashboard/reports",
    params(DashboardReportsParams),
    responses(
        (status = 200, description = "Reports, newest first", body = ApiResponse<Vec<ReportResponseDto>>)
    ),
    tag = "dashboard"
)]
pub async fn list_reports(
    State(service): State<Arc<DashboardService>>,
    Query(params): Query<DashboardReportsParams>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = service.reports(params.status).await;
    let total = reports.len() as i64;
    let dtos: Vec<ReportResponseDto> = reports.iter().map(ReportResponseDto::from).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}
