use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::viewport::dtos::{
    BeginDragDto, DragBeginResponseDto, DragMoveDto, MapMarkersDto, SelectReportDto, SetPanDto,
    SetTypeFilterDto, SetZoomDto, ViewportStateDto, WheelDto,
};
use crate::features::viewport::services::ViewportService;
use crate::shared::types::ApiResponse;

/// Open a new map view
#[utoipa::path(
    post,
    path = "/api/viewports",
    responses(
        (status = 200, description = "View opened", body = ApiResponse<ViewportStateDto>)
    ),
    tag = "viewports"
)]
pub async fn open_view(
    State(service): State<Arc<ViewportService>>,
) -> Result<Json<ApiResponse<ViewportStateDto>>> {
    let view = service.open_view().await;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}

/// Get a view's camera state
#[utoipa::path(
    get,
    path = "/api/viewports/{id}",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    responses(
        (status = 200, description = "Viewport state", body = ApiResponse<ViewportStateDto>),
        (status = 404, description = "Viewport not found")
    ),
    tag = "viewports"
)]
pub async fn get_view(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ViewportStateDto>>> {
    let state = service.state(id).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Tear down a map view
#[utoipa::path(
    delete,
    path = "/api/viewports/{id}",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    responses(
        (status = 200, description = "View closed"),
        (status = 404, description = "Viewport not found")
    ),
    tag = "viewports"
)]
pub async fn close_view(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.close_view(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}

/// Pointer-down on the map surface
#[utoipa::path(
    post,
    path = "/api/viewports/{id}/drag/begin",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    request_body = BeginDragDto,
    responses(
        (status = 200, description = "Drag started or marker hit", body = ApiResponse<DragBeginResponseDto>),
        (status = 404, description = "Viewport not found")
    ),
    tag = "viewports"
)]
pub async fn begin_drag(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<BeginDragDto>,
) -> Result<Json<ApiResponse<DragBeginResponseDto>>> {
    let outcome = service.begin_drag(id, dto.pointer, dto.button).await?;
    Ok(Json(ApiResponse::success(Some(outcome), None, None)))
}

/// Pointer-move while dragging
#[utoipa::path(
    post,
    path = "/api/viewports/{id}/drag/move",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    request_body = DragMoveDto,
    responses(
        (status = 200, description = "Pan updated", body = ApiResponse<ViewportStateDto>),
        (status = 404, description = "Viewport not found")
    ),
    tag = "viewports"
)]
pub async fn drag_move(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<DragMoveDto>,
) -> Result<Json<ApiResponse<ViewportStateDto>>> {
    let state = service.drag_to(id, dto.pointer).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Pointer release; accepted from anywhere, including outside the view
#[utoipa::path(
    post,
    path = "/api/viewports/{id}/drag/end",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    responses(
        (status = 200, description = "Drag ended", body = ApiResponse<ViewportStateDto>),
        (status = 404, description = "Viewport not found")
    ),
    tag = "viewports"
)]
pub async fn end_drag(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ViewportStateDto>>> {
    let state = service.end_drag(id).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Apply a wheel notch (scroll down zooms out)
#[utoipa::path(
    post,
    path = "/api/viewports/{id}/wheel",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    request_body = WheelDto,
    responses(
        (status = 200, description = "Zoom updated", body = ApiResponse<ViewportStateDto>),
        (status = 404, description = "Viewport not found")
    ),
    tag = "viewports"
)]
pub async fn wheel(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<WheelDto>,
) -> Result<Json<ApiResponse<ViewportStateDto>>> {
    let state = service.wheel(id, dto.delta_y).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Zoom-in control (+0.2)
#[utoipa::path(
    post,
    path = "/api/viewports/{id}/zoom-in",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    responses(
        (status = 200, description = "Zoom updated", body = ApiResponse<ViewportStateDto>),
        (status = 404, description = "Viewport not found")
    ),
    tag = "viewports"
)]
pub async fn zoom_in(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ViewportStateDto>>> {
    let state = service.zoom_in(id).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Zoom-out control (-0.2)
#[utoipa::path(
    post,
    path = "/api/viewports/{id}/zoom-out",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    responses(
        (status = 200, description = "Zoom updated", body = ApiResponse<ViewportStateDto>),
        (status = 404, description = "Viewport not found")
    ),
    tag = "viewports"
)]
pub async fn zoom_out(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ViewportStateDto>>> {
    let state = service.zoom_out(id).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Set the pan offset directly
#[utoipa::path(
    put,
    path = "/api/viewports/{id}/pan",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    request_body = SetPanDto,
    responses(
        (status = 200, description = "Pan updated", body = ApiResponse<ViewportStateDto>),
        (status = 404, description = "Viewport not found")
    ),
    tag = "viewports"
)]
pub async fn set_pan(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<SetPanDto>,
) -> Result<Json<ApiResponse<ViewportStateDto>>> {
    let state = service.set_pan(id, dto.pan).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Set the zoom factor directly (saturated into [0.5, 3.0])
#[utoipa::path(
    put,
    path = "/api/viewports/{id}/zoom",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    request_body = SetZoomDto,
    responses(
        (status = 200, description = "Zoom updated", body = ApiResponse<ViewportStateDto>),
        (status = 404, description = "Viewport not found")
    ),
    tag = "viewports"
)]
pub async fn set_zoom(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<SetZoomDto>,
) -> Result<Json<ApiResponse<ViewportStateDto>>> {
    let state = service.set_zoom(id, dto.zoom).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Select a marker or clear the selection
#[utoipa::path(
    put,
    path = "/api/viewports/{id}/selection",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    request_body = SelectReportDto,
    responses(
        (status = 200, description = "Selection updated", body = ApiResponse<ViewportStateDto>),
        (status = 404, description = "Viewport or report not found")
    ),
    tag = "viewports"
)]
pub async fn select_report(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<SelectReportDto>,
) -> Result<Json<ApiResponse<ViewportStateDto>>> {
    let state = service.select_report(id, dto.report_id).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Set the view's type filter (`null` shows every type)
#[utoipa::path(
    put,
    path = "/api/viewports/{id}/filter",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    request_body = SetTypeFilterDto,
    responses(
        (status = 200, description = "Filter updated", body = ApiResponse<ViewportStateDto>),
        (status = 404, description = "Viewport not found")
    ),
    tag = "viewports"
)]
pub async fn set_type_filter(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<SetTypeFilterDto>,
) -> Result<Json<ApiResponse<ViewportStateDto>>> {
    let state = service.set_type_filter(id, dto.pollution_type).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Visible markers under the view's camera and filter
#[utoipa::path(
    get,
    path = "/api/viewports/{id}/markers",
    params(("id" = Uuid, Path, description = "Viewport ID")),
    responses(
        (status = 200, description = "Rendered markers", body = ApiResponse<MapMarkersDto>),
        (status = 404, description = "Viewport not found")
    ),
    tag = "viewports"
)]
pub async fn markers(
    State(service): State<Arc<ViewportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<MapMarkersDto>>> {
    let markers = service.markers(id).await?;
    Ok(Json(ApiResponse::success(Some(markers), None, None)))
}
