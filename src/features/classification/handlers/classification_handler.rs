use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::classification::dtos::{
    ClassificationPhase, ClassificationStatusDto, StartClassificationDto,
};
use crate::features::classification::services::ClassificationService;
use crate::features::reports::services::ReportService;
use crate::shared::types::ApiResponse;

/// Start classifying a captured image
#[utoipa::path(
    post,
    path = "/api/classifications",
    request_body = StartClassificationDto,
    responses(
        (status = 200, description = "Classification started", body = ApiResponse<ClassificationStatusDto>),
        (status = 400, description = "Invalid image payload")
    ),
    tag = "classifications"
)]
pub async fn start_classification(
    State(service): State<Arc<ClassificationService>>,
    AppJson(dto): AppJson<StartClassificationDto>,
) -> Result<Json<ApiResponse<ClassificationStatusDto>>> {
    dto.validate()?;
    let image = ReportService::decode_image(&dto.image)?;
    let token = service.start(image, dto.replaces).await;

    Ok(Json(ApiResponse::success(
        Some(ClassificationStatusDto {
            token,
            status: ClassificationPhase::Pending,
            pollution_type: None,
            level: None,
        }),
        None,
        None,
    )))
}

/// Get the current state of a classification request
#[utoipa::path(
    get,
    path = "/api/classifications/{token}",
    params(
        ("token" = Uuid, Path, description = "Classification token")
    ),
    responses(
        (status = 200, description = "Classification state", body = ApiResponse<ClassificationStatusDto>),
        (status = 404, description = "Unknown token")
    ),
    tag = "classifications"
)]
pub async fn get_classification(
    State(service): State<Arc<ClassificationService>>,
    Path(token): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ClassificationStatusDto>>> {
    let state = service.status(token).await?;
    Ok(Json(ApiResponse::success(
        Some(ClassificationStatusDto::from_state(token, state)),
        None,
        None,
    )))
}

/// Cancel a pending classification (e.g. the citizen removed the photo)
#[utoipa::path(
    delete,
    path = "/api/classifications/{token}",
    params(
        ("token" = Uuid, Path, description = "Classification token")
    ),
    responses(
        (status = 200, description = "Classification cancelled", body = ApiResponse<ClassificationStatusDto>),
        (status = 404, description = "Unknown token")
    ),
    tag = "classifications"
)]
pub async fn cancel_classification(
    State(service): State<Arc<ClassificationService>>,
    Path(token): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ClassificationStatusDto>>> {
    service.cancel(token).await?;
    let state = service.status(token).await?;
    Ok(Json(ApiResponse::success(
        Some(ClassificationStatusDto::from_state(token, state)),
        None,
        None,
    )))
}
