use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{
    PollutionType, Report, ReportLocation, ReportStatus, SeverityLevel,
};
use crate::shared::validation::TEAM_CONTACT_REGEX;

/// Incident location as submitted by the citizen app
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReportLocationDto {
    /// Latitude in degrees
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    /// Longitude in degrees
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    /// Human-readable address
    #[validate(length(min = 1, max = 500))]
    pub address: String,
}

impl From<ReportLocationDto> for ReportLocation {
    fn from(l: ReportLocationDto) -> Self {
        Self {
            lat: l.lat,
            lng: l.lng,
            address: l.address,
        }
    }
}

impl From<ReportLocation> for ReportLocationDto {
    fn from(l: ReportLocation) -> Self {
        Self {
            lat: l.lat,
            lng: l.lng,
            address: l.address,
        }
    }
}

/// Request DTO for submitting a classified report.
///
/// `type` and `level` come from a completed classification; a draft without
/// both is rejected and the citizen has to recapture.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitReportDto {
    #[serde(rename = "type")]
    pub pollution_type: Option<PollutionType>,
    pub level: Option<SeverityLevel>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(nested)]
    pub location: ReportLocationDto,
    /// Base64 image payload, optionally in `data:<mime>;base64,` form
    #[validate(length(min = 1))]
    pub image: String,
}

/// Response DTO for report listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub pollution_type: PollutionType,
    pub level: SeverityLevel,
    pub description: String,
    pub location: ReportLocationDto,
    /// Size of the stored photo in bytes
    pub image_size: usize,
    pub timestamp: DateTime<Utc>,
    pub status: ReportStatus,
}

impl From<&Report> for ReportResponseDto {
    fn from(r: &Report) -> Self {
        Self {
            id: r.id,
            pollution_type: r.pollution_type,
            level: r.level,
            description: r.description.clone(),
            location: r.location.clone().into(),
            image_size: r.image.len(),
            timestamp: r.timestamp,
            status: r.status,
        }
    }
}

/// Response DTO for a single report, photo included
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportDetailResponseDto {
    #[serde(flatten)]
    pub report: ReportResponseDto,
    /// Stored photo re-encoded as base64
    pub image: String,
}

/// Request DTO for updating report status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
}

/// Request DTO for assigning a response team to a report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssignTeamDto {
    #[validate(length(min = 1, max = 200))]
    pub team_name: String,
    #[validate(regex(path = *TEAM_CONTACT_REGEX))]
    pub team_contact: String,
}

/// Acknowledgement returned after a team assignment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamAssignmentDto {
    pub report_id: Uuid,
    pub team_name: String,
    pub team_contact: String,
    pub acknowledged_at: DateTime<Utc>,
}
