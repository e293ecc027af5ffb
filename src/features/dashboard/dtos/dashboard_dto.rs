use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::reports::models::{PollutionType, ReportStatus};

/// Headline triage counters for the authority dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub total: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
    /// Reports classified Crítico
    pub critical: i64,
}

/// One row of the type distribution, sorted by count descending
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TypeCountDto {
    #[serde(rename = "type")]
    pub pollution_type: PollutionType,
    pub count: i64,
    /// Fraction of the total report count; 0.0 when the store is empty
    pub share: f64,
}

/// Query parameters for the dashboard report list
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DashboardReportsParams {
    /// Restrict to one triage status; omit for all
    pub status: Option<ReportStatus>,
}
