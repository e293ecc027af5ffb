use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::{PollutionType, SeverityLevel};

/// The (type, level) pair a classifier assigns to a captured image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationOutcome {
    #[serde(rename = "type")]
    pub pollution_type: PollutionType,
    pub level: SeverityLevel,
}

/// Lifecycle of one classification request.
///
/// A request that is `Cancelled` stays cancelled: a completion arriving
/// afterwards is dropped, never applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationState {
    Pending,
    Completed(ClassificationOutcome),
    Cancelled,
}
