use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::classification::models::ClassificationState;
use crate::features::reports::models::{PollutionType, SeverityLevel};

/// Request DTO for starting a classification
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct StartClassificationDto {
    /// Base64 image payload, optionally in `data:<mime>;base64,` form
    #[validate(length(min = 1))]
    pub image: String,
    /// Token of a prior capture this one supersedes, if any
    pub replaces: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationPhase {
    Pending,
    Completed,
    Cancelled,
}

/// Response DTO describing a classification request's current state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassificationStatusDto {
    pub token: Uuid,
    pub status: ClassificationPhase,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub pollution_type: Option<PollutionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SeverityLevel>,
}

impl ClassificationStatusDto {
    pub fn from_state(token: Uuid, state: ClassificationState) -> Self {
        match state {
            ClassificationState::Pending => Self {
                token,
                status: ClassificationPhase::Pending,
                pollution_type: None,
                level: None,
            },
            ClassificationState::Completed(outcome) => Self {
                token,
                status: ClassificationPhase::Completed,
                pollution_type: Some(outcome.pollution_type),
                level: Some(outcome.level),
            },
            ClassificationState::Cancelled => Self {
                token,
                status: ClassificationPhase::Cancelled,
                pollution_type: None,
                level: None,
            },
        }
    }
}
