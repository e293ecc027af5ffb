use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Pollution category assigned by the image classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PollutionType {
    #[serde(rename = "Residuos Sólidos")]
    SolidWaste,
    #[serde(rename = "Contaminación del Agua")]
    Water,
    #[serde(rename = "Contaminación del Aire")]
    Air,
    #[serde(rename = "Contaminación Acústica")]
    Noise,
    #[serde(rename = "Contaminación Visual")]
    Visual,
    #[serde(rename = "Contaminación del Suelo")]
    Soil,
}

impl PollutionType {
    pub const ALL: [PollutionType; 6] = [
        PollutionType::SolidWaste,
        PollutionType::Water,
        PollutionType::Air,
        PollutionType::Noise,
        PollutionType::Visual,
        PollutionType::Soil,
    ];
}

impl std::fmt::Display for PollutionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollutionType::SolidWaste => write!(f, "Residuos Sólidos"),
            PollutionType::Water => write!(f, "Contaminación del Agua"),
            PollutionType::Air => write!(f, "Contaminación del Aire"),
            PollutionType::Noise => write!(f, "Contaminación Acústica"),
            PollutionType::Visual => write!(f, "Contaminación Visual"),
            PollutionType::Soil => write!(f, "Contaminación del Suelo"),
        }
    }
}

/// Severity assigned by the image classifier, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum SeverityLevel {
    #[serde(rename = "Bajo")]
    Low,
    #[serde(rename = "Moderado")]
    Moderate,
    #[serde(rename = "Alto")]
    High,
    #[serde(rename = "Crítico")]
    Critical,
}

impl SeverityLevel {
    pub const ALL: [SeverityLevel; 4] = [
        SeverityLevel::Low,
        SeverityLevel::Moderate,
        SeverityLevel::High,
        SeverityLevel::Critical,
    ];
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityLevel::Low => write!(f, "Bajo"),
            SeverityLevel::Moderate => write!(f, "Moderado"),
            SeverityLevel::High => write!(f, "Alto"),
            SeverityLevel::Critical => write!(f, "Crítico"),
        }
    }
}

/// Triage state of a report; every transition is an explicit authority action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::InProgress => write!(f, "in-progress"),
            ReportStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Geographic position of an incident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// A classified pollution incident report.
///
/// Immutable after creation except for `status`, which authorities may
/// overwrite any number of times. Reports are never deleted.
#[derive(Debug, Clone)]
pub struct Report {
    pub id: Uuid,
    pub pollution_type: PollutionType,
    pub level: SeverityLevel,
    pub description: String,
    pub location: ReportLocation,
    pub image: Vec<u8>,
    pub timestamp: DateTime<Utc>,
    pub status: ReportStatus,
}

/// Data for creating a new report.
///
/// `pollution_type` and `level` stay `None` until classification completes;
/// the store refuses drafts that are still unclassified.
#[derive(Debug)]
pub struct ReportDraft {
    pub pollution_type: Option<PollutionType>,
    pub level: Option<SeverityLevel>,
    pub description: String,
    pub location: ReportLocation,
    pub image: Vec<u8>,
}
