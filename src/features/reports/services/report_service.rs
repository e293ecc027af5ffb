use base64::prelude::*;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::TeamAssignmentDto;
use crate::features::reports::models::{Report, ReportDraft, ReportStatus};

/// Authoritative in-memory store of incident reports.
///
/// Reports are prepended on submit, so the backing vec is always in
/// reverse-chronological order and `all()` needs no re-sort. State is
/// process-local and lost on shutdown.
pub struct ReportService {
    reports: RwLock<Vec<Report>>,
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportService {
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(Vec::new()),
        }
    }

    /// Decode a base64 image payload, tolerating the `data:<mime>;base64,`
    /// prefix the capture flow produces.
    pub fn decode_image(payload: &str) -> Result<Vec<u8>> {
        let encoded = match payload.split_once(";base64,") {
            Some((_, rest)) => rest,
            None => payload,
        };

        BASE64_STANDARD
            .decode(encoded.trim())
            .map_err(|e| AppError::BadRequest(format!("Invalid image payload: {}", e)))
    }

    /// Create a report from a classified draft.
    ///
    /// A draft whose classification has not completed (missing type or level)
    /// is rejected; the caller discards it and the citizen recaptures.
    pub async fn submit(&self, draft: ReportDraft) -> Result<Report> {
        let pollution_type = draft.pollution_type.ok_or_else(|| {
            AppError::IncompleteSubmission(
                "Report draft has no pollution type; classification has not completed".to_string(),
            )
        })?;
        let level = draft.level.ok_or_else(|| {
            AppError::IncompleteSubmission(
                "Report draft has no severity level; classification has not completed".to_string(),
            )
        })?;

        let report = Report {
            id: Uuid::now_v7(),
            pollution_type,
            level,
            description: draft.description,
            location: draft.location,
            image: draft.image,
            timestamp: Utc::now(),
            status: ReportStatus::Pending,
        };

        let mut reports = self.reports.write().await;
        reports.insert(0, report.clone());

        tracing::info!(
            "Created report {} ({}, {}) at {}",
            report.id,
            report.pollution_type,
            report.level,
            report.location.address
        );

        Ok(report)
    }

    /// Overwrite a report's status. Any status is reachable from any other;
    /// unknown ids leave the store unchanged.
    pub async fn update_status(&self, id: Uuid, status: ReportStatus) -> Result<Report> {
        let mut reports = self.reports.write().await;
        let report = reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        report.status = status;
        tracing::info!("Report {} status set to {}", id, status);

        Ok(report.clone())
    }

    /// All reports, newest first.
    pub async fn all(&self) -> Vec<Report> {
        self.reports.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Result<Report> {
        self.reports
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    pub async fn exists(&self, id: Uuid) -> bool {
        self.reports.read().await.iter().any(|r| r.id == id)
    }

    /// Notify a response team about a report. Acknowledgement only; the
    /// report itself is not mutated.
    pub async fn assign_team(
        &self,
        id: Uuid,
        team_name: String,
        team_contact: String,
    ) -> Result<TeamAssignmentDto> {
        if !self.exists(id).await {
            return Err(AppError::NotFound(format!("Report {} not found", id)));
        }

        tracing::info!(
            "Team \"{}\" ({}) assigned to report {}",
            team_name,
            team_contact,
            id
        );

        Ok(TeamAssignmentDto {
            report_id: id,
            team_name,
            team_contact,
            acknowledged_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{classified_draft, unclassified_draft};
    use crate::features::reports::models::{PollutionType, SeverityLevel};

    #[tokio::test]
    async fn test_submit_rejects_unclassified_draft() {
        let service = ReportService::new();

        let missing_both = unclassified_draft();
        let err = service.submit(missing_both).await.unwrap_err();
        assert!(matches!(err, AppError::IncompleteSubmission(_)));

        let mut missing_level = classified_draft(PollutionType::Water, SeverityLevel::Critical);
        missing_level.level = None;
        let err = service.submit(missing_level).await.unwrap_err();
        assert!(matches!(err, AppError::IncompleteSubmission(_)));

        // Nothing was persisted
        assert!(service.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_prepends_newest_first() {
        let service = ReportService::new();

        let first = service
            .submit(classified_draft(PollutionType::Water, SeverityLevel::High))
            .await
            .unwrap();
        let second = service
            .submit(classified_draft(PollutionType::Air, SeverityLevel::Low))
            .await
            .unwrap();

        let all = service.all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
        assert_eq!(all[0].status, ReportStatus::Pending);
    }

    #[tokio::test]
    async fn test_update_status_overwrites_freely() {
        let service = ReportService::new();
        let report = service
            .submit(classified_draft(PollutionType::Soil, SeverityLevel::Moderate))
            .await
            .unwrap();

        // Any status is reachable from any other, any number of times
        service
            .update_status(report.id, ReportStatus::Resolved)
            .await
            .unwrap();
        let back = service
            .update_status(report.id, ReportStatus::Pending)
            .await
            .unwrap();
        assert_eq!(back.status, ReportStatus::Pending);

        // Only status changed
        assert_eq!(back.pollution_type, report.pollution_type);
        assert_eq!(back.level, report.level);
        assert_eq!(back.timestamp, report.timestamp);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id_leaves_store_unchanged() {
        let service = ReportService::new();
        service
            .submit(classified_draft(PollutionType::Noise, SeverityLevel::Low))
            .await
            .unwrap();

        let err = service
            .update_status(Uuid::now_v7(), ReportStatus::Resolved)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let all = service.all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, ReportStatus::Pending);
    }

    #[tokio::test]
    async fn test_assign_team_acknowledges_without_mutation() {
        let service = ReportService::new();
        let report = service
            .submit(classified_draft(PollutionType::Water, SeverityLevel::Critical))
            .await
            .unwrap();

        let ack = service
            .assign_team(
                report.id,
                "Equipo de Limpieza Municipal".to_string(),
                "equipo@lima.gob.pe".to_string(),
            )
            .await
            .unwrap();
        assert_eq!(ack.report_id, report.id);

        let unchanged = service.get(report.id).await.unwrap();
        assert_eq!(unchanged.status, ReportStatus::Pending);

        let err = service
            .assign_team(Uuid::now_v7(), "Equipo".to_string(), "987654321".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_decode_image_accepts_data_url_and_plain_base64() {
        let plain = ReportService::decode_image("aGVsbG8=").unwrap();
        assert_eq!(plain, b"hello");

        let data_url = ReportService::decode_image("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(data_url, b"hello");

        assert!(ReportService::decode_image("not base64!!!").is_err());
    }
}
