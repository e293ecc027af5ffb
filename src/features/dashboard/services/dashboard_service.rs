use std::sync::Arc;

use crate::features::dashboard::dtos::{DashboardSummaryDto, TypeCountDto};
use crate::features::reports::models::{Report, ReportStatus, SeverityLevel};
use crate::features::reports::services::ReportService;

/// Derives triage statistics from the report store.
///
/// Aggregates are recomputed from a full store snapshot on every call rather
/// than maintained incrementally; at the report volumes involved this is the
/// simpler design to get right.
pub struct DashboardService {
    report_service: Arc<ReportService>,
}

impl DashboardService {
    pub fn new(report_service: Arc<ReportService>) -> Self {
        Self { report_service }
    }

    pub async fn summary(&self) -> DashboardSummaryDto {
        compute_summary(&self.report_service.all().await)
    }

    pub async fn by_type(&self) -> Vec<TypeCountDto> {
        compute_type_breakdown(&self.report_service.all().await)
    }

    /// Reports for the dashboard list, optionally restricted to one status,
    /// store order (newest first) preserved.
    pub async fn reports(&self, status: Option<ReportStatus>) -> Vec<Report> {
        self.report_service
            .all()
            .await
            .into_iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .collect()
    }
}

fn compute_summary(reports: &[Report]) -> DashboardSummaryDto {
    let count_status = |status: ReportStatus| -> i64 {
        reports.iter().filter(|r| r.status == status).count() as i64
    };

    DashboardSummaryDto {
        total: reports.len() as i64,
        pending: count_status(ReportStatus::Pending),
        in_progress: count_status(ReportStatus::InProgress),
        resolved: count_status(ReportStatus::Resolved),
        critical: reports
            .iter()
            .filter(|r| r.level == SeverityLevel::Critical)
            .count() as i64,
    }
}

fn compute_type_breakdown(reports: &[Report]) -> Vec<TypeCountDto> {
    let total = reports.len() as i64;

    // Count per type in encounter order, so equal counts keep a stable order
    let mut counts: Vec<TypeCountDto> = Vec::new();
    for report in reports {
        match counts
            .iter_mut()
            .find(|c| c.pollution_type == report.pollution_type)
        {
            Some(entry) => entry.count += 1,
            None => counts.push(TypeCountDto {
                pollution_type: report.pollution_type,
                count: 1,
                share: 0.0,
            }),
        }
    }

    // Vec::sort_by is stable; ties stay in encounter order
    counts.sort_by(|a, b| b.count.cmp(&a.count));

    for entry in &mut counts {
        entry.share = if total == 0 {
            0.0
        } else {
            entry.count as f64 / total as f64
        };
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::PollutionType;
    use crate::shared::test_helpers::{classified_draft, sample_report};

    #[test]
    fn test_empty_store_yields_zero_counts_and_no_nan() {
        let summary = compute_summary(&[]);
        assert_eq!(
            summary,
            DashboardSummaryDto {
                total: 0,
                pending: 0,
                in_progress: 0,
                resolved: 0,
                critical: 0,
            }
        );

        assert!(compute_type_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_status_counts_sum_to_total() {
        let reports = vec![
            sample_report(
                PollutionType::Water,
                SeverityLevel::Critical,
                ReportStatus::Pending,
            ),
            sample_report(
                PollutionType::Water,
                SeverityLevel::High,
                ReportStatus::InProgress,
            ),
            sample_report(
                PollutionType::Air,
                SeverityLevel::Critical,
                ReportStatus::Pending,
            ),
            sample_report(
                PollutionType::SolidWaste,
                SeverityLevel::High,
                ReportStatus::Resolved,
            ),
        ];

        let summary = compute_summary(&reports);
        assert_eq!(summary.total, 4);
        assert_eq!(
            summary.pending + summary.in_progress + summary.resolved,
            summary.total
        );
        assert_eq!(summary.critical, 2);
    }

    #[test]
    fn test_type_breakdown_sorted_desc_with_stable_ties() {
        // Air and SolidWaste tie at 1; Air is encountered first
        let reports = vec![
            sample_report(
                PollutionType::Air,
                SeverityLevel::Low,
                ReportStatus::Pending,
            ),
            sample_report(
                PollutionType::Water,
                SeverityLevel::Low,
                ReportStatus::Pending,
            ),
            sample_report(
                PollutionType::SolidWaste,
                SeverityLevel::Low,
                ReportStatus::Pending,
            ),
            sample_report(
                PollutionType::Water,
                SeverityLevel::Low,
                ReportStatus::Pending,
            ),
        ];

        let breakdown = compute_type_breakdown(&reports);

        let order: Vec<PollutionType> = breakdown.iter().map(|c| c.pollution_type).collect();
        assert_eq!(
            order,
            vec![
                PollutionType::Water,
                PollutionType::Air,
                PollutionType::SolidWaste
            ]
        );

        let count_sum: i64 = breakdown.iter().map(|c| c.count).sum();
        assert_eq!(count_sum, 4);

        assert!((breakdown[0].share - 0.5).abs() < 1e-12);
        assert!((breakdown[1].share - 0.25).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_triage_scenario_end_to_end() {
        let report_service = Arc::new(ReportService::new());
        let dashboard = DashboardService::new(Arc::clone(&report_service));

        // Store starts empty
        assert_eq!(dashboard.summary().await.total, 0);

        // Submit report A: Contaminación del Agua, Crítico
        let a = report_service
            .submit(classified_draft(
                PollutionType::Water,
                SeverityLevel::Critical,
            ))
            .await
            .unwrap();

        let summary = dashboard.summary().await;
        assert_eq!(summary.total, 1);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.critical, 1);

        // Resolve A; everything else about it stays unchanged
        report_service
            .update_status(a.id, ReportStatus::Resolved)
            .await
            .unwrap();

        let summary = dashboard.summary().await;
        assert_eq!(summary.pending, 0);
        assert_eq!(summary.resolved, 1);

        let a_after = report_service.get(a.id).await.unwrap();
        assert_eq!(a_after.pollution_type, a.pollution_type);
        assert_eq!(a_after.level, a.level);
        assert_eq!(a_after.timestamp, a.timestamp);

        // Status tabs
        let resolved = dashboard.reports(Some(ReportStatus::Resolved)).await;
        assert_eq!(resolved.len(), 1);
        assert!(dashboard
            .reports(Some(ReportStatus::Pending))
            .await
            .is_empty());
    }
}
