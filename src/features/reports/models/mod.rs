mod report;

pub use report::{PollutionType, Report, ReportDraft, ReportLocation, ReportStatus, SeverityLevel};
