#[cfg(test)]
use chrono::Utc;

#[cfg(test)]
use fake::faker::address::en::CityName;
#[cfg(test)]
use fake::faker::lorem::en::Sentence;
#[cfg(test)]
use fake::Fake;

#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::reports::models::{
    PollutionType, Report, ReportDraft, ReportLocation, ReportStatus, SeverityLevel,
};

#[cfg(test)]
pub fn sample_location() -> ReportLocation {
    ReportLocation {
        lat: -12.0464,
        lng: -77.0428,
        address: CityName().fake(),
    }
}

/// Draft as it looks after classification completed.
#[cfg(test)]
pub fn classified_draft(pollution_type: PollutionType, level: SeverityLevel) -> ReportDraft {
    ReportDraft {
        pollution_type: Some(pollution_type),
        level: Some(level),
        description: Sentence(3..8).fake(),
        location: sample_location(),
        image: vec![0xff, 0xd8, 0xff, 0xe0],
    }
}

/// Draft as it looks while classification is still pending.
#[cfg(test)]
pub fn unclassified_draft() -> ReportDraft {
    ReportDraft {
        pollution_type: None,
        level: None,
        description: Sentence(3..8).fake(),
        location: sample_location(),
        image: vec![0xff, 0xd8, 0xff, 0xe0],
    }
}

/// A fully-formed stored report, for aggregate and viewport tests.
#[cfg(test)]
pub fn sample_report(
    pollution_type: PollutionType,
    level: SeverityLevel,
    status: ReportStatus,
) -> Report {
    Report {
        id: Uuid::now_v7(),
        pollution_type,
        level,
        description: Sentence(3..8).fake(),
        location: sample_location(),
        image: vec![0xff, 0xd8, 0xff, 0xe0],
        timestamp: Utc::now(),
        status,
    }
}
