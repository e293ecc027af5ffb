mod report_dto;

pub use report_dto::{
    AssignTeamDto, ReportDetailResponseDto, ReportLocationDto, ReportResponseDto, SubmitReportDto,
    TeamAssignmentDto, UpdateReportStatusDto,
};
