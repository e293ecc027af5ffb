mod viewport_dto;

pub use viewport_dto::{
    BeginDragDto, DragBeginResponseDto, DragMoveDto, MapMarkersDto, MarkerDto, SelectReportDto,
    SetPanDto, SetTypeFilterDto, SetZoomDto, ViewportStateDto, WheelDto,
};
