use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::reports::models::{PollutionType, ReportStatus, SeverityLevel};
use crate::features::viewport::models::{Point, PointerButton, ViewportState};

/// Camera state of an open map view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ViewportStateDto {
    pub id: Uuid,
    pub pan: Point,
    pub zoom: f64,
    pub selected_report_id: Option<Uuid>,
    pub type_filter: Option<PollutionType>,
    pub dragging: bool,
}

impl ViewportStateDto {
    pub fn from_state(id: Uuid, state: &ViewportState) -> Self {
        Self {
            id,
            pan: state.pan,
            zoom: state.zoom,
            selected_report_id: state.selected_report_id,
            type_filter: state.type_filter,
            dragging: state.is_dragging(),
        }
    }
}

/// Request DTO for a pointer-down on the map surface
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BeginDragDto {
    pub pointer: Point,
    #[serde(default)]
    pub button: PointerButton,
}

/// Request DTO for a pointer-move while dragging
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DragMoveDto {
    pub pointer: Point,
}

/// Request DTO for a discrete wheel notch
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WheelDto {
    pub delta_y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetPanDto {
    pub pan: Point,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetZoomDto {
    pub zoom: f64,
}

/// Request DTO for selecting a marker (`null` clears the selection)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SelectReportDto {
    pub report_id: Option<Uuid>,
}

/// Request DTO for the type filter (`null` shows every type)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetTypeFilterDto {
    #[serde(rename = "type")]
    pub pollution_type: Option<PollutionType>,
}

/// Outcome of a pointer-down: either a drag began or a marker consumed it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DragBeginResponseDto {
    pub drag_started: bool,
    /// Marker under the pointer, if one consumed the press
    pub hit_report_id: Option<Uuid>,
    pub viewport: ViewportStateDto,
}

/// A report marker with its rendered screen position
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkerDto {
    pub report_id: Uuid,
    pub position: Point,
    #[serde(rename = "type")]
    pub pollution_type: PollutionType,
    pub level: SeverityLevel,
    pub status: ReportStatus,
    pub selected: bool,
}

/// Visible markers of a view under its current camera and filter
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapMarkersDto {
    pub viewport: ViewportStateDto,
    pub markers: Vec<MarkerDto>,
    /// Distinct types currently present in the store ("all" is implicit)
    pub available_types: Vec<PollutionType>,
}
