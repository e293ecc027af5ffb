use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{PollutionType, Report};
use crate::features::reports::services::ReportService;
use crate::features::viewport::dtos::{
    DragBeginResponseDto, MapMarkersDto, MarkerDto, ViewportStateDto,
};
use crate::features::viewport::models::{Point, PointerButton, ViewportState};
use crate::features::viewport::services::PlaneProjection;
use crate::shared::constants::MARKER_HIT_RADIUS;

/// Owns the camera state of every open map view and composes it with the
/// report store and the plane projection into render coordinates.
///
/// Views are independent: each id maps to exactly one `ViewportState`, and a
/// view's state is discarded when the view closes.
pub struct ViewportService {
    report_service: Arc<ReportService>,
    projection: PlaneProjection,
    views: RwLock<HashMap<Uuid, ViewportState>>,
}

impl ViewportService {
    pub fn new(report_service: Arc<ReportService>, projection: PlaneProjection) -> Self {
        Self {
            report_service,
            projection,
            views: RwLock::new(HashMap::new()),
        }
    }

    pub async fn open_view(&self) -> ViewportStateDto {
        let id = Uuid::now_v7();
        let state = ViewportState::default();
        let dto = ViewportStateDto::from_state(id, &state);

        self.views.write().await.insert(id, state);
        tracing::info!("Opened map view {}", id);

        dto
    }

    pub async fn close_view(&self, id: Uuid) -> Result<()> {
        self.views
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("Viewport {} not found", id)))?;

        tracing::info!("Closed map view {}", id);
        Ok(())
    }

    pub async fn state(&self, id: Uuid) -> Result<ViewportStateDto> {
        let views = self.views.read().await;
        let state = Self::view(&views, id)?;
        Ok(ViewportStateDto::from_state(id, state))
    }

    /// Pointer-down on the map surface. A press on a marker is consumed by
    /// the marker (no drag begins) and the hit id is reported back for
    /// selection; a press on open ground starts a drag.
    pub async fn begin_drag(
        &self,
        id: Uuid,
        pointer: Point,
        button: PointerButton,
    ) -> Result<DragBeginResponseDto> {
        let reports = self.report_service.all().await;

        let mut views = self.views.write().await;
        let state = Self::view_mut(&mut views, id)?;

        let hit = Self::hit_test(&self.projection, state, &reports, pointer)?;
        let drag_started = if hit.is_none() {
            state.begin_drag(pointer, button)
        } else {
            false
        };

        Ok(DragBeginResponseDto {
            drag_started,
            hit_report_id: hit,
            viewport: ViewportStateDto::from_state(id, state),
        })
    }

    pub async fn drag_to(&self, id: Uuid, pointer: Point) -> Result<ViewportStateDto> {
        self.mutate(id, |state| state.drag_to(pointer)).await
    }

    /// Release from anywhere, including outside the view's surface.
    pub async fn end_drag(&self, id: Uuid) -> Result<ViewportStateDto> {
        self.mutate(id, |state| state.end_drag()).await
    }

    pub async fn wheel(&self, id: Uuid, delta_y: f64) -> Result<ViewportStateDto> {
        self.mutate(id, |state| state.wheel(delta_y)).await
    }

    pub async fn zoom_in(&self, id: Uuid) -> Result<ViewportStateDto> {
        self.mutate(id, |state| state.zoom_in()).await
    }

    pub async fn zoom_out(&self, id: Uuid) -> Result<ViewportStateDto> {
        self.mutate(id, |state| state.zoom_out()).await
    }

    pub async fn set_pan(&self, id: Uuid, pan: Point) -> Result<ViewportStateDto> {
        self.mutate(id, |state| state.set_pan(pan)).await
    }

    pub async fn set_zoom(&self, id: Uuid, zoom: f64) -> Result<ViewportStateDto> {
        self.mutate(id, |state| state.set_zoom(zoom)).await
    }

    /// Select a marker (replacing any previous selection) or clear with
    /// `None`. Selection is only ever cleared explicitly, never by camera
    /// movement.
    pub async fn select_report(
        &self,
        id: Uuid,
        report_id: Option<Uuid>,
    ) -> Result<ViewportStateDto> {
        if let Some(report_id) = report_id {
            if !self.report_service.exists(report_id).await {
                return Err(AppError::NotFound(format!(
                    "Report {} not found",
                    report_id
                )));
            }
        }

        self.mutate(id, |state| state.selected_report_id = report_id)
            .await
    }

    /// Narrow the visible set to one type, or show everything with `None`.
    /// A filter whose type has vanished from the store simply yields an
    /// empty visible set.
    pub async fn set_type_filter(
        &self,
        id: Uuid,
        pollution_type: Option<PollutionType>,
    ) -> Result<ViewportStateDto> {
        self.mutate(id, |state| state.type_filter = pollution_type)
            .await
    }

    /// Visible markers under the view's current camera and filter, in store
    /// order (newest first), plus the filter values currently offerable.
    pub async fn markers(&self, id: Uuid) -> Result<MapMarkersDto> {
        let reports = self.report_service.all().await;

        let views = self.views.read().await;
        let state = Self::view(&views, id)?;

        let mut markers = Vec::new();
        for report in Self::visible(state, &reports) {
            let projected = self
                .projection
                .project(report.location.lat, report.location.lng)?;
            markers.push(MarkerDto {
                report_id: report.id,
                position: state.render_position(projected),
                pollution_type: report.pollution_type,
                level: report.level,
                status: report.status,
                selected: state.selected_report_id == Some(report.id),
            });
        }

        // Distinct types present in the store, first-seen order
        let mut available_types: Vec<PollutionType> = Vec::new();
        for report in &reports {
            if !available_types.contains(&report.pollution_type) {
                available_types.push(report.pollution_type);
            }
        }

        Ok(MapMarkersDto {
            viewport: ViewportStateDto::from_state(id, state),
            markers,
            available_types,
        })
    }

    fn view(views: &HashMap<Uuid, ViewportState>, id: Uuid) -> Result<&ViewportState> {
        views
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Viewport {} not found", id)))
    }

    fn view_mut(views: &mut HashMap<Uuid, ViewportState>, id: Uuid) -> Result<&mut ViewportState> {
        views
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Viewport {} not found", id)))
    }

    async fn mutate<F>(&self, id: Uuid, f: F) -> Result<ViewportStateDto>
    where
        F: FnOnce(&mut ViewportState),
    {
        let mut views = self.views.write().await;
        let state = Self::view_mut(&mut views, id)?;
        f(state);
        Ok(ViewportStateDto::from_state(id, state))
    }

    fn visible<'a>(state: &ViewportState, reports: &'a [Report]) -> Vec<&'a Report> {
        reports
            .iter()
            .filter(|r| match state.type_filter {
                Some(t) => r.pollution_type == t,
                None => true,
            })
            .collect()
    }

    /// Nearest visible marker within the hit radius of the pointer, by
    /// rendered position.
    fn hit_test(
        projection: &PlaneProjection,
        state: &ViewportState,
        reports: &[Report],
        pointer: Point,
    ) -> Result<Option<Uuid>> {
        let mut best: Option<(Uuid, f64)> = None;

        for report in Self::visible(state, reports) {
            let projected = projection.project(report.location.lat, report.location.lng)?;
            let rendered = state.render_position(projected);
            let dx = rendered.x - pointer.x;
            let dy = rendered.y - pointer.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance <= MARKER_HIT_RADIUS && best.map_or(true, |(_, d)| distance < d) {
                best = Some((report.id, distance));
            }
        }

        Ok(best.map(|(id, _)| id))
    }
}
