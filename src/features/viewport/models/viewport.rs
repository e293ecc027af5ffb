use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::reports::models::PollutionType;
use crate::shared::constants::{BUTTON_ZOOM_STEP, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_STEP};

/// A point on the 2D map plane (projected or screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer button reported by the input surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    #[default]
    Primary,
    Auxiliary,
    Secondary,
}

/// Drag interaction state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { anchor: Point },
}

/// Camera state of one open map view.
///
/// Owned by exactly one view and discarded on teardown; holds no references
/// into the report store beyond the selected id.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    pub pan: Point,
    pub zoom: f64,
    pub selected_report_id: Option<Uuid>,
    pub type_filter: Option<PollutionType>,
    pub drag: DragState,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            pan: Point::ZERO,
            zoom: 1.0,
            selected_report_id: None,
            type_filter: None,
            drag: DragState::Idle,
        }
    }
}

impl ViewportState {
    /// Enter the dragging state, anchored so the grabbed plane point stays
    /// under the pointer. Only the primary button starts a drag.
    /// Returns whether a drag actually began.
    pub fn begin_drag(&mut self, pointer: Point, button: PointerButton) -> bool {
        if button != PointerButton::Primary {
            return false;
        }

        self.drag = DragState::Dragging {
            anchor: Point::new(pointer.x - self.pan.x, pointer.y - self.pan.y),
        };
        true
    }

    /// Follow the pointer while dragging; the pan updates continuously.
    /// A move without an active drag is a no-op.
    pub fn drag_to(&mut self, pointer: Point) {
        if let DragState::Dragging { anchor } = self.drag {
            self.pan = Point::new(pointer.x - anchor.x, pointer.y - anchor.y);
        }
    }

    /// Terminate any drag. Idempotent: the release may arrive from anywhere,
    /// including outside the view's input surface.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Apply one discrete wheel notch; scrolling down zooms out.
    pub fn wheel(&mut self, delta_y: f64) {
        let step = if delta_y > 0.0 {
            -WHEEL_ZOOM_STEP
        } else {
            WHEEL_ZOOM_STEP
        };
        self.set_zoom(self.zoom + step);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + BUTTON_ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - BUTTON_ZOOM_STEP);
    }

    /// Zoom writes saturate into [MIN_ZOOM, MAX_ZOOM], never reject.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Pan is unrestricted.
    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    /// Screen position of a projected plane point under the current camera,
    /// transform origin at the view's visual center.
    ///
    /// Keeping this a pure function of (pan, zoom, projected point) is what
    /// pins markers to their geographic coordinates across any sequence of
    /// camera changes.
    pub fn render_position(&self, projected: Point) -> Point {
        Point::new(
            self.pan.x + projected.x * self.zoom,
            self.pan.y + projected.y * self.zoom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_moves_pan_by_pointer_delta() {
        let mut state = ViewportState::default();

        assert!(state.begin_drag(Point::new(100.0, 100.0), PointerButton::Primary));
        state.drag_to(Point::new(130.0, 160.0));

        assert_eq!(state.pan, Point::new(30.0, 60.0));
        assert!(state.is_dragging());

        state.end_drag();
        assert!(!state.is_dragging());
        // Pan survives the release
        assert_eq!(state.pan, Point::new(30.0, 60.0));
    }

    #[test]
    fn test_drag_updates_continuously_without_skipping() {
        let mut state = ViewportState::default();
        state.begin_drag(Point::new(0.0, 0.0), PointerButton::Primary);

        for i in 1..=10 {
            let pointer = Point::new(i as f64, 2.0 * i as f64);
            state.drag_to(pointer);
            assert_eq!(state.pan, pointer);
        }
    }

    #[test]
    fn test_drag_anchor_respects_existing_pan() {
        let mut state = ViewportState::default();
        state.set_pan(Point::new(10.0, -5.0));

        state.begin_drag(Point::new(100.0, 100.0), PointerButton::Primary);
        state.drag_to(Point::new(101.0, 102.0));

        assert_eq!(state.pan, Point::new(11.0, -3.0));
    }

    #[test]
    fn test_non_primary_button_does_not_start_drag() {
        let mut state = ViewportState::default();

        assert!(!state.begin_drag(Point::new(5.0, 5.0), PointerButton::Secondary));
        assert!(!state.is_dragging());

        state.drag_to(Point::new(50.0, 50.0));
        assert_eq!(state.pan, Point::ZERO);
    }

    #[test]
    fn test_move_without_drag_is_noop_and_end_is_idempotent() {
        let mut state = ViewportState::default();

        state.drag_to(Point::new(40.0, 40.0));
        assert_eq!(state.pan, Point::ZERO);

        state.end_drag();
        state.end_drag();
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_zoom_saturates_into_bounds() {
        let mut state = ViewportState::default();

        for _ in 0..100 {
            state.wheel(-1.0); // scroll up, zoom in
        }
        assert_eq!(state.zoom, 3.0);

        for _ in 0..100 {
            state.zoom_out();
        }
        assert_eq!(state.zoom, 0.5);

        state.set_zoom(f64::INFINITY);
        assert_eq!(state.zoom, 3.0);
        state.set_zoom(-7.0);
        assert_eq!(state.zoom, 0.5);
    }

    #[test]
    fn test_wheel_direction_matches_scroll_sign() {
        let mut state = ViewportState::default();

        state.wheel(53.0); // scroll down, zoom out
        assert!((state.zoom - 0.9).abs() < 1e-12);

        state.wheel(-53.0);
        assert!((state.zoom - 1.0).abs() < 1e-12);

        state.zoom_in();
        assert!((state.zoom - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_render_position_is_pinned_under_camera_changes() {
        let mut state = ViewportState::default();
        let projected = Point::new(50.0, 50.0);

        // Identity camera renders the projected point as-is
        assert_eq!(state.render_position(projected), Point::new(50.0, 50.0));

        // Arbitrary interleaving of camera changes
        state.begin_drag(Point::new(100.0, 100.0), PointerButton::Primary);
        state.drag_to(Point::new(130.0, 160.0));
        state.end_drag();
        state.wheel(-1.0);
        state.zoom_in();
        state.set_zoom(2.0);

        // render == pan + projected * zoom, nothing else
        let rendered = state.render_position(projected);
        assert_eq!(
            rendered,
            Point::new(
                state.pan.x + projected.x * state.zoom,
                state.pan.y + projected.y * state.zoom
            )
        );
    }

    #[test]
    fn test_zoom_change_leaves_pan_untouched_and_scales_offsets() {
        let mut state = ViewportState::default();

        state.begin_drag(Point::new(100.0, 100.0), PointerButton::Primary);
        state.drag_to(Point::new(130.0, 160.0));
        state.end_drag();
        assert_eq!(state.pan, Point::new(30.0, 60.0));

        state.set_zoom(2.0);
        assert_eq!(state.pan, Point::new(30.0, 60.0));

        // Offset from the view center doubles with the zoom
        let projected = Point::new(12.0, -8.0);
        let rendered = state.render_position(projected);
        assert_eq!(rendered, Point::new(30.0 + 24.0, 60.0 - 16.0));
    }
}
