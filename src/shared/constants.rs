/// Zoom bounds for map viewports; writes outside the range are saturated
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;

/// Zoom step applied per discrete wheel notch
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Zoom step applied by the explicit zoom-in/zoom-out controls
pub const BUTTON_ZOOM_STEP: f64 = 0.2;

/// Hit-test radius around a rendered marker, in screen units
/// (markers render 48 units wide)
pub const MARKER_HIT_RADIUS: f64 = 24.0;
