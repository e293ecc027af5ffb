use crate::core::error::{AppError, Result};
use crate::core::config::MapConfig;
use crate::features::viewport::models::Point;

/// Maps geographic coordinates onto the flat map plane.
///
/// Equirectangular local-plane approximation around a fixed reference point:
/// accurate at city scale, increasingly distorted far from the reference or
/// near the poles. That is a documented property of the map, not a defect.
#[derive(Debug, Clone)]
pub struct PlaneProjection {
    center_lat: f64,
    center_lng: f64,
    scale: f64,
    origin: Point,
}

impl PlaneProjection {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            center_lat: config.center_lat,
            center_lng: config.center_lng,
            scale: config.plane_scale,
            origin: Point::new(config.origin_x, config.origin_y),
        }
    }

    /// Project (lat, lng) to a plane point. Pure and deterministic.
    ///
    /// Out-of-range or non-finite coordinates are a caller error and are
    /// rejected, never clamped.
    pub fn project(&self, lat: f64, lng: f64) -> Result<Point> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::InvalidCoordinate(format!(
                "Latitude {} outside [-90, 90]",
                lat
            )));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::InvalidCoordinate(format!(
                "Longitude {} outside [-180, 180]",
                lng
            )));
        }

        Ok(Point::new(
            self.origin.x + (lng - self.center_lng) * self.scale,
            self.origin.y + (self.center_lat - lat) * self.scale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lima_projection() -> PlaneProjection {
        PlaneProjection::new(&MapConfig {
            center_lat: -12.0464,
            center_lng: -77.0428,
            plane_scale: 2000.0,
            origin_x: 50.0,
            origin_y: 50.0,
        })
    }

    #[test]
    fn test_reference_point_projects_to_origin() {
        let p = lima_projection().project(-12.0464, -77.0428).unwrap();
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_known_offsets() {
        let projection = lima_projection();

        // 0.05° east of the reference
        let east = projection.project(-12.0464, -76.9928).unwrap();
        assert!((east.x - 150.0).abs() < 1e-6);
        assert!((east.y - 50.0).abs() < 1e-6);

        // 0.05° north of the reference; north is up, so y decreases
        let north = projection.project(-11.9964, -77.0428).unwrap();
        assert!((north.x - 50.0).abs() < 1e-6);
        assert!((north.y + 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let projection = lima_projection();
        let a = projection.project(-12.2127, -76.9388).unwrap();
        let b = projection.project(-12.2127, -76.9388).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_valid_extremes_are_finite() {
        let projection = lima_projection();
        for (lat, lng) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
            let p = projection.project(lat, lng).unwrap();
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    #[test]
    fn test_invalid_coordinates_are_rejected_not_clamped() {
        let projection = lima_projection();
        for (lat, lng) in [
            (90.5, 0.0),
            (-91.0, 0.0),
            (0.0, 180.5),
            (0.0, -200.0),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
        ] {
            assert!(matches!(
                projection.project(lat, lng).unwrap_err(),
                AppError::InvalidCoordinate(_)
            ));
        }
    }
}
