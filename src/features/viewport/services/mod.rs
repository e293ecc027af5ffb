mod projection;
mod viewport_service;

pub use projection::PlaneProjection;
pub use viewport_service::ViewportService;
