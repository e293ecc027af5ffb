mod viewport;

pub use viewport::{DragState, Point, PointerButton, ViewportState};
