mod classification;

pub use classification::{ClassificationOutcome, ClassificationState};
