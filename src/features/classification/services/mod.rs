mod classification_service;
mod classifier;

pub use classification_service::ClassificationService;
pub use classifier::{Classifier, UniformRandomClassifier};
