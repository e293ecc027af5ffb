use async_trait::async_trait;
use rand::Rng;

use crate::features::classification::models::ClassificationOutcome;
use crate::features::reports::models::{PollutionType, SeverityLevel};

/// Strategy for turning a captured image into a classification outcome.
///
/// The production impl below is a stand-in; a real model can replace it
/// behind the same contract without touching store or viewport logic.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, image: &[u8]) -> ClassificationOutcome;
}

/// Stand-in classifier drawing uniformly from the fixed enumerations
pub struct UniformRandomClassifier;

#[async_trait]
impl Classifier for UniformRandomClassifier {
    async fn classify(&self, _image: &[u8]) -> ClassificationOutcome {
        let mut rng = rand::thread_rng();
        let pollution_type = PollutionType::ALL[rng.gen_range(0..PollutionType::ALL.len())];
        let level = SeverityLevel::ALL[rng.gen_range(0..SeverityLevel::ALL.len())];

        ClassificationOutcome {
            pollution_type,
            level,
        }
    }
}
