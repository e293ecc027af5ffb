use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::classification::models::ClassificationState;
use crate::features::classification::services::Classifier;

/// Runs classifications as deferred completions on the shared runtime.
///
/// Jobs are transient, keyed by token; completion re-checks the job is still
/// pending before committing, so a cancelled or superseded request can never
/// receive a late result.
pub struct ClassificationService {
    jobs: Arc<RwLock<HashMap<Uuid, ClassificationState>>>,
    classifier: Arc<dyn Classifier>,
    latency: Duration,
}

impl ClassificationService {
    pub fn new(classifier: Arc<dyn Classifier>, latency: Duration) -> Self {
        Self {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            classifier,
            latency,
        }
    }

    /// Register a pending classification for a captured image.
    ///
    /// A new capture supersedes the previous one: `replaces` cancels that
    /// token's job if it is still pending.
    pub async fn start(&self, image: Vec<u8>, replaces: Option<Uuid>) -> Uuid {
        let token = Uuid::now_v7();

        {
            let mut jobs = self.jobs.write().await;

            if let Some(prev) = replaces {
                match jobs.get_mut(&prev) {
                    Some(state) if *state == ClassificationState::Pending => {
                        *state = ClassificationState::Cancelled;
                        tracing::debug!("Classification {} superseded by {}", prev, token);
                    }
                    _ => {}
                }
            }

            jobs.insert(token, ClassificationState::Pending);
        }

        tracing::info!("Classification {} started ({} bytes)", token, image.len());

        let jobs = Arc::clone(&self.jobs);
        let classifier = Arc::clone(&self.classifier);
        let latency = self.latency;

        tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let outcome = classifier.classify(&image).await;

            let mut jobs = jobs.write().await;
            match jobs.get_mut(&token) {
                Some(state) if *state == ClassificationState::Pending => {
                    tracing::info!(
                        "Classification {} completed: {} / {}",
                        token,
                        outcome.pollution_type,
                        outcome.level
                    );
                    *state = ClassificationState::Completed(outcome);
                }
                _ => {
                    // Stale completion for a cancelled or discarded request
                    tracing::debug!("Dropping stale classification result for {}", token);
                }
            }
        });

        token
    }

    /// Cancel a classification. Idempotent; the token's eventual completion
    /// is suppressed.
    pub async fn cancel(&self, token: Uuid) -> Result<()> {
        let mut jobs = self.jobs.write().await;
        let state = jobs
            .get_mut(&token)
            .ok_or_else(|| AppError::NotFound(format!("Classification {} not found", token)))?;

        *state = ClassificationState::Cancelled;
        tracing::info!("Classification {} cancelled", token);

        Ok(())
    }

    pub async fn status(&self, token: Uuid) -> Result<ClassificationState> {
        self.jobs
            .read()
            .await
            .get(&token)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Classification {} not found", token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::features::classification::models::ClassificationOutcome;
    use crate::features::reports::models::{PollutionType, SeverityLevel};

    /// Deterministic classifier standing in for the random one — exercises
    /// the same injectable contract.
    struct FixedClassifier(ClassificationOutcome);

    #[async_trait]
    impl Classifier for FixedClassifier {
        async fn classify(&self, _image: &[u8]) -> ClassificationOutcome {
            self.0
        }
    }

    fn service_with_latency(latency_ms: u64) -> ClassificationService {
        ClassificationService::new(
            Arc::new(FixedClassifier(ClassificationOutcome {
                pollution_type: PollutionType::Water,
                level: SeverityLevel::Critical,
            })),
            Duration::from_millis(latency_ms),
        )
    }

    #[tokio::test]
    async fn test_classification_completes_after_latency() {
        let service = service_with_latency(10);
        let token = service.start(vec![1, 2, 3], None).await;

        assert_eq!(
            service.status(token).await.unwrap(),
            ClassificationState::Pending
        );

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(
            service.status(token).await.unwrap(),
            ClassificationState::Completed(ClassificationOutcome {
                pollution_type: PollutionType::Water,
                level: SeverityLevel::Critical,
            })
        );
    }

    #[tokio::test]
    async fn test_cancelled_request_never_receives_late_result() {
        let service = service_with_latency(10);
        let token = service.start(vec![1, 2, 3], None).await;

        service.cancel(token).await.unwrap();

        // Wait well past the latency window; the stale completion must be dropped
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(
            service.status(token).await.unwrap(),
            ClassificationState::Cancelled
        );
    }

    #[tokio::test]
    async fn test_new_capture_supersedes_pending_request() {
        let service = service_with_latency(10);
        let first = service.start(vec![1], None).await;
        let second = service.start(vec![2], Some(first)).await;

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(
            service.status(first).await.unwrap(),
            ClassificationState::Cancelled
        );
        assert!(matches!(
            service.status(second).await.unwrap(),
            ClassificationState::Completed(_)
        ));
    }

    #[tokio::test]
    async fn test_unknown_token_is_not_found() {
        let service = service_with_latency(10);
        let unknown = Uuid::now_v7();

        assert!(matches!(
            service.status(unknown).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            service.cancel(unknown).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
