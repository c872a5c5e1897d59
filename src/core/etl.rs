use crate::core::persister::render_state;
use crate::core::{Pipeline, ServiceState};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunReport {
    pub state_path: String,
    pub added: Vec<String>,
    pub state: ServiceState,
}

impl RunReport {
    /// Console summary: the names appended this run, then the merged state.
    pub fn summary(&self) -> Result<String> {
        Ok(format!(
            "New service names added: {:?}\nMerged Data:\n{}",
            self.added,
            render_state(&self.state)?
        ))
    }
}

pub struct HarvestEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> HarvestEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Starting service name harvest");

        let names = self.pipeline.extract().await?;
        tracing::info!("Extracted {} service names", names.len());

        let outcome = self.pipeline.transform(names).await?;
        tracing::info!(
            "Merged {} of {} extracted names ({} total)",
            outcome.added.len(),
            outcome.extracted,
            outcome.state.service_names.len()
        );

        let state_path = self.pipeline.load(&outcome).await?;
        tracing::info!("State saved to: {}", state_path);

        Ok(RunReport {
            state_path,
            added: outcome.added,
            state: outcome.state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MergeOutcome;
    use crate::utils::error::HarvestError;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct FixedPipeline {
        names: Vec<String>,
        fail_extract: bool,
        loaded: AtomicBool,
    }

    impl FixedPipeline {
        fn new(names: &[&str]) -> Self {
            Self {
                names: names.iter().map(|s| s.to_string()).collect(),
                fail_extract: false,
                loaded: AtomicBool::new(false),
            }
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for FixedPipeline {
        async fn extract(&self) -> Result<Vec<String>> {
            if self.fail_extract {
                return Err(HarvestError::FetchError {
                    url: "http://test.com".to_string(),
                    status: 500,
                });
            }
            Ok(self.names.clone())
        }

        async fn transform(&self, names: Vec<String>) -> Result<MergeOutcome> {
            let mut state = ServiceState::with_names(["s3"]);
            let added = crate::core::merger::merge_service_names(&mut state, &names);
            Ok(MergeOutcome {
                state,
                added,
                extracted: names.len(),
            })
        }

        async fn load(&self, _outcome: &MergeOutcome) -> Result<String> {
            self.loaded.store(true, Ordering::SeqCst);
            Ok("out/endpoints.yaml".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_reports_added_names() {
        let engine = HarvestEngine::new(FixedPipeline::new(&["s3", "kms"]));
        let report = engine.run().await.unwrap();

        assert_eq!(report.state_path, "out/endpoints.yaml");
        assert_eq!(report.added, vec!["kms"]);
        assert_eq!(report.state.service_names, vec!["s3", "kms"]);
    }

    #[tokio::test]
    async fn test_extract_failure_skips_load() {
        let mut pipeline = FixedPipeline::new(&["s3"]);
        pipeline.fail_extract = true;
        let engine = HarvestEngine::new(pipeline);

        assert!(engine.run().await.is_err());
        assert!(!engine.pipeline.loaded.load(Ordering::SeqCst));
    }

    #[test]
    fn test_summary_format() {
        let report = RunReport {
            state_path: "endpoints.yaml".to_string(),
            added: vec!["dynamodb".to_string()],
            state: ServiceState::with_names(["s3", "ec2", "dynamodb"]),
        };

        assert_eq!(
            report.summary().unwrap(),
            "New service names added: [\"dynamodb\"]\nMerged Data:\nservice_names:\n- s3\n- ec2\n- dynamodb\n"
        );
    }
}
