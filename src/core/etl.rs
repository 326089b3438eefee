use crate::core::{Pipeline, SyncReport};
use crate::utils::error::Result;

pub struct SyncEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SyncEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load strictly one after another.
    pub async fn run(&self) -> Result<SyncReport> {
        tracing::info!("Starting milestone sync");

        // Extract
        let extracted = self.pipeline.extract().await?;
        let parsed = extracted.milestones.len();
        let assignees = extracted.assignees.clone();
        tracing::info!("Parsed {} milestones", parsed);
        tracing::info!(
            "Assignees to resolve: {}",
            assignees.iter().cloned().collect::<Vec<_>>().join(", ")
        );

        // Transform
        let resolved = self.pipeline.transform(extracted).await?;
        tracing::info!("Resolved assignees for {} milestones", resolved.len());

        // Load
        let submitted = self.pipeline.load(resolved).await?;
        tracing::info!("Submitted {} milestones to Basecamp", submitted);

        Ok(SyncReport {
            parsed,
            submitted,
            assignees,
        })
    }
}
