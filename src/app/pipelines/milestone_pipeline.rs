use crate::config::cli::InputSource;
use crate::core::directory::fetch_directory;
use crate::core::parser::read_milestones;
use crate::core::resolver::resolve_all;
use crate::core::sync::MilestoneSync;
use crate::core::{BasecampApi, ConfigProvider, ExtractResult, Milestone, Pipeline};
use crate::utils::error::Result;

/// OmniPlan CSV in, Basecamp calendar milestones out.
pub struct MilestonePipeline<A: BasecampApi, C: ConfigProvider> {
    pub(crate) source: InputSource,
    pub(crate) api: A,
    pub(crate) config: C,
}

impl<A: BasecampApi, C: ConfigProvider> MilestonePipeline<A, C> {
    pub fn new(source: InputSource, api: A, config: C) -> Self {
        Self {
            source,
            api,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<A: BasecampApi, C: ConfigProvider> Pipeline for MilestonePipeline<A, C> {
    async fn extract(&self) -> Result<ExtractResult> {
        tracing::debug!("Reading milestones from {}", self.source.describe());
        let csv_data = self.source.read_to_string().await?;
        read_milestones(&csv_data)
    }

    async fn transform(&self, data: ExtractResult) -> Result<Vec<Milestone>> {
        let directory = fetch_directory(&self.api, &self.config).await?;
        resolve_all(data.milestones, &directory, self.config.default_assignee_id())
    }

    async fn load(&self, milestones: Vec<Milestone>) -> Result<usize> {
        MilestoneSync::new(&self.api, &self.config)
            .submit_all(&milestones)
            .await
    }
}
