use crate::domain::model::{ExtractResult, Milestone};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn token(&self) -> &str;
    fn project_id(&self) -> &str;
    fn default_assignee_id(&self) -> &str;
    fn use_only_first_name(&self) -> bool;
}

/// Narrow transport to the Basecamp XML API. Paths are relative to the
/// configured base URL, e.g. `projects/42/people.xml`.
#[async_trait]
pub trait BasecampApi: Send + Sync {
    async fn get_xml(&self, path: &str) -> Result<String>;
    async fn post_xml(&self, path: &str, body: String) -> Result<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ExtractResult>;
    async fn transform(&self, data: ExtractResult) -> Result<Vec<Milestone>>;
    async fn load(&self, milestones: Vec<Milestone>) -> Result<usize>;
}
