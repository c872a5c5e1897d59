use crate::domain::model::{MergeOutcome, RefreshPolicy};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = Result<bool>> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn base_dir(&self) -> &str;
    fn cache_path(&self) -> &str;
    fn state_path(&self) -> &str;
    fn refresh_policy(&self) -> RefreshPolicy;
    fn catalog_path(&self) -> Option<&str>;
    fn console_region(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, names: Vec<String>) -> Result<MergeOutcome>;
    async fn load(&self, outcome: &MergeOutcome) -> Result<String>;
}
