use crate::domain::model::{MigrationResult, SourceDocument, Venue};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn default_city(&self) -> &str;

    fn backup_path(&self) -> String {
        format!("{}{}", self.input_path(), crate::config::BACKUP_SUFFIX)
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceDocument>;
    async fn backup(&self, raw: &[u8]) -> Result<String>;
    async fn transform(&self, venues: Vec<Venue>) -> Result<MigrationResult>;
    async fn load(&self, result: &MigrationResult) -> Result<String>;
}
