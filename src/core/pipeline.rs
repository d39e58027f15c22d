use crate::core::{ConfigProvider, MigrationResult, Pipeline, SourceDocument, Storage, Venue};
use crate::domain::services::backfill_city;
use crate::utils::error::{MigrationError, Result};

pub struct MigrationPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MigrationPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MigrationPipeline<S, C> {
    async fn extract(&self) -> Result<SourceDocument> {
        let path = self.config.input_path();

        tracing::debug!("Reading venue file: {}", path);
        let raw = self
            .storage
            .read_file(path)
            .await
            .map_err(|e| e.on_read(path))?;

        let venues: Vec<Venue> =
            serde_json::from_slice(&raw).map_err(|source| MigrationError::MalformedInput {
                path: path.to_string(),
                source,
            })?;

        tracing::debug!("Parsed {} venues ({} bytes)", venues.len(), raw.len());
        Ok(SourceDocument { raw, venues })
    }

    async fn backup(&self, raw: &[u8]) -> Result<String> {
        let backup_path = self.config.backup_path();

        tracing::debug!("Writing backup ({} bytes) to {}", raw.len(), backup_path);
        self.storage
            .write_file(&backup_path, raw)
            .await
            .map_err(|e| e.on_backup(&backup_path))?;

        Ok(backup_path)
    }

    async fn transform(&self, mut venues: Vec<Venue>) -> Result<MigrationResult> {
        let counts = backfill_city(&mut venues, self.config.default_city());

        Ok(MigrationResult {
            venues,
            updated: counts.updated,
            already_set: counts.already_set,
        })
    }

    async fn load(&self, result: &MigrationResult) -> Result<String> {
        let path = self.config.input_path();
        let json_data = serde_json::to_string_pretty(&result.venues)?;

        tracing::debug!("Writing {} venues ({} bytes) to {}", result.venues.len(), json_data.len(), path);
        self.storage
            .write_file(path, json_data.as_bytes())
            .await
            .map_err(|e| e.on_write(path, &self.config.backup_path()))?;

        Ok(path.to_string())
    }
}
