use crate::core::{MigrationSummary, Pipeline};
use crate::domain::services::city_distribution;
use crate::utils::error::Result;

pub struct MigrationEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MigrationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs read, backup, backfill and write in that order. Any failure stops
    /// the run; a backup written before a failed write is left for the operator.
    pub async fn run(&self) -> Result<MigrationSummary> {
        println!("Starting venue city migration...");

        // Extract
        println!("Reading venues...");
        let source = self.pipeline.extract().await?;
        println!("Read {} venues", source.venues.len());

        // Backup, before anything is mutated
        let backup_path = self.pipeline.backup(&source.raw).await?;
        println!("Backup written to: {}", backup_path);

        // Transform
        let result = self.pipeline.transform(source.venues).await?;
        println!("Updated {} venues with the default city", result.updated);
        println!("{} venues already had a city", result.already_set);

        // Load
        let output_path = self.pipeline.load(&result).await?;
        println!("Migrated venues saved to: {}", output_path);

        let summary = MigrationSummary {
            output_path,
            backup_path,
            updated: result.updated,
            already_set: result.already_set,
            distribution: city_distribution(&result.venues),
        };
        tracing::info!(
            updated = summary.updated,
            already_set = summary.already_set,
            "Migration finished for {} venues",
            summary.total()
        );

        print_distribution(&summary);
        Ok(summary)
    }
}

fn print_distribution(summary: &MigrationSummary) {
    println!();
    println!("City distribution:");
    for (city, count) in &summary.distribution {
        println!("  {}: {}", city, count);
    }
    println!();
    println!("Venues located in other cities (e.g. Struga) must be corrected manually.");
}
