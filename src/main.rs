use clap::Parser;
use venue_backfill::utils::{logger, validation::Validate};
use venue_backfill::{CliArgs, LocalStorage, MigrationConfig, MigrationEngine, MigrationPipeline};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let config = MigrationConfig::default();
    tracing::debug!("Migration config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::new(".");
    let pipeline = MigrationPipeline::new(storage, config);
    let engine = MigrationEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            println!(
                "✅ Migration completed: {} venues processed",
                summary.total()
            );
        }
        Err(e) => {
            tracing::error!("❌ Migration failed: {} (Category: {:?})", e, e.category());

            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
