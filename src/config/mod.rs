pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "data/venues.json";
pub const DEFAULT_CITY: &str = "Ohrid";
pub const BACKUP_SUFFIX: &str = ".backup";

/// Where the venue file lives and which city to fill in. The binary always
/// runs with [`MigrationConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationConfig {
    pub input_path: String,
    pub default_city: String,
}

impl MigrationConfig {
    pub fn new(input_path: impl Into<String>, default_city: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            default_city: default_city.into(),
        }
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_CITY)
    }
}

impl ConfigProvider for MigrationConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn default_city(&self) -> &str {
        &self.default_city
    }
}

impl Validate for MigrationConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_file_extension("input_path", &self.input_path, &["json"])?;
        validate_non_empty_string("default_city", &self.default_city)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "venue-backfill")]
#[command(about = "Back-fill the default city on venue records, keeping a backup of the original file")]
pub struct CliArgs {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,
}
