pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;
pub use config::{cli::LocalStorage, MigrationConfig};

pub use core::{engine::MigrationEngine, pipeline::MigrationPipeline};
pub use utils::error::{MigrationError, Result};
