use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("Failed to read venue file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Venue file '{path}' is not a JSON array of objects: {source}")]
    MalformedInput {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write backup '{path}': {source}")]
    BackupError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write migrated venues to '{path}': {source} (backup kept at '{backup_path}')")]
    WriteError {
        path: String,
        backup_path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Read,
    MalformedInput,
    Write,
    Config,
}

impl MigrationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MigrationError::ReadError { .. } | MigrationError::IoError(_) => ErrorCategory::Read,
            MigrationError::MalformedInput { .. } => ErrorCategory::MalformedInput,
            MigrationError::BackupError { .. }
            | MigrationError::WriteError { .. }
            | MigrationError::SerializationError(_) => ErrorCategory::Write,
            MigrationError::ConfigError { .. } | MigrationError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Read => 1,
            ErrorCategory::MalformedInput => 2,
            ErrorCategory::Write => 3,
            ErrorCategory::Config => 4,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MigrationError::ReadError { path, .. } => {
                format!("Check that '{}' exists and is readable", path)
            }
            MigrationError::MalformedInput { path, .. } => {
                format!("Fix the JSON in '{}'; no files were modified", path)
            }
            MigrationError::BackupError { .. } => {
                "Make the data directory writable and re-run; the venue file was not modified"
                    .to_string()
            }
            MigrationError::WriteError { backup_path, .. } => format!(
                "A backup of the original data exists at '{}'; restore it manually if needed",
                backup_path
            ),
            MigrationError::SerializationError(_) | MigrationError::IoError(_) => {
                "Re-run the migration; the venue file was not modified".to_string()
            }
            MigrationError::ConfigError { .. } | MigrationError::InvalidConfigValueError { .. } => {
                "Correct the migration configuration".to_string()
            }
        }
    }

    /// Attaches the source path to a bare I/O failure from a read.
    pub fn on_read(self, path: &str) -> Self {
        match self {
            MigrationError::IoError(source) => MigrationError::ReadError {
                path: path.to_string(),
                source,
            },
            other => other,
        }
    }

    pub fn on_backup(self, backup_path: &str) -> Self {
        match self {
            MigrationError::IoError(source) => MigrationError::BackupError {
                path: backup_path.to_string(),
                source,
            },
            other => other,
        }
    }

    pub fn on_write(self, path: &str, backup_path: &str) -> Self {
        match self {
            MigrationError::IoError(source) => MigrationError::WriteError {
                path: path.to_string(),
                backup_path: backup_path.to_string(),
                source,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrationError>;
