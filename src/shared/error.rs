use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested phase finished
    Success = 0,
    /// Ingest, transform, validation or I/O failed
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the ingest and transform phases.
///
/// Messages are user-facing and end with a hint where one helps.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read ingest state: {path}\nDetails: {details}\n\n💡 Hint: Delete the state file to restart the ingest from scratch")]
    StateReadError { path: PathBuf, details: String },

    #[error("Failed to write ingest state: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the data directory is writable")]
    StateWriteError { path: PathBuf, details: String },

    #[error("Raw artifact not found: {path}\n\n💡 Hint: Run the ingest phase first (omit --transform-only)")]
    RawArtifactNotFound { path: PathBuf },

    #[error("Failed to parse raw artifact: {path}\nDetails: {details}\n\n💡 Hint: The artifact must be a JSON array of package objects")]
    RawArtifactParseError { path: PathBuf, details: String },

    #[error("Failed to write raw artifact: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the data directory is writable")]
    RawArtifactWriteError { path: PathBuf, details: String },

    #[error("Failed to write dataset: {path}\nDetails: {details}")]
    DatasetWriteError { path: PathBuf, details: String },

    #[error("Data quality check failed for dataset '{dataset}':\n{}", format_violations(.violations))]
    DataQuality {
        dataset: String,
        violations: Vec<String>,
    },

    #[error("Invalid data directory: {path}\nReason: {reason}\n\n💡 Hint: Set NPM_REGISTRY_DATA_DIR or `data_dir` in npm-registry.config.yml to a writable directory")]
    InvalidDataDir { path: PathBuf, reason: String },

    /// Validation error for configuration and builder inputs
    #[error("Validation error: {message}")]
    Validation { message: String },
}

fn format_violations(violations: &[String]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}
