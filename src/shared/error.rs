use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// SBOM generated and written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable or malformed input, file I/O error, etc.)
    ApplicationError = 3,
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Lock file and manifest failures are separate variants so callers can tell
/// which input document was at fault.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("poetry.lock file not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse poetry.lock file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the poetry.lock file is in the correct format")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Invalid package entry #{index} in poetry.lock: {reason}\n\n💡 Hint: Regenerate the lock file with `poetry lock`")]
    LockfileInvalidPackage { index: usize, reason: String },

    #[error("pyproject.toml file not found: {path}\n\n💡 Hint: Pass --no-pyproject to generate an SBOM without project metadata")]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to parse pyproject.toml file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the pyproject.toml file is valid TOML")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Required field `{field}` is missing from pyproject.toml\n\n💡 Hint: Poetry projects declare their name and version under [tool.poetry]")]
    ManifestMissingField { field: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
