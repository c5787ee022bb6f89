use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Wrapper scripts and schedulers use these to tell argument mistakes
/// apart from runtime failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the export ran to completion
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, missing configuration, file I/O error, etc.)
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

/// Application-specific errors for the export pipeline.
///
/// Any `Api` error is fatal for the whole run: the pipeline propagates it
/// to the driver instead of continuing with the remaining assets.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nucleus API request failed: {url}\nStatus: {status} {reason}\nBody: {body}")]
    Api {
        url: String,
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Missing required environment variable: {name}\n\n💡 Hint: export {name} before running. Required: NUCLEUS_API_KEY, NUCLEUS_PROJECT_ID, NUCLEUS_PROJECT_GROUP, NUCLEUS_API_ENDPOINT, NUCLEUS_DATAFOLDER")]
    MissingEnv { name: &'static str },

    #[error("Failed to prepare data folder: {path}\nDetails: {details}\n\n💡 Hint: Check that the location is writable and not in use")]
    DataDir { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Verify that the data folder exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },
}
