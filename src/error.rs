//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the checksync application.
///
/// - 0: Success (sync completed, whether or not the table was rewritten)
/// - 1: General error (I/O failure, malformed checksum file)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppExitCode {
    /// Success: the sync completed normally.
    Success = 0,
    /// General error: an unexpected failure occurred.
    GeneralError = 1,
}

impl AppExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "CS000",
            Self::GeneralError => "CS001",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "CS001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: AppExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: format!("{err:#}"),
        }
    }
}
