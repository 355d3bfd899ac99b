//! Error types and exit codes.

use thiserror::Error;

/// Exit codes for `botbook` CLI operations, following Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Content check found issues
    pub const CONTENT_ERROR: i32 = 2;

    /// I/O error (cannot write output, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Server error (bind failed, serve loop died)
    pub const SERVER_ERROR: i32 = 4;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

/// Top-level error type for `botbook` operations.
///
/// Aggregates the domain errors and maps each to an exit code. The render
/// path itself cannot fail — every variant here comes from a host surface
/// (serving, writing files, the content lint).
#[derive(Debug, Error)]
pub enum BotbookError {
    /// Content lint found issues
    #[error(transparent)]
    Content(#[from] ContentError),

    /// HTTP delivery error
    #[error(transparent)]
    Server(#[from] ServerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BotbookError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Content(_) => ExitCode::CONTENT_ERROR,
            Self::Server(_) => ExitCode::SERVER_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

/// Content lint failures.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The check command found issues in the content tables.
    #[error("content check failed: {issues} issue(s)")]
    IssuesFound {
        /// Number of issues found.
        issues: usize,
    },
}

/// HTTP delivery errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listen address.
    #[error("bind failed: {0}")]
    Bind(String),

    /// I/O error while serving.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `botbook` operations.
pub type Result<T> = std::result::Result<T, BotbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONTENT_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::SERVER_ERROR, 4);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
        assert_eq!(ExitCode::INTERRUPTED, 130);
        assert_eq!(ExitCode::TERMINATED, 143);
    }

    #[test]
    fn content_error_exit_code() {
        let err: BotbookError = ContentError::IssuesFound { issues: 3 }.into();
        assert_eq!(err.exit_code(), ExitCode::CONTENT_ERROR);
        assert_eq!(err.to_string(), "content check failed: 3 issue(s)");
    }

    #[test]
    fn server_error_exit_code() {
        let err: BotbookError = ServerError::Bind("address in use".to_string()).into();
        assert_eq!(err.exit_code(), ExitCode::SERVER_ERROR);
    }

    #[test]
    fn io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: BotbookError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }
}
