//! Error types for the linescope CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::diff::ParseError;
use crate::exit_codes;
use crate::scanner::ScanError;
use thiserror::Error;

/// Main error type for linescope operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum LinescopeError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The input diff was rejected.
    #[error("invalid diff: {0}")]
    ParseError(#[from] ParseError),

    /// Rewriting a file failed; the file was left untouched.
    #[error("{0}")]
    RewriteError(String),

    /// Reading or writing a stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Reading a line-oriented stream failed at a known line.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl LinescopeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LinescopeError::UserError(_) => exit_codes::USER_ERROR,
            LinescopeError::ParseError(_) => exit_codes::PARSE_FAILURE,
            LinescopeError::RewriteError(_) => exit_codes::REWRITE_FAILURE,
            LinescopeError::Io(_) | LinescopeError::Scan(_) => exit_codes::REWRITE_FAILURE,
        }
    }
}

/// Result type alias for linescope operations.
pub type Result<T> = std::result::Result<T, LinescopeError>;
