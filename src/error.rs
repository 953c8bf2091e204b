//! Error types for Skiff
//!
//! Uses `thiserror` for library errors; the binary maps them onto exit
//! codes and terminal output.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Skiff operations
pub type SkiffResult<T> = Result<T, SkiffError>;

/// Main error type for Skiff operations
#[derive(Error, Debug)]
pub enum SkiffError {
    /// A guarded step failed and the operator declined to continue.
    ///
    /// The display string is the diagnostic the process exits with; it
    /// must stay stable because operators and wrapper scripts match on it.
    #[error("Stopped execution per user request.")]
    Aborted,

    /// An unguarded step failed; there is no operator gate on these, so
    /// the failure surfaces directly.
    #[error("command `{command}` exited with status {code}")]
    StepFailed { command: String, code: i32 },

    /// Malformed configuration file
    #[error("invalid config in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_aborted_is_fixed_message() {
        assert_eq!(
            SkiffError::Aborted.to_string(),
            "Stopped execution per user request."
        );
    }

    #[test]
    fn test_error_display_step_failed() {
        let err = SkiffError::StepFailed {
            command: "heroku run python manage.py syncdb --noinput".to_string(),
            code: 1,
        };
        assert_eq!(
            err.to_string(),
            "command `heroku run python manage.py syncdb --noinput` exited with status 1"
        );
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = SkiffError::InvalidConfig {
            path: PathBuf::from("skiff.toml"),
            message: "expected an array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in skiff.toml: expected an array"
        );
    }
}
