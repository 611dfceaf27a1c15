/// Core types and error taxonomy for dropmark
use std::fmt;
use thiserror::Error;

/// Which branch the file initializer took on this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Target file was absent; it was created with the initial line
    Created,
    /// Target file already existed; one marker line was appended
    Appended,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Created => write!(f, "created"),
            RunOutcome::Appended => write!(f, "appended"),
        }
    }
}

/// Custom error types for dropmark
///
/// Exactly one I/O condition is recognized and redirected (creation failing
/// with `AlreadyExists`, handled inside the initializer). Everything else
/// propagates through these variants to the process boundary unchanged.
#[derive(Error, Debug)]
pub enum DropmarkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Filesystem error: {0}")]
    Filesystem(String),
}

/// Result type alias for dropmark operations
pub type Result<T> = std::result::Result<T, DropmarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_outcome_display() {
        assert_eq!(RunOutcome::Created.to_string(), "created");
        assert_eq!(RunOutcome::Appended.to_string(), "appended");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DropmarkError = io.into();
        assert!(matches!(err, DropmarkError::Io(_)));
    }
}
