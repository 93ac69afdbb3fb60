// CleanSlate - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every failure a cleanup operation can
// produce is a value the presentation layer renders -- nothing here ever
// terminates the process.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A single path a sweep could not delete, with the OS error that blocked it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedPath {
    /// The path that remains on disk.
    pub path: PathBuf,

    /// The OS error message for this path (already rendered; the underlying
    /// `io::Error` is not `Clone` and the message is all the UI needs).
    pub reason: String,
}

impl fmt::Display for FailedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// Failure outcome of a cleanup operation.
///
/// A missing target path is deliberately NOT an error: deleting something
/// already absent is a successful no-op (idempotence).
#[derive(Debug)]
pub enum CleanupError {
    /// The flush command ran but was refused for lack of elevated rights.
    /// Not recoverable by retrying; the user must re-run elevated.
    PrivilegeDenied { command: String, detail: String },

    /// The caller asked for a browser or application identifier outside the
    /// fixed known set. No file-system mutation was performed.
    UnsupportedTarget { id: String },

    /// One or more target paths could not be deleted, typically because the
    /// owning application is running and holds them open. The sweep still
    /// removed everything it could; `failed` names the remainder (capped at
    /// MAX_REPORTED_FAILED_PATHS), `total_failed` is the exact count.
    PathsLocked {
        removed: usize,
        failed: Vec<FailedPath>,
        total_failed: usize,
    },

    /// The platform flush command is not installed on this system.
    CommandNotFound { command: String },

    /// Any other command failure: non-zero exit for a reason other than
    /// elevation, or a spawn error other than not-found. Carries the raw
    /// underlying message.
    CommandFailed {
        command: String,
        code: Option<i32>,
        detail: String,
    },

    /// I/O error that prevented the operation from running at all
    /// (e.g. the target root exists but cannot be enumerated).
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for CleanupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrivilegeDenied { command, detail } => write!(
                f,
                "'{command}' was denied: {detail}. Re-run {} with administrator rights.",
                super::constants::APP_NAME
            ),
            Self::UnsupportedTarget { id } => {
                write!(f, "'{id}' is not a supported cleanup target")
            }
            Self::PathsLocked {
                removed,
                total_failed,
                ..
            } => write!(
                f,
                "{total_failed} path(s) could not be removed ({removed} removed). \
                 Close the application that owns them and retry."
            ),
            Self::CommandNotFound { command } => {
                write!(f, "'{command}' is not available on this system")
            }
            Self::CommandFailed {
                command,
                code,
                detail,
            } => match code {
                Some(code) => write!(f, "'{command}' exited with status {code}: {detail}"),
                None => write!(f, "'{command}' failed: {detail}"),
            },
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CleanupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for cleanup operation results.
pub type Result<T> = std::result::Result<T, CleanupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_locked_display_counts() {
        let err = CleanupError::PathsLocked {
            removed: 7,
            failed: vec![FailedPath {
                path: PathBuf::from("/tmp/x/Cookies"),
                reason: "resource busy".to_string(),
            }],
            total_failed: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("3 path(s)"), "message was: {msg}");
        assert!(msg.contains("7 removed"), "message was: {msg}");
    }

    #[test]
    fn test_unsupported_target_names_id() {
        let err = CleanupError::UnsupportedTarget {
            id: "netscape".to_string(),
        };
        assert!(err.to_string().contains("netscape"));
    }

    #[test]
    fn test_io_preserves_source() {
        use std::error::Error;
        let err = CleanupError::Io {
            path: PathBuf::from("/p"),
            operation: "read_dir",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }
}
