//! Unified error types for the stackforge workspace.
//!
//! Every failure the core can report is detected synchronously, before any
//! file write is attempted, so no variant models a transient condition.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum StackforgeError {
    /// Requested stack id is not registered in the catalog.
    #[error("unknown stack \"{id}\"; valid stacks are: {}", .valid.join(", "))]
    UnknownStack {
        /// The id the caller asked for.
        id: String,
        /// Full ordered list of registered stack ids.
        valid: Vec<String>,
    },

    /// Requested service id is not registered in the catalog.
    #[error("unknown service \"{id}\"; valid services are: {}", .valid.join(", "))]
    UnknownService {
        /// The id the caller asked for (as given, before lowercasing).
        id: String,
        /// Full ordered list of registered service ids.
        valid: Vec<String>,
    },

    /// A file required by the operation does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, StackforgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stack_message_lists_valid_ids() {
        let err = StackforgeError::UnknownStack {
            id: "bogus".into(),
            valid: vec!["mean".into(), "lamp".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("bogus"), "got: {msg}");
        assert!(msg.contains("mean, lamp"), "got: {msg}");
    }

    #[test]
    fn unknown_service_message_lists_valid_ids() {
        let err = StackforgeError::UnknownService {
            id: "ghost".into(),
            valid: vec!["redis".into(), "nginx".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("ghost"), "got: {msg}");
        assert!(msg.contains("redis, nginx"), "got: {msg}");
    }

    #[test]
    fn file_not_found_message_carries_path() {
        let err = StackforgeError::FileNotFound {
            path: PathBuf::from("/tmp/missing.yml"),
        };
        assert!(err.to_string().contains("/tmp/missing.yml"));
    }
}
