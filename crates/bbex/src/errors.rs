//! Error taxonomy for the editor.
//!
//! Every failure is fatal for a single-shot tool: the error is printed to
//! stderr and mapped to a process exit code. `InvalidArgument` is raised
//! during argument validation, before any mutation, so a failed filter never
//! leaves the record partially modified.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::output::ExitCode;

#[derive(Debug, Error)]
pub enum EditorError {
    /// Fewer than the two required positional arguments.
    #[error("Usage: bbex <issue_file> <command> [<args>...]")]
    Usage,

    /// Input file unreadable, or its containing directory not writable.
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input is not valid JSON, or lacks the required export sequences.
    #[error("invalid issue export: {0}")]
    Parse(#[from] serde_json::Error),

    /// Command name not in the supported set.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// Malformed operation argument, e.g. a non-numeric issue id.
    #[error("{0}")]
    InvalidArgument(String),
}

impl EditorError {
    /// Exit code this error terminates the process with.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            EditorError::Usage => ExitCode::Usage,
            EditorError::FileAccess { source, .. }
                if source.kind() == io::ErrorKind::NotFound =>
            {
                ExitCode::NotFound
            }
            EditorError::FileAccess { .. } => ExitCode::PermissionDenied,
            EditorError::Parse(_) => ExitCode::ParseFailed,
            EditorError::UnknownCommand(_) | EditorError::InvalidArgument(_) => {
                ExitCode::InvalidArgument
            }
        }
    }

    /// Build an `InvalidArgument` error for a malformed issue id.
    pub fn invalid_id(raw: &str) -> Self {
        EditorError::InvalidArgument(format!("\"{}\" is not a valid issue ID", raw))
    }
}
