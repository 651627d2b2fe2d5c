//! BitBucket issue-export editor library.
//!
//! Provides the data model and operations behind the `bbex` binary: load a
//! JSON issue export, apply one list/filter/renumber operation, print the
//! result. The library surface exists primarily for testing.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod errors;
pub mod export;
pub mod output;

// Re-export commonly used types
pub use commands::{apply, CommandOutput};
pub use domain::{Comment, Export, Issue, Log};
pub use errors::EditorError;
pub use output::ExitCode;
