//! Command-line interface definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// BitBucket issue-export editor
///
/// Loads a JSON issue export, applies exactly one operation, and prints the
/// result to stdout. Mutating commands (remove, keeponly, reassign) print the
/// whole modified export as a single JSON document; redirect stdout to keep it.
///
/// Exit Codes:
///   0  - Command succeeded
///   1  - Generic error occurred
///   2  - Invalid arguments (unknown command or bad issue id)
///   3  - Input file not found
///   4  - Input file is not a valid issue export
///   5  - Input unreadable or its directory not writable
///   9  - Too few positional arguments
#[derive(Debug, Parser)]
#[command(name = "bbex")]
#[command(about = "BitBucket issue-export editor", long_about = None)]
pub struct Cli {
    /// Path to the JSON issue export file
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// The supported operations. Names are case-sensitive and match the
/// original editor exactly.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all issues, one `#<id> <title>` line each
    List {
        /// Pass `sorted` to order by ascending issue id
        #[arg(value_enum)]
        order: Option<ListOrder>,
    },

    /// Remove the given issues and every comment/log referencing them
    Remove {
        /// Issue ids (decimal integers)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Keep only the given issues; drop everything else
    #[command(name = "keeponly")]
    KeepOnly {
        /// Issue ids (decimal integers)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Report gaps in the issue id numbering
    #[command(name = "findgap")]
    FindGap,

    /// Report duplicate issue ids
    #[command(name = "finddup")]
    FindDup,

    /// Report comments referencing issues that do not exist
    #[command(name = "findheadless")]
    FindHeadless,

    /// Run finddup, findgap and findheadless in one pass
    Check,

    /// Renumber all issues densely from 1, rewriting references
    Reassign,
}

/// Listing order for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListOrder {
    /// Ascending by issue id
    Sorted,
}
