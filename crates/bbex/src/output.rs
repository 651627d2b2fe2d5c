//! Exit codes and pipe-safe console output.

use std::io::{self, Write};

/// Write one line to stdout, handling broken pipes gracefully.
///
/// Report commands are routinely piped to `head` or `grep`; a closed pipe
/// is normal termination, not an error.
pub fn print_line(msg: &str) -> io::Result<()> {
    match writeln!(io::stdout(), "{}", msg) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            std::process::exit(0);
        }
        Err(e) => Err(e),
    }
}

/// Standardized exit codes for the bbex CLI.
///
/// These codes provide consistent error reporting for scripting. The usage
/// code 9 is a preserved external contract of the original editor and is
/// deliberately outside the contiguous range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command succeeded (0)
    Success = 0,

    /// Generic error (1)
    GenericError = 1,

    /// Invalid arguments: unknown command or malformed issue id (2)
    InvalidArgument = 2,

    /// Input file not found (3)
    NotFound = 3,

    /// Input file is not a valid issue export (4)
    ParseFailed = 4,

    /// Input unreadable or its directory not writable (5)
    PermissionDenied = 5,

    /// Too few positional arguments (9)
    Usage = 9,
}

impl ExitCode {
    /// Convert exit code to i32 for `std::process::exit`
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Get a description of what this exit code means
    pub fn description(self) -> &'static str {
        match self {
            ExitCode::Success => "Command succeeded",
            ExitCode::GenericError => "Generic error occurred",
            ExitCode::InvalidArgument => "Invalid arguments (unknown command or bad issue id)",
            ExitCode::NotFound => "Input file not found",
            ExitCode::ParseFailed => "Input file is not a valid issue export",
            ExitCode::PermissionDenied => "Input unreadable or its directory not writable",
            ExitCode::Usage => "Too few positional arguments",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::GenericError.code(), 1);
        assert_eq!(ExitCode::InvalidArgument.code(), 2);
        assert_eq!(ExitCode::NotFound.code(), 3);
        assert_eq!(ExitCode::ParseFailed.code(), 4);
        assert_eq!(ExitCode::PermissionDenied.code(), 5);
        assert_eq!(ExitCode::Usage.code(), 9);
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let codes = [
            ExitCode::Success,
            ExitCode::GenericError,
            ExitCode::InvalidArgument,
            ExitCode::NotFound,
            ExitCode::ParseFailed,
            ExitCode::PermissionDenied,
            ExitCode::Usage,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a.description(), b.description());
            }
        }
    }
}
