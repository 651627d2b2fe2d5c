//! BitBucket issue-export editor
//!
//! A single-shot CLI tool for cleaning up JSON issue-tracker export files:
//! list issues, filter them (with their comments and logs), detect numbering
//! problems, and renumber densely. The input file is never modified; mutating
//! commands print the whole updated export to stdout for redirection.

use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

use bbex::cli::Cli;
use bbex::commands::{self, CommandOutput};
use bbex::errors::EditorError;
use bbex::export;
use bbex::output::{self, ExitCode};

/// Helper to determine exit code from error
fn error_to_exit_code(error: &anyhow::Error) -> ExitCode {
    if let Some(editor_error) = error.downcast_ref::<EditorError>() {
        return editor_error.exit_code();
    }
    ExitCode::GenericError
}

fn main() {
    let exit_code = match run() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            // Usage errors print the bare usage line, everything else gets
            // the standard Error: prefix.
            match e.downcast_ref::<EditorError>() {
                Some(EditorError::Usage) => eprintln!("{}", e),
                _ => eprintln!("Error: {}", e),
            }
            error_to_exit_code(&e)
        }
    };

    if exit_code != ExitCode::Success {
        std::process::exit(exit_code.code());
    }
}

/// Map a clap parse failure into the editor's error taxonomy so the exit
/// status contract holds: too few arguments is a usage error (9), an
/// unrecognized command name or malformed flag is an argument error (2).
fn map_clap_error(err: clap::Error) -> EditorError {
    match err.kind() {
        ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => EditorError::Usage,
        ErrorKind::InvalidSubcommand => {
            let name = match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.clone(),
                _ => String::from("<unknown>"),
            };
            EditorError::UnknownCommand(name)
        }
        _ => EditorError::InvalidArgument(err.render().to_string().trim_end().to_string()),
    }
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(map_clap_error(err).into()),
    };

    // Pre-flight checks and parsing happen before the command runs; an
    // unrecognized command was already rejected above, before the file is
    // touched.
    let mut record = export::load(&cli.file)?;

    match commands::apply(&cli.command, &mut record)? {
        CommandOutput::Report(lines) => {
            for line in lines {
                output::print_line(&line)?;
            }
        }
        CommandOutput::Document => {
            output::print_line(&export::to_json(&record)?)?;
        }
    }

    Ok(())
}
