pub mod args;
pub mod generate;
pub mod terminal;
pub mod tracing;

use std::cell::Cell;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::WriteColor;
use once_cell::sync::Lazy;
use ornament::diag::HintedString;

use crate::args::CliArguments;

thread_local! {
    /// The CLI's exit code.
    pub static EXIT: Cell<ExitCode> = const { Cell::new(ExitCode::SUCCESS) };
}

/// The parsed commandline arguments.
pub static ARGS: Lazy<CliArguments> = Lazy::new(CliArguments::parse);

/// Ensure a failure exit code.
pub fn set_failed() {
    EXIT.with(|cell| cell.set(ExitCode::FAILURE));
}

/// Print an application-level error and its hints to stderr.
pub fn print_error(error: &HintedString) -> io::Result<()> {
    let styles = term::Styles::default();

    let mut output = terminal::out();
    output.set_color(&styles.header_error)?;
    write!(output, "error")?;
    output.reset()?;
    writeln!(output, ": {}", error.message())?;

    for hint in error.hints() {
        output.set_color(&styles.header_help)?;
        write!(output, "hint")?;
        output.reset()?;
        writeln!(output, ": {hint}")?;
    }

    Ok(())
}
