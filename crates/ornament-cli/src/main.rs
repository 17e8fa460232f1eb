use std::process::ExitCode;

use clap::CommandFactory;

use ornament_cli::args::CliArguments;
use ornament_cli::generate::generate;
use ornament_cli::tracing::setup_tracing;
use ornament_cli::{print_error, set_failed, ARGS, EXIT};

/// Entry point.
fn main() -> ExitCode {
    let Some(command) = &ARGS.command else {
        // Without a command there is nothing to do, so show the usage.
        if let Err(err) = CliArguments::command().print_help() {
            eprintln!("failed to print help ({err})");
        }
        return ExitCode::FAILURE;
    };

    setup_tracing(&ARGS);

    if let Err(err) = generate(command) {
        set_failed();
        print_error(&err).expect("failed to print error");
    }

    EXIT.with(|cell| cell.get())
}
