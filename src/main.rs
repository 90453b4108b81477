#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! utf8-echo — print each command-line argument as UTF-8 on its own line.

mod cli;
mod console;
mod echo;

use tracing::{Level, debug};

use cli::{Cli, Output, write_error};
use console::CodePageGuard;

fn main() {
    init_logging();
    let cli = Cli::parse_raw();
    let code = run(cli);
    std::process::exit(code);
}

/// Diagnostics go to stderr so they never mix with echoed output.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();
}

/// Run the echo and return the exit code.
///
/// Every resource (output handle, console code page) is owned by this frame,
/// so it is released before `main` exits the process, on success or failure.
fn run(cli: Cli) -> i32 {
    let mut out = Output::stdout();

    let guard = match CodePageGuard::acquire() {
        Ok(guard) => guard,
        Err(err) => {
            write_error(&mut out, &err);
            return err.exit_code();
        }
    };
    debug!(active = guard.is_active(), "code page guard acquired");

    let code = match echo::run(cli.args, &mut out) {
        Ok(()) => 0,
        Err(err) => {
            write_error(&mut out, &err);
            err.exit_code()
        }
    };

    drop(guard);
    drop(out);
    code
}
