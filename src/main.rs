//! deskimg - command-line tool for inspecting and compressing desktop images

use std::process::ExitCode;

use deskimg::cli;

fn main() -> ExitCode {
    cli::run()
}
