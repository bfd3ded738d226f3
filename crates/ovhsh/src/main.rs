use std::process::ExitCode;

use clap::Parser;
use ovhsh::cli::Cli;
use ovhsh::shell;

fn main() -> ExitCode {
    shell::run(Cli::parse())
}
