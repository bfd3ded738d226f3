//! Shell front end.
//!
//! Wires config, flags and feature modules into a `Session`, then either
//! runs a single command from the command line or reads commands from stdin.
//!
//! - console: output / report / input streams (console.rs)
//! - context: per-process state handed to handlers (context.rs)
//! - history: bounded in-memory history (history.rs)
//! - line: quoting-aware splitting and completion helpers (line.rs)
//! - session: line execution and completion (session.rs)

mod console;
mod context;
mod history;
mod line;
mod session;


use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::config::load_config;
use crate::logging;
use crate::modules::{build_graph, builtin_modules};

pub use console::Console;
pub use context::{Options, ShellContext};
pub use history::History;
pub use session::Session;

pub fn run(cli: Cli) -> ExitCode {
    logging::init(cli.verbose);

    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(&cwd);
    let options = Options::resolve(&config, &cli);
    tracing::debug!(?options, "options resolved");

    let modules = builtin_modules(&config);
    let graph = build_graph(&modules);
    if cli.dump_graph {
        print!("{graph}");
        return ExitCode::SUCCESS;
    }

    let ctx = ShellContext::new(options, Console::stdio(), config.shell.history_size);
    let mut session = Session::new(graph, ctx);
    if cli.command.is_empty() {
        session.run_interactive(&config.shell.prompt);
        return ExitCode::SUCCESS;
    }

    let outcome = session.execute_tokens(&cli.command);
    ExitCode::from(outcome.exit_code())
}
