use super::console::Console;
use super::history::History;
use crate::cli::Cli;
use crate::config::Config;
use crate::graph::{Report, Severity};

/// Behaviour switches from config and command-line flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub assume_yes: bool,
    pub no_confirm: bool,
    pub silent: bool,
}

impl Options {
    /// Config values with command-line flags applied on top.
    pub fn resolve(config: &Config, cli: &Cli) -> Self {
        Self {
            assume_yes: cli.yes || config.confirm.assume_yes,
            no_confirm: cli.no_confirm || config.confirm.no_confirm,
            silent: cli.silent || config.output.silent,
        }
    }
}

/// State handed to every command handler.
pub struct ShellContext {
    pub options: Options,
    pub console: Console,
    /// Messages queued by handlers, printed after each command.
    pub reports: Vec<Report>,
    pub history: History,
    pub help: Vec<String>,
    pub quit_requested: bool,
}

impl ShellContext {
    pub fn new(options: Options, console: Console, history_size: usize) -> Self {
        Self {
            options,
            console,
            reports: Vec::new(),
            history: History::new(history_size),
            help: Vec::new(),
            quit_requested: false,
        }
    }

    pub fn report(&mut self, severity: Severity, message: impl Into<String>) {
        self.reports.push(Report::new(severity, message));
    }

    /// Ask a yes/no question. Only an answer starting with a lowercase `y`
    /// is a yes.
    pub fn confirm(&mut self, question: &str) -> bool {
        if self.options.assume_yes || self.options.no_confirm {
            return true;
        }
        self.console.prompt(question);
        match self.console.read_line() {
            Ok(Some(answer)) => answer.starts_with('y'),
            Ok(None) => {
                self.console.println("");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read confirmation");
                false
            }
        }
    }

    fn threshold(&self) -> Severity {
        if self.options.silent {
            Severity::Warn
        } else {
            Severity::Info
        }
    }

    pub fn print_report(&mut self, report: &Report) {
        if report.severity >= self.threshold() {
            self.console.eprintln(report);
        }
    }

    pub fn flush_reports(&mut self) {
        let reports = std::mem::take(&mut self.reports);
        for report in &reports {
            self.print_report(report);
        }
    }
}
