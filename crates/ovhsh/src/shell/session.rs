use super::context::ShellContext;
use super::line::{
    completion_query, join_tokens, longest_common_prefix, split_for_completion, tokenize,
};
use crate::graph::{CommandGraph, Outcome, Report, Severity, Status};

const USAGE_HINT: &str = "Invalid command, type 'help' for the list of commands";
const GREETING: &str = "needs help? Type help!";

/// A command graph bound to the shell state it dispatches against.
pub struct Session {
    graph: CommandGraph<ShellContext>,
    ctx: ShellContext,
}

impl Session {
    pub fn new(graph: CommandGraph<ShellContext>, mut ctx: ShellContext) -> Self {
        ctx.help = graph.help_lines();
        Self { graph, ctx }
    }

    pub fn context(&self) -> &ShellContext {
        &self.ctx
    }

    /// Dispatch already split tokens and print what the command reported.
    pub fn execute_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> Outcome {
        let outcome = self.graph.dispatch(tokens, &mut self.ctx);
        self.ctx.flush_reports();
        match &outcome.status {
            Status::Success => {}
            Status::Failure(report) => self.ctx.print_report(report),
            Status::Usage => self
                .ctx
                .print_report(&Report::new(Severity::Error, USAGE_HINT)),
        }
        outcome
    }

    /// Run one input line. Returns `None` when nothing was dispatched: blank
    /// lines and completion queries (a lone `?`, or `?` after a space).
    pub fn execute_line(&mut self, line: &str) -> Option<Outcome> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if let Some(before) = completion_query(line) {
            self.show_completions(before);
            return None;
        }

        let outcome = match tokenize(line) {
            Ok(tokens) => self.execute_tokens(&tokens),
            Err(err) => {
                let outcome = Outcome::failure(Severity::Error, err.to_string());
                if let Status::Failure(report) = &outcome.status {
                    self.ctx.print_report(report);
                }
                outcome
            }
        };
        if !outcome.skip_history {
            self.ctx.history.push(line);
        }
        Some(outcome)
    }

    /// Candidates for the token under the cursor at the end of `line`.
    pub fn complete(&self, line: &str) -> Vec<String> {
        let Some((tokens, partial)) = split_for_completion(line) else {
            return Vec::new();
        };
        self.graph.complete(&tokens, &partial, &self.ctx)
    }

    /// Attempt to complete the current input.
    ///
    /// Returns the completed line if a unique completion exists, or the input
    /// extended to the longest common prefix of the candidates.
    pub fn complete_line(&self, line: &str) -> Option<String> {
        let (tokens, partial) = split_for_completion(line)?;
        let candidates = self.graph.complete(&tokens, &partial, &self.ctx);
        if candidates.is_empty() {
            return None;
        }

        let unique = candidates.len() == 1;
        let common = longest_common_prefix(&candidates);
        if !unique && common.len() <= partial.len() {
            return None;
        }

        let mut completed = tokens;
        completed.push(common);
        let mut line = join_tokens(&completed);
        if unique {
            line.push(' ');
        }
        Some(line)
    }

    /// Echo `line` completed to the longest common prefix, or list the
    /// candidates when it cannot be extended.
    pub fn tab_complete(&mut self, line: &str) {
        match self.complete_line(line) {
            Some(completed) => self.ctx.console.println(completed),
            None => self.show_completions(line),
        }
    }

    fn show_completions(&mut self, before: &str) {
        let candidates = self.complete(before);
        if candidates.is_empty() {
            self.ctx
                .print_report(&Report::new(Severity::Notice, "No completion"));
            return;
        }
        for candidate in candidates {
            self.ctx.console.println(candidate);
        }
    }

    /// Read and run lines until end of input or a quit command. A line
    /// ending in a tab is completed instead of run.
    pub fn run_interactive(&mut self, prompt: &str) {
        self.ctx.console.println(GREETING);
        while !self.ctx.quit_requested {
            self.ctx.console.prompt(prompt);
            match self.ctx.console.read_line() {
                Ok(Some(line)) => match line.strip_suffix('\t') {
                    Some(partial) => self.tab_complete(partial),
                    None => {
                        self.execute_line(&line);
                    }
                },
                Ok(None) => {
                    self.ctx.console.println("");
                    break;
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to read input");
                    break;
                }
            }
        }
        tracing::debug!(commands = self.ctx.history.len(), "interactive session ended");
    }
}
