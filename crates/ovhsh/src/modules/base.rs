//! Built-in shell commands.

use super::Module;
use crate::graph::{ArgumentRecord, CommandGraph, Node, Outcome};
use crate::shell::ShellContext;

pub struct BaseModule;

impl Module for BaseModule {
    fn name(&self) -> &'static str {
        "base"
    }

    fn register(&self, graph: &mut CommandGraph<ShellContext>) {
        let help = graph.add(
            Node::literal("help")
                .with_description("Show available commands")
                .with_handler(|_, ctx: &mut ShellContext| {
                    for line in &ctx.help {
                        ctx.console.println(line);
                    }
                    Outcome::success()
                }),
        );
        let history = graph.add(
            Node::literal("history")
                .with_description("Show command history")
                .with_handler(|_, ctx: &mut ShellContext| {
                    for (index, entry) in ctx.history.entries().enumerate() {
                        ctx.console.println(format!("{:>4}  {entry}", index + 1));
                    }
                    Outcome::success()
                }),
        );
        let version = graph.add(
            Node::literal("version")
                .with_description("Show version information")
                .with_handler(|_, ctx: &mut ShellContext| {
                    ctx.console
                        .println(format!("ovhsh v{}", env!("CARGO_PKG_VERSION")));
                    Outcome::success()
                }),
        );
        let quit = graph.add(
            Node::literal("quit")
                .with_description("Leave the shell")
                .with_handler(request_quit),
        );
        let exit = graph.add(
            Node::literal("exit")
                .with_description("Alias for quit")
                .with_handler(request_quit),
        );

        for command in [help, history, version, quit, exit] {
            graph.register_path(&[command]);
        }
    }
}

fn request_quit(_: &mut ArgumentRecord, ctx: &mut ShellContext) -> Outcome {
    ctx.quit_requested = true;
    Outcome::success().skip_history()
}
