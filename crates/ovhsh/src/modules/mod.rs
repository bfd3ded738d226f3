//! Feature modules.
//!
//! Each module contributes its command paths to the shared graph at startup.
//! Modules are registered in a fixed order; a module may extend a prefix
//! registered by an earlier one.

mod base;
pub mod domain;

use crate::config::Config;
use crate::graph::CommandGraph;
use crate::shell::ShellContext;

pub use base::BaseModule;
pub use domain::DomainModule;

pub trait Module {
    fn name(&self) -> &'static str;

    fn register(&self, graph: &mut CommandGraph<ShellContext>);
}

pub fn builtin_modules(config: &Config) -> Vec<Box<dyn Module>> {
    vec![
        Box::new(BaseModule),
        Box::new(DomainModule::open(&config.domain)),
    ]
}

pub fn build_graph(modules: &[Box<dyn Module>]) -> CommandGraph<ShellContext> {
    let mut graph = CommandGraph::new();
    for module in modules {
        let before = graph.len();
        module.register(&mut graph);
        tracing::debug!(
            module = module.name(),
            nodes = graph.len() - before,
            "module registered"
        );
    }
    graph
}
