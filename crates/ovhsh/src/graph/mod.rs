//! Command graph engine.
//!
//! Feature modules register command paths into a shared forest of nodes;
//! the graph then matches tokenized input against those paths, binds
//! argument values and runs the terminal handler. The same structure drives
//! completion and help listings.
//!
//! - node: the three node kinds and their handler/completion hooks (node.rs)
//! - path: registration and prefix merging by node identity (path.rs)
//! - dispatch: deterministic matching and handler invocation (dispatch.rs)
//! - complete: next-token candidates (complete.rs)
//! - paths: lazy listing of every registered command (paths.rs)
//!
//! Nodes live in an arena and are addressed by `NodeId`. "The same node"
//! means "the same handle", so branches registered with shared handles share
//! storage. The graph is only mutated during registration.

mod complete;
mod dispatch;
mod node;
mod outcome;
mod path;
mod paths;
mod record;

#[cfg(test)]
mod tests;

use std::fmt;

pub use complete::complete_from_keys;
pub use node::{Completer, Handler, Node, NodeKind};
pub use outcome::{Outcome, Report, Severity, Status};
pub use paths::{CommandPath, Paths};
pub use record::{ArgumentError, ArgumentRecord};

/// Stable handle of a node inside one `CommandGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Forest of command nodes, generic over the per-dispatch context `C`.
pub struct CommandGraph<C> {
    nodes: Vec<Node<C>>,
    roots: Vec<NodeId>,
}

impl<C> Default for CommandGraph<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CommandGraph<C> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Place a node in the arena. It is not reachable until a path uses it.
    pub fn add(&mut self, node: Node<C>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<C>> {
        self.nodes.get(id.0)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    /// Candidates for the next token: the roots, or the children of `at`.
    fn frontier(&self, at: Option<NodeId>) -> &[NodeId] {
        match at {
            Some(id) => self.children(id),
            None => &self.roots,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn fmt_branch(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        depth: usize,
    ) -> fmt::Result {
        let Some(node) = self.node(id) else {
            return Ok(());
        };
        let marker = if node.has_handler() { " *" } else { "" };
        writeln!(
            f,
            "{:indent$}{}{marker}",
            "",
            node.kind.placeholder(),
            indent = depth * 2
        )?;
        for child in &node.children {
            self.fmt_branch(f, *child, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented dump of the forest; handler-bearing nodes are marked with `*`.
impl<C> fmt::Display for CommandGraph<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for root in &self.roots {
            self.fmt_branch(f, *root, 0)?;
        }
        Ok(())
    }
}
