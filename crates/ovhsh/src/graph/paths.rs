//! Listing of registered commands.
//!
//! Depth-first over the forest, children in registration order. One entry
//! is produced for every handler-bearing node reached, so a node shared by
//! several prefixes appears once per prefix.

use super::{CommandGraph, NodeId};

/// A complete command: the token labels from a root and its terminal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPath {
    pub labels: Vec<String>,
    pub terminal: NodeId,
}

impl CommandPath {
    pub fn display(&self) -> String {
        self.labels.join(" ")
    }
}

/// Lazy iterator over every registered command path.
pub struct Paths<'g, C> {
    graph: &'g CommandGraph<C>,
    /// Pending nodes with the depth at which they sit.
    stack: Vec<(NodeId, usize)>,
    labels: Vec<String>,
}

impl<'g, C> Iterator for Paths<'g, C> {
    type Item = CommandPath;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.stack.pop() {
            let Some(node) = self.graph.node(id) else {
                continue;
            };
            self.labels.truncate(depth);
            self.labels.push(node.kind.placeholder());
            for child in node.children.iter().rev() {
                self.stack.push((*child, depth + 1));
            }
            if node.has_handler() {
                return Some(CommandPath {
                    labels: self.labels.clone(),
                    terminal: id,
                });
            }
        }
        None
    }
}

impl<C> CommandGraph<C> {
    /// Every registered command, in depth-first registration order.
    pub fn all_paths(&self) -> Paths<'_, C> {
        Paths {
            graph: self,
            stack: self.roots.iter().rev().map(|id| (*id, 0)).collect(),
            labels: Vec::new(),
        }
    }

    /// Aligned `path  description` lines for help output.
    pub fn help_lines(&self) -> Vec<String> {
        let entries: Vec<(String, Option<&str>)> = self
            .all_paths()
            .map(|path| {
                let description = self.node(path.terminal).and_then(|node| node.description());
                (path.display(), description)
            })
            .collect();
        let longest = entries
            .iter()
            .map(|(command, _)| command.len())
            .max()
            .unwrap_or(0);
        entries
            .into_iter()
            .map(|(command, description)| match description {
                Some(description) => {
                    format!("{:<width$}  {}", command, description, width = longest)
                }
                None => command,
            })
            .collect()
    }
}
