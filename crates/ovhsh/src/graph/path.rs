//! Path registration.
//!
//! Walks the graph along the given node handles, reusing an existing edge
//! when the handle is already a child of the current position and
//! appending a new edge otherwise. Two paths diverge exactly where they
//! first use different handles.

use super::{CommandGraph, NodeId};

impl<C> CommandGraph<C> {
    /// Register `path` starting from the roots.
    pub fn register_path(&mut self, path: &[NodeId]) {
        self.register_below(None, path);
    }

    /// Register `path` below an existing node instead of the roots.
    pub fn register_path_from(&mut self, parent: NodeId, path: &[NodeId]) {
        if self.node(parent).is_none() {
            tracing::warn!(?parent, "path parent is not part of this graph");
            return;
        }
        self.register_below(Some(parent), path);
    }

    fn register_below(&mut self, start: Option<NodeId>, path: &[NodeId]) {
        if path.is_empty() {
            tracing::warn!("ignoring empty command path");
            return;
        }

        let mut at = start;
        for &id in path {
            if self.node(id).is_none() {
                tracing::warn!(?id, "path uses a node that is not part of this graph");
                return;
            }
            if !self.frontier(at).contains(&id) {
                if let Some(parent) = at {
                    if self.reaches(id, parent) {
                        tracing::warn!(?parent, child = ?id, "edge would create a cycle");
                        return;
                    }
                }
                match at {
                    Some(parent) => self.nodes[parent.0].children.push(id),
                    None => self.roots.push(id),
                }
            }
            at = Some(id);
        }

        if let Some(last) = at.and_then(|id| self.node(id)) {
            if !last.has_handler() {
                tracing::debug!(
                    terminal = %last.kind.placeholder(),
                    "registered path ends on a node without handler"
                );
            }
        }
    }

    /// Whether `target` is reachable from `from` (including `from == target`).
    fn reaches(&self, from: NodeId, target: NodeId) -> bool {
        let mut stack = vec![from];
        let mut seen = Vec::new();
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            if seen.contains(&id) {
                continue;
            }
            seen.push(id);
            stack.extend_from_slice(self.children(id));
        }
        false
    }
}
