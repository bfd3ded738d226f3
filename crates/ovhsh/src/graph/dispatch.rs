//! Matching and dispatch.
//!
//! Tokens are consumed left to right. At each step the frontier (roots,
//! then the children of the last matched node) is searched for a node that
//! accepts the token: a literal beats a choice, a choice beats a free
//! string, and the first-registered node wins within a kind. Matching is
//! greedy; there is no backtracking.

use super::{ArgumentRecord, CommandGraph, NodeId, Outcome};

impl<C> CommandGraph<C> {
    /// Best candidate in the frontier of `at` for `token`.
    pub(super) fn match_token(&self, at: Option<NodeId>, token: &str) -> Option<NodeId> {
        let mut best: Option<(u8, NodeId)> = None;
        for &id in self.frontier(at) {
            let Some(node) = self.node(id) else {
                continue;
            };
            if !node.kind.accepts(token) {
                continue;
            }
            let rank = node.kind.precedence();
            if best.map_or(true, |(current, _)| rank < current) {
                best = Some((rank, id));
            }
        }
        best.map(|(_, id)| id)
    }

    /// Walk `tokens` from the roots, binding argument values into `record`.
    ///
    /// Returns the last matched node (`None` when `tokens` is empty), or
    /// `Err(index)` with the position of the first token that matched nothing.
    pub(super) fn walk<S: AsRef<str>>(
        &self,
        tokens: &[S],
        record: &mut ArgumentRecord,
    ) -> Result<Option<NodeId>, usize> {
        let mut at = None;
        for (index, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            let Some(id) = self.match_token(at, token) else {
                return Err(index);
            };
            if let Some(key) = self.node(id).and_then(|node| node.kind.key()) {
                record.bind(key, token);
            }
            at = Some(id);
        }
        Ok(at)
    }

    /// Dispatch `tokens` with a fresh argument record.
    pub fn dispatch<S: AsRef<str>>(&self, tokens: &[S], ctx: &mut C) -> Outcome {
        let mut record = ArgumentRecord::new();
        self.dispatch_into(tokens, &mut record, ctx)
    }

    /// Dispatch `tokens`, binding arguments into the caller's `record`.
    ///
    /// The record is cleared first, so only this dispatch's bindings are
    /// visible to the handler and left behind afterwards.
    /// Runs exactly one handler on success. No handler runs when the input
    /// does not match a registered path or stops on a node without handler;
    /// both yield a usage outcome.
    pub fn dispatch_into<S: AsRef<str>>(
        &self,
        tokens: &[S],
        record: &mut ArgumentRecord,
        ctx: &mut C,
    ) -> Outcome {
        record.clear();
        let terminal = match self.walk(tokens, record) {
            Ok(Some(id)) => id,
            Ok(None) => {
                tracing::debug!("empty command");
                return Outcome::usage();
            }
            Err(index) => {
                tracing::debug!(
                    token = tokens[index].as_ref(),
                    position = index,
                    "no command matches token"
                );
                return Outcome::usage();
            }
        };

        let Some(handler) = self.node(terminal).and_then(|node| node.handler.as_ref()) else {
            tracing::debug!("input stops on an incomplete command");
            return Outcome::usage();
        };
        tracing::debug!(arguments = record.len(), "running command handler");
        handler(record, ctx)
    }
}
