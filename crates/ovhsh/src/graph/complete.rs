//! Completion of the next token.
//!
//! Replays the matcher over the tokens before the cursor, then collects
//! candidates from the resulting frontier: literal labels first, then choice
//! values, then the output of string-argument providers. Every group keeps
//! frontier child order; the result is prefix-filtered and deduplicated.

use super::{ArgumentRecord, CommandGraph, NodeKind};

impl<C> CommandGraph<C> {
    /// Candidates for `partial` after `tokens`. Empty when `tokens` does not
    /// match a registered prefix. Never runs a handler.
    pub fn complete<S: AsRef<str>>(&self, tokens: &[S], partial: &str, ctx: &C) -> Vec<String> {
        let mut scratch = ArgumentRecord::new();
        let Ok(at) = self.walk(tokens, &mut scratch) else {
            return Vec::new();
        };
        let frontier = self.frontier(at);

        let mut candidates: Vec<String> = Vec::new();
        let mut offer = |candidate: &str| {
            if candidate.starts_with(partial) && !candidates.iter().any(|seen| seen == candidate) {
                candidates.push(candidate.to_string());
            }
        };

        let nodes = || frontier.iter().filter_map(|id| self.node(*id));
        for node in nodes() {
            if let NodeKind::Literal { label } = &node.kind {
                offer(label.as_str());
            }
        }
        for node in nodes() {
            if let NodeKind::Choice { values, .. } = &node.kind {
                for value in values {
                    offer(value.as_str());
                }
            }
        }
        for node in nodes() {
            if let (NodeKind::String { .. }, Some(completer)) = (&node.kind, &node.completer) {
                for candidate in completer(partial, ctx) {
                    offer(candidate.as_str());
                }
            }
        }
        candidates
    }
}

/// Sorted, deduplicated candidates from any collection of names.
///
/// Helper for providers backed by a cache keyed by resource name.
pub fn complete_from_keys<I, S>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names: Vec<String> = keys
        .into_iter()
        .map(|key| key.as_ref().to_string())
        .collect();
    names.sort();
    names.dedup();
    names
}
