//! Grammar elements of the command graph.
//!
//! A node is one of three kinds: a literal keyword, a free-form string
//! argument, or a closed-choice argument. Argument nodes carry the binding
//! key under which the matched token is stored in the `ArgumentRecord`.

use std::fmt;

use super::outcome::Outcome;
use super::record::ArgumentRecord;

/// Terminal handler invoked with the filled record and the dispatch context.
pub type Handler<C> = Box<dyn Fn(&mut ArgumentRecord, &mut C) -> Outcome>;

/// Dynamic completion provider for a string argument.
///
/// Receives the in-progress token and the context. The result is filtered by
/// prefix and deduplicated by the completion engine, so providers may return
/// every known value.
pub type Completer<C> = Box<dyn Fn(&str, &C) -> Vec<String>>;

/// Closed set of node kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Literal { label: String },
    String { key: String },
    Choice { key: String, values: Vec<String> },
}

impl NodeKind {
    /// Match rank used for tie-breaking: lower wins.
    pub(super) fn precedence(&self) -> u8 {
        match self {
            NodeKind::Literal { .. } => 0,
            NodeKind::Choice { .. } => 1,
            NodeKind::String { .. } => 2,
        }
    }

    pub(super) fn accepts(&self, token: &str) -> bool {
        match self {
            NodeKind::Literal { label } => label == token,
            NodeKind::Choice { values, .. } => values.iter().any(|value| value == token),
            NodeKind::String { .. } => true,
        }
    }

    /// Binding key for argument nodes, `None` for literals.
    pub fn key(&self) -> Option<&str> {
        match self {
            NodeKind::Literal { .. } => None,
            NodeKind::String { key } | NodeKind::Choice { key, .. } => Some(key),
        }
    }

    /// Token shown for this node in listings: the literal text or `<key>`.
    pub fn placeholder(&self) -> String {
        match self {
            NodeKind::Literal { label } => label.clone(),
            NodeKind::String { key } | NodeKind::Choice { key, .. } => format!("<{key}>"),
        }
    }
}

/// A node before (or after) it is placed in a `CommandGraph`.
pub struct Node<C> {
    pub(super) kind: NodeKind,
    pub(super) handler: Option<Handler<C>>,
    pub(super) completer: Option<Completer<C>>,
    pub(super) description: Option<String>,
    pub(super) children: Vec<super::NodeId>,
}

impl<C> Node<C> {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            handler: None,
            completer: None,
            description: None,
            children: Vec::new(),
        }
    }

    /// Exact keyword, compared byte-for-byte against the token.
    pub fn literal(label: impl Into<String>) -> Self {
        Self::new(NodeKind::Literal {
            label: label.into(),
        })
    }

    /// Free-form argument bound under `key`.
    pub fn string(key: impl Into<String>) -> Self {
        Self::new(NodeKind::String { key: key.into() })
    }

    /// Argument that only matches one of `values`, bound under `key`.
    pub fn choice<I, S>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(NodeKind::Choice {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut ArgumentRecord, &mut C) -> Outcome + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Attach a completion provider. Only string arguments consult one.
    pub fn with_completion<F>(mut self, completer: F) -> Self
    where
        F: Fn(&str, &C) -> Vec<String> + 'static,
    {
        if !matches!(self.kind, NodeKind::String { .. }) {
            tracing::warn!(
                node = %self.kind.placeholder(),
                "completion provider ignored on non-string node"
            );
            return self;
        }
        self.completer = Some(Box::new(completer));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("handler", &self.handler.is_some())
            .field("completer", &self.completer.is_some())
            .field("children", &self.children)
            .finish()
    }
}
