use thiserror::Error;

use crate::ast::NodeKind;

/// Failure to render a tree.
///
/// Rendering never recovers: each variant aborts the render, and partial
/// output is discarded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnparseError {
    /// The kind has no registered renderer in the position it was reached.
    #[error("no renderer registered for node kind `{kind}`")]
    UnsupportedKind { kind: NodeKind },

    /// A node's children do not have the shape its kind requires.
    #[error("malformed `{kind}` node: {reason}")]
    MalformedNode { kind: NodeKind, reason: &'static str },

    #[error(transparent)]
    Limit(#[from] unparser_core::Error),
}

impl UnparseError {
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            Self::UnsupportedKind { kind } | Self::MalformedNode { kind, .. } => Some(*kind),
            Self::Limit(_) => None,
        }
    }
}
