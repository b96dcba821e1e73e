use core::fmt;

use super::NodeKind;
use crate::quote;

/// One element of a node's child list.
///
/// Children are either nested nodes or the primitive values the parser
/// attaches directly: names and selectors as symbols, literal payloads,
/// and `Nil` for an optional slot that is absent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Node),
    Symbol(String),
    Str(String),
    Int(i64),
    Float(f64),
    Nil,
}

impl Child {
    #[inline]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            _ => None,
        }
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Child::Nil)
    }
}

impl From<Node> for Child {
    #[inline]
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

/// An immutable syntax tree node: a kind tag and ordered children.
///
/// Nodes are built once and only read afterwards; the unparser borrows the
/// tree for the duration of a render and never mutates it.
///
/// `Display` writes the single-line s-expression form, which
/// [`str::parse`] reads back.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Child>,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, children: Vec<Child>) -> Self {
        Self { kind, children }
    }

    /// A node without children, such as `(nil)` or `(args)`.
    #[inline]
    pub fn leaf(kind: NodeKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// A node whose only child is a name, such as `(lvar :x)`.
    pub fn named(kind: NodeKind, name: impl Into<String>) -> Self {
        Self::new(kind, vec![Child::Symbol(name.into())])
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    #[inline]
    pub fn child(&self, index: usize) -> Option<&Child> {
        self.children.get(index)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        1 + self
            .children
            .iter()
            .filter_map(Child::as_node)
            .map(Node::size)
            .sum::<usize>()
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Node(node) => fmt::Display::fmt(node, f),
            Child::Symbol(name) if quote::is_bare_symbol(name) => write!(f, ":{}", name),
            Child::Symbol(name) => write!(f, ":{}", quote::quoted(name)),
            Child::Str(value) => f.write_str(&quote::quoted(value)),
            Child::Int(value) => write!(f, "{}", value),
            Child::Float(value) => f.write_str(&quote::float(*value)),
            Child::Nil => f.write_str("nil"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind)?;
        for child in &self.children {
            write!(f, " {}", child)?;
        }
        f.write_str(")")
    }
}
