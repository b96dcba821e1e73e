use crate::ast::{Node, NodeKind};

/// One frame of the render traversal.
///
/// Frames live on the call stack and link to their parent frame by
/// reference, so a child frame can only exist while its parent's render
/// call is still running. Renderers read the enclosing structure through
/// [`parent`](Self::parent) and [`parent_kind`](Self::parent_kind) instead
/// of any shared state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    node: &'a Node,
    parent: Option<&'a RenderContext<'a>>,
    body: bool,
}

impl<'a> RenderContext<'a> {
    /// Frame for the node a render starts from. The root is in statement
    /// position.
    pub fn root(node: &'a Node) -> Self {
        Self {
            node,
            parent: None,
            body: true,
        }
    }

    /// Frame for `node` nested in expression position under `self`.
    pub fn child<'c>(&'c self, node: &'c Node) -> RenderContext<'c> {
        RenderContext {
            node,
            parent: Some(self),
            body: false,
        }
    }

    /// Frame for `node` nested as a statement body under `self`.
    pub fn body<'c>(&'c self, node: &'c Node) -> RenderContext<'c> {
        RenderContext {
            node,
            parent: Some(self),
            body: true,
        }
    }

    #[inline]
    pub fn node(&self) -> &'a Node {
        self.node
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    #[inline]
    pub fn parent(&self) -> Option<&'a RenderContext<'a>> {
        self.parent
    }

    pub fn parent_node(&self) -> Option<&'a Node> {
        self.parent.map(|parent| parent.node)
    }

    /// Kind of the enclosing node; `None` at the root.
    pub fn parent_kind(&self) -> Option<NodeKind> {
        self.parent.map(RenderContext::kind)
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether the node sits in statement position.
    #[inline]
    pub fn is_body(&self) -> bool {
        self.body
    }

    /// Enclosing frames, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &'a RenderContext<'a>> {
        std::iter::successors(self.parent, |frame| frame.parent)
    }

    /// Number of enclosing frames.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_link_to_their_parent() {
        let value = Node::named(NodeKind::Lvar, "b");
        let assign = Node::named(NodeKind::Lvasgn, "a");
        let def = Node::leaf(NodeKind::Def);

        let root = RenderContext::root(&def);
        let body = root.body(&assign);
        let expr = body.child(&value);

        assert!(root.is_root());
        assert_eq!(root.parent_kind(), None);
        assert!(body.is_body());
        assert_eq!(body.parent_kind(), Some(NodeKind::Def));
        assert!(!expr.is_body());
        assert_eq!(expr.parent_kind(), Some(NodeKind::Lvasgn));
        assert_eq!(expr.depth(), 2);
        assert_eq!(
            expr.ancestors().map(RenderContext::kind).collect::<Vec<_>>(),
            vec![NodeKind::Lvasgn, NodeKind::Def]
        );
        assert!(expr.parent_node().is_some_and(|parent| std::ptr::eq(parent, &assign)));
    }
}
