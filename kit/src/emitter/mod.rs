//! Node dispatch and rendering.
//!
//! [`Emitter`] walks the tree: each node is looked up in the registry by
//! kind, rendered by the function registered for it, and that function
//! visits its children through the same dispatch, threading a
//! [`RenderContext`] down so renderers can inspect the enclosing nodes.
//!
//! Renderer families:
//!
//! - [`argument`]: parameter lists and block-pass arguments
//! - [`case`]: `case` / `when`
//! - [`op_assign`]: `&&=`, `||=` and `op=`
//! - [`rescue`] and [`resbody`]: exception handling, standalone or embedded
//! - supporting kinds: literals, variables, collections, calls, blocks,
//!   statement sequences and method definitions

use core::ops::RangeBounds;

use tracing::trace;
use unparser_core::{RecursionGuard, RenderConfig, Writer};

use crate::SourceBuffer;
use crate::ast::{Child, Node};
use crate::error::UnparseError;
use crate::token::Token;

mod argument;
mod block;
mod case;
mod collection;
mod context;
mod def;
pub(crate) mod literal;
mod op_assign;
mod registry;
mod rescue;
mod resbody;
mod send;
mod statement;
mod variable;

pub use context::RenderContext;

pub(crate) type Result<T = ()> = core::result::Result<T, UnparseError>;

/// Signature shared by every renderer.
pub(crate) type Handler = fn(&mut Emitter, &RenderContext<'_>) -> Result;

/// Renders nodes into a [`SourceBuffer`].
pub struct Emitter {
    pub(crate) out: SourceBuffer,
    config: RenderConfig,
    guard: RecursionGuard,
}

impl Emitter {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            out: SourceBuffer::from_config(&config),
            config,
            guard: RecursionGuard::new(),
        }
    }

    /// Render `root` as a top-level program.
    pub fn emit(&mut self, root: &Node) -> Result {
        self.dispatch(&RenderContext::root(root))
    }

    pub fn into_source(self) -> String {
        self.out.into_string()
    }

    fn dispatch(&mut self, ctx: &RenderContext<'_>) -> Result {
        let kind = ctx.kind();
        let handler = registry::handler(kind).ok_or(UnparseError::UnsupportedKind { kind })?;
        self.render(ctx, handler)
    }

    fn render(&mut self, ctx: &RenderContext<'_>, handler: Handler) -> Result {
        if let Err(err) = self.guard.enter(self.config.max_recursion_depth) {
            self.guard.exit();
            return Err(err.into());
        }
        trace!(kind = %ctx.kind(), depth = self.guard.depth(), "dispatch");
        let result = handler(self, ctx);
        self.guard.exit();
        result
    }

    /// Render `node` with an explicit renderer instead of its registry entry.
    pub(crate) fn run(&mut self, node: &Node, parent: &RenderContext<'_>, handler: Handler) -> Result {
        self.render(&parent.child(node), handler)
    }

    pub(crate) fn visit(&mut self, node: &Node, parent: &RenderContext<'_>) -> Result {
        self.dispatch(&parent.child(node))
    }

    fn visit_body(&mut self, node: &Node, parent: &RenderContext<'_>) -> Result {
        self.dispatch(&parent.body(node))
    }

    /// Visit `node`, parenthesized unless its text is self-delimiting.
    pub(crate) fn visit_terminated(&mut self, node: &Node, parent: &RenderContext<'_>) -> Result {
        if registry::is_terminated(node) {
            self.visit(node, parent)
        } else {
            self.parentheses(|e| e.visit(node, parent))
        }
    }

    /// Run `f` one level deeper, on its own lines.
    pub(crate) fn indented(&mut self, f: impl FnOnce(&mut Self) -> Result) -> Result {
        self.out.indent();
        self.out.newline();
        let result = f(self);
        self.out.newline();
        self.out.dedent();
        result
    }

    pub(crate) fn visit_indented(&mut self, node: &Node, parent: &RenderContext<'_>) -> Result {
        self.indented(|e| e.visit_body(node, parent))
    }

    /// An indented body; an absent body still takes its own line.
    pub(crate) fn emit_body(&mut self, body: Option<&Node>, parent: &RenderContext<'_>) -> Result {
        match body {
            Some(body) => self.visit_indented(body, parent),
            None => {
                self.out.indent();
                self.out.newline();
                self.out.dedent();
                Ok(())
            }
        }
    }

    pub(crate) fn parentheses(&mut self, f: impl FnOnce(&mut Self) -> Result) -> Result {
        self.out.token(&Token::LParen);
        f(self)?;
        self.out.token(&Token::RParen);
        Ok(())
    }

    /// Visit each node, separated by `, `.
    pub(crate) fn delimited<'n>(
        &mut self,
        nodes: impl IntoIterator<Item = &'n Node>,
        parent: &RenderContext<'_>,
    ) -> Result {
        self.separated(nodes, parent, &Token::Comma)
    }

    fn separated<'n>(
        &mut self,
        nodes: impl IntoIterator<Item = &'n Node>,
        parent: &RenderContext<'_>,
        separator: &Token,
    ) -> Result {
        for (idx, node) in nodes.into_iter().enumerate() {
            if idx > 0 {
                self.out.token(separator);
                self.out.space();
            }
            self.visit(node, parent)?;
        }
        Ok(())
    }

    /// One statement per line.
    pub(crate) fn statements(&mut self, nodes: &[&Node], parent: &RenderContext<'_>) -> Result {
        for (idx, node) in nodes.iter().enumerate() {
            if idx > 0 {
                self.out.newline();
            }
            self.visit(node, parent)?;
        }
        Ok(())
    }

    /// Statements on one line, separated by `; `.
    pub(crate) fn inline_statements(&mut self, nodes: &[&Node], parent: &RenderContext<'_>) -> Result {
        self.separated(nodes.iter().copied(), parent, &Token::Semicolon)
    }

    pub(crate) fn k_end(&mut self) -> Result {
        self.out.token(&Token::End);
        Ok(())
    }
}

pub(crate) fn malformed(node: &Node, reason: &'static str) -> UnparseError {
    UnparseError::MalformedNode {
        kind: node.kind(),
        reason,
    }
}

/// Typed access to child slots, failing with [`UnparseError::MalformedNode`].
pub(crate) trait Slots {
    /// An optional node slot: `nil` and a missing slot are both `None`.
    fn slot(&self, index: usize) -> Result<Option<&Node>>;

    fn required(&self, index: usize, reason: &'static str) -> Result<&Node>;

    /// Every child in `range` as a node.
    fn nodes(&self, range: impl RangeBounds<usize>, reason: &'static str) -> Result<Vec<&Node>>;

    /// A symbol child: a name, selector or operator.
    fn name(&self, index: usize) -> Result<&str>;

    /// A symbol child that may be `nil` or missing.
    fn optional_name(&self, index: usize) -> Result<Option<&str>>;
}

impl Slots for Node {
    fn slot(&self, index: usize) -> Result<Option<&Node>> {
        match self.child(index) {
            Some(Child::Node(node)) => Ok(Some(node)),
            Some(Child::Nil) | None => Ok(None),
            Some(_) => Err(malformed(self, "expected a node or nil child")),
        }
    }

    fn required(&self, index: usize, reason: &'static str) -> Result<&Node> {
        match self.child(index) {
            Some(Child::Node(node)) => Ok(node),
            _ => Err(malformed(self, reason)),
        }
    }

    fn nodes(&self, range: impl RangeBounds<usize>, reason: &'static str) -> Result<Vec<&Node>> {
        let range = (range.start_bound().cloned(), range.end_bound().cloned());
        self.children()
            .get(range)
            .ok_or_else(|| malformed(self, reason))?
            .iter()
            .map(|child| child.as_node().ok_or_else(|| malformed(self, reason)))
            .collect()
    }

    fn name(&self, index: usize) -> Result<&str> {
        match self.child(index) {
            Some(Child::Symbol(name)) => Ok(name),
            _ => Err(malformed(self, "expected a name")),
        }
    }

    fn optional_name(&self, index: usize) -> Result<Option<&str>> {
        match self.child(index) {
            Some(Child::Symbol(name)) => Ok(Some(name)),
            Some(Child::Nil) | None => Ok(None),
            Some(_) => Err(malformed(self, "expected a name or nil")),
        }
    }
}
