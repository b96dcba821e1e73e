//! Statement sequences: `begin`, `kwbegin` and `ensure`.

use tracing::debug;
use unparser_core::Writer;

use super::{Emitter, RenderContext, Result, Slots};
use crate::ast::{Node, NodeKind};
use crate::token::Token;

/// An implicit statement sequence.
///
/// In statement position the children go one per line. Anywhere else
/// they need grouping, so they are written as `(a; b)`.
pub(super) fn emit_begin(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let statements = ctx.node().nodes(.., "statements must be nodes")?;
    debug!(statements = statements.len(), body = ctx.is_body(), "begin");
    if ctx.is_body() {
        e.statements(&statements, ctx)
    } else {
        e.parentheses(|e| e.inline_statements(&statements, ctx))
    }
}

/// `begin ... end`.
///
/// Only a lone `rescue` or `ensure` lays itself out against `begin`/`end`.
/// Any other statements are rendered as one implicit sequence, so a
/// `rescue` among them stays a modifier on its own line.
pub(super) fn emit_kwbegin(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let statements = node.nodes(.., "statements must be nodes")?;
    e.out.token(&Token::Begin);
    match statements.as_slice() {
        [] => e.out.newline(),
        [only] if matches!(only.kind(), NodeKind::Rescue | NodeKind::Ensure) => {
            e.visit(only, ctx)?;
        }
        _ => {
            let sequence = Node::new(NodeKind::Begin, node.children().to_vec());
            let frame = ctx.body(&sequence);
            let statements = sequence.nodes(.., "statements must be nodes")?;
            e.indented(|e| e.statements(&statements, &frame))?;
        }
    }
    e.k_end()
}

/// Children: the protected body (or nil) and the ensure body (or nil).
pub(super) fn emit_ensure(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    match node.slot(0)? {
        Some(body) if body.kind() == NodeKind::Rescue => e.visit(body, ctx)?,
        Some(body) => e.visit_indented(body, ctx)?,
        None => e.out.newline(),
    }
    e.out.token(&Token::Ensure);
    e.emit_body(node.slot(1)?, ctx)
}
