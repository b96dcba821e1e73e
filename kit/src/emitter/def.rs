use unparser_core::Writer;

use super::{Emitter, RenderContext, Result, Slots, malformed};
use crate::ast::{Node, NodeKind};
use crate::token::Token;

/// `def name(params)`, the body, `end`.
pub(super) fn emit_def(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let name = node.name(0)?;
    e.out.token(&Token::Def);
    e.out.space();
    e.out.word(name);
    emit_signature(e, ctx, 1)
}

/// `def receiver.name(params)`, the body, `end`.
pub(super) fn emit_defs(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let singleton = node.required(0, "missing singleton receiver")?;
    let name = node.name(1)?;
    e.out.token(&Token::Def);
    e.out.space();
    e.visit_terminated(singleton, ctx)?;
    e.out.token(&Token::Dot);
    e.out.word(name);
    emit_signature(e, ctx, 2)
}

/// Parameters at `params`, then the body in the following slot.
fn emit_signature(e: &mut Emitter, ctx: &RenderContext<'_>, params: usize) -> Result {
    let node = ctx.node();
    let args = node.required(params, "missing parameter list")?;
    if args.kind() != NodeKind::Args {
        return Err(malformed(node, "parameters must be an args node"));
    }
    if !args.children().is_empty() {
        e.parentheses(|e| e.visit(args, ctx))?;
    }
    emit_definition_body(e, node.slot(params + 1)?, ctx)?;
    e.k_end()
}

/// A `rescue` or `ensure` body lays itself out against `def`/`end`.
fn emit_definition_body(e: &mut Emitter, body: Option<&Node>, ctx: &RenderContext<'_>) -> Result {
    match body {
        Some(body) if matches!(body.kind(), NodeKind::Rescue | NodeKind::Ensure) => e.visit(body, ctx),
        body => e.emit_body(body, ctx),
    }
}
