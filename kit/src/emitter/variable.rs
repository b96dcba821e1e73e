use unparser_core::Writer;

use super::{Emitter, RenderContext, Result, Slots};
use crate::ast::NodeKind;
use crate::token::Token;

/// `lvar`, `ivar`, `gvar`, `cvar`: the sigil is part of the name.
pub(super) fn emit_variable(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    e.out.word(ctx.node().name(0)?);
    Ok(())
}

pub(super) fn emit_const(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let name = node.name(1)?;
    match node.slot(0)? {
        None => {}
        Some(scope) if scope.kind() == NodeKind::Cbase => e.out.token(&Token::DColon),
        Some(scope) => {
            e.visit_terminated(scope, ctx)?;
            e.out.token(&Token::DColon);
        }
    }
    e.out.word(name);
    Ok(())
}

/// `name = value`, or the bare `name` when used as a target.
pub(super) fn emit_assignment(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    e.out.word(node.name(0)?);
    if let Some(value) = node.slot(1)? {
        e.out.space();
        e.out.token(&Token::Assign);
        e.out.space();
        e.visit(value, ctx)?;
    }
    Ok(())
}
