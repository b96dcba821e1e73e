use unparser_core::Writer;

use super::{Emitter, RenderContext, Result, Slots, malformed};
use crate::ast::NodeKind;
use crate::token::Token;

/// `call do |params|`, the body, `end`.
pub(super) fn emit_block(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let call = node.required(0, "missing block call")?;
    let params = node.required(1, "missing block parameters")?;
    if params.kind() != NodeKind::Args {
        return Err(malformed(node, "block parameters must be an args node"));
    }

    e.visit(call, ctx)?;
    e.out.space();
    e.out.token(&Token::Do);
    if !params.children().is_empty() {
        e.out.space();
        e.out.token(&Token::Pipe);
        e.visit(params, ctx)?;
        e.out.token(&Token::Pipe);
    }
    e.emit_body(node.slot(2)?, ctx)?;
    e.k_end()
}
