//! `resbody`: one `rescue` clause.
//!
//! Children are the exception list (an `array`, or nil), the capture target
//! (an assignment without a value, or nil) and the handler (or nil). The
//! enclosing `rescue` picks which form to write.

use unparser_core::Writer;

use super::{Emitter, RenderContext, Result, Slots, malformed};
use crate::ast::NodeKind;
use crate::token::Token;

/// `rescue handler`, the modifier clause.
pub(super) fn emit_standalone(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    if node.slot(0)?.is_some() {
        return Err(malformed(node, "a rescue modifier cannot match exception classes"));
    }
    if node.slot(1)?.is_some() {
        return Err(malformed(node, "a rescue modifier cannot capture the exception"));
    }
    let handler = node.required(2, "a rescue modifier needs a handler")?;
    e.out.token(&Token::Rescue);
    e.out.space();
    e.visit_terminated(handler, ctx)
}

/// `rescue Error, Other => target` and the indented handler.
pub(super) fn emit_embedded(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    e.out.token(&Token::Rescue);
    if let Some(exceptions) = node.slot(0)? {
        if exceptions.kind() != NodeKind::Array {
            return Err(malformed(node, "exception list must be an array"));
        }
        e.out.space();
        e.delimited(exceptions.nodes(.., "exception classes must be nodes")?, ctx)?;
    }
    if let Some(target) = node.slot(1)? {
        e.out.space();
        e.out.token(&Token::Rocket);
        e.out.space();
        e.visit(target, ctx)?;
    }
    e.emit_body(node.slot(2)?, ctx)
}
