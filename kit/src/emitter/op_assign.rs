//! Compound assignment: `a &&= b`, `a ||= b` and `a op= b`.

use unparser_core::Writer;

use super::{Emitter, RenderContext, Result, Slots, malformed};
use crate::ast::NodeKind;
use crate::token::Token;

/// Operator for the logical assignment kinds.
fn logical_operator(kind: NodeKind) -> Option<Token> {
    match kind {
        NodeKind::AndAsgn => Some(Token::AndAsgn),
        NodeKind::OrAsgn => Some(Token::OrAsgn),
        _ => None,
    }
}

pub(super) fn emit_logical_assign(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let target = node.required(0, "missing assignment target")?;
    let value = node.required(1, "missing assigned value")?;
    let Some(operator) = logical_operator(node.kind()) else {
        return Err(malformed(node, "not a logical assignment"));
    };
    e.visit(target, ctx)?;
    e.out.space();
    e.out.token(&operator);
    e.out.space();
    e.visit_terminated(value, ctx)
}

/// The operator comes from the node itself: any binary operator may be
/// combined with `=`.
pub(super) fn emit_op_assign(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let target = node.required(0, "missing assignment target")?;
    let operator = node.name(1)?;
    let value = node.required(2, "missing assigned value")?;
    e.visit(target, ctx)?;
    e.out.space();
    e.out.word(operator);
    e.out.token(&Token::Assign);
    e.out.space();
    e.visit_terminated(value, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_operators() {
        assert_eq!(logical_operator(NodeKind::AndAsgn).map(Token::as_str), Some("&&="));
        assert_eq!(logical_operator(NodeKind::OrAsgn).map(Token::as_str), Some("||="));
        assert_eq!(logical_operator(NodeKind::OpAsgn), None);
    }
}
